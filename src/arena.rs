//! Arena module.
//!
//! Provides the `Arena` type, a combat session that owns every fighter
//! and drives the turn loop. The arena only sequences operations; all
//! combat semantics live in [`Fighter`].

use crate::config::{ArenaConfig, CombatConfig};
use crate::error::{CombatError, CombatResult};
use crate::fighter::Fighter;
use crate::id::FighterId;
use crate::moves::Moveset;
use crate::report::MoveOutcome;
use tracing::{debug, info};

/// A combat session.
///
/// # Examples
///
/// ```rust
/// use colosseum::{Arena, ArenaConfig, FighterId};
///
/// let config = ArenaConfig::from_json(r#"{
///     "fighters": [
///         { "id": "jack", "archetype": "pirate",
///           "stats": { "health": 500, "mana": 300, "speed": 400, "strength": 20 },
///           "seed": 7 },
///         { "id": "conan", "archetype": "barbarian",
///           "stats": { "health": 700, "mana": 250, "speed": 300, "strength": 15 },
///           "seed": 11 }
///     ]
/// }"#).unwrap();
/// let mut arena = Arena::from_config(config).unwrap();
///
/// let jack = FighterId::from_str("jack");
/// let conan = FighterId::from_str("conan");
/// let attack = arena.fighter(&jack).unwrap().move_named("Attack").unwrap().clone();
/// let mut moveset = arena.new_moveset(&jack).unwrap();
/// moveset.push(attack, conan.clone()).unwrap();
///
/// arena.process_moveset(&jack, moveset).unwrap();
/// arena.end_turn();
///
/// assert_eq!(arena.turn(), 1);
/// assert_eq!(arena.fighter(&conan).unwrap().health(), 680.0);
/// ```
#[derive(Debug)]
pub struct Arena {
    config: CombatConfig,
    fighters: Vec<Fighter>,
    turn: u32,
}

impl Arena {
    /// Create an empty arena.
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config,
            fighters: Vec::new(),
            turn: 0,
        }
    }

    /// Build an arena and its roster from a validated config.
    pub fn from_config(config: ArenaConfig) -> CombatResult<Self> {
        config.combat.validate()?;
        let mut arena = Self::new(config.combat);
        for entry in config.fighters {
            let fighter = Fighter::from_archetype(
                entry.id,
                entry.archetype,
                entry.stats,
                arena.config,
                entry.seed,
            );
            arena.add_fighter(fighter)?;
        }
        info!(
            target: "colosseum::arena",
            fighters = arena.fighters.len(),
            "Arena ready"
        );
        Ok(arena)
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Add a fighter. Ids must be unique within the arena.
    pub fn add_fighter(&mut self, fighter: Fighter) -> CombatResult<()> {
        if self.index_of(fighter.id()).is_some() {
            return Err(CombatError::DuplicateFighter(fighter.id().clone()));
        }
        self.fighters.push(fighter);
        Ok(())
    }

    pub fn fighter(&self, id: &FighterId) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.id() == id)
    }

    pub fn fighter_mut(&mut self, id: &FighterId) -> Option<&mut Fighter> {
        self.fighters.iter_mut().find(|f| f.id() == id)
    }

    /// Fighters in the order they were added.
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    /// Completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Start a moveset for `id`, budgeted at its current speed.
    pub fn new_moveset(&self, id: &FighterId) -> CombatResult<Moveset> {
        self.fighter(id)
            .map(Fighter::new_moveset)
            .ok_or_else(|| CombatError::UnknownFighter(id.clone()))
    }

    /// Resolve `id`'s moveset against the rest of the roster.
    pub fn process_moveset(
        &mut self,
        id: &FighterId,
        moveset: Moveset,
    ) -> CombatResult<Vec<MoveOutcome>> {
        let index = self
            .index_of(id)
            .ok_or_else(|| CombatError::UnknownFighter(id.clone()))?;

        let mut user = self.fighters.remove(index);
        let result = user.process_moveset(moveset, &mut self.fighters);
        self.fighters.insert(index, user);
        result
    }

    /// Close the turn for every fighter: effects, then mana, then speed.
    pub fn end_turn(&mut self) {
        for fighter in self.fighters.iter_mut() {
            fighter.effect_update();
            fighter.mana_update();
            fighter.speed_update();
        }
        self.turn += 1;
        debug!(target: "colosseum::arena", turn = self.turn, "Turn ended");
    }

    fn index_of(&self, id: &FighterId) -> Option<usize> {
        self.fighters.iter().position(|f| f.id() == id)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}
