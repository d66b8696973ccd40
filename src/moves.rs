//! Moves and movesets.
//!
//! A [`Move`] is an immutable action template: what it costs, how much
//! flat damage it deals, and which effects it grants to its user and its
//! target. A [`Moveset`] is one fighter's speed-budgeted plan for a turn.

use crate::effect::{Effect, EffectTemplate};
use crate::error::{CombatError, CombatResult};
use crate::id::FighterId;
use tracing::warn;

/// An action a fighter can perform.
///
/// # Examples
///
/// ```rust
/// use colosseum::effect::{DamageOverTime, EffectTemplate};
/// use colosseum::Move;
///
/// let fireball = Move::new("Fireball")
///     .damage(40.0)
///     .mana_cost(100.0)
///     .speed_cost(75.0)
///     .grant_target(EffectTemplate::active("Burning", DamageOverTime(5.0)).lasting(5));
///
/// assert_eq!(fireball.name(), "Fireball");
/// assert_eq!(fireball.flat_speed_cost(), 75.0);
/// assert_eq!(fireball.granted_to_target().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Move {
    name: String,
    flat_damage: f64,
    flat_mana_cost: f64,
    flat_speed_cost: f64,
    granted_to_user: Vec<EffectTemplate>,
    granted_to_target: Vec<EffectTemplate>,
}

impl Move {
    /// A free move that does nothing; refine it with the builder methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flat_damage: 0.0,
            flat_mana_cost: 0.0,
            flat_speed_cost: 0.0,
            granted_to_user: Vec::new(),
            granted_to_target: Vec::new(),
        }
    }

    pub fn damage(mut self, amount: f64) -> Self {
        self.flat_damage = amount;
        self
    }

    pub fn mana_cost(mut self, cost: f64) -> Self {
        self.flat_mana_cost = cost;
        self
    }

    pub fn speed_cost(mut self, cost: f64) -> Self {
        self.flat_speed_cost = cost;
        self
    }

    pub fn grant_user(mut self, effect: EffectTemplate) -> Self {
        self.granted_to_user.push(effect);
        self
    }

    pub fn grant_target(mut self, effect: EffectTemplate) -> Self {
        self.granted_to_target.push(effect);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flat_damage(&self) -> f64 {
        self.flat_damage
    }

    pub fn flat_mana_cost(&self) -> f64 {
        self.flat_mana_cost
    }

    pub fn flat_speed_cost(&self) -> f64 {
        self.flat_speed_cost
    }

    pub fn granted_to_user(&self) -> &[EffectTemplate] {
        &self.granted_to_user
    }

    pub fn granted_to_target(&self) -> &[EffectTemplate] {
        &self.granted_to_target
    }

    /// Fresh instances of the effects granted to the user.
    pub fn instantiate_user_effects(&self) -> Vec<Effect> {
        self.granted_to_user
            .iter()
            .map(EffectTemplate::instantiate)
            .collect()
    }

    /// Fresh instances of the effects granted to the target.
    pub fn instantiate_target_effects(&self) -> Vec<Effect> {
        self.granted_to_target
            .iter()
            .map(EffectTemplate::instantiate)
            .collect()
    }
}

/// A speed-budgeted queue of `(move, target)` pairs for one turn.
///
/// The budget is fixed at construction, normally to the fighter's speed
/// at the start of the turn. Entries resolve last-in first-out.
///
/// # Examples
///
/// ```rust
/// use colosseum::{FighterId, Move, Moveset};
///
/// let target = FighterId::from_str("barbarian");
/// let jab = Move::new("Jab").speed_cost(150.0);
///
/// let mut moveset = Moveset::new(400.0);
/// assert!(moveset.push(jab.clone(), target.clone()).is_ok());
/// assert!(moveset.push(jab.clone(), target.clone()).is_ok());
/// assert!(moveset.push(jab, target).is_err());
/// assert_eq!(moveset.len(), 2);
/// assert_eq!(moveset.remaining(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Moveset {
    budget: f64,
    spent: f64,
    entries: Vec<(Move, FighterId)>,
}

impl Moveset {
    pub fn new(budget: f64) -> Self {
        Self {
            budget,
            spent: 0.0,
            entries: Vec::new(),
        }
    }

    /// Queue a move against `target`.
    ///
    /// Fails with [`CombatError::OverBudget`] and leaves the queue unchanged
    /// if the move's speed cost does not fit in what is left of the budget.
    pub fn push(&mut self, mv: Move, target: FighterId) -> CombatResult<()> {
        let cost = mv.flat_speed_cost();
        if self.spent + cost > self.budget {
            warn!(
                target: "colosseum::moves",
                move_name = mv.name(),
                cost,
                remaining = self.remaining(),
                "Moveset push rejected"
            );
            return Err(CombatError::OverBudget {
                requested: cost,
                remaining: self.remaining(),
            });
        }
        self.spent += cost;
        self.entries.push((mv, target));
        Ok(())
    }

    /// Withdraw the most recently queued entry, refunding its speed cost.
    pub fn pop(&mut self) -> Option<(Move, FighterId)> {
        let entry = self.entries.pop()?;
        self.spent -= entry.0.flat_speed_cost();
        Some(entry)
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in push order.
    pub fn iter(&self) -> impl Iterator<Item = &(Move, FighterId)> {
        self.entries.iter()
    }

    /// Consume the moveset, yielding entries in resolution order
    /// (most recently pushed first).
    pub fn into_resolution_order(self) -> impl Iterator<Item = (Move, FighterId)> {
        self.entries.into_iter().rev()
    }
}
