//! Archetype move catalogs.
//!
//! Each archetype is a pure data assembly: a fixed list of [`Move`]s
//! whose costs and magnitudes are fractions of the fighter's base stats,
//! wired to the effects that make the archetype play differently. There
//! is no archetype-specific control flow; everything runs through the
//! generic fighter, effect and modifier machinery.

pub mod barbarian;
pub mod mage;
pub mod pirate;

use crate::config::BaseStats;
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the basic strike every archetype knows.
pub const ATTACK: &str = "Attack";

/// The playable fighter archetypes.
///
/// # Examples
///
/// ```rust
/// use colosseum::{Archetype, BaseStats};
///
/// let stats = BaseStats::new(500.0, 300.0, 400.0, 20.0);
/// let moves = Archetype::Mage.moves(&stats);
///
/// let names: Vec<&str> = moves.iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["Attack", "Fireball", "Meditate"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Heavy melee: cheap strikes, stuns, and a self-draining rage.
    Barbarian,
    /// Caster: burning fireballs and healing meditation.
    Mage,
    /// Ranged: a shot that bypasses speed, and a blinding parrot.
    Pirate,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Barbarian, Archetype::Mage, Archetype::Pirate];

    /// Build this archetype's move catalog from base stats.
    pub fn moves(self, stats: &BaseStats) -> Vec<Move> {
        match self {
            Archetype::Barbarian => barbarian::moves(stats),
            Archetype::Mage => mage::moves(stats),
            Archetype::Pirate => pirate::moves(stats),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Barbarian => "Barbarian",
            Archetype::Mage => "Mage",
            Archetype::Pirate => "Pirate",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The basic strike: deals `strength`, costs `speed / speed_divisor`.
pub fn attack(stats: &BaseStats, speed_divisor: f64) -> Move {
    Move::new(ATTACK)
        .damage(stats.strength)
        .speed_cost(stats.speed / speed_divisor)
}

/// Whole turns from a stat-derived fraction.
fn turns(value: f64) -> i32 {
    value.floor() as i32
}
