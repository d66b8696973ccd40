//! Mage catalog.

use super::attack;
use crate::config::BaseStats;
use crate::effect::{DamageOverTime, EffectTemplate, Restore};
use crate::moves::Move;

pub const FIREBALL: &str = "Fireball";
pub const MEDITATE: &str = "Meditate";
pub const BURNING: &str = "Burning";
pub const RESTORING: &str = "Restoring";

const BURN_TURNS: i32 = 5;

pub fn moves(stats: &BaseStats) -> Vec<Move> {
    vec![attack(stats, 6.0), fireball(stats), meditate(stats)]
}

fn fireball(stats: &BaseStats) -> Move {
    let burning =
        EffectTemplate::active(BURNING, DamageOverTime(stats.strength / 4.0)).lasting(BURN_TURNS);

    Move::new(FIREBALL)
        .damage(stats.strength * 2.0)
        .speed_cost(stats.speed / 4.0)
        .mana_cost(stats.mana / 3.0)
        .grant_target(burning)
}

/// Heals an eighth of max health when the turn closes.
fn meditate(stats: &BaseStats) -> Move {
    let restoring = EffectTemplate::active(RESTORING, Restore(stats.health / 8.0)).lasting(1);

    Move::new(MEDITATE)
        .speed_cost(stats.speed / 5.0)
        .mana_cost(stats.mana / 4.0)
        .grant_user(restoring)
}
