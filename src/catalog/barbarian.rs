//! Barbarian catalog.

use super::{attack, turns};
use crate::config::BaseStats;
use crate::effect::{EffectTemplate, HealthDrain};
use crate::modifier::{Additive, ChainTarget, Modifier, Multiplicative};
use crate::moves::Move;

pub const STUN: &str = "Stun";
pub const BERSERK: &str = "Berserk";
pub const STUNNED: &str = "Stunned";
pub const UNCONTROLLED: &str = "Uncontrolled";
pub const ENRAGED: &str = "Enraged";

/// Extra damage a stunned fighter takes.
const STUN_VULNERABILITY: f64 = 0.25;
/// Strength multiplier while enraged.
const RAGE_RATIO: f64 = 1.33;

pub fn moves(stats: &BaseStats) -> Vec<Move> {
    vec![attack(stats, 8.0), stun(stats), berserk(stats)]
}

/// Leaves the target taking more damage from the next turn on.
fn stun(stats: &BaseStats) -> Move {
    let stunned = EffectTemplate::passive(
        STUNNED,
        ChainTarget::SelfDamage,
        Modifier::new(-4, Multiplicative(1.0 + STUN_VULNERABILITY)),
    )
    .lasting(turns(stats.speed / 4.0));

    Move::new(STUN)
        .speed_cost(stats.speed / 3.0)
        .mana_cost(stats.mana / 2.5)
        .grant_target(stunned)
}

/// Boosts outgoing damage immediately, at the price of a health drain.
fn berserk(stats: &BaseStats) -> Move {
    let lifespan = turns(stats.speed / 3.0);
    let bonus = stats.strength * RAGE_RATIO - stats.strength;
    let drain = (stats.strength * (RAGE_RATIO - 1.0)) / (stats.speed / 8.0);

    let uncontrolled = EffectTemplate::active(UNCONTROLLED, HealthDrain(drain)).lasting(lifespan);
    let enraged = EffectTemplate::passive(
        ENRAGED,
        ChainTarget::OutDamage,
        Modifier::new(-4, Additive(bonus)),
    )
    .lasting(lifespan)
    .before_calculation();

    Move::new(BERSERK)
        .speed_cost(stats.speed / 6.0)
        .mana_cost(stats.mana / 3.0)
        .grant_user(uncontrolled)
        .grant_user(enraged)
}
