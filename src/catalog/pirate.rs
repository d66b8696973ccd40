//! Pirate catalog.

use super::attack;
use crate::config::BaseStats;
use crate::effect::EffectTemplate;
use crate::modifier::{Additive, ChainTarget, Modifier, Reduction};
use crate::moves::Move;

pub const FLINTLOCK_SHOT: &str = "Flintlock Shot";
pub const BLINDING_PARROT: &str = "Blinding Parrot";
pub const QUICK_PROJECTILE: &str = "Quick Projectile";
pub const BLINDED: &str = "Blinded";

const SHOT_RATIO: f64 = 2.5;
const BLIND_REDUCTION: f64 = 0.125;
const BLIND_TURNS: i32 = 5;

pub fn moves(stats: &BaseStats) -> Vec<Move> {
    vec![attack(stats, 6.0), flintlock_shot(stats), blinding_parrot(stats)]
}

/// No flat damage: the projectile adds post-mitigation damage, so the
/// shot goes straight to health without touching speed.
fn flintlock_shot(stats: &BaseStats) -> Move {
    let projectile = EffectTemplate::passive(
        QUICK_PROJECTILE,
        ChainTarget::SelfDamage,
        Modifier::new(1, Additive(stats.strength * SHOT_RATIO)),
    )
    .lasting(0)
    .before_calculation();

    Move::new(FLINTLOCK_SHOT)
        .speed_cost(stats.speed / 3.0)
        .grant_target(projectile)
}

/// Lowers the target's move-success chance from the next turn on.
fn blinding_parrot(stats: &BaseStats) -> Move {
    let blinded = EffectTemplate::passive(
        BLINDED,
        ChainTarget::SelfMove,
        Modifier::new(0, Reduction(BLIND_REDUCTION)),
    )
    .lasting(BLIND_TURNS);

    Move::new(BLINDING_PARROT)
        .speed_cost(stats.speed / 4.0)
        .mana_cost(stats.mana / 4.0)
        .grant_target(blinded)
}
