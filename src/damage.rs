//! Damage resolution.
//!
//! Raw damage is resolved against a single merged chain (the attacker's
//! outgoing chain plus the receiver's incoming chain) in two passes
//! split at [`CombatConfig::mitigation_boundary`]:
//!
//! ```text
//! raw ──[priority < boundary]──> adjusted ──┬──> speed loss (+ overflow)
//!                                           └──[priority >= boundary]──> health loss
//! ```
//!
//! Speed absorbs `ratio × adjusted` up to what the receiver has left;
//! the excess is reported as overflow in health-damage units.

use crate::config::{CombatConfig, HealthDamageBasis};
use crate::modifier::ModifierChain;
use crate::report::DamageReport;

/// Resolve `raw` damage against a receiver with `current_speed` left.
///
/// Pure: the caller applies `speed_loss` and `health_loss` to the
/// receiver.
///
/// # Examples
///
/// ```rust
/// use colosseum::damage::resolve_damage;
/// use colosseum::{CombatConfig, ModifierChain};
///
/// let chain = ModifierChain::new();
/// let report = resolve_damage(50.0, 40.0, &chain, &CombatConfig::default());
///
/// assert_eq!(report.speed_loss, 40.0);
/// assert!((report.overflow - 35.0 / 1.5).abs() < 1e-9);
/// assert_eq!(report.health_loss, 50.0);
/// ```
pub fn resolve_damage(
    raw: f64,
    current_speed: f64,
    merged: &ModifierChain,
    config: &CombatConfig,
) -> DamageReport {
    let boundary = config.mitigation_boundary;
    let ratio = config.speed_absorption_ratio;
    let mut report = DamageReport::new(raw);

    let (adjusted, pre_steps) = merged.breakdown_max(raw, boundary);
    report.adjusted = adjusted;
    for (description, value) in pre_steps {
        report.add_step(description, value);
    }

    let absorbed = ratio * adjusted;
    if absorbed > current_speed {
        report.speed_loss = current_speed;
        report.overflow = (absorbed - current_speed) / ratio;
    } else {
        report.speed_loss = absorbed;
    }

    let basis = match config.health_damage_basis {
        HealthDamageBasis::Adjusted => adjusted,
        HealthDamageBasis::Overflow => report.overflow,
    };
    let (health_loss, post_steps) = merged.breakdown_min(basis, boundary);
    report.health_loss = health_loss;
    for (description, value) in post_steps {
        report.add_step(description, value);
    }

    report
}
