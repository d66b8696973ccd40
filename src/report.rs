//! Resolution reports.
//!
//! Every damage resolution and every queued move produces a read-only
//! record of what happened. Drivers can print them, log them, or
//! serialize them for replays.

use crate::id::FighterId;
use serde::{Deserialize, Serialize};

/// Breakdown of one damage resolution.
///
/// # Examples
///
/// ```rust
/// use colosseum::DamageReport;
///
/// let report = DamageReport::new(50.0);
/// assert_eq!(report.raw, 50.0);
/// assert_eq!(report.adjusted, 50.0);
/// assert!(report.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage before any modifier.
    pub raw: f64,
    /// Damage after the pre-mitigation pass.
    pub adjusted: f64,
    /// Speed removed from the receiver.
    pub speed_loss: f64,
    /// Damage speed could not absorb, in health-damage units.
    pub overflow: f64,
    /// Health removed from the receiver.
    pub health_loss: f64,
    /// Each modifier applied, as `(description, value_after_step)`, in
    /// evaluation order across both passes.
    pub steps: Vec<(String, f64)>,
}

impl DamageReport {
    /// A report for `raw` damage with nothing resolved yet.
    pub fn new(raw: f64) -> Self {
        Self {
            raw,
            adjusted: raw,
            speed_loss: 0.0,
            overflow: 0.0,
            health_loss: 0.0,
            steps: Vec::new(),
        }
    }

    pub fn add_step(&mut self, description: impl Into<String>, value: f64) {
        self.steps.push((description.into(), value));
    }
}

/// Record of one `(move, target)` entry of a resolved moveset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub move_name: String,
    pub user: FighterId,
    pub target: FighterId,
    pub mana_cost: f64,
    pub speed_cost: f64,
    /// Output of the user's move-success chain (not clamped).
    pub success_chance: f64,
    /// The uniform draw in `[0, 1)` compared against the chance.
    pub roll: f64,
    pub succeeded: bool,
    /// Present only when the move succeeded.
    pub damage: Option<DamageReport>,
}
