//! Error types for combat resolution.
//!
//! Most of the engine degrades numerically instead of failing (negative
//! health, over-cap mana and unclamped success chances are all valid
//! states). The `CombatError` enum covers the few conditions a driver
//! has to be told about.

use crate::id::FighterId;
use thiserror::Error;

/// Errors that can occur while building or resolving a turn.
///
/// # Examples
///
/// ```rust
/// use colosseum::{CombatError, FighterId};
///
/// let err = CombatError::UnknownFighter(FighterId::from_str("ghost"));
/// assert_eq!(err.to_string(), "Unknown fighter: ghost");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    /// A moveset push would exceed the speed budget.
    ///
    /// The moveset is left unchanged.
    #[error("Speed budget exceeded: move costs {requested:.2}, {remaining:.2} remaining")]
    OverBudget { requested: f64, remaining: f64 },

    /// An effect already attached to one fighter was offered to another.
    #[error("Effect '{effect}' is owned by {owner} and cannot be attached to {requested}")]
    EffectOwnership {
        effect: String,
        owner: FighterId,
        requested: FighterId,
    },

    /// A fighter id did not match any fighter in play.
    #[error("Unknown fighter: {0}")]
    UnknownFighter(FighterId),

    /// A fighter with the same id is already in the arena.
    #[error("Duplicate fighter: {0}")]
    DuplicateFighter(FighterId),

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for combat operations.
pub type CombatResult<T> = Result<T, CombatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_budget_display() {
        let err = CombatError::OverBudget {
            requested: 150.0,
            remaining: 100.0,
        };
        let display = err.to_string();
        assert!(display.contains("150.00"));
        assert!(display.contains("100.00"));
    }

    #[test]
    fn test_ownership_display() {
        let err = CombatError::EffectOwnership {
            effect: "Burning".into(),
            owner: FighterId::from_str("mage"),
            requested: FighterId::from_str("pirate"),
        };
        let display = err.to_string();
        assert!(display.contains("Burning"));
        assert!(display.contains("mage"));
        assert!(display.contains("pirate"));
    }
}
