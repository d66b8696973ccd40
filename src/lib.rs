//! # colosseum - Deterministic Turn-Based Combat Engine
//!
//! A combat resolution engine for turn-based duels and skirmishes that
//! provides:
//! - **Deterministic** resolution (seeded per-fighter success rolls)
//! - **Priority-ordered** modifier chains for damage and success chance
//! - **Timed effects** that tick, expire, and feed modifiers back into chains
//! - **Speed-budgeted** movesets resolved last-in first-out
//!
//! ## Core Concepts
//!
//! ### Damage Pipeline
//!
//! Damage flows through the attacker's outgoing chain merged with the
//! receiver's incoming chain, split at a priority boundary:
//!
//! ```text
//! [raw] → [pre-mitigation] → speed absorbs → [post-mitigation] → health
//! ```
//!
//! 1. **Pre-mitigation** modifiers (priority < 0) shape the damage speed sees
//! 2. **Speed** absorbs 1.5× that damage, up to what the receiver has left
//! 3. **Post-mitigation** modifiers (priority ≥ 0) shape the health loss
//!
//! ### Turn Loop
//!
//! Each fighter queues moves into a [`Moveset`] budgeted by its speed and
//! resolves it; then every fighter ticks its effects, regenerates mana
//! and recovers speed. [`Arena`] sequences this for a whole roster.
//!
//! ## Example
//!
//! ```rust
//! use colosseum::*;
//!
//! let mut arena = Arena::default();
//! arena.add_fighter(Fighter::from_archetype(
//!     "merlin",
//!     Archetype::Mage,
//!     BaseStats::new(400.0, 300.0, 200.0, 20.0),
//!     CombatConfig::default(),
//!     1,
//! )).unwrap();
//! arena.add_fighter(Fighter::from_archetype(
//!     "conan",
//!     Archetype::Barbarian,
//!     BaseStats::new(700.0, 250.0, 300.0, 15.0),
//!     CombatConfig::default(),
//!     2,
//! )).unwrap();
//!
//! let merlin = FighterId::from_str("merlin");
//! let conan = FighterId::from_str("conan");
//! let fireball = arena.fighter(&merlin).unwrap().move_named("Fireball").unwrap().clone();
//!
//! let mut moveset = arena.new_moveset(&merlin).unwrap();
//! moveset.push(fireball, conan.clone()).unwrap();
//! arena.process_moveset(&merlin, moveset).unwrap();
//!
//! // 40 fireball damage, then 5 burning damage when the turn closes.
//! arena.end_turn();
//! assert_eq!(arena.fighter(&conan).unwrap().health(), 655.0);
//! ```
//!
//! ## Modules
//!
//! - [`modifier`] - Modifier functions and priority-ordered chains
//! - [`effect`] - Timed active and passive effects
//! - [`moves`] - Moves and speed-budgeted movesets
//! - [`damage`] - Two-pass damage resolution
//! - [`fighter`] - Stateful combatants
//! - [`arena`] - Combat sessions over a roster
//! - [`catalog`] - Archetype move catalogs
//! - [`config`] - Tunables and roster configuration
//! - [`report`] - Resolution reports
//! - [`error`] - Error types

pub mod arena;
pub mod catalog;
pub mod config;
pub mod damage;
pub mod effect;
pub mod error;
pub mod fighter;
pub mod id;
pub mod modifier;
pub mod moves;
pub mod report;

// Re-export main types for convenience
pub use arena::Arena;
pub use catalog::Archetype;
pub use config::{ArenaConfig, BaseStats, CombatConfig, FighterConfig, HealthDamageBasis};
pub use error::{CombatError, CombatResult};
pub use fighter::{Fighter, MoveRoll};
pub use id::FighterId;
pub use moves::{Move, Moveset};
pub use report::{DamageReport, MoveOutcome};

// Re-export modifier and effect building blocks
pub use effect::{
    DamageOverTime, Effect, EffectKind, EffectTemplate, FnTick, HealthDrain, PassiveModifier,
    Restore, TickAction,
};
pub use modifier::{
    Additive, ChainTarget, FnModifier, Modifier, ModifierChain, ModifierFn, Multiplicative,
    Reduction,
};
