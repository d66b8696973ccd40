//! Timed effects module.
//!
//! An [`Effect`] is attached to exactly one fighter and lives for a
//! fixed number of turns. It is either:
//!
//! - **Active**: runs a [`TickAction`] against its fighter on every tick
//!   (damage over time, drains, heals), or
//! - **Passive**: contributes a [`Modifier`] to one of its fighter's
//!   chains for as long as it stays attached.
//!
//! Moves never hand out effects directly. They carry [`EffectTemplate`]s
//! and instantiate a fresh, unowned `Effect` every time they execute, so
//! no two fighters ever share one.

use crate::error::{CombatError, CombatResult};
use crate::fighter::Fighter;
use crate::id::FighterId;
use crate::modifier::{ChainTarget, Modifier};
use std::fmt;
use std::sync::Arc;

/// Trait for the per-tick side effect of an active effect.
///
/// # Examples
///
/// ```rust
/// use colosseum::effect::{HealthDrain, TickAction};
/// use colosseum::{BaseStats, CombatConfig, Fighter};
///
/// let mut fighter = Fighter::new(
///     "conan",
///     BaseStats::new(100.0, 50.0, 60.0, 10.0),
///     Vec::new(),
///     CombatConfig::default(),
///     1,
/// );
/// HealthDrain(4.0).apply(&mut fighter);
/// assert_eq!(fighter.health(), 96.0);
/// ```
pub trait TickAction: Send + Sync {
    /// Apply the side effect to the fighter carrying the effect.
    fn apply(&self, fighter: &mut Fighter);

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Damage over time, resolved through the fighter's damage pipeline
/// (speed absorbs part of it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOverTime(pub f64);

impl TickAction for DamageOverTime {
    fn apply(&self, fighter: &mut Fighter) {
        fighter.damage(self.0);
    }

    fn description(&self) -> String {
        format!("{:.2} damage per turn", self.0)
    }
}

/// Direct health loss that bypasses speed and modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthDrain(pub f64);

impl TickAction for HealthDrain {
    fn apply(&self, fighter: &mut Fighter) {
        fighter.health_damage(self.0);
    }

    fn description(&self) -> String {
        format!("{:.2} health lost per turn", self.0)
    }
}

/// Direct health gain. Not capped at max health.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restore(pub f64);

impl TickAction for Restore {
    fn apply(&self, fighter: &mut Fighter) {
        fighter.health_damage(-self.0);
    }

    fn description(&self) -> String {
        format!("{:.2} health restored per turn", self.0)
    }
}

/// An action backed by an arbitrary closure.
pub struct FnTick {
    func: Box<dyn Fn(&mut Fighter) + Send + Sync>,
    description: String,
}

impl FnTick {
    pub fn new<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Fighter) + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            description: description.into(),
        }
    }
}

impl TickAction for FnTick {
    fn apply(&self, fighter: &mut Fighter) {
        (self.func)(fighter)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// The modifier a passive effect contributes, and the chain it goes into.
#[derive(Debug, Clone)]
pub struct PassiveModifier {
    pub chain: ChainTarget,
    pub modifier: Modifier,
}

/// What an effect does while attached.
#[derive(Clone)]
pub enum EffectKind {
    Active(Arc<dyn TickAction>),
    Passive(PassiveModifier),
}

impl fmt::Debug for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKind::Active(action) => f
                .debug_tuple("Active")
                .field(&format!("<{}>", action.description()))
                .finish(),
            EffectKind::Passive(passive) => f.debug_tuple("Passive").field(passive).finish(),
        }
    }
}

/// A timed effect attached (or about to be attached) to a fighter.
#[derive(Debug, Clone)]
pub struct Effect {
    name: String,
    lifespan: i32,
    applies_before_calculation: bool,
    kind: EffectKind,
    owner: Option<FighterId>,
}

impl Effect {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turns remaining.
    pub fn lifespan(&self) -> i32 {
        self.lifespan
    }

    /// Whether, on the turn it is granted, this effect already counts in
    /// the resolution that grants it.
    pub fn applies_before_calculation(&self) -> bool {
        self.applies_before_calculation
    }

    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    /// The passive contribution, if this is a passive effect.
    pub fn passive(&self) -> Option<&PassiveModifier> {
        match &self.kind {
            EffectKind::Passive(passive) => Some(passive),
            EffectKind::Active(_) => None,
        }
    }

    /// The fighter this effect is attached to.
    pub fn owner(&self) -> Option<&FighterId> {
        self.owner.as_ref()
    }

    pub fn is_expired(&self) -> bool {
        self.lifespan <= 0
    }

    /// Check whether this effect may be attached to `fighter`.
    pub fn check_owner(&self, fighter: &FighterId) -> CombatResult<()> {
        match &self.owner {
            Some(owner) if owner != fighter => Err(CombatError::EffectOwnership {
                effect: self.name.clone(),
                owner: owner.clone(),
                requested: fighter.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Bind this effect to `fighter`.
    ///
    /// Attachment is one-shot: re-attaching to the same fighter is
    /// accepted, attaching to a different one fails and leaves the
    /// effect unchanged.
    pub fn attach(&mut self, fighter: &FighterId) -> CombatResult<()> {
        self.check_owner(fighter)?;
        if self.owner.is_none() {
            self.owner = Some(fighter.clone());
        }
        Ok(())
    }

    /// Advance the effect by one turn.
    ///
    /// Unattached effects do not tick. Otherwise the lifespan drops by one
    /// and, for an active effect that still had turns left, the action to
    /// run against the owner is returned.
    pub fn tick(&mut self) -> Option<Arc<dyn TickAction>> {
        self.owner.as_ref()?;
        let live = self.lifespan > 0;
        self.lifespan -= 1;
        match &self.kind {
            EffectKind::Active(action) if live => Some(Arc::clone(action)),
            _ => None,
        }
    }
}

/// A reusable description of an effect, instantiated per move execution.
///
/// # Examples
///
/// ```rust
/// use colosseum::effect::{DamageOverTime, EffectTemplate};
/// use colosseum::modifier::{ChainTarget, Modifier, Multiplicative};
///
/// let burning = EffectTemplate::active("Burning", DamageOverTime(5.0)).lasting(3);
/// let enraged = EffectTemplate::passive(
///     "Enraged",
///     ChainTarget::OutDamage,
///     Modifier::new(-4, Multiplicative(1.33)),
/// )
/// .lasting(2)
/// .before_calculation();
///
/// let first = burning.instantiate();
/// let second = burning.instantiate();
/// assert_eq!(first.lifespan(), 3);
/// assert!(first.owner().is_none() && second.owner().is_none());
/// assert!(enraged.instantiate().applies_before_calculation());
/// ```
#[derive(Debug, Clone)]
pub struct EffectTemplate {
    name: String,
    lifespan: i32,
    applies_before_calculation: bool,
    kind: EffectKind,
}

impl EffectTemplate {
    /// An active effect lasting one turn, deferred until the next update.
    pub fn active(name: impl Into<String>, action: impl TickAction + 'static) -> Self {
        Self {
            name: name.into(),
            lifespan: 1,
            applies_before_calculation: false,
            kind: EffectKind::Active(Arc::new(action)),
        }
    }

    /// A passive effect lasting one turn, deferred until the next update.
    pub fn passive(name: impl Into<String>, chain: ChainTarget, modifier: Modifier) -> Self {
        Self {
            name: name.into(),
            lifespan: 1,
            applies_before_calculation: false,
            kind: EffectKind::Passive(PassiveModifier { chain, modifier }),
        }
    }

    /// Set the lifespan in turns.
    pub fn lasting(mut self, turns: i32) -> Self {
        self.lifespan = turns;
        self
    }

    /// Make the effect count in the resolution that grants it.
    pub fn before_calculation(mut self) -> Self {
        self.applies_before_calculation = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lifespan(&self) -> i32 {
        self.lifespan
    }

    pub fn applies_before_calculation(&self) -> bool {
        self.applies_before_calculation
    }

    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    /// Create a fresh, unowned effect.
    pub fn instantiate(&self) -> Effect {
        Effect {
            name: self.name.clone(),
            lifespan: self.lifespan,
            applies_before_calculation: self.applies_before_calculation,
            kind: self.kind.clone(),
            owner: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Additive;

    fn burning() -> EffectTemplate {
        EffectTemplate::active("Burning", DamageOverTime(5.0)).lasting(2)
    }

    #[test]
    fn test_unattached_effect_does_not_tick() {
        let mut effect = burning().instantiate();
        assert!(effect.tick().is_none());
        assert_eq!(effect.lifespan(), 2);
    }

    #[test]
    fn test_tick_decrements_and_returns_action() {
        let mut effect = burning().instantiate();
        effect.attach(&FighterId::from_str("a")).unwrap();

        assert!(effect.tick().is_some());
        assert_eq!(effect.lifespan(), 1);
        assert!(!effect.is_expired());

        assert!(effect.tick().is_some());
        assert_eq!(effect.lifespan(), 0);
        assert!(effect.is_expired());
    }

    #[test]
    fn test_zero_lifespan_expires_without_action() {
        let mut effect = burning().lasting(0).instantiate();
        effect.attach(&FighterId::from_str("a")).unwrap();

        assert!(effect.tick().is_none());
        assert_eq!(effect.lifespan(), -1);
        assert!(effect.is_expired());
    }

    #[test]
    fn test_passive_tick_returns_no_action() {
        let template = EffectTemplate::passive(
            "Armor",
            ChainTarget::SelfDamage,
            Modifier::new(0, Additive(-2.0)),
        )
        .lasting(3);
        let mut effect = template.instantiate();
        effect.attach(&FighterId::from_str("a")).unwrap();

        assert!(effect.tick().is_none());
        assert_eq!(effect.lifespan(), 2);
        assert_eq!(effect.passive().unwrap().chain, ChainTarget::SelfDamage);
    }

    #[test]
    fn test_attach_is_one_shot() {
        let a = FighterId::from_str("a");
        let b = FighterId::from_str("b");
        let mut effect = burning().instantiate();

        effect.attach(&a).unwrap();
        assert!(effect.attach(&a).is_ok());

        let err = effect.attach(&b).unwrap_err();
        assert_eq!(
            err,
            CombatError::EffectOwnership {
                effect: "Burning".into(),
                owner: a.clone(),
                requested: b,
            }
        );
        assert_eq!(effect.owner(), Some(&a));
    }

    #[test]
    fn test_instances_are_independent() {
        let template = burning();
        let mut first = template.instantiate();
        first.attach(&FighterId::from_str("a")).unwrap();
        first.tick();

        let second = template.instantiate();
        assert_eq!(second.lifespan(), 2);
        assert!(second.owner().is_none());
    }

    #[test]
    fn test_template_defaults() {
        let template = EffectTemplate::active("Tick", HealthDrain(1.0));
        assert_eq!(template.lifespan(), 1);
        assert!(!template.applies_before_calculation());
        assert_eq!(template.name(), "Tick");
    }
}
