//! Fighter module.
//!
//! Provides the `Fighter` type, the stateful combatant the turn
//! resolver works on. A fighter owns its resource pools, its attached
//! effects, three modifier chains, a fixed move catalog and a seeded
//! random source for success rolls.
//!
//! A turn, as driven from outside:
//!
//! 1. every fighter builds a [`Moveset`] (budget = current speed) and
//!    resolves it with [`Fighter::process_moveset`];
//! 2. every fighter closes the turn with [`Fighter::effect_update`],
//!    [`Fighter::mana_update`] and [`Fighter::speed_update`].

use crate::catalog::Archetype;
use crate::config::{BaseStats, CombatConfig};
use crate::damage::resolve_damage;
use crate::effect::{Effect, EffectKind};
use crate::error::{CombatError, CombatResult};
use crate::id::FighterId;
use crate::modifier::{ChainTarget, Modifier, ModifierChain};
use crate::moves::{Move, Moveset};
use crate::report::{DamageReport, MoveOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Result of the cost-and-roll half of performing a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRoll {
    /// Output of the move-success chain.
    pub chance: f64,
    /// Uniform draw in `[0, 1)`.
    pub roll: f64,
    pub succeeded: bool,
}

/// A combat participant.
///
/// Pools are never clamped: negative health (a defeated fighter) and
/// over-cap mana are valid states for the driver to inspect.
///
/// # Examples
///
/// ```rust
/// use colosseum::{Archetype, BaseStats, CombatConfig, Fighter};
///
/// let mut jack = Fighter::from_archetype(
///     "jack",
///     Archetype::Pirate,
///     BaseStats::new(500.0, 300.0, 400.0, 20.0),
///     CombatConfig::default(),
///     7,
/// );
/// let mut conan = Fighter::from_archetype(
///     "conan",
///     Archetype::Barbarian,
///     BaseStats::new(700.0, 250.0, 300.0, 15.0),
///     CombatConfig::default(),
///     11,
/// );
///
/// let attack = jack.move_named("Attack").unwrap().clone();
/// let mut moveset = jack.new_moveset();
/// moveset.push(attack, conan.id().clone()).unwrap();
///
/// let outcomes = jack
///     .process_moveset(moveset, std::slice::from_mut(&mut conan))
///     .unwrap();
/// assert!(outcomes[0].succeeded);
/// assert_eq!(conan.health(), 680.0);
/// ```
#[derive(Debug)]
pub struct Fighter {
    id: FighterId,
    health: f64,
    max_health: f64,
    mana: f64,
    max_mana: f64,
    speed: f64,
    max_speed: f64,
    strength: f64,
    regeneration_rate: f64,

    effects: Vec<Effect>,

    /// Incoming damage.
    self_damage: ModifierChain,
    /// Move-success chance.
    self_move: ModifierChain,
    /// Outgoing damage.
    out_damage: ModifierChain,

    moves: Vec<Move>,
    config: CombatConfig,
    rng: StdRng,
}

impl Fighter {
    /// Create a fighter at full pools.
    ///
    /// `seed` feeds the fighter's own success-roll generator, so a fixed
    /// seed sequence replays a combat exactly.
    pub fn new(
        id: impl Into<FighterId>,
        stats: BaseStats,
        moves: Vec<Move>,
        config: CombatConfig,
        seed: u64,
    ) -> Self {
        Self {
            id: id.into(),
            health: stats.health,
            max_health: stats.health,
            mana: stats.mana,
            max_mana: stats.mana,
            speed: stats.speed,
            max_speed: stats.speed,
            strength: stats.strength,
            regeneration_rate: stats.regeneration(&config),
            effects: Vec::new(),
            self_damage: ModifierChain::new(),
            self_move: ModifierChain::new(),
            out_damage: ModifierChain::new(),
            moves,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a fighter with the move catalog of `archetype`.
    pub fn from_archetype(
        id: impl Into<FighterId>,
        archetype: Archetype,
        stats: BaseStats,
        config: CombatConfig,
        seed: u64,
    ) -> Self {
        let moves = archetype.moves(&stats);
        Self::new(id, stats, moves, config, seed)
    }

    pub fn id(&self) -> &FighterId {
        &self.id
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn max_mana(&self) -> f64 {
        self.max_mana
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn regeneration_rate(&self) -> f64 {
        self.regeneration_rate
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Currently attached effects, in attachment order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name() == name)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_named(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name() == name)
    }

    pub fn chain(&self, target: ChainTarget) -> &ModifierChain {
        match target {
            ChainTarget::SelfDamage => &self.self_damage,
            ChainTarget::SelfMove => &self.self_move,
            ChainTarget::OutDamage => &self.out_damage,
        }
    }

    fn chain_mut(&mut self, target: ChainTarget) -> &mut ModifierChain {
        match target {
            ChainTarget::SelfDamage => &mut self.self_damage,
            ChainTarget::SelfMove => &mut self.self_move,
            ChainTarget::OutDamage => &mut self.out_damage,
        }
    }

    /// Start a moveset whose budget is the fighter's current speed.
    pub fn new_moveset(&self) -> Moveset {
        Moveset::new(self.speed)
    }

    /// Add a one-shot modifier. It lasts until the next
    /// [`effect_update`](Self::effect_update) rebuilds the chains.
    pub fn add_modifier(&mut self, target: ChainTarget, modifier: Modifier) {
        self.chain_mut(target).add(modifier);
    }

    /// Attach an effect for its full lifespan.
    ///
    /// Fails with [`CombatError::EffectOwnership`] if the effect already
    /// belongs to another fighter; nothing is mutated in that case.
    pub fn add_effect(&mut self, mut effect: Effect) -> CombatResult<()> {
        if let Err(err) = effect.attach(&self.id) {
            warn!(target: "colosseum::fighter", fighter = %self.id, %err, "Effect rejected");
            return Err(err);
        }
        self.effects.push(effect);
        Ok(())
    }

    /// Resolve every queued move, most recently pushed first.
    ///
    /// `others` holds every fighter that may be targeted besides `self`.
    /// All targets are checked before anything is resolved, so an
    /// unknown target leaves every fighter untouched.
    ///
    /// For each entry the user pays the costs and rolls for success. On
    /// success the move's user effects attach to `self` and the target
    /// receives the move through `self`'s outgoing chain. A failed move
    /// only costs mana and speed.
    pub fn process_moveset(
        &mut self,
        moveset: Moveset,
        others: &mut [Fighter],
    ) -> CombatResult<Vec<MoveOutcome>> {
        for (_, target) in moveset.iter() {
            if *target != self.id && !others.iter().any(|f| f.id == *target) {
                return Err(CombatError::UnknownFighter(target.clone()));
            }
        }

        let mut outcomes = Vec::with_capacity(moveset.len());
        for (mv, target) in moveset.into_resolution_order() {
            let roll = self.perform_move(&mv);
            let damage = if roll.succeeded {
                for effect in mv.instantiate_user_effects() {
                    self.add_effect(effect)?;
                }
                let outgoing = self.out_damage.clone();
                let effects = mv.instantiate_target_effects();
                let report = if target == self.id {
                    self.receive_move(effects, &outgoing, mv.flat_damage())?
                } else {
                    let receiver = others
                        .iter_mut()
                        .find(|f| f.id == target)
                        .ok_or_else(|| CombatError::UnknownFighter(target.clone()))?;
                    receiver.receive_move(effects, &outgoing, mv.flat_damage())?
                };
                Some(report)
            } else {
                None
            };

            debug!(
                target: "colosseum::fighter",
                user = %self.id,
                target_id = %target,
                move_name = mv.name(),
                chance = roll.chance,
                roll = roll.roll,
                succeeded = roll.succeeded,
                "Move resolved"
            );

            outcomes.push(MoveOutcome {
                move_name: mv.name().to_string(),
                user: self.id.clone(),
                target,
                mana_cost: mv.flat_mana_cost(),
                speed_cost: mv.flat_speed_cost(),
                success_chance: roll.chance,
                roll: roll.roll,
                succeeded: roll.succeeded,
                damage,
            });
        }
        Ok(outcomes)
    }

    /// Pay for `mv` and roll for success.
    ///
    /// Costs are paid whether or not the move succeeds. Passive user
    /// effects flagged to apply before calculation count in the roll
    /// through a working copy of the move-success chain. Only when the
    /// roll succeeds are they added to this fighter's chains, where they
    /// shape the damage of this move and the rest of the turn. A failed
    /// move leaves every chain as it was.
    ///
    /// The chance is the move-success chain applied to
    /// [`CombatConfig::base_success_chance`]; it is not clamped, so a
    /// chance of 1 or more always succeeds and 0 or less never does.
    pub fn perform_move(&mut self, mv: &Move) -> MoveRoll {
        self.mana -= mv.flat_mana_cost();
        self.speed -= mv.flat_speed_cost();

        let early: Vec<(ChainTarget, Modifier)> = mv
            .granted_to_user()
            .iter()
            .filter(|template| template.applies_before_calculation())
            .filter_map(|template| match template.kind() {
                EffectKind::Passive(passive) => Some((passive.chain, passive.modifier.clone())),
                EffectKind::Active(_) => None,
            })
            .collect();

        let mut move_chain = self.self_move.clone();
        for (target, modifier) in &early {
            if *target == ChainTarget::SelfMove {
                move_chain.add(modifier.clone());
            }
        }

        let chance = move_chain.calculate(self.config.base_success_chance);
        let roll: f64 = self.rng.random();
        let succeeded = chance > 0.0 && roll <= chance;

        if succeeded {
            for (target, modifier) in early {
                self.chain_mut(target).add(modifier);
            }
        }
        MoveRoll {
            chance,
            roll,
            succeeded,
        }
    }

    /// Take a move from an attacker.
    ///
    /// Passive effects flagged to apply before calculation join this
    /// fighter's chains first, then the damage is resolved, then every
    /// effect attaches for its full lifespan. Ownership of every effect
    /// is checked up front.
    pub fn receive_move(
        &mut self,
        effects: Vec<Effect>,
        attacker_out: &ModifierChain,
        base_damage: f64,
    ) -> CombatResult<DamageReport> {
        for effect in &effects {
            if let Err(err) = effect.check_owner(&self.id) {
                warn!(target: "colosseum::fighter", fighter = %self.id, %err, "Move rejected");
                return Err(err);
            }
        }

        for effect in &effects {
            if !effect.applies_before_calculation() {
                continue;
            }
            if let Some(passive) = effect.passive() {
                let modifier = passive.modifier.clone();
                self.chain_mut(passive.chain).add(modifier);
            }
        }

        let report = self.damage_from(base_damage, attacker_out);

        for effect in effects {
            self.add_effect(effect)?;
        }
        Ok(report)
    }

    /// Resolve damage with no attacker-side modifiers.
    pub fn damage(&mut self, amount: f64) -> DamageReport {
        self.damage_from(amount, &ModifierChain::new())
    }

    /// Resolve damage through the attacker's outgoing chain merged with
    /// this fighter's incoming chain, then apply the speed and health loss.
    pub fn damage_from(&mut self, amount: f64, attacker_out: &ModifierChain) -> DamageReport {
        let merged = attacker_out.merged(&self.self_damage);
        let report = resolve_damage(amount, self.speed, &merged, &self.config);
        self.speed -= report.speed_loss;
        self.health -= report.health_loss;

        debug!(
            target: "colosseum::fighter",
            fighter = %self.id,
            raw = report.raw,
            adjusted = report.adjusted,
            speed_loss = report.speed_loss,
            health_loss = report.health_loss,
            "Damage resolved"
        );
        report
    }

    /// Remove health directly, bypassing speed and modifiers.
    /// Negative amounts heal.
    pub fn health_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// End-of-turn effect pass.
    ///
    /// Clears all three chains, ticks every effect once (running active
    /// effects against this fighter), drops effects whose lifespan has
    /// run out, then rebuilds the chains from the surviving passive
    /// effects. One-shot modifiers and effects pre-applied during the
    /// turn do not survive this call.
    pub fn effect_update(&mut self) {
        self.self_damage.clear();
        self.self_move.clear();
        self.out_damage.clear();

        let mut effects = std::mem::take(&mut self.effects);
        for effect in effects.iter_mut() {
            if let Some(action) = effect.tick() {
                action.apply(self);
            }
        }
        effects.retain(|effect| {
            if effect.is_expired() {
                debug!(
                    target: "colosseum::fighter",
                    fighter = %self.id,
                    effect = effect.name(),
                    "Effect expired"
                );
                false
            } else {
                true
            }
        });
        // Anything attached by a tick action joins after the existing effects.
        effects.append(&mut self.effects);
        self.effects = effects;

        let contributions: Vec<(ChainTarget, Modifier)> = self
            .effects
            .iter()
            .filter_map(|effect| effect.passive())
            .map(|passive| (passive.chain, passive.modifier.clone()))
            .collect();
        for (target, modifier) in contributions {
            self.chain_mut(target).add(modifier);
        }
    }

    /// Regenerate mana. Not capped at max mana.
    pub fn mana_update(&mut self) {
        self.mana += self.regeneration_rate;
    }

    /// Restore speed to its maximum.
    pub fn speed_update(&mut self) {
        self.speed = self.max_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{DamageOverTime, EffectTemplate, HealthDrain};
    use crate::modifier::{Additive, Multiplicative, Reduction};

    fn fighter(id: &str) -> Fighter {
        Fighter::new(
            id,
            BaseStats::new(100.0, 50.0, 100.0, 10.0),
            Vec::new(),
            CombatConfig::default(),
            42,
        )
    }

    #[test]
    fn test_new_fighter_is_full() {
        let f = fighter("a");
        assert_eq!(f.health(), f.max_health());
        assert_eq!(f.mana(), f.max_mana());
        assert_eq!(f.speed(), f.max_speed());
        assert_eq!(f.regeneration_rate(), 5.0);
        assert!(f.effects().is_empty());
    }

    #[test]
    fn test_damage_with_enough_speed() {
        let mut f = fighter("a");
        let report = f.damage(50.0);
        assert_eq!(report.speed_loss, 75.0);
        assert_eq!(f.speed(), 25.0);
        assert_eq!(f.health(), 50.0);
    }

    #[test]
    fn test_damage_with_insufficient_speed() {
        let mut f = Fighter::new(
            "a",
            BaseStats::new(100.0, 50.0, 40.0, 10.0),
            Vec::new(),
            CombatConfig::default(),
            1,
        );
        let report = f.damage(50.0);
        assert_eq!(f.speed(), 0.0);
        assert!((report.overflow - 23.333_333).abs() < 1e-3);
        assert_eq!(f.health(), 50.0);
    }

    #[test]
    fn test_damage_merges_attacker_and_receiver_chains() {
        let mut f = fighter("a");
        f.add_modifier(ChainTarget::SelfDamage, Modifier::new(0, Reduction(0.5)));

        let mut attacker_out = ModifierChain::new();
        attacker_out.add(Modifier::new(-1, Additive(10.0)));

        let report = f.damage_from(20.0, &attacker_out);
        assert_eq!(report.adjusted, 30.0);
        assert_eq!(report.health_loss, 15.0);
        // The attacker's chain is left alone.
        assert_eq!(attacker_out.len(), 1);
    }

    #[test]
    fn test_perform_move_pays_costs_even_on_failure() {
        let mut f = fighter("a");
        f.add_modifier(ChainTarget::SelfMove, Modifier::new(0, Multiplicative(0.0)));
        let mv = Move::new("Whiff").mana_cost(10.0).speed_cost(30.0);

        let roll = f.perform_move(&mv);
        assert!(!roll.succeeded);
        assert_eq!(roll.chance, 0.0);
        assert_eq!(f.mana(), 40.0);
        assert_eq!(f.speed(), 70.0);
    }

    #[test]
    fn test_chance_above_one_always_succeeds() {
        let mut f = fighter("a");
        f.add_modifier(ChainTarget::SelfMove, Modifier::new(0, Additive(5.0)));
        for _ in 0..20 {
            let roll = f.perform_move(&Move::new("Sure"));
            assert!(roll.succeeded);
            assert_eq!(roll.chance, 6.0);
        }
    }

    #[test]
    fn test_negative_chance_never_succeeds() {
        let mut f = fighter("a");
        f.add_modifier(ChainTarget::SelfMove, Modifier::new(0, Additive(-3.0)));
        for _ in 0..20 {
            assert!(!f.perform_move(&Move::new("Never")).succeeded);
        }
    }

    #[test]
    fn test_pre_calculation_user_effect_affects_roll() {
        let mut f = fighter("a");
        let focus = Move::new("Focus").grant_user(
            EffectTemplate::passive(
                "Focused",
                ChainTarget::SelfMove,
                Modifier::new(0, Additive(-2.0)),
            )
            .before_calculation(),
        );
        let roll = f.perform_move(&focus);
        assert_eq!(roll.chance, -1.0);
        assert!(!roll.succeeded);
    }

    #[test]
    fn test_failed_move_leaves_chains_untouched() {
        let mut f = fighter("a");
        let reckless = Move::new("Reckless")
            .grant_user(
                EffectTemplate::passive(
                    "Off Balance",
                    ChainTarget::SelfMove,
                    Modifier::new(0, Additive(-2.0)),
                )
                .before_calculation(),
            )
            .grant_user(
                EffectTemplate::passive(
                    "Frenzy",
                    ChainTarget::OutDamage,
                    Modifier::new(-4, Additive(5.0)),
                )
                .before_calculation(),
            );

        let roll = f.perform_move(&reckless);
        assert!(!roll.succeeded);
        assert!(f.chain(ChainTarget::SelfMove).is_empty());
        assert!(f.chain(ChainTarget::OutDamage).is_empty());

        let next = f.perform_move(&Move::new("Jab"));
        assert_eq!(next.chance, 1.0);
        assert!(next.succeeded);
    }

    #[test]
    fn test_successful_move_keeps_pre_applied_modifiers() {
        let mut f = fighter("a");
        let rage = Move::new("Rage").grant_user(
            EffectTemplate::passive(
                "Frenzy",
                ChainTarget::OutDamage,
                Modifier::new(-4, Additive(5.0)),
            )
            .before_calculation(),
        );

        assert!(f.perform_move(&rage).succeeded);
        assert_eq!(f.chain(ChainTarget::OutDamage).calculate(10.0), 15.0);
    }

    #[test]
    fn test_deferred_user_effect_does_not_affect_roll() {
        let mut f = fighter("a");
        let focus = Move::new("Focus").grant_user(EffectTemplate::passive(
            "Focused",
            ChainTarget::SelfMove,
            Modifier::new(0, Additive(-2.0)),
        ));
        let roll = f.perform_move(&focus);
        assert_eq!(roll.chance, 1.0);
        assert!(roll.succeeded);
    }

    #[test]
    fn test_effect_update_ticks_and_expires() {
        let mut f = fighter("a");
        let effect = EffectTemplate::active("Bleed", HealthDrain(5.0))
            .lasting(2)
            .instantiate();
        f.add_effect(effect).unwrap();

        f.effect_update();
        assert_eq!(f.effects()[0].lifespan(), 1);
        assert_eq!(f.health(), 95.0);

        f.effect_update();
        assert!(f.effects().is_empty());
        assert_eq!(f.health(), 90.0);
    }

    #[test]
    fn test_effect_update_rebuilds_chains() {
        let mut f = fighter("a");
        f.add_modifier(ChainTarget::OutDamage, Modifier::new(0, Additive(1.0)));
        let armor = EffectTemplate::passive(
            "Armor",
            ChainTarget::SelfDamage,
            Modifier::new(0, Reduction(0.5)),
        )
        .lasting(3)
        .instantiate();
        f.add_effect(armor).unwrap();
        assert!(f.chain(ChainTarget::SelfDamage).is_empty());

        f.effect_update();
        assert!(f.chain(ChainTarget::OutDamage).is_empty());
        assert_eq!(f.chain(ChainTarget::SelfDamage).len(), 1);
        assert_eq!(f.chain(ChainTarget::SelfDamage).calculate(10.0), 5.0);
    }

    #[test]
    fn test_damage_over_time_uses_speed_first() {
        let mut f = fighter("a");
        let burn = EffectTemplate::active("Burning", DamageOverTime(10.0))
            .lasting(1)
            .instantiate();
        f.add_effect(burn).unwrap();

        f.effect_update();
        assert_eq!(f.speed(), 85.0);
        assert_eq!(f.health(), 90.0);
        assert!(!f.has_effect("Burning"));
    }

    #[test]
    fn test_add_effect_owned_elsewhere_fails() {
        let mut a = fighter("a");
        let mut b = fighter("b");
        let effect = EffectTemplate::active("Bleed", HealthDrain(1.0))
            .lasting(3)
            .instantiate();
        a.add_effect(effect).unwrap();

        let stolen = a.effects()[0].clone();
        let err = b.add_effect(stolen).unwrap_err();

        assert!(matches!(err, CombatError::EffectOwnership { .. }));
        assert!(b.effects().is_empty());
        assert_eq!(a.effects().len(), 1);
    }

    #[test]
    fn test_receive_move_rejects_foreign_effects_before_damage() {
        let mut a = fighter("a");
        let mut b = fighter("b");
        a.add_effect(
            EffectTemplate::active("Bleed", HealthDrain(1.0))
                .lasting(3)
                .instantiate(),
        )
        .unwrap();

        let stolen = vec![a.effects()[0].clone()];
        let result = b.receive_move(stolen, &ModifierChain::new(), 40.0);

        assert!(result.is_err());
        assert_eq!(b.health(), 100.0);
        assert_eq!(b.speed(), 100.0);
        assert!(b.effects().is_empty());
    }

    #[test]
    fn test_regeneration_and_speed_reset() {
        let mut f = fighter("a");
        f.perform_move(&Move::new("Dash").mana_cost(20.0).speed_cost(60.0));

        f.mana_update();
        f.speed_update();
        assert_eq!(f.mana(), 35.0);
        assert_eq!(f.speed(), 100.0);
    }

    #[test]
    fn test_mana_regeneration_is_not_capped() {
        let mut f = fighter("a");
        f.mana_update();
        assert_eq!(f.mana(), 55.0);
    }

    #[test]
    fn test_process_moveset_unknown_target_mutates_nothing() {
        let mut a = fighter("a");
        let mut b = fighter("b");
        let mut moveset = a.new_moveset();
        moveset
            .push(Move::new("Hit").damage(10.0).speed_cost(10.0), b.id().clone())
            .unwrap();
        moveset
            .push(Move::new("Hit").speed_cost(10.0), FighterId::from_str("ghost"))
            .unwrap();

        let err = a
            .process_moveset(moveset, std::slice::from_mut(&mut b))
            .unwrap_err();
        assert_eq!(err, CombatError::UnknownFighter(FighterId::from_str("ghost")));
        assert_eq!(a.speed(), 100.0);
        assert_eq!(b.health(), 100.0);
    }

    #[test]
    fn test_self_targeted_move() {
        let mut a = fighter("a");
        let mut moveset = a.new_moveset();
        moveset
            .push(Move::new("Flagellate").damage(10.0), a.id().clone())
            .unwrap();

        let outcomes = a.process_moveset(moveset, &mut []).unwrap();
        assert!(outcomes[0].succeeded);
        assert_eq!(a.health(), 90.0);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut first = fighter("a");
        let mut second = fighter("a");
        let modifier = Modifier::new(0, Multiplicative(0.5));
        first.add_modifier(ChainTarget::SelfMove, modifier.clone());
        second.add_modifier(ChainTarget::SelfMove, modifier);

        for _ in 0..10 {
            let x = first.perform_move(&Move::new("Coin"));
            let y = second.perform_move(&Move::new("Coin"));
            assert_eq!(x, y);
        }
    }
}
