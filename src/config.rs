//! Engine configuration.
//!
//! `CombatConfig` holds the tunables of the damage and success
//! formulas. `BaseStats` describes a fighter's starting pools. Both are
//! plain serde types so a driver can keep them in JSON alongside the
//! roster it feeds to [`crate::Arena::from_config`].

use crate::catalog::Archetype;
use crate::error::{CombatError, CombatResult};
use crate::id::FighterId;
use serde::{Deserialize, Serialize};

/// Which value the post-mitigation pass turns into health damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthDamageBasis {
    /// The full pre-split adjusted damage. Speed loss does not shield health.
    #[default]
    Adjusted,
    /// Only the part of the damage that speed could not absorb.
    Overflow,
}

/// Tunables for combat resolution.
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```rust
/// use colosseum::{CombatConfig, HealthDamageBasis};
///
/// let config = CombatConfig::from_json(r#"{ "health_damage_basis": "overflow" }"#).unwrap();
/// assert_eq!(config.health_damage_basis, HealthDamageBasis::Overflow);
/// assert_eq!(config.speed_absorption_ratio, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Speed lost per point of adjusted damage.
    pub speed_absorption_ratio: f64,
    /// Priorities below this are pre-mitigation, the rest post-mitigation.
    pub mitigation_boundary: i32,
    pub health_damage_basis: HealthDamageBasis,
    /// Input fed to a fighter's move-success chain.
    pub base_success_chance: f64,
    /// Mana regenerated per turn as a fraction of max mana, used when a
    /// fighter's stats carry no explicit regeneration rate.
    pub mana_regeneration_ratio: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            speed_absorption_ratio: 1.5,
            mitigation_boundary: 0,
            health_damage_basis: HealthDamageBasis::Adjusted,
            base_success_chance: 1.0,
            mana_regeneration_ratio: 0.1,
        }
    }
}

impl CombatConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> CombatResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CombatError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the formulas can be evaluated with these values.
    pub fn validate(&self) -> CombatResult<()> {
        if self.speed_absorption_ratio.is_nan() || self.speed_absorption_ratio <= 0.0 {
            return Err(CombatError::InvalidConfig(format!(
                "speed_absorption_ratio must be positive, got {}",
                self.speed_absorption_ratio
            )));
        }
        Ok(())
    }
}

/// Starting pools of a fighter.
///
/// # Examples
///
/// ```rust
/// use colosseum::{BaseStats, CombatConfig};
///
/// let stats = BaseStats::new(500.0, 300.0, 400.0, 20.0);
/// assert_eq!(stats.regeneration(&CombatConfig::default()), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: f64,
    pub mana: f64,
    pub speed: f64,
    /// Base damage scalar.
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regeneration_rate: Option<f64>,
}

impl BaseStats {
    pub fn new(health: f64, mana: f64, speed: f64, strength: f64) -> Self {
        Self {
            health,
            mana,
            speed,
            strength,
            regeneration_rate: None,
        }
    }

    /// Set an explicit per-turn mana regeneration.
    pub fn with_regeneration(mut self, rate: f64) -> Self {
        self.regeneration_rate = Some(rate);
        self
    }

    /// Mana regenerated per turn under `config`.
    pub fn regeneration(&self, config: &CombatConfig) -> f64 {
        self.regeneration_rate
            .unwrap_or(self.mana * config.mana_regeneration_ratio)
    }
}

/// One roster entry of an [`ArenaConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterConfig {
    pub id: FighterId,
    pub archetype: Archetype,
    pub stats: BaseStats,
    /// Seed of the fighter's success-roll generator.
    pub seed: u64,
}

/// A complete arena setup: tunables plus roster.
///
/// # Examples
///
/// ```rust
/// use colosseum::ArenaConfig;
///
/// let config = ArenaConfig::from_json(r#"{
///     "fighters": [
///         { "id": "jack", "archetype": "pirate",
///           "stats": { "health": 500, "mana": 300, "speed": 400, "strength": 20 },
///           "seed": 7 }
///     ]
/// }"#).unwrap();
/// assert_eq!(config.fighters.len(), 1);
/// assert_eq!(config.combat.speed_absorption_ratio, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub combat: CombatConfig,
    #[serde(default)]
    pub fighters: Vec<FighterConfig>,
}

impl ArenaConfig {
    /// Parse and validate an arena setup from JSON.
    pub fn from_json(json: &str) -> CombatResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CombatError::InvalidConfig(e.to_string()))?;
        config.combat.validate()?;
        Ok(config)
    }
}
