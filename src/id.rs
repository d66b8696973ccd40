//! Fighter ids.
//!
//! Every fighter in play is addressed by a `FighterId`. Movesets carry one
//! per queued move, effects record the one they are bound to, and reports
//! name the user and target of each move with them. Ids come from roster
//! JSON or from driver code, so blank names are rejected on load.

use crate::error::{CombatError, CombatResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Name of a fighter, shared cheaply between movesets, effects and reports.
///
/// # Examples
///
/// ```rust
/// use colosseum::FighterId;
///
/// let conan = FighterId::from_str("conan");
/// assert_eq!(conan, "conan");
/// assert!(FighterId::parse("  ").is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FighterId(Arc<str>);

impl FighterId {
    /// Wrap a name without validation. Driver code uses this for ids it
    /// knows are well formed.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Validate and wrap a name read from outside the program.
    ///
    /// Surrounding whitespace is trimmed; a name that is empty after
    /// trimming cannot be targeted and fails with
    /// [`CombatError::InvalidConfig`].
    pub fn parse(name: &str) -> CombatResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CombatError::InvalidConfig(format!(
                "fighter id must not be blank, got {name:?}"
            )));
        }
        Ok(Self::from_str(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for FighterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FighterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        FighterId::parse(&name).map_err(D::Error::custom)
    }
}

impl From<&str> for FighterId {
    fn from(name: &str) -> Self {
        Self::from_str(name)
    }
}

impl From<String> for FighterId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl AsRef<str> for FighterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FighterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FighterId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for FighterId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
