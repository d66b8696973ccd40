//! Modifier chains module.
//!
//! A modifier is a pure `f64 -> f64` function tagged with an integer
//! priority. A `ModifierChain` keeps its modifiers sorted by ascending
//! priority and folds an input through them left to right.
//!
//! By convention, negative priorities are "pre-mitigation" (they shape
//! the total damage before it is split between speed and health) and
//! non-negative priorities are "post-mitigation" (they only shape the
//! health-directed portion). See [`crate::damage`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The three chains every fighter carries.
///
/// # Examples
///
/// ```rust
/// use colosseum::ChainTarget;
///
/// let json = serde_json::to_string(&ChainTarget::OutDamage).unwrap();
/// assert_eq!(json, "\"out_damage\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainTarget {
    /// Damage the fighter receives (weaknesses, armor, resistances).
    SelfDamage,
    /// The fighter's own move-success chance.
    SelfMove,
    /// Damage the fighter deals (buffs).
    OutDamage,
}

/// Trait for the numeric function carried by a modifier.
///
/// Implementations must be pure: the same input always produces the
/// same output, and applying a modifier never touches fighter state.
///
/// # Examples
///
/// ```rust
/// use colosseum::modifier::{ModifierFn, Multiplicative};
///
/// let double = Multiplicative(2.0);
/// assert_eq!(double.apply(21.0), 42.0);
/// ```
pub trait ModifierFn: Send + Sync {
    /// Apply the function to an input value.
    fn apply(&self, input: f64) -> f64;

    /// Get a human-readable description of this function.
    ///
    /// Used in the step breakdown of a [`crate::DamageReport`].
    fn description(&self) -> String;
}

/// Adds a flat amount (negative for a flat reduction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Additive(pub f64);

impl ModifierFn for Additive {
    fn apply(&self, input: f64) -> f64 {
        input + self.0
    }

    fn description(&self) -> String {
        format!("{:+.2}", self.0)
    }
}

/// Multiplies by a constant factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiplicative(pub f64);

impl ModifierFn for Multiplicative {
    fn apply(&self, input: f64) -> f64 {
        input * self.0
    }

    fn description(&self) -> String {
        format!("×{:.2}", self.0)
    }
}

/// Removes a fraction of the input: `x - x * ratio`.
///
/// # Examples
///
/// ```rust
/// use colosseum::modifier::{ModifierFn, Reduction};
///
/// assert_eq!(Reduction(0.25).apply(100.0), 75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction(pub f64);

impl ModifierFn for Reduction {
    fn apply(&self, input: f64) -> f64 {
        input - input * self.0
    }

    fn description(&self) -> String {
        format!("-{:.1}%", self.0 * 100.0)
    }
}

/// A modifier backed by an arbitrary closure.
pub struct FnModifier {
    func: Box<dyn Fn(f64) -> f64 + Send + Sync>,
    description: String,
}

impl FnModifier {
    /// Wrap a closure with a description.
    pub fn new<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            description: description.into(),
        }
    }
}

impl ModifierFn for FnModifier {
    fn apply(&self, input: f64) -> f64 {
        (self.func)(input)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// A priority-tagged modifier function.
///
/// Cloning a `Modifier` shares the underlying function; functions are
/// pure, so sharing them between an effect template and its instances
/// (or between a fighter's chain and a merged working copy) is safe.
///
/// # Examples
///
/// ```rust
/// use colosseum::modifier::{Additive, Modifier};
///
/// let armor = Modifier::new(0, Additive(-5.0));
/// assert_eq!(armor.priority(), 0);
/// assert_eq!(armor.apply(20.0), 15.0);
///
/// let halve = Modifier::from_fn(-1, "half", |x| x / 2.0);
/// assert_eq!(halve.apply(20.0), 10.0);
/// ```
#[derive(Clone)]
pub struct Modifier {
    priority: i32,
    func: Arc<dyn ModifierFn>,
}

impl Modifier {
    /// Create a modifier from any [`ModifierFn`].
    pub fn new(priority: i32, func: impl ModifierFn + 'static) -> Self {
        Self {
            priority,
            func: Arc::new(func),
        }
    }

    /// Create a modifier from a closure.
    pub fn from_fn<F>(priority: i32, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(priority, FnModifier::new(description, func))
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn apply(&self, input: f64) -> f64 {
        self.func.apply(input)
    }

    pub fn description(&self) -> String {
        self.func.description()
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("priority", &self.priority)
            .field("func", &format!("<{}>", self.func.description()))
            .finish()
    }
}

/// An ordered set of modifiers, always sorted ascending by priority.
///
/// Modifiers with equal priority keep their insertion order.
///
/// # Examples
///
/// ```rust
/// use colosseum::modifier::{Additive, Modifier, ModifierChain, Multiplicative};
///
/// let mut chain = ModifierChain::new();
/// chain.add(Modifier::new(1, Additive(5.0)));
/// chain.add(Modifier::new(-1, Multiplicative(2.0)));
///
/// // (10 * 2) + 5, regardless of insertion order
/// assert_eq!(chain.calculate(10.0), 25.0);
///
/// // Only priorities below 0
/// assert_eq!(chain.calculate_max(10.0, 0), 20.0);
/// // Only priorities at or above 0
/// assert_eq!(chain.calculate_min(10.0, 0), 15.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModifierChain {
    modifiers: Vec<Modifier>,
}

impl ModifierChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a modifier, keeping the chain sorted by priority.
    ///
    /// The modifier is placed after every existing modifier with the same
    /// or lower priority.
    pub fn add(&mut self, modifier: Modifier) {
        let idx = self
            .modifiers
            .partition_point(|m| m.priority <= modifier.priority);
        self.modifiers.insert(idx, modifier);
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn clear(&mut self) {
        self.modifiers.clear();
    }

    /// Iterate the modifiers in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    /// Fold `input` through every modifier.
    ///
    /// An empty chain returns `input` unchanged.
    pub fn calculate(&self, input: f64) -> f64 {
        self.fold(input, |_| true)
    }

    /// Fold `input` through modifiers with priority `>= min_priority`.
    pub fn calculate_min(&self, input: f64, min_priority: i32) -> f64 {
        self.fold(input, |p| p >= min_priority)
    }

    /// Fold `input` through modifiers with priority `< max_priority`.
    pub fn calculate_max(&self, input: f64, max_priority: i32) -> f64 {
        self.fold(input, |p| p < max_priority)
    }

    /// Fold `input` through modifiers with `min_priority <= priority < max_priority`.
    pub fn calculate_range(&self, input: f64, min_priority: i32, max_priority: i32) -> f64 {
        self.fold(input, |p| p >= min_priority && p < max_priority)
    }

    /// Like [`calculate_min`](Self::calculate_min), also returning each
    /// step as `(description, value_after_step)`.
    pub fn breakdown_min(&self, input: f64, min_priority: i32) -> (f64, Vec<(String, f64)>) {
        self.fold_traced(input, |p| p >= min_priority)
    }

    /// Like [`calculate_max`](Self::calculate_max), also returning each
    /// step as `(description, value_after_step)`.
    pub fn breakdown_max(&self, input: f64, max_priority: i32) -> (f64, Vec<(String, f64)>) {
        self.fold_traced(input, |p| p < max_priority)
    }

    /// Like [`calculate_range`](Self::calculate_range), also returning each
    /// step as `(description, value_after_step)`.
    pub fn breakdown_range(
        &self,
        input: f64,
        min_priority: i32,
        max_priority: i32,
    ) -> (f64, Vec<(String, f64)>) {
        self.fold_traced(input, |p| p >= min_priority && p < max_priority)
    }

    /// Build a new chain holding the modifiers of both `self` and `other`.
    ///
    /// Neither chain is modified. At equal priority, modifiers from `self`
    /// are evaluated before those from `other`.
    pub fn merged(&self, other: &ModifierChain) -> ModifierChain {
        let mut merged = self.clone();
        for modifier in &other.modifiers {
            merged.add(modifier.clone());
        }
        merged
    }

    fn fold_traced(
        &self,
        input: f64,
        include: impl Fn(i32) -> bool,
    ) -> (f64, Vec<(String, f64)>) {
        let mut steps = Vec::new();
        let mut value = input;
        for modifier in self.modifiers.iter().filter(|m| include(m.priority)) {
            value = modifier.apply(value);
            steps.push((
                format!("[{}] {}", modifier.priority, modifier.description()),
                value,
            ));
        }
        (value, steps)
    }

    fn fold(&self, input: f64, include: impl Fn(i32) -> bool) -> f64 {
        self.modifiers
            .iter()
            .filter(|m| include(m.priority))
            .fold(input, |acc, m| m.apply(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities(chain: &ModifierChain) -> Vec<i32> {
        chain.iter().map(Modifier::priority).collect()
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = ModifierChain::new();
        assert_eq!(chain.calculate(42.5), 42.5);
        assert_eq!(chain.calculate_min(42.5, 0), 42.5);
        assert_eq!(chain.calculate_max(42.5, 0), 42.5);
        assert_eq!(chain.calculate_range(42.5, -10, 10), 42.5);
    }

    #[test]
    fn test_add_keeps_sorted() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(3, Additive(1.0)));
        chain.add(Modifier::new(-4, Additive(1.0)));
        chain.add(Modifier::new(0, Additive(1.0)));
        chain.add(Modifier::new(-4, Additive(1.0)));

        assert_eq!(priorities(&chain), vec![-4, -4, 0, 3]);
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(0, Additive(10.0)));
        chain.add(Modifier::new(0, Multiplicative(2.0)));

        // (1 + 10) * 2, not (1 * 2) + 10
        assert_eq!(chain.calculate(1.0), 22.0);
    }

    #[test]
    fn test_fold_consumes_previous_result() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(0, Multiplicative(2.0)));
        chain.add(Modifier::new(1, Multiplicative(3.0)));
        chain.add(Modifier::new(2, Additive(1.0)));

        assert_eq!(chain.calculate(5.0), 31.0);
    }

    #[test]
    fn test_range_bounds() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(-1, Additive(1.0)));
        chain.add(Modifier::new(0, Additive(10.0)));
        chain.add(Modifier::new(1, Additive(100.0)));

        // min inclusive, max exclusive
        assert_eq!(chain.calculate_range(0.0, 0, 1), 10.0);
        assert_eq!(chain.calculate_min(0.0, 0), 110.0);
        assert_eq!(chain.calculate_max(0.0, 0), 1.0);
    }

    #[test]
    fn test_partition_matches_full_pass() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(-4, Multiplicative(1.25)));
        chain.add(Modifier::new(-1, Additive(3.0)));
        chain.add(Modifier::new(0, Reduction(0.5)));
        chain.add(Modifier::new(2, Additive(-1.0)));

        let split = chain.calculate_min(chain.calculate_max(40.0, 0), 0);
        assert_eq!(split, chain.calculate(40.0));
    }

    #[test]
    fn test_merged_leaves_sources_untouched() {
        let mut attacker = ModifierChain::new();
        attacker.add(Modifier::new(-4, Additive(5.0)));
        let mut receiver = ModifierChain::new();
        receiver.add(Modifier::new(-4, Multiplicative(2.0)));
        receiver.add(Modifier::new(1, Additive(1.0)));

        let merged = attacker.merged(&receiver);

        assert_eq!(attacker.len(), 1);
        assert_eq!(receiver.len(), 2);
        assert_eq!(merged.len(), 3);
        // Attacker's modifier comes first at equal priority: (10 + 5) * 2 + 1
        assert_eq!(merged.calculate(10.0), 31.0);
    }

    #[test]
    fn test_breakdown_records_each_step() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(-2, Multiplicative(2.0)));
        chain.add(Modifier::from_fn(-1, "plus three", |x| x + 3.0));
        chain.add(Modifier::new(5, Additive(100.0)));

        let (value, steps) = chain.breakdown_max(4.0, 0);
        assert_eq!(value, 11.0);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], ("[-2] ×2.00".to_string(), 8.0));
        assert_eq!(steps[1], ("[-1] plus three".to_string(), 11.0));
    }

    #[test]
    fn test_clear() {
        let mut chain = ModifierChain::new();
        chain.add(Modifier::new(0, Additive(1.0)));
        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.calculate(7.0), 7.0);
    }

    #[test]
    fn test_modifier_descriptions() {
        assert_eq!(Additive(25.0).description(), "+25.00");
        assert_eq!(Additive(-5.0).description(), "-5.00");
        assert!(Multiplicative(1.5).description().contains("1.50"));
        assert!(Reduction(0.125).description().contains("12.5"));
        let m = Modifier::from_fn(0, "blinded", |x| x);
        assert!(format!("{:?}", m).contains("blinded"));
    }
}
