//! Validated threshold sets
//!
//! A `ThresholdSet` is an ordered list of `(lower bound, tier)` pairs,
//! strictly descending by bound, whose last bound sits at or below the
//! domain minimum. Construction is the only place a set is checked; every
//! `ThresholdSet` in circulation is valid.

use coachlens_core::{Error, Result, Tier};
use serde::{Deserialize, Serialize};

/// One step of a threshold set: values `>= min` map to `tier`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBound {
    /// Inclusive lower edge
    pub min: f64,

    /// Tier owning this step
    pub tier: Tier,
}

impl ThresholdBound {
    pub fn new(min: f64, tier: Tier) -> Self {
        Self { min, tier }
    }
}

impl From<(f64, Tier)> for ThresholdBound {
    fn from((min, tier): (f64, Tier)) -> Self {
        Self { min, tier }
    }
}

/// Ordered bound-to-tier mapping, evaluated highest bound first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdSet {
    bounds: Vec<ThresholdBound>,
    domain_min: f64,
}

impl ThresholdSet {
    /// Domain minimum assumed for 0-100 scales
    pub const DEFAULT_DOMAIN_MIN: f64 = 0.0;

    /// Build a set over a 0-based domain
    pub fn new<I, B>(bounds: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<ThresholdBound>,
    {
        Self::with_floor(bounds, Self::DEFAULT_DOMAIN_MIN)
    }

    /// Build a set whose catch-all bound must reach `domain_min`
    pub fn with_floor<I, B>(bounds: I, domain_min: f64) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<ThresholdBound>,
    {
        let bounds: Vec<ThresholdBound> = bounds.into_iter().map(Into::into).collect();
        validate(&bounds, domain_min)?;
        Ok(Self { bounds, domain_min })
    }

    /// The common three-step set: `>= high` success, `>= mid` info, else warning
    pub fn tiered(high: f64, mid: f64) -> Result<Self> {
        Self::new([
            (high, Tier::Success),
            (mid, Tier::Info),
            (Self::DEFAULT_DOMAIN_MIN, Tier::Warning),
        ])
    }

    /// Three-step set from literals known to be valid.
    pub(crate) fn preset(high: f64, mid: f64) -> Self {
        debug_assert!(high > mid && mid > Self::DEFAULT_DOMAIN_MIN);
        Self {
            bounds: vec![
                ThresholdBound::new(high, Tier::Success),
                ThresholdBound::new(mid, Tier::Info),
                ThresholdBound::new(Self::DEFAULT_DOMAIN_MIN, Tier::Warning),
            ],
            domain_min: Self::DEFAULT_DOMAIN_MIN,
        }
    }

    /// Bounds, highest first
    pub fn bounds(&self) -> &[ThresholdBound] {
        &self.bounds
    }

    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    /// Tier of the catch-all (lowest) bound
    pub fn floor_tier(&self) -> Tier {
        // validated non-empty at construction
        self.bounds[self.bounds.len() - 1].tier
    }

    /// Tiers declared by this set, highest bound first
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.bounds.iter().map(|b| b.tier)
    }

    /// Whether `tier` is owned by any bound of this set
    pub fn declares(&self, tier: Tier) -> bool {
        self.tiers().any(|t| t == tier)
    }

    /// Tier of the greatest bound `<= value`, or `None` when the value is
    /// below every bound.
    pub fn lookup(&self, value: f64) -> Option<Tier> {
        self.bounds
            .iter()
            .find(|bound| value >= bound.min)
            .map(|bound| bound.tier)
    }
}

fn validate(bounds: &[ThresholdBound], domain_min: f64) -> Result<()> {
    if !domain_min.is_finite() {
        return Err(Error::config(format!(
            "domain minimum must be finite, got {domain_min}"
        )));
    }

    let Some(last) = bounds.last() else {
        return Err(Error::config("threshold set has no bounds"));
    };

    if let Some(bad) = bounds.iter().find(|b| !b.min.is_finite()) {
        return Err(Error::config(format!(
            "threshold bound for '{}' is not finite: {}",
            bad.tier, bad.min
        )));
    }

    for pair in bounds.windows(2) {
        if pair[0].min <= pair[1].min {
            return Err(Error::config(format!(
                "threshold bounds must be strictly descending: {} ({}) is followed by {} ({})",
                pair[0].min, pair[0].tier, pair[1].min, pair[1].tier
            )));
        }
    }

    if last.min > domain_min {
        return Err(Error::config(format!(
            "threshold set has no floor: lowest bound {} is above domain minimum {}",
            last.min, domain_min
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiered_layout() {
        let set = ThresholdSet::tiered(80.0, 70.0).unwrap();
        let tiers: Vec<Tier> = set.tiers().collect();
        assert_eq!(tiers, vec![Tier::Success, Tier::Info, Tier::Warning]);
        assert_eq!(set.floor_tier(), Tier::Warning);
        assert_eq!(set.domain_min(), 0.0);
    }

    #[test]
    fn test_preset_matches_tiered() {
        assert_eq!(
            ThresholdSet::preset(70.0, 50.0),
            ThresholdSet::tiered(70.0, 50.0).unwrap()
        );
    }

    #[test]
    fn test_rejects_empty() {
        let err = ThresholdSet::new(Vec::<(f64, Tier)>::new()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = ThresholdSet::new([
            (70.0, Tier::Info),
            (80.0, Tier::Success),
            (0.0, Tier::Warning),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("strictly descending"));
    }

    #[test]
    fn test_rejects_duplicate_bound() {
        let result = ThresholdSet::new([
            (80.0, Tier::Success),
            (80.0, Tier::Info),
            (0.0, Tier::Warning),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_missing_floor() {
        let err = ThresholdSet::new([(80.0, Tier::Success), (70.0, Tier::Info)]).unwrap_err();
        assert!(err.to_string().contains("no floor"));
    }

    #[test]
    fn test_rejects_nan_bound() {
        let result = ThresholdSet::new([(f64::NAN, Tier::Success), (0.0, Tier::Warning)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_domain_min() {
        let set = ThresholdSet::with_floor([(0.0, Tier::Success), (-10.0, Tier::Error)], -10.0)
            .unwrap();
        assert_eq!(set.lookup(-10.0), Some(Tier::Error));
        assert_eq!(set.lookup(-10.5), None);

        assert!(ThresholdSet::with_floor([(0.0, Tier::Success)], -10.0).is_err());
        assert!(ThresholdSet::with_floor([(0.0, Tier::Success)], f64::INFINITY).is_err());
    }

    #[test]
    fn test_floor_below_domain_min_is_accepted() {
        let set = ThresholdSet::new([(50.0, Tier::Success), (-1.0, Tier::Neutral)]).unwrap();
        assert_eq!(set.lookup(-0.5), Some(Tier::Neutral));
    }

    #[test]
    fn test_lookup_is_inclusive() {
        let set = ThresholdSet::tiered(80.0, 70.0).unwrap();
        assert_eq!(set.lookup(80.0), Some(Tier::Success));
        assert_eq!(set.lookup(70.0), Some(Tier::Info));
        assert_eq!(set.lookup(69.999), Some(Tier::Warning));
        assert_eq!(set.lookup(-0.001), None);
        assert!(set.declares(Tier::Info));
        assert!(!set.declares(Tier::Error));
    }
}
