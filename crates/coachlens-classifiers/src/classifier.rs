//! Metric classifier and its free-function shortcuts

use crate::threshold::ThresholdSet;
use coachlens_core::{DeltaMode, Error, Result, Tier, TrendComparison, TrendDirection};
use serde::{Deserialize, Serialize};

/// What to do with a value that sits below every bound of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BelowFloorPolicy {
    /// Return the floor tier
    #[default]
    Clamp,
    /// Report a configuration error
    Reject,
}

/// Stateless mapping from numeric metrics to tiers and trends.
///
/// Every method is pure: identical inputs always produce identical outputs,
/// and the classifier can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricClassifier {
    below_floor: BelowFloorPolicy,
}

impl MetricClassifier {
    /// Create a classifier that clamps below-floor values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with an explicit below-floor policy
    pub fn with_policy(below_floor: BelowFloorPolicy) -> Self {
        Self { below_floor }
    }

    pub fn policy(&self) -> BelowFloorPolicy {
        self.below_floor
    }

    /// Classify `value` against `thresholds`.
    ///
    /// Returns the tier of the greatest bound `<= value`. Values below every
    /// bound fall back to the floor tier regardless of policy; use
    /// [`try_classify`](Self::try_classify) to honour [`BelowFloorPolicy::Reject`].
    pub fn classify(&self, value: f64, thresholds: &ThresholdSet) -> Tier {
        thresholds
            .lookup(value)
            .unwrap_or_else(|| thresholds.floor_tier())
    }

    /// Classify `value`, applying the configured below-floor policy
    pub fn try_classify(&self, value: f64, thresholds: &ThresholdSet) -> Result<Tier> {
        match (thresholds.lookup(value), self.below_floor) {
            (Some(tier), _) => Ok(tier),
            (None, BelowFloorPolicy::Clamp) => Ok(thresholds.floor_tier()),
            (None, BelowFloorPolicy::Reject) => Err(Error::config(format!(
                "value {} is below the domain minimum {}",
                value,
                thresholds.domain_min()
            ))),
        }
    }

    /// Classify each value of a series
    pub fn classify_series(&self, values: &[f64], thresholds: &ThresholdSet) -> Vec<Tier> {
        values
            .iter()
            .map(|&value| self.classify(value, thresholds))
            .collect()
    }

    /// Compare two values with an absolute delta
    pub fn compare_trend(&self, current: f64, previous: f64) -> TrendComparison {
        let delta = current - previous;
        TrendComparison {
            current,
            previous,
            direction: TrendDirection::from_delta(delta),
            delta,
            mode: DeltaMode::Absolute,
        }
    }

    /// Compare two values using the caller's delta semantics.
    ///
    /// Percentage deltas are relative to `|previous|`, so the sign of the
    /// delta always agrees with `current - previous`. A zero baseline has no
    /// percentage change and is rejected.
    pub fn compare_trend_with(
        &self,
        current: f64,
        previous: f64,
        mode: DeltaMode,
    ) -> Result<TrendComparison> {
        match mode {
            DeltaMode::Absolute => Ok(self.compare_trend(current, previous)),
            DeltaMode::Percentage => {
                if previous == 0.0 || !previous.is_finite() {
                    return Err(Error::config(format!(
                        "percentage trend needs a finite non-zero baseline, got {previous}"
                    )));
                }
                let delta = (current - previous) / previous.abs() * 100.0;
                Ok(TrendComparison {
                    current,
                    previous,
                    direction: TrendDirection::from_delta(delta),
                    delta,
                    mode,
                })
            }
        }
    }

    /// `(value / max) * 100`, clamped to `[0, 100]`
    pub fn percentage_of(&self, value: f64, max: f64) -> Result<f64> {
        if !(max.is_finite() && max > 0.0) {
            return Err(Error::config(format!(
                "progress maximum must be positive, got {max}"
            )));
        }
        if value.is_nan() {
            return Err(Error::config("progress value is not a number"));
        }
        Ok((value / max * 100.0).clamp(0.0, 100.0))
    }
}

/// Classify with the default clamping classifier
pub fn classify(value: f64, thresholds: &ThresholdSet) -> Tier {
    MetricClassifier::new().classify(value, thresholds)
}

/// Absolute trend between two values
pub fn compare_trend(current: f64, previous: f64) -> TrendComparison {
    MetricClassifier::new().compare_trend(current, previous)
}

/// Clamped percentage of `max`
pub fn percentage_of(value: f64, max: f64) -> Result<f64> {
    MetricClassifier::new().percentage_of(value, max)
}
