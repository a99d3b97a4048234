//! CoachLens Classifiers
//!
//! Maps raw coaching metrics onto categorical presentation states.
//!
//! The layer is made of a few independent, pure rules:
//! - Tier classification: a value and a [`ThresholdSet`] give a [`Tier`]
//! - Trend comparison: a current and a previous value give a direction and delta
//! - Progress percentage: a value and a maximum give a share clamped to `[0, 100]`
//!
//! Threshold sets are validated when they are built, so a malformed set is
//! reported once at setup and never at classification time.
//!
//! ```
//! use coachlens_classifiers::{classify, ThresholdSet};
//! use coachlens_core::Tier;
//!
//! let badges = ThresholdSet::tiered(80.0, 70.0).unwrap();
//! assert_eq!(classify(80.0, &badges), Tier::Success);
//! assert_eq!(classify(79.9, &badges), Tier::Info);
//! ```

pub mod classifier;
pub mod config;
pub mod presentation;
pub mod presets;
pub mod registry;
pub mod threshold;

pub use classifier::{classify, compare_trend, percentage_of, BelowFloorPolicy, MetricClassifier};
pub use coachlens_core::{DeltaMode, Metric, Tier, TrendComparison, TrendDirection};
pub use config::{BoundSpec, ClassifierConfig, ThresholdSetSpec};
pub use presentation::{
    FeedbackPriority, ProgressBar, ProgressVariant, RecordingState, StatusBadge, TrendBadge,
};
pub use registry::{init_registry_from_file, load_config, ThresholdRegistry};
pub use threshold::{ThresholdBound, ThresholdSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{classify, compare_trend, percentage_of, MetricClassifier};
    pub use crate::presets;
    pub use crate::registry::ThresholdRegistry;
    pub use crate::threshold::ThresholdSet;
    pub use coachlens_core::{Tier, TrendDirection};
}
