//! CoachLens Core
//!
//! Core types and utilities shared across CoachLens components.
//!
//! This crate provides:
//! - The metric data model (`Metric`, `Tier`, trend types)
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DeltaMode, Metric, Tier, TrendComparison, TrendDirection};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{DeltaMode, Metric, Tier, TrendComparison, TrendDirection};
}
