//! Core types for CoachLens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named numeric measurement, e.g. "Confidence" at 87
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Display name of the metric
    pub name: String,

    /// Measured value, usually on a 0-100 scale
    pub value: f64,
}

impl Metric {
    /// Create a new metric
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Discrete presentation bucket derived from a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Success,
    #[serde(alias = "accent")]
    Info,
    Warning,
    Error,
    Neutral,
}

impl Tier {
    /// All tiers, in declaration order
    pub const ALL: [Tier; 5] = [
        Tier::Success,
        Tier::Info,
        Tier::Warning,
        Tier::Error,
        Tier::Neutral,
    ];

    /// Lowercase name used in config files and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            // the dashboard's progress bars call the info bucket "accent"
            "info" | "accent" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// Direction of change between two same-unit values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Unchanged,
}

impl TrendDirection {
    /// Direction implied by the sign of a delta
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Unchanged
        }
    }

    /// Arrow glyph for terminal output
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Unchanged => "→",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Unchanged => "unchanged",
        };
        f.write_str(s)
    }
}

/// How a trend delta is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    /// `current - previous`, in the metric's own unit
    #[default]
    Absolute,
    /// `(current - previous) / previous * 100`
    Percentage,
}

/// Result of comparing a current value against a previous one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    /// The newer value
    pub current: f64,

    /// The baseline value
    pub previous: f64,

    /// Direction of change
    pub direction: TrendDirection,

    /// Signed magnitude of change, in `mode` units
    pub delta: f64,

    /// How `delta` is expressed
    pub mode: DeltaMode,
}

impl TrendComparison {
    /// Whether the value improved
    pub fn is_positive(&self) -> bool {
        self.direction == TrendDirection::Up
    }
}
