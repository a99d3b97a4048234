//! Presentation models derived from classification results
//!
//! These mirror the dashboard's shared widgets: status badges, progress bars,
//! metric-card trend badges and the recording toggle. They carry no styling,
//! only the categorical state a renderer needs.

use crate::classifier::MetricClassifier;
use crate::threshold::ThresholdSet;
use coachlens_core::{Result, Tier, TrendComparison, TrendDirection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled status pill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub status: Tier,
    pub label: String,
}

impl StatusBadge {
    pub fn new(status: Tier, label: impl Into<String>) -> Self {
        Self {
            status,
            label: label.into(),
        }
    }

    /// Badge for a 0-100 score, labelled `"{value}%"`
    pub fn for_score(value: f64, thresholds: &ThresholdSet) -> Self {
        let status = MetricClassifier::new().classify(value, thresholds);
        Self::new(status, format!("{}%", format_number(value)))
    }
}

/// Fill colour of a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressVariant {
    Default,
    #[default]
    Accent,
    Success,
    Warning,
}

impl From<Tier> for ProgressVariant {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Success => Self::Success,
            Tier::Info => Self::Accent,
            Tier::Warning | Tier::Error => Self::Warning,
            Tier::Neutral => Self::Default,
        }
    }
}

/// A horizontal progress bar over `[0, max]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    pub value: f64,
    pub max: f64,
    pub label: Option<String>,
    pub variant: ProgressVariant,
}

impl ProgressBar {
    /// Bar out of 100 with the accent fill
    pub fn new(value: f64) -> Self {
        Self {
            value,
            max: 100.0,
            label: None,
            variant: ProgressVariant::default(),
        }
    }

    /// Bar whose fill follows the value's tier
    pub fn classified(value: f64, thresholds: &ThresholdSet) -> Self {
        let tier = MetricClassifier::new().classify(value, thresholds);
        Self::new(value).with_variant(tier.into())
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Filled share in `[0, 100]`
    pub fn percentage(&self) -> Result<f64> {
        MetricClassifier::new().percentage_of(self.value, self.max)
    }

    /// Rounded percentage text, e.g. `"92%"`
    pub fn display_value(&self) -> Result<String> {
        Ok(format!("{}%", self.percentage()?.round()))
    }
}

/// Change indicator shown under a metric card ("+12% vs last week")
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendBadge {
    /// Unsigned size of the change
    pub magnitude: f64,
    pub direction: TrendDirection,
}

impl TrendBadge {
    pub fn new(magnitude: f64, direction: TrendDirection) -> Self {
        Self {
            magnitude: magnitude.abs(),
            direction,
        }
    }

    /// Tier used to colour the badge
    pub fn tier(&self) -> Tier {
        match self.direction {
            TrendDirection::Up => Tier::Success,
            TrendDirection::Down => Tier::Error,
            TrendDirection::Unchanged => Tier::Neutral,
        }
    }

    pub fn label(&self) -> String {
        let sign = match self.direction {
            TrendDirection::Up => "+",
            TrendDirection::Down => "-",
            TrendDirection::Unchanged => "",
        };
        format!("{}{}%", sign, format_magnitude(self.magnitude, self.direction))
    }
}

impl From<&TrendComparison> for TrendBadge {
    fn from(trend: &TrendComparison) -> Self {
        Self::new(trend.delta, trend.direction)
    }
}

impl fmt::Display for TrendBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Local state of the speech recorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingState {
    pub is_recording: bool,
    pub has_recording: bool,
}

impl Default for RecordingState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingState {
    /// Idle, with the sample recording loaded
    pub fn new() -> Self {
        Self {
            is_recording: false,
            has_recording: true,
        }
    }

    /// Start or stop recording. `has_recording` is left as is.
    pub fn toggle(&mut self) {
        self.is_recording = !self.is_recording;
    }

    pub fn status(&self) -> Tier {
        if self.is_recording {
            Tier::Error
        } else if self.has_recording {
            Tier::Success
        } else {
            Tier::Neutral
        }
    }

    pub fn badge(&self) -> StatusBadge {
        let label = if self.is_recording {
            "Recording"
        } else if self.has_recording {
            "Ready to analyze"
        } else {
            "No recording"
        };
        StatusBadge::new(self.status(), label)
    }
}

/// Urgency of a coaching feedback item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPriority {
    High,
    Medium,
    Low,
}

impl FeedbackPriority {
    pub fn tier(&self) -> Tier {
        match self {
            Self::High => Tier::Error,
            Self::Medium | Self::Low => Tier::Warning,
        }
    }
}

/// Shortest exact text for a value: `82.0` prints as `82`, `79.95` as `79.95`.
///
/// Never rounds, so a label cannot land on the other side of a tier bound.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Trend magnitude truncated to one decimal. A non-zero change that
/// truncates to zero prints as `<0.1` so it never reads as flat.
fn format_magnitude(magnitude: f64, direction: TrendDirection) -> String {
    let truncated = (magnitude * 10.0).trunc() / 10.0;
    if truncated == 0.0 && direction != TrendDirection::Unchanged {
        "<0.1".to_string()
    } else {
        format!("{}", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare_trend, presets};

    #[test]
    fn test_status_badge_for_score() {
        let badge = StatusBadge::for_score(82.0, &presets::session_score());
        assert_eq!(badge.status, Tier::Success);
        assert_eq!(badge.label, "82%");

        let badge = StatusBadge::for_score(68.0, &presets::session_score());
        assert_eq!(badge.status, Tier::Warning);
    }

    #[test]
    fn test_status_badge_label_stays_below_bound() {
        let badge = StatusBadge::for_score(79.95, &presets::session_score());
        assert_eq!(badge.status, Tier::Info);
        assert_eq!(badge.label, "79.95%");
    }

    #[test]
    fn test_format_number_does_not_round() {
        assert_eq!(format_number(82.0), "82");
        assert_eq!(format_number(69.99), "69.99");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_progress_variant_mapping() {
        assert_eq!(ProgressVariant::from(Tier::Success), ProgressVariant::Success);
        assert_eq!(ProgressVariant::from(Tier::Info), ProgressVariant::Accent);
        assert_eq!(ProgressVariant::from(Tier::Warning), ProgressVariant::Warning);
        assert_eq!(ProgressVariant::from(Tier::Error), ProgressVariant::Warning);
        assert_eq!(ProgressVariant::from(Tier::Neutral), ProgressVariant::Default);
    }

    #[test]
    fn test_progress_bar_goal() {
        let bar = ProgressBar::classified(75.0, &presets::goal_progress())
            .with_label("Improve confidence in presentations");
        assert_eq!(bar.variant, ProgressVariant::Success);
        assert_eq!(bar.display_value().unwrap(), "75%");
    }

    #[test]
    fn test_progress_bar_clamps_and_rounds() {
        assert_eq!(ProgressBar::new(150.0).display_value().unwrap(), "100%");
        assert_eq!(
            ProgressBar::new(2.0).with_max(3.0).display_value().unwrap(),
            "67%"
        );
        assert!(ProgressBar::new(5.0).with_max(0.0).percentage().is_err());
    }

    #[test]
    fn test_trend_badge_labels() {
        let up = TrendBadge::from(&compare_trend(87.0, 75.0));
        assert_eq!(up.label(), "+12%");
        assert_eq!(up.tier(), Tier::Success);

        let down = TrendBadge::from(&compare_trend(70.0, 82.0));
        assert_eq!(down.to_string(), "-12%");
        assert_eq!(down.tier(), Tier::Error);

        let flat = TrendBadge::from(&compare_trend(5.0, 5.0));
        assert_eq!(flat.label(), "0%");
        assert_eq!(flat.tier(), Tier::Neutral);

        assert_eq!(TrendBadge::new(2.5, TrendDirection::Up).label(), "+2.5%");
    }

    #[test]
    fn test_trend_badge_truncates_magnitude() {
        assert_eq!(TrendBadge::new(40.3225806, TrendDirection::Up).label(), "+40.3%");
        assert_eq!(TrendBadge::new(0.99, TrendDirection::Down).label(), "-0.9%");

        let tiny = TrendBadge::from(&compare_trend(80.04, 80.0));
        assert_eq!(tiny.direction, TrendDirection::Up);
        assert_eq!(tiny.label(), "+<0.1%");
    }

    #[test]
    fn test_recording_toggle() {
        let mut state = RecordingState::new();
        assert!(state.has_recording);
        assert_eq!(state.badge(), StatusBadge::new(Tier::Success, "Ready to analyze"));

        state.toggle();
        assert!(state.is_recording);
        assert_eq!(state.status(), Tier::Error);
        assert_eq!(state.badge().label, "Recording");

        state.toggle();
        assert!(!state.is_recording);
        assert!(state.has_recording);
        assert_eq!(state.status(), Tier::Success);
    }

    #[test]
    fn test_recording_toggle_keeps_empty_state() {
        let mut state = RecordingState {
            is_recording: false,
            has_recording: false,
        };
        assert_eq!(state.status(), Tier::Neutral);
        assert_eq!(state.badge().label, "No recording");

        state.toggle();
        state.toggle();
        assert!(!state.has_recording);
        assert_eq!(state.badge().label, "No recording");
    }

    #[test]
    fn test_feedback_priority() {
        assert_eq!(FeedbackPriority::High.tier(), Tier::Error);
        assert_eq!(FeedbackPriority::Medium.tier(), Tier::Warning);
    }
}
