//! Built-in threshold sets used across the coaching dashboard
//!
//! | Domain | Success | Info | Warning |
//! |---|---|---|---|
//! | `session_score` | >= 80 | >= 70 | below |
//! | `personality_trait` | >= 80 | >= 60 | below |
//! | `language_level` | >= 80 | >= 50 | below |
//! | `goal_progress` | >= 70 | >= 50 | below |

use crate::threshold::ThresholdSet;

/// Confidence, speech and emotion scores of a session
pub const SESSION_SCORE: &str = "session_score";
/// Big-five personality trait bars
pub const PERSONALITY_TRAIT: &str = "personality_trait";
/// Spoken language proficiency
pub const LANGUAGE_LEVEL: &str = "language_level";
/// Progress towards a coaching goal
pub const GOAL_PROGRESS: &str = "goal_progress";

/// Names of all built-in domains
pub const NAMES: [&str; 4] = [SESSION_SCORE, PERSONALITY_TRAIT, LANGUAGE_LEVEL, GOAL_PROGRESS];

pub fn session_score() -> ThresholdSet {
    ThresholdSet::preset(80.0, 70.0)
}

pub fn personality_trait() -> ThresholdSet {
    ThresholdSet::preset(80.0, 60.0)
}

pub fn language_level() -> ThresholdSet {
    ThresholdSet::preset(80.0, 50.0)
}

pub fn goal_progress() -> ThresholdSet {
    ThresholdSet::preset(70.0, 50.0)
}

/// Look up a built-in set by domain name
pub fn by_name(name: &str) -> Option<ThresholdSet> {
    match name {
        SESSION_SCORE => Some(session_score()),
        PERSONALITY_TRAIT => Some(personality_trait()),
        LANGUAGE_LEVEL => Some(language_level()),
        GOAL_PROGRESS => Some(goal_progress()),
        _ => None,
    }
}

/// All built-in sets with their domain names
pub fn all() -> Vec<(&'static str, ThresholdSet)> {
    NAMES
        .iter()
        .filter_map(|name| by_name(name).map(|set| (*name, set)))
        .collect()
}
