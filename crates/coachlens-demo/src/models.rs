use coachlens_core::TrendDirection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample data bundled with the demo
pub const BUNDLED_DASHBOARD: &str = include_str!("../fixtures/dashboard.yaml");

/// Everything the dashboard pages display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// Practice sessions, newest first
    pub sessions: Vec<SessionRecord>,

    /// Monthly average confidence
    #[serde(default)]
    pub confidence_history: Vec<MonthlyScore>,

    /// Current vs previous period per metric
    #[serde(default)]
    pub comparison: Vec<PeriodComparison>,

    #[serde(default)]
    pub profile: Option<ProfileData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub title: String,
    pub date: String,
    pub duration: String,
    pub confidence: f64,
    pub speech: f64,
    pub emotion: f64,
    /// Recorded trend, used when there is no older session to compare with
    #[serde(default)]
    pub trend: Option<TrendDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyScore {
    pub month: String,
    pub score: f64,
    #[serde(default)]
    pub sessions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub metric: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub traits: Vec<NamedScore>,
    #[serde(default)]
    pub languages: Vec<NamedScore>,
    #[serde(default)]
    pub goals: Vec<NamedScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedScore {
    pub name: String,
    pub value: f64,
}

impl DashboardData {
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a file, or the bundled sample data when no path is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_yaml(&content)
            }
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_yaml(BUNDLED_DASHBOARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixture_parses() {
        let data = DashboardData::bundled().unwrap();
        assert_eq!(data.sessions.len(), 5);
        assert_eq!(data.confidence_history.len(), 6);
        assert_eq!(data.comparison.len(), 4);

        let profile = data.profile.unwrap();
        assert_eq!(profile.traits.len(), 5);
        assert_eq!(profile.languages.len(), 3);
        assert_eq!(profile.goals.len(), 3);
        assert_eq!(data.sessions[0].duration, "8:32");
        assert_eq!(data.sessions[4].trend, Some(TrendDirection::Down));
    }

    #[test]
    fn test_minimal_document() {
        let data = DashboardData::from_yaml("sessions: []").unwrap();
        assert!(data.sessions.is_empty());
        assert!(data.profile.is_none());

        let data = DashboardData::from_yaml(
            r#"
sessions:
  - { title: A, date: x, duration: "1:00", confidence: 1, speech: 2, emotion: 3 }
"#,
        )
        .unwrap();
        assert_eq!(data.sessions[0].trend, None);
    }
}
