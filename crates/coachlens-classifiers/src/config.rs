//! Configuration for threshold sets

use crate::classifier::BelowFloorPolicy;
use crate::threshold::{ThresholdBound, ThresholdSet};
use coachlens_core::{Error, Result, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for all classification domains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Handling of values below every bound
    #[serde(default)]
    pub below_floor: BelowFloorPolicy,

    /// Seed the registry with the built-in dashboard presets
    #[serde(default = "default_true")]
    pub include_presets: bool,

    /// Threshold set specifications by domain name
    #[serde(default)]
    pub thresholds: BTreeMap<String, ThresholdSetSpec>,
}

/// Threshold set specification (for YAML/config files)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdSetSpec {
    /// What this domain measures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lowest value of the domain; the last bound must reach it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_min: Option<f64>,

    /// Bounds, highest first
    pub bounds: Vec<BoundSpec>,
}

/// One `(min, tier)` step
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundSpec {
    pub min: f64,
    pub tier: Tier,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            below_floor: BelowFloorPolicy::default(),
            include_presets: true,
            thresholds: BTreeMap::new(),
        }
    }
}

impl ClassifierConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Convert a named spec into a validated threshold set
    pub fn to_threshold_set(&self, name: &str) -> Result<ThresholdSet> {
        let spec = self
            .thresholds
            .get(name)
            .ok_or_else(|| Error::config(format!("threshold set '{}' not found", name)))?;

        spec.to_threshold_set()
            .map_err(|e| Error::config(format!("threshold set '{}': {}", name, e)))
    }

    /// Get all configured domain names
    pub fn threshold_names(&self) -> Vec<String> {
        self.thresholds.keys().cloned().collect()
    }

    /// Check every configured set, failing on the first invalid one
    pub fn validate(&self) -> Result<()> {
        for name in self.thresholds.keys() {
            self.to_threshold_set(name)?;
        }
        Ok(())
    }
}

impl ThresholdSetSpec {
    /// Convert to a validated runtime set
    pub fn to_threshold_set(&self) -> Result<ThresholdSet> {
        let bounds = self
            .bounds
            .iter()
            .map(|b| ThresholdBound::new(b.min, b.tier));

        ThresholdSet::with_floor(
            bounds,
            self.domain_min.unwrap_or(ThresholdSet::DEFAULT_DOMAIN_MIN),
        )
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_config_yaml() {
        let yaml = r#"
below_floor: reject
include_presets: false
thresholds:
  posture:
    description: Posture score bar
    bounds:
      - { min: 85, tier: success }
      - { min: 65, tier: info }
      - { min: 0, tier: warning }

  filler_words:
    domain_min: 0
    bounds:
      - { min: 20, tier: error }
      - { min: 10, tier: warning }
      - { min: 0, tier: success }
"#;

        let config = ClassifierConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.thresholds.len(), 2);
        assert_eq!(config.below_floor, BelowFloorPolicy::Reject);
        assert!(!config.include_presets);
        assert_eq!(config.threshold_names(), vec!["filler_words", "posture"]);
        assert!(config.validate().is_ok());

        let posture = config.to_threshold_set("posture").unwrap();
        assert_eq!(posture.lookup(85.0), Some(Tier::Success));
        assert_eq!(posture.lookup(70.0), Some(Tier::Info));
    }

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::from_yaml("{}").unwrap();
        assert_eq!(config.below_floor, BelowFloorPolicy::Clamp);
        assert!(config.include_presets);
        assert!(config.thresholds.is_empty());
    }

    #[test]
    fn test_accent_alias_in_yaml() {
        let yaml = r#"
thresholds:
  goal:
    bounds:
      - { min: 70, tier: success }
      - { min: 50, tier: accent }
      - { min: 0, tier: warning }
"#;
        let config = ClassifierConfig::from_yaml(yaml).unwrap();
        let set = config.to_threshold_set("goal").unwrap();
        assert_eq!(set.lookup(60.0), Some(Tier::Info));
    }

    #[test]
    fn test_unsorted_spec_is_config_error() {
        let yaml = r#"
thresholds:
  broken:
    bounds:
      - { min: 50, tier: info }
      - { min: 80, tier: success }
      - { min: 0, tier: warning }
"#;
        let config = ClassifierConfig::from_yaml(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unknown_name() {
        let config = ClassifierConfig::default();
        assert!(config.to_threshold_set("missing").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClassifierConfig::from_yaml("thresholds: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
