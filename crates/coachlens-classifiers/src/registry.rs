//! Threshold registry initialization and management

use crate::{presets, ClassifierConfig, MetricClassifier, ThresholdSet};
use coachlens_core::{Error, Metric, Result, Tier};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, trace};

/// Registry mapping classification domains to their threshold sets
#[derive(Debug, Clone, Default)]
pub struct ThresholdRegistry {
    /// Classifier applied to every lookup
    classifier: MetricClassifier,

    /// Threshold sets by domain name
    sets: BTreeMap<String, ThresholdSet>,
}

impl ThresholdRegistry {
    /// Create an empty registry
    pub fn new(classifier: MetricClassifier) -> Self {
        Self {
            classifier,
            sets: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in dashboard presets
    pub fn with_presets() -> Self {
        let mut registry = Self::default();
        for (name, set) in presets::all() {
            registry.register(name, set);
        }
        registry
    }

    /// Build a registry from configuration.
    ///
    /// Every configured set is validated here; configured domains replace
    /// presets of the same name.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let mut registry = if config.include_presets {
            Self::with_presets()
        } else {
            Self::default()
        };
        registry.classifier = MetricClassifier::with_policy(config.below_floor);

        info!(
            "Initializing threshold registry with {} configured domains",
            config.thresholds.len()
        );

        for name in config.threshold_names() {
            let set = config.to_threshold_set(&name)?;
            if registry.register(&name, set).is_some() {
                debug!("Domain '{}' overrides a built-in preset", name);
            }
        }

        info!("Threshold registry ready with {} domains", registry.len());

        Ok(registry)
    }

    /// Register a set, returning the one it replaced
    pub fn register(&mut self, name: impl Into<String>, set: ThresholdSet) -> Option<ThresholdSet> {
        self.sets.insert(name.into(), set)
    }

    pub fn get(&self, domain: &str) -> Option<&ThresholdSet> {
        self.sets.get(domain)
    }

    /// Registered domains in name order
    pub fn domains(&self) -> impl Iterator<Item = (&str, &ThresholdSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Get the number of registered domains
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn classifier(&self) -> &MetricClassifier {
        &self.classifier
    }

    /// Classify a value within a named domain
    pub fn classify(&self, domain: &str, value: f64) -> Result<Tier> {
        let set = self.lookup(domain)?;
        let tier = self.classifier.try_classify(value, set)?;

        trace!(domain, value, tier = tier.as_str(), "classified metric");
        metrics::counter!(
            "coachlens_classifications_total",
            "domain" => domain.to_string(),
            "tier" => tier.as_str()
        )
        .increment(1);

        Ok(tier)
    }

    /// Classify a metric within a named domain
    pub fn classify_metric(&self, domain: &str, metric: &Metric) -> Result<Tier> {
        self.classify(domain, metric.value).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({}): {}", metric.name, domain, msg)),
            other => other,
        })
    }

    /// Classify a series within a named domain
    pub fn classify_series(&self, domain: &str, values: &[f64]) -> Result<Vec<Tier>> {
        values
            .iter()
            .map(|&value| self.classify(domain, value))
            .collect()
    }

    fn lookup(&self, domain: &str) -> Result<&ThresholdSet> {
        self.sets
            .get(domain)
            .ok_or_else(|| Error::config(format!("unknown classification domain '{}'", domain)))
    }
}

/// Load classifier configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    let path = path.as_ref();
    info!("Loading classifier configuration from {}", path.display());
    ClassifierConfig::from_file(path)
}

/// Build a registry from a YAML configuration file
pub fn init_registry_from_file(path: impl AsRef<Path>) -> Result<ThresholdRegistry> {
    let config = load_config(path)?;
    ThresholdRegistry::from_config(&config)
}
