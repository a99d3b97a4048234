//! Subcommand implementations
//!
//! Each command returns its output as a string so `main` only prints.

use crate::cli::Commands;
use crate::models::DashboardData;
use crate::render;
use crate::report::{ProfileReport, SessionReport};
use anyhow::Context;
use coachlens_classifiers::{init_registry_from_file, ThresholdRegistry, TrendBadge};
use coachlens_core::DeltaMode;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Load the registry from `path`, or fall back to the built-in presets
pub fn load_registry(path: &Path) -> anyhow::Result<ThresholdRegistry> {
    if path.exists() {
        let registry = init_registry_from_file(path)
            .with_context(|| format!("failed to load thresholds from {}", path.display()))?;
        info!("Loaded {} classification domains", registry.len());
        Ok(registry)
    } else {
        debug!(
            "No threshold config at {}, using built-in presets",
            path.display()
        );
        Ok(ThresholdRegistry::with_presets())
    }
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    domain: &'a str,
    value: f64,
    tier: coachlens_core::Tier,
}

#[derive(Serialize)]
struct PercentOutput {
    value: f64,
    max: f64,
    percentage: f64,
}

#[derive(Serialize)]
struct DashboardOutput {
    analytics: SessionReport,
    profile: Option<ProfileReport>,
}

/// Run one subcommand against a loaded registry
pub fn run(command: &Commands, registry: &ThresholdRegistry, json: bool) -> anyhow::Result<String> {
    let classifier = registry.classifier();

    match command {
        Commands::Classify { value, domain } => {
            let tier = registry.classify(domain, *value)?;
            if json {
                to_json(&ClassifyOutput {
                    domain: domain.as_str(),
                    value: *value,
                    tier,
                })
            } else {
                Ok(format!("{}\n", tier))
            }
        }

        Commands::Trend {
            current,
            previous,
            percent,
        } => {
            let mode = if *percent {
                DeltaMode::Percentage
            } else {
                DeltaMode::Absolute
            };
            let trend = classifier.compare_trend_with(*current, *previous, mode)?;
            if json {
                to_json(&trend)
            } else {
                let delta = if *percent {
                    TrendBadge::from(&trend).label()
                } else {
                    format!("{:+}", trend.delta)
                };
                Ok(format!("{} {} ({})\n", trend.direction.arrow(), trend.direction, delta))
            }
        }

        Commands::Percent { value, max } => {
            let percentage = classifier.percentage_of(*value, *max)?;
            if json {
                to_json(&PercentOutput {
                    value: *value,
                    max: *max,
                    percentage,
                })
            } else {
                Ok(format!("{}%\n", percentage))
            }
        }

        Commands::Report { sessions } => {
            let data = DashboardData::load(sessions.as_deref())?;
            let analytics = SessionReport::build(&data, registry)?;
            let profile = data
                .profile
                .as_ref()
                .map(|profile| ProfileReport::build(profile, registry))
                .transpose()?;

            if json {
                to_json(&DashboardOutput { analytics, profile })
            } else {
                let mut out = render::render_sessions(&analytics)?;
                if let Some(profile) = &profile {
                    out.push('\n');
                    out.push_str(&render::render_profile(profile)?);
                }
                Ok(out)
            }
        }

        Commands::Domains => {
            if json {
                let domains: std::collections::BTreeMap<_, _> = registry.domains().collect();
                to_json(&domains)
            } else {
                Ok(render::render_domains(registry)?)
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn registry() -> ThresholdRegistry {
        ThresholdRegistry::with_presets()
    }

    #[test]
    fn test_classify_command() {
        let cmd = Commands::Classify {
            value: 79.9,
            domain: "session_score".to_string(),
        };
        assert_eq!(run(&cmd, &registry(), false).unwrap(), "info\n");

        let json = run(&cmd, &registry(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["tier"], "info");
    }

    #[test]
    fn test_classify_unknown_domain() {
        let cmd = Commands::Classify {
            value: 50.0,
            domain: "posture".to_string(),
        };
        assert!(run(&cmd, &registry(), false).is_err());
    }

    #[test]
    fn test_trend_command() {
        let cmd = Commands::Trend {
            current: 70.0,
            previous: 82.0,
            percent: false,
        };
        assert_eq!(run(&cmd, &registry(), false).unwrap(), "↓ down (-12)\n");

        let cmd = Commands::Trend {
            current: 50.0,
            previous: 40.0,
            percent: true,
        };
        assert_eq!(run(&cmd, &registry(), false).unwrap(), "↑ up (+25%)\n");

        let cmd = Commands::Trend {
            current: 5.0,
            previous: 0.0,
            percent: true,
        };
        assert!(run(&cmd, &registry(), false).is_err());
    }

    #[test]
    fn test_percent_command() {
        let cmd = Commands::Percent {
            value: 150.0,
            max: 100.0,
        };
        assert_eq!(run(&cmd, &registry(), false).unwrap(), "100%\n");

        let cmd = Commands::Percent {
            value: 1.0,
            max: 0.0,
        };
        assert!(run(&cmd, &registry(), false).is_err());
    }

    #[test]
    fn test_report_command_json() {
        let cmd = Commands::Report { sessions: None };
        let json = run(&cmd, &registry(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["analytics"]["sessions"][0]["confidence"]["status"], "success");
        assert_eq!(parsed["profile"]["goals"][2]["variant"], "warning");
    }

    #[test]
    fn test_domains_command_json() {
        let json = run(&Commands::Domains, &registry(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["goal_progress"]["bounds"][0]["min"], 70.0);
    }

    #[test]
    fn test_load_registry_missing_file_uses_presets() {
        let dir = tempfile::tempdir().unwrap();
        let registry = load_registry(&dir.path().join("coachlens.yaml")).unwrap();
        assert_eq!(registry.len(), coachlens_classifiers::presets::NAMES.len());
    }

    #[test]
    fn test_load_registry_example_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/thresholds.yaml");
        let registry = load_registry(&path).unwrap();
        assert!(registry.get("posture").is_some());
        assert_eq!(
            registry.classify("filler_words", 12.0).unwrap(),
            coachlens_core::Tier::Warning
        );
    }

    #[test]
    fn test_load_registry_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds:\n  bad:\n    bounds: []").unwrap();
        let err = load_registry(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to load thresholds"));
    }
}
