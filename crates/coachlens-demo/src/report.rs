//! Dashboard reports built from sample data
//!
//! Every score is classified through the registry, so a configuration file
//! that overrides a preset changes the report without code changes.

use crate::models::{DashboardData, NamedScore, ProfileData};
use coachlens_classifiers::presentation::format_number;
use coachlens_classifiers::{
    presets, ProgressBar, StatusBadge, ThresholdRegistry, TrendBadge, TrendComparison,
};
use coachlens_core::{DeltaMode, Tier, TrendDirection};
use serde::Serialize;
use tracing::debug;

/// One row of the session history table
#[derive(Debug, Clone, Serialize)]
pub struct SessionRow {
    pub title: String,
    pub date: String,
    pub duration: String,
    pub confidence: StatusBadge,
    pub speech: StatusBadge,
    pub emotion: StatusBadge,
    /// Arrow shown in the table
    pub trend: Option<TrendDirection>,
    /// Confidence change against the previous session, if there is one
    pub change: Option<TrendComparison>,
}

/// A month on the confidence growth chart
#[derive(Debug, Clone, Serialize)]
pub struct GrowthPoint {
    pub month: String,
    pub score: f64,
    pub tier: Tier,
}

/// Current vs previous period for one metric
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub metric: String,
    pub trend: TrendComparison,
    pub badge: TrendBadge,
}

/// The analytics page
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub sessions: Vec<SessionRow>,
    pub growth: Vec<GrowthPoint>,
    pub comparison: Vec<ComparisonRow>,
    /// First month against last month, in percent
    pub overall_improvement: Option<TrendComparison>,
}

impl SessionReport {
    pub fn build(data: &DashboardData, registry: &ThresholdRegistry) -> anyhow::Result<Self> {
        let score_badge = |value: f64| -> anyhow::Result<StatusBadge> {
            let tier = registry.classify(presets::SESSION_SCORE, value)?;
            Ok(StatusBadge::new(tier, format!("{}%", format_number(value))))
        };
        let classifier = registry.classifier();

        let mut sessions = Vec::with_capacity(data.sessions.len());
        for (i, session) in data.sessions.iter().enumerate() {
            // newest first: the chronologically previous session is the next entry
            let change = data
                .sessions
                .get(i + 1)
                .map(|older| classifier.compare_trend(session.confidence, older.confidence));
            let trend = change.map(|c| c.direction).or(session.trend);

            sessions.push(SessionRow {
                title: session.title.clone(),
                date: session.date.clone(),
                duration: session.duration.clone(),
                confidence: score_badge(session.confidence)?,
                speech: score_badge(session.speech)?,
                emotion: score_badge(session.emotion)?,
                trend,
                change,
            });
        }

        let growth = data
            .confidence_history
            .iter()
            .map(|point| {
                Ok(GrowthPoint {
                    month: point.month.clone(),
                    score: point.score,
                    tier: registry.classify(presets::SESSION_SCORE, point.score)?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let comparison = data
            .comparison
            .iter()
            .map(|row| {
                let trend = classifier.compare_trend(row.current, row.previous);
                ComparisonRow {
                    metric: row.metric.clone(),
                    badge: TrendBadge::from(&trend),
                    trend,
                }
            })
            .collect();

        let history = &data.confidence_history;
        let overall_improvement = match (history.first(), history.last()) {
            (Some(first), Some(last)) if history.len() > 1 => {
                if first.score == 0.0 || !first.score.is_finite() {
                    debug!(
                        "No baseline in {} ({}), skipping overall improvement",
                        first.month, first.score
                    );
                    None
                } else {
                    Some(classifier.compare_trend_with(
                        last.score,
                        first.score,
                        DeltaMode::Percentage,
                    )?)
                }
            }
            _ => None,
        };

        Ok(Self {
            sessions,
            growth,
            comparison,
            overall_improvement,
        })
    }
}

/// A language with its level badge and bar
#[derive(Debug, Clone, Serialize)]
pub struct LanguageRow {
    pub badge: StatusBadge,
    pub bar: ProgressBar,
}

/// The profile page
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileReport {
    pub traits: Vec<ProgressBar>,
    pub languages: Vec<LanguageRow>,
    pub goals: Vec<ProgressBar>,
}

impl ProfileReport {
    pub fn build(profile: &ProfileData, registry: &ThresholdRegistry) -> anyhow::Result<Self> {
        let traits = bars(&profile.traits, presets::PERSONALITY_TRAIT, registry)?;
        let goals = bars(&profile.goals, presets::GOAL_PROGRESS, registry)?;

        let languages = profile
            .languages
            .iter()
            .map(|lang| {
                let tier = registry.classify(presets::LANGUAGE_LEVEL, lang.value)?;
                Ok(LanguageRow {
                    badge: StatusBadge::new(tier, format!("{}%", format_number(lang.value))),
                    bar: ProgressBar::new(lang.value)
                        .with_label(lang.name.clone())
                        .with_variant(tier.into()),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            traits,
            languages,
            goals,
        })
    }
}

fn bars(
    scores: &[NamedScore],
    domain: &str,
    registry: &ThresholdRegistry,
) -> anyhow::Result<Vec<ProgressBar>> {
    scores
        .iter()
        .map(|score| {
            let tier = registry.classify(domain, score.value)?;
            Ok(ProgressBar::new(score.value)
                .with_label(score.name.clone())
                .with_variant(tier.into()))
        })
        .collect()
}
