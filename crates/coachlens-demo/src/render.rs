//! Plain-text rendering of reports

use crate::report::{ProfileReport, SessionReport};
use coachlens_classifiers::{ProgressBar, StatusBadge, ThresholdRegistry, TrendBadge};
use std::fmt::{self, Write};

const BAR_WIDTH: usize = 20;

fn badge(badge: &StatusBadge) -> String {
    format!("{} [{}]", badge.label, badge.status)
}

fn bar(bar: &ProgressBar) -> String {
    let percentage = bar.percentage().unwrap_or(0.0);
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{:<36} {}{} {:>4} ({:?})",
        bar.label.as_deref().unwrap_or(""),
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        bar.display_value().unwrap_or_else(|_| "-".to_string()),
        bar.variant
    )
}

/// Render the analytics page
pub fn render_sessions(report: &SessionReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Recent Sessions")?;
    writeln!(
        out,
        "  {:<26} {:<14} {:>6}  {:<18} {:<18} {:<18} {}",
        "Session", "Date", "Time", "Confidence", "Speech", "Emotion", "Trend"
    )?;
    for row in &report.sessions {
        let trend = row
            .trend
            .map(|t| t.arrow().to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  {:<26} {:<14} {:>6}  {:<18} {:<18} {:<18} {}",
            row.title,
            row.date,
            row.duration,
            badge(&row.confidence),
            badge(&row.speech),
            badge(&row.emotion),
            trend
        )?;
    }

    if !report.growth.is_empty() {
        writeln!(out)?;
        writeln!(out, "Confidence Growth")?;
        for point in &report.growth {
            writeln!(out, "  {:<4} {:>5}  {}", point.month, point.score, point.tier)?;
        }
    }

    if !report.comparison.is_empty() {
        writeln!(out)?;
        writeln!(out, "This Period vs Last")?;
        for row in &report.comparison {
            writeln!(
                out,
                "  {:<12} {:>5} vs {:>5}  {} ({})",
                row.metric,
                row.trend.current,
                row.trend.previous,
                row.badge,
                row.badge.tier()
            )?;
        }
    }

    if let Some(overall) = &report.overall_improvement {
        writeln!(out)?;
        writeln!(out, "Improvement: {}", TrendBadge::from(overall))?;
    }

    Ok(out)
}

/// Render the profile page
pub fn render_profile(report: &ProfileReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let sections: [(&str, &[ProgressBar]); 2] = [
        ("Personality Traits", report.traits.as_slice()),
        ("Goals", report.goals.as_slice()),
    ];
    for (title, bars) in sections {
        writeln!(out, "{}", title)?;
        for b in bars {
            writeln!(out, "  {}", bar(b))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Languages")?;
    for lang in &report.languages {
        writeln!(out, "  {}  {}", bar(&lang.bar), badge(&lang.badge))?;
    }

    Ok(out)
}

/// Render the registered domains and their bounds
pub fn render_domains(registry: &ThresholdRegistry) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (name, set) in registry.domains() {
        let bounds: Vec<String> = set
            .bounds()
            .iter()
            .map(|b| format!(">= {} {}", b.min, b.tier))
            .collect();
        writeln!(out, "{:<20} {}", name, bounds.join(", "))?;
    }
    Ok(out)
}
