use clap::{Parser, Subcommand};
use coachlens_classifiers::presets;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coachlens")]
#[command(
    author,
    version,
    about = "Classify coaching metrics and render the dashboard in the terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Threshold configuration file (built-in presets are used if it is missing)
    #[arg(
        short,
        long,
        global = true,
        env = "COACHLENS_CONFIG",
        default_value = "./coachlens.yaml"
    )]
    pub config: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a value within a domain
    Classify {
        /// Metric value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Classification domain
        #[arg(short, long, default_value = presets::SESSION_SCORE)]
        domain: String,
    },

    /// Compare a current value with a previous one
    Trend {
        #[arg(allow_negative_numbers = true)]
        current: f64,

        #[arg(allow_negative_numbers = true)]
        previous: f64,

        /// Express the delta as a percentage of the previous value
        #[arg(short, long)]
        percent: bool,
    },

    /// Clamped percentage of a maximum
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Maximum value
        #[arg(short, long, default_value = "100")]
        max: f64,
    },

    /// Render the analytics and profile pages from sample data
    Report {
        /// Dashboard data file (bundled sample data if omitted)
        #[arg(short, long)]
        sessions: Option<PathBuf>,
    },

    /// List classification domains and their bounds
    Domains,
}
