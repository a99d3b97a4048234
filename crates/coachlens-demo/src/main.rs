use clap::Parser;
use coachlens_demo::cli::Cli;
use coachlens_demo::commands::{load_registry, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let registry = load_registry(&cli.config)?;
    let output = run(&cli.command, &registry, cli.json)?;
    print!("{}", output);

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "coachlens_demo=debug,coachlens_classifiers=debug"
    } else {
        "coachlens_demo=warn,coachlens_classifiers=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
