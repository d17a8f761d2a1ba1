// Entry point: parses the CLI and renders the aggregated summary figure.
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ibtraj::cli::Args;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .try_init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = ibtraj::run(&args) {
        eprintln!("summary plot failed: {err}");
        std::process::exit(1);
    }
}
