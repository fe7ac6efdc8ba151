use anyhow::Context;
use clap::Parser;
use snap_gen::{Generator, LocalFileStore};
use snap_runtime::NodeRuntime;

mod bootstrap;
mod cli;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("snapgen error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let runtime = NodeRuntime::new(config.runtime.node_binary.clone());
    let generator = Generator::new(config.generator, runtime, LocalFileStore);

    let report = generator
        .generate(&cli.source, &cli.generate_options())
        .await
        .with_context(|| format!("failed to generate tests for {}", cli.source.display()))?;

    output::print_report(&report, cli.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SNAPGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
