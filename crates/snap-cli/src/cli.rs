use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use snap_gen::GenerateOptions;

/// How the completion of a run is reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Top-level CLI parser for the `snapgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "snapgen",
    version,
    about = "Generate snapshot unit tests for a module's exported functions"
)]
pub struct Cli {
    /// Source file to generate tests for (e.g. src/math.ts)
    pub source: PathBuf,

    /// Test directory relative to the source file (overrides config)
    #[arg(long)]
    pub test_folder: Option<String>,

    /// Seed for argument synthesis (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format: human, json
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Extra TOML config file, merged above project and user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            dry_run: self.dry_run,
            seed: self.seed,
        }
    }
}
