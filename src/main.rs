//! ENA pipeline entry point: CLI wiring and config-driven run.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ena_pipeline::config::PipelineConfig;
use ena_pipeline::report::PipelineSummary;
use ena_pipeline::runner::{run_pipeline, write_outputs};

/// Converts daily river flows into ENA (Energia Natural Afluente) following
/// the ONS accounting rules, optionally aggregated by station group.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Load the run from a TOML config file.
    #[arg(long, env = "ENA_CONFIG", conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Use a built-in preset (minimal, ons).
    #[arg(long)]
    preset: Option<String>,

    /// Flow CSV, overriding the config.
    #[arg(long)]
    flow: Option<PathBuf>,

    /// Productivity CSV, overriding the config.
    #[arg(long)]
    productivity: Option<PathBuf>,

    /// Belo Monte hydrogram CSV, overriding the config.
    #[arg(long)]
    hydrogram: Option<PathBuf>,

    /// Grouping CSV, overriding the config.
    #[arg(long)]
    grouping: Option<PathBuf>,

    /// Label column of the grouping CSV.
    #[arg(long)]
    grouping_column: Option<String>,

    /// Write the per-station ENA table here.
    #[arg(long)]
    ena_out: Option<PathBuf>,

    /// Write the grouped ENA table here.
    #[arg(long)]
    grouped_out: Option<PathBuf>,
}

impl Args {
    /// Loads the base config: `--config` first, then `--preset`, then `minimal`.
    fn base_config(&self) -> Result<PipelineConfig, ena_pipeline::config::ConfigError> {
        if let Some(path) = &self.config {
            PipelineConfig::from_toml_file(path)
        } else if let Some(name) = &self.preset {
            PipelineConfig::from_preset(name)
        } else {
            Ok(PipelineConfig::minimal())
        }
    }

    fn apply_overrides(self, config: &mut PipelineConfig) {
        let inputs = &mut config.inputs;
        if let Some(path) = self.flow {
            inputs.flow = path;
        }
        if let Some(path) = self.productivity {
            inputs.productivity = path;
        }
        if self.hydrogram.is_some() {
            inputs.hydrogram = self.hydrogram;
        }
        if self.grouping.is_some() {
            inputs.grouping = self.grouping;
        }
        if self.grouping_column.is_some() {
            inputs.grouping_column = self.grouping_column;
        }
        if self.ena_out.is_some() {
            config.output.ena = self.ena_out;
        }
        if self.grouped_out.is_some() {
            config.output.grouped = self.grouped_out;
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.base_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    args.apply_overrides(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    info!("ena-pipeline v{}", env!("CARGO_PKG_VERSION"));
    let output = match run_pipeline(&config) {
        Ok(output) => output,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    println!("{}", PipelineSummary::from_output(&output));

    if let Err(e) = write_outputs(&config.output, &output) {
        eprintln!("error: failed to write CSV: {e}");
        process::exit(1);
    }
}
