//! Application entry point — batch Korean sentence correction.
//!
//! # Startup sequence
//!
//! 1. Initialise logging and load `.env`.
//! 2. Load [`AppConfig`] (defaults when no settings file exists) and apply
//!    command-line overrides.
//! 3. Read and validate the input table.
//! 4. Resolve the API key.
//! 5. Run the [`CorrectionPipeline`] with a progress bar.
//! 6. Write the output table.
//!
//! Steps 2–4 are fatal on error, and all of them happen before the first
//! remote call, so a failed start never leaves a partial output file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ko_corrector::{
    config::{ApiKey, AppConfig},
    dataset,
    llm::ApiClient,
    pipeline::CorrectionPipeline,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "ko-corrector")]
#[command(about = "Generate corrected Korean sentences with a specialist + reviewer LLM pass")]
struct Cli {
    /// Input CSV path containing an err_sentence column [default: data/train_dataset.csv]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output CSV path [default: submission.csv]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Model name [default: solar-pro2]
    #[arg(long)]
    model: Option<String>,

    /// Settings file (TOML); defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows corrected concurrently [default: 1]
    #[arg(long)]
    concurrency: Option<usize>,
}

impl Cli {
    /// Overlay command-line values on top of the loaded settings.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(input) = &self.input {
            config.run.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.run.output = output.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.run.concurrency = concurrency;
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Logging + .env
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("loaded environment from {}", path.display());
    }

    // 2. Configuration
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => AppConfig::load().context("failed to load settings")?,
    };
    cli.apply(&mut config);

    // 3. Input table
    let rows = dataset::read_path(&config.run.input)
        .with_context(|| format!("failed to read {}", config.run.input.display()))?;

    // 4. Credential
    let api_key = ApiKey::from_env(&config.llm.api_key_env)?;

    // 5. Pipeline
    let client = ApiClient::from_config(&config.llm, api_key);
    log::info!("endpoint: {}", client.endpoint());
    let pipeline = CorrectionPipeline::new(client, config.llm.model.as_str())
        .with_temperature(config.llm.temperature)
        .with_concurrency(config.run.concurrency);

    println!("Model: {}", pipeline.model());
    println!("Output: {}", config.run.output.display());

    let progress = ProgressBar::new(rows.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    progress.set_message("Generating (2-pass)");

    let report = pipeline.run(&rows, &progress).await;
    progress.finish_and_clear();

    if report.failed_rows() > 0 {
        log::warn!(
            "{} of {} rows fell back (specialist output: {}, original text: {})",
            report.failed_rows(),
            report.rows.len(),
            report.specialist_fallbacks,
            report.original_fallbacks
        );
    } else {
        log::info!("all {} rows reviewed", report.reviewed);
    }

    // 6. Output table
    dataset::write_path(&config.run.output, &report.rows)
        .with_context(|| format!("failed to write {}", config.run.output.display()))?;

    println!(
        "Wrote {} rows to {}",
        report.rows.len(),
        config.run.output.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
