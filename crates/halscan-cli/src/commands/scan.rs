//! Scan command - read a product photo and extract a record.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use halscan_core::pipeline::{apply_lookup_fallback, needs_lookup_fallback};
use halscan_core::vision;
use halscan_core::{
    GeminiClient, HeuristicTextParser, LabeledResponseParser, OpenFoodFactsClient, ProductRecord,
    RecordExtractor, ScanConfig, TesseractOcr,
};

use crate::output::{self, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Product photo (jpg, png, webp)
    #[arg(required = true)]
    input: PathBuf,

    /// Text acquisition engine
    #[arg(short, long, value_enum, default_value = "vision")]
    engine: Engine,

    /// Gemini API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Skip the database fallback for missing ingredients
    #[arg(long)]
    no_lookup: bool,

    /// Print the raw recognized text before the record
    #[arg(long)]
    show_raw: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Engine {
    /// Hosted image-understanding model (labeled-response parsing)
    Vision,
    /// Local tesseract binary (heuristic free-text parsing)
    Tesseract,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning {}", args.input.display());

    let raw_text = acquire_text(&args, &config).await?;
    debug!("recognized {} characters", raw_text.len());

    if args.show_raw {
        eprintln!("{}", style("Raw recognized text:").dim());
        eprintln!("{}", style(raw_text.trim()).dim());
        eprintln!();
    }

    let mut record = match args.engine {
        Engine::Vision => LabeledResponseParser::new().extract(&raw_text),
        Engine::Tesseract => HeuristicTextParser::new().extract(&raw_text),
    };

    if !args.no_lookup {
        run_lookup_fallback(&mut record, &config).await?;
    }

    let content = output::format_record(&record, args.format)?;
    output::write_output(&content, args.output.as_deref())
}

/// Get raw text from the photo via the selected engine.
async fn acquire_text(args: &ScanArgs, config: &ScanConfig) -> anyhow::Result<String> {
    let pb = spinner();

    let result = match args.engine {
        Engine::Vision => {
            pb.set_message("Asking the vision model to read the label...");
            let client = GeminiClient::new(&config.vision, args.api_key.clone())?;
            let image = fs::read(&args.input)?;
            let mime_type = vision::mime_type_for(&args.input)?;
            client.analyze_image(&image, mime_type).await.map_err(Into::into)
        }
        Engine::Tesseract => {
            pb.set_message("Running tesseract...");
            let ocr = TesseractOcr::new(&config.ocr);
            ocr.recognize(&args.input).await.map_err(Into::into)
        }
    };

    pb.finish_and_clear();
    result
}

/// Fill missing ingredient data from the product database.
///
/// A lookup miss is not an error; the record keeps its extracted fields.
async fn run_lookup_fallback(record: &mut ProductRecord, config: &ScanConfig) -> anyhow::Result<()> {
    if !needs_lookup_fallback(record) {
        return Ok(());
    }

    if record.product_name.is_empty() {
        println!(
            "{} Ingredients not readable and no product name to search by.",
            style("⚠").yellow()
        );
        return Ok(());
    }

    println!(
        "{} Ingredients not visible in photo. Searching database for \"{}\"...",
        style("ℹ").blue(),
        record.product_name
    );

    let pb = spinner();
    pb.set_message("Querying OpenFoodFacts...");

    let client = OpenFoodFactsClient::new(&config.lookup)
        .map_err(|e| anyhow::anyhow!("failed to build lookup client: {e}"))?;
    let result = client.search(&record.product_name).await;

    pb.finish_and_clear();

    match result {
        Some(hit) => {
            apply_lookup_fallback(record, &hit);
            println!(
                "{} Found details in the OpenFoodFacts database.",
                style("✓").green()
            );
        }
        None => {
            println!(
                "{} No database match; keeping extracted fields.",
                style("ℹ").blue()
            );
        }
    }

    Ok(())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
