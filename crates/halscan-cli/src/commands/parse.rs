//! Parse command - extract a record from already-recognized text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::info;

use halscan_core::pipeline::{apply_lookup_fallback, needs_lookup_fallback};
use halscan_core::{
    HeuristicTextParser, LabeledResponseParser, OpenFoodFactsClient, RecordExtractor,
};

use crate::output::{self, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text file to parse, or "-" for stdin
    #[arg(required = true)]
    input: String,

    /// Parsing strategy
    #[arg(short, long, value_enum, default_value = "labeled")]
    strategy: Strategy,

    /// Fill missing ingredients from the product database
    #[arg(long)]
    lookup: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Fixed "Label: value" lines emitted by a model
    Labeled,
    /// Free-text OCR output with no imposed structure
    Heuristic,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let raw_text = if args.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.input)?
    };

    info!(
        "Parsing {} characters with the {:?} strategy",
        raw_text.len(),
        args.strategy
    );

    let mut record = match args.strategy {
        Strategy::Labeled => LabeledResponseParser::new().extract(&raw_text),
        Strategy::Heuristic => HeuristicTextParser::new().extract(&raw_text),
    };

    if args.lookup && needs_lookup_fallback(&record) {
        if record.product_name.is_empty() {
            println!(
                "{} Ingredients missing and no product name to search by.",
                style("⚠").yellow()
            );
        } else {
            let client = OpenFoodFactsClient::new(&config.lookup)
                .map_err(|e| anyhow::anyhow!("failed to build lookup client: {e}"))?;
            match client.search(&record.product_name).await {
                Some(hit) => {
                    apply_lookup_fallback(&mut record, &hit);
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
        }
    }

    let content = output::format_record(&record, args.format)?;
    output::write_output(&content, args.output.as_deref())
}
