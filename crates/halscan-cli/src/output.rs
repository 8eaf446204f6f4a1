//! Record output formatting.

use std::fs;
use std::path::Path;

use console::style;

use halscan_core::models::record::{COLUMNS, ProductRecord};

/// Supported output formats.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Key/value table for the terminal
    Table,
    /// JSON object
    Json,
    /// Single-row CSV spreadsheet
    Csv,
    /// Markdown document with a key/value table
    Markdown,
}

/// Render a record in the requested format.
pub fn format_record(record: &ProductRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(record)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Markdown => Ok(format_markdown(record)),
    }
}

/// Write formatted output to a file, or stdout when no path is given.
pub fn write_output(content: &str, output_path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn format_table(record: &ProductRecord) -> String {
    let mut output = String::new();

    for (name, value) in COLUMNS.iter().zip(record.values()) {
        let shown = if value.is_empty() { "-" } else { value.as_str() };
        output.push_str(&format!("{:<16} {}\n", format!("{}:", name), shown));
    }

    output
}

fn format_csv(record: &ProductRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    wtr.write_record(record.values())?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_markdown(record: &ProductRecord) -> String {
    let mut output = String::from("# Halal Verification Record\n\n");

    output.push_str("| Field | Value |\n");
    output.push_str("|-------|-------|\n");
    for (name, value) in COLUMNS.iter().zip(record.values()) {
        // Literal pipes would break the table layout.
        output.push_str(&format!("| {} | {} |\n", name, value.replace('|', "\\|")));
    }

    output
}
