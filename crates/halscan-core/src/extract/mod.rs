//! Text-to-record extraction strategies.
//!
//! Two parsers cover the two text sources: [`LabeledResponseParser`] for
//! model output in a fixed "Label: value" line pattern, and
//! [`HeuristicTextParser`] for raw OCR text with no imposed structure.

mod heuristic;
pub mod keywords;
mod labeled;

pub use heuristic::HeuristicTextParser;
pub use labeled::LabeledResponseParser;

use crate::models::record::ProductRecord;

/// Trait for converting raw recognized text into a product record.
///
/// Extraction never fails: fields without a matching signal keep their
/// defaults, and malformed lines are ignored.
pub trait RecordExtractor {
    /// Extract a record from raw text.
    fn extract(&self, text: &str) -> ProductRecord;
}

/// Everything after the line's first colon, trimmed.
///
/// Colon-less lines yield an empty string; callers treat that as "no value".
pub(crate) fn after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}
