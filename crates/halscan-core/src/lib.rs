//! Core library for halal product label scanning.
//!
//! This crate provides:
//! - Text-to-record extraction (labeled model responses and raw OCR text)
//! - A hosted vision client that reads product photos
//! - Local OCR via the tesseract binary
//! - OpenFoodFacts lookup fallback for missing ingredient data

pub mod error;
pub mod models;
pub mod extract;
pub mod vision;
pub mod ocr;
pub mod lookup;
pub mod pipeline;

pub use error::{ScanError, Result};
pub use models::record::ProductRecord;
pub use models::config::ScanConfig;
pub use extract::{RecordExtractor, LabeledResponseParser, HeuristicTextParser};
pub use vision::GeminiClient;
pub use ocr::TesseractOcr;
pub use lookup::{OpenFoodFactsClient, LookupResult};
pub use pipeline::{needs_lookup_fallback, apply_lookup_fallback};
