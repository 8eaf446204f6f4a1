//! Error types for the halscan-core library.

use thiserror::Error;

/// Main error type for the halscan library.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Hosted vision model error.
    #[error("vision error: {0}")]
    Vision(#[from] VisionError),

    /// Local OCR error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Product database lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the hosted vision model call.
#[derive(Error, Debug)]
pub enum VisionError {
    /// No API key was supplied; the request is never attempted.
    #[error("no API key provided (set GEMINI_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model endpoint returned a non-success status.
    #[error("model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be interpreted.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// The input image format is not one the model accepts.
    #[error("unsupported image format: {0}")]
    UnsupportedImage(String),
}

/// Errors from the local tesseract invocation.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR binary could not be started.
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    /// The OCR binary exited with a failure status.
    #[error("tesseract exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    /// The OCR output was not valid UTF-8.
    #[error("OCR output was not valid UTF-8")]
    InvalidOutput,

    /// The OCR ran but recognized nothing.
    #[error("no text detected in image")]
    NoText,
}

/// Errors from the product database lookup.
///
/// These exist as a type for logging, but the pipeline degrades every one of
/// them to "no data found" instead of surfacing them.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The search endpoint returned a non-success status.
    #[error("search returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Parse(String),
}

/// Result type for the halscan library.
pub type Result<T> = std::result::Result<T, ScanError>;
