//! Local OCR via the tesseract binary.

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Runner for the external tesseract binary.
///
/// Output goes to stdout with the configured language set; the raw text is
/// handed to [`crate::extract::HeuristicTextParser`] as-is.
pub struct TesseractOcr {
    binary: String,
    languages: String,
}

impl TesseractOcr {
    /// Create a runner from configuration.
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            languages: config.languages.clone(),
        }
    }

    /// Run tesseract over an image file and return the recognized text.
    pub async fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        debug!("running {} on {}", self.binary, image.display());

        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .await
            .map_err(|source| OcrError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| OcrError::InvalidOutput)?;
        if text.trim().is_empty() {
            return Err(OcrError::NoText);
        }

        debug!("tesseract produced {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::OcrConfig;

    #[tokio::test]
    async fn test_missing_binary_reports_spawn_error() {
        let config = OcrConfig {
            binary: "tesseract-binary-that-does-not-exist".to_string(),
            languages: "eng".to_string(),
        };
        let ocr = TesseractOcr::new(&config);

        let result = ocr.recognize(Path::new("label.png")).await;
        assert!(matches!(result, Err(OcrError::Spawn { .. })));
    }
}
