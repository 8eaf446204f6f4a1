//! Hosted vision model client (Gemini generateContent API).
//!
//! The model is asked to read the product photo and answer in a fixed
//! labeled-line pattern, which [`crate::extract::LabeledResponseParser`]
//! then turns into a record.

use std::path::Path;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VisionError;
use crate::models::config::VisionConfig;

/// Instruction given to the model. The answer format mirrors the label set
/// the labeled-response parser understands.
pub const AUDIT_PROMPT: &str = "\
Analyze this product image for a Halal verification database.
Extract the following details into a strict pattern:
Product Name: [Name]
Ingredients: [List ingredients if visible, otherwise write 'Not Visible']
Manufacturer: [Company Name]
Country of Origin: [Country Name, look for 'Made in' or addresses]
Halal Status: [Yes if 'Halal' logo/text is found, otherwise 'No']

If the text is cut off or blurry, just infer what you can.";

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new client.
    ///
    /// The key is taken from the argument or the `GEMINI_API_KEY`
    /// environment variable; without one, no request is ever attempted.
    pub fn new(config: &VisionConfig, api_key: Option<String>) -> Result<Self, VisionError> {
        let api_key = api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.is_empty())
            .ok_or(VisionError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
        })
    }

    /// Ask the model to read the label; returns its labeled-line response.
    ///
    /// A single request, no retry: any HTTP failure or unusable body is
    /// surfaced as a [`VisionError`].
    pub async fn analyze_image(&self, image: &[u8], mime_type: &str) -> Result<String, VisionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: Some(AUDIT_PROMPT.to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image),
                        }),
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(VisionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(VisionError::InvalidResponse(
                "model returned no text".to_string(),
            ));
        }

        debug!("model returned {} characters", text.len());
        Ok(text)
    }
}

/// Guess the request mime type from an image file extension.
pub fn mime_type_for(path: &Path) -> Result<&'static str, VisionError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        other => Err(VisionError::UnsupportedImage(other.to_string())),
    }
}
