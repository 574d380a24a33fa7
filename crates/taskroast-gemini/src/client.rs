//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use tracing::debug;

use crate::error::GeminiError;
use crate::types::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

/// Default Gemini API endpoint.
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Fixed sampling temperature. Roasts want heat, not determinism.
const TEMPERATURE: f32 = 0.9;

/// Fixed output cap per roast.
const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Bound on a single generation call, so one slow upstream request cannot
/// stall a whole batch.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent via the `x-goog-api-key` header.
    pub api_key: String,

    /// Model identifier.
    pub model: String,

    /// Base URL override; tests point this at a stub server.
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Configuration with the default model, endpoint, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builder method to override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Client for Gemini text generation.
pub struct GeminiClient {
    inner: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client. Fails only if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { inner, config })
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_API_URL)
            .trim_end_matches('/')
    }

    /// Generate roast text for one target.
    ///
    /// The persona rides as a system-style instruction and the material as
    /// the user-turn content, both inside a single user turn. Sampling is
    /// fixed; callers cannot vary it per request.
    pub async fn generate(&self, persona: &str, material: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url(),
            self.config.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: format!("System Instruction: {persona}"),
                    },
                    Part {
                        text: format!("Data to Roast: {material}"),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!(model = %self.config.model, "calling generateContent");

        let response = self
            .inner
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });

            return Err(match status.as_u16() {
                401 | 403 => GeminiError::Auth {
                    status: status.as_u16(),
                    message,
                },
                429 => GeminiError::RateLimited(message),
                code => GeminiError::Api {
                    status: code,
                    message,
                },
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.text().ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: "System Instruction: You are a Chaos Entity.".to_string(),
                    },
                    Part {
                        text: "Data to Roast: TARGET IDENTITY: ...".to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert!(json["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("System Instruction: "));
        assert!(json["contents"][0]["parts"][1]["text"]
            .as_str()
            .unwrap()
            .starts_with("Data to Roast: "));
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert_eq!(temperature as f32, 0.9);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[test]
    fn default_config_uses_fixed_model_and_timeout() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.base_url.is_none());
    }
}
