//! Gemini REST API driver using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use scheherazade_core::{GenerateRequest, GenerateResponse};
use scheherazade_error::{GeminiError, GeminiErrorKind, ScheherazadeResult};
use scheherazade_interface::{Metadata, ModelMetadata, SpeechSynthesis, StoryDriver, Vision};
use std::env;
use tracing::{debug, error, instrument};

use super::GeminiResult;
use super::conversion;
use super::dto::GenerateContentResponse;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Client for the Gemini `generateContent` REST API.
///
/// The client holds no mutable state: a handle may be constructed per call
/// or shared freely across concurrent operations. Each `generate` call is
/// exactly one outbound request; there is no retry, rate limiting, or
/// cancellation in this layer.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable,
    /// once, at construction; the credential is held immutably for the
    /// client's lifetime.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scheherazade_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a new Gemini client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the default model used when a request carries no override.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Override the API base URL (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        let body = conversion::to_gemini_request(req)?;
        let url = self.request_url(model);

        debug!(
            model,
            contents = body.contents.len(),
            structured = body
                .generation_config
                .as_ref()
                .is_some_and(|c| c.response_schema.is_some()),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body_text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "failed to read response body: {e}"
            )))
        })?;

        debug!(response_len = body_text.len(), "Received generateContent response");

        let wire: GenerateContentResponse = serde_json::from_str(&body_text).map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string()))
        })?;

        conversion::from_gemini_response(wire)
    }
}

#[async_trait]
impl StoryDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model_name))]
    async fn generate(&self, req: &GenerateRequest) -> ScheherazadeResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Vision for GeminiClient {
    fn max_images_per_request(&self) -> usize {
        16
    }

    fn supported_image_formats(&self) -> &[&'static str] {
        &[
            "image/png",
            "image/jpeg",
            "image/webp",
            "image/heic",
            "image/heif",
        ]
    }

    fn max_image_size_bytes(&self) -> usize {
        20 * 1024 * 1024 // 20MB
    }
}

impl SpeechSynthesis for GeminiClient {
    fn prebuilt_voices(&self) -> &[&'static str] {
        &["Charon", "Kore", "Puck", "Fenrir", "Aoede"]
    }

    fn default_voice(&self) -> &'static str {
        "Charon"
    }
}

impl Metadata for GeminiClient {
    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "gemini",
            model: self.model_name.clone(),
            max_output_tokens: 8192,
            supports_vision: true,
            supports_json_mode: true,
            supports_image_output: true,
            supports_audio_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_joins_base_model_and_action() {
        let client = GeminiClient::with_api_key("test-key");
        assert_eq!(
            client.request_url("gemini-3-pro-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn base_url_override_is_respected() {
        let client =
            GeminiClient::with_api_key("test-key").with_base_url("http://localhost:8080/v1beta");
        assert_eq!(
            client.request_url("m"),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn default_model_can_be_overridden() {
        let client = GeminiClient::with_api_key("test-key").with_model("gemini-2.5-flash-image");
        assert_eq!(client.model_name(), "gemini-2.5-flash-image");
        assert_eq!(client.provider_name(), "gemini");
    }

    #[test]
    fn debug_output_does_not_leak_the_api_key() {
        let client = GeminiClient::with_api_key("super-secret");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("super-secret"));
    }
}
