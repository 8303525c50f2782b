//! Request and response types for model generation.

use crate::{Message, Modality, Output};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// One request maps to exactly one outbound model call; this layer performs
/// no retries, batching, or scheduling of its own.
///
/// # Examples
///
/// ```
/// use scheherazade_core::{GenerateRequest, Input, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::new(
///         Role::User,
///         vec![Input::Text("Hello!".to_string())],
///     )])
///     .model(Some("gemini-3-pro-preview".to_string()))
///     .max_tokens(Some(100u32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder, Getters)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Model identifier override; the driver's default model is used when `None`
    model: Option<String>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Strict output schema the response must satisfy.
    ///
    /// Presence implies an `application/json` response MIME type at the wire
    /// layer.
    response_schema: Option<serde_json::Value>,
    /// Modalities the model is asked to respond with
    response_modalities: Option<Vec<Modality>>,
    /// Prebuilt voice identity for speech synthesis
    voice: Option<String>,
    /// Image output knobs (aspect ratio, resolution tier)
    image_config: Option<ImageOutputConfig>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Request-time configuration for image generation.
///
/// The recognized values in this use case are `"16:9"` / `"1K"`, but the
/// knobs are configuration-agnostic: any string is forwarded to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageOutputConfig {
    /// Target aspect ratio, e.g. "16:9"
    #[builder(default = "\"16:9\".to_string()")]
    aspect_ratio: String,
    /// Target resolution tier, e.g. "1K"
    #[builder(default = "\"1K\".to_string()")]
    image_size: String,
}

impl ImageOutputConfig {
    /// Creates a new builder for `ImageOutputConfig`.
    pub fn builder() -> ImageOutputConfigBuilder {
        ImageOutputConfigBuilder::default()
    }
}

impl Default for ImageOutputConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: "16:9".to_string(),
            image_size: "1K".to_string(),
        }
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scheherazade_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::new(vec![Output::Text("A title".to_string())]);
/// assert_eq!(response.text().as_deref(), Some("A title"));
/// assert!(response.first_image().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Create a response from a list of outputs.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// The first text output, if any.
    pub fn text(&self) -> Option<String> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// The raw bytes of the first inline image output, if any.
    pub fn first_image(&self) -> Option<&[u8]> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { data, .. } => Some(data.as_slice()),
            _ => None,
        })
    }

    /// The raw bytes of the first inline audio output, if any.
    pub fn first_audio(&self) -> Option<&[u8]> {
        self.outputs.iter().find_map(|output| match output {
            Output::Audio { data, .. } => Some(data.as_slice()),
            _ => None,
        })
    }
}
