//! Trait definitions for model backends and their capabilities.

use crate::ModelMetadata;
use async_trait::async_trait;
use scheherazade_core::{GenerateRequest, GenerateResponse};
use scheherazade_error::ScheherazadeResult;

/// Core trait that all model backends must implement.
///
/// This provides the minimal interface for a single multimodal generation
/// call. Backends hold no mutable state between calls; concurrent
/// invocations are safe from this layer's perspective.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    ///
    /// Each invocation is exactly one outbound call: no retries, no
    /// backoff, no local timeout beyond the transport's own lifecycle.
    async fn generate(&self, req: &GenerateRequest) -> ScheherazadeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request carries no override.
    fn model_name(&self) -> &str;
}

/// Trait for backends that accept image inputs (multimodal vision).
pub trait Vision: StoryDriver {
    /// Maximum number of images per request.
    fn max_images_per_request(&self) -> usize {
        1
    }

    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp"]
    }

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        5 * 1024 * 1024 // 5MB default
    }
}

/// Trait for backends that can synthesize speech from text.
pub trait SpeechSynthesis: StoryDriver {
    /// Prebuilt voice identities the backend accepts.
    fn prebuilt_voices(&self) -> &[&'static str];

    /// Voice used when a request carries no override.
    fn default_voice(&self) -> &'static str;

    /// Audio output formats the backend may return (MIME types).
    fn supported_audio_output_formats(&self) -> &[&'static str] {
        &["audio/pcm", "audio/wav"]
    }
}

/// Trait for querying model metadata and capabilities.
pub trait Metadata: StoryDriver {
    /// Get comprehensive metadata about this backend's default model.
    fn metadata(&self) -> ModelMetadata;

    /// Maximum tokens in output.
    fn max_output_tokens(&self) -> usize {
        self.metadata().max_output_tokens
    }
}
