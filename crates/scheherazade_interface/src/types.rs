//! Core type definitions for the Scheherazade interface.

/// Information about model capabilities and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Provider name (e.g., "gemini")
    pub provider: &'static str,
    /// Model identifier (e.g., "gemini-3-pro-preview")
    pub model: String,
    /// Maximum output tokens per request
    pub max_output_tokens: usize,
    /// Supports image inputs (vision)
    pub supports_vision: bool,
    /// Supports structured JSON output mode
    pub supports_json_mode: bool,
    /// Supports inline image outputs
    pub supports_image_output: bool,
    /// Supports inline audio outputs (speech synthesis)
    pub supports_audio_output: bool,
}
