//! Google Gemini API client implementation.
//!
//! One REST client, three request shapes: schema-constrained JSON
//! generation, reference-image-plus-directive image generation, and speech
//! synthesis. The wire DTOs live in [`dto`], the request/response
//! conversions in [`conversion`], and the reqwest driver in [`client`].

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, InlineDataPart, Part, PrebuiltVoiceConfig, SpeechConfig,
    SystemInstruction, TextPart, VoiceConfig,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, scheherazade_error::GeminiError>;
