//! Model provider integration for Scheherazade.
//!
//! This crate implements the [`StoryDriver`](scheherazade_interface::StoryDriver)
//! trait against the Google Gemini `generateContent` REST API, speaking the
//! wire format directly: inline image inputs, schema-constrained JSON
//! responses, inline image outputs, and speech synthesis with a prebuilt
//! voice.
//!
//! # Example
//!
//! ```no_run
//! use scheherazade_core::{GenerateRequest, Input, Message, Role};
//! use scheherazade_interface::StoryDriver;
//! use scheherazade_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let message = Message::new(Role::User, vec![Input::Text("Hello".to_string())]);
//! let request = GenerateRequest::builder()
//!     .messages(vec![message])
//!     .build()
//!     .unwrap();
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, Content, GeminiClient, GeminiResult, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, ImageConfig, InlineData, InlineDataPart, Part,
    PrebuiltVoiceConfig, SpeechConfig, SystemInstruction, TextPart, VoiceConfig,
};
