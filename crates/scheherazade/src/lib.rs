//! Scheherazade - serialized short stories from a single image.
//!
//! Scheherazade prompts a hosted multimodal generative model to turn one
//! uploaded image into an illustrated, narrated, serialized short story. It
//! is a thin client-side orchestration layer: prompt templating,
//! schema-constrained request construction, and response unwrapping around
//! four remote operations.
//!
//! # Operations
//!
//! - **Analyse** — read the uploaded image and write a titled story opening
//!   plus a visual prompt for the next illustration
//! - **Extend** — continue the story against the same image, producing a
//!   fresh visual prompt each time
//! - **Illustrate** — render a stylized illustration that preserves the
//!   characters of the original image (best-effort: a missing illustration
//!   never aborts the session)
//! - **Narrate** — synthesize cinematic narrated audio of the story text
//!
//! Callers own sequencing, session assembly, retry, and display; every
//! operation here is stateless and issues exactly one outbound call.
//!
//! # Quick Start
//!
//! ```no_run
//! use scheherazade::{GeminiClient, StoryGenerator, StoryPart, StyleSet, ToneSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = StoryGenerator::new(GeminiClient::new()?);
//!     let tones = ToneSet::new(vec!["gothic".to_string(), "whimsical".to_string()])?;
//!     let styles = StyleSet::new(vec!["oil painting".to_string()])?;
//!     let image = "data:image/png;base64,...";
//!
//!     let opening = generator
//!         .analyse_image_and_write_story(image, &tones, None)
//!         .await?;
//!     let illustration = generator
//!         .generate_story_image(image, opening.visual_prompt(), &styles)
//!         .await?;
//!
//!     let part = StoryPart::new(opening.story().clone(), illustration);
//!     println!("{}: {}", opening.title(), part.text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The workspace is organized as focused crates:
//!
//! - `scheherazade_error` - Error types
//! - `scheherazade_core` - Core data types (requests, tones, styles, parts)
//! - `scheherazade_interface` - The `StoryDriver` trait and capability markers
//! - `scheherazade_models` - The Gemini REST backend
//! - `scheherazade_story` - The four story operations
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use scheherazade_core::*;
pub use scheherazade_error::*;
pub use scheherazade_interface::*;
pub use scheherazade_models::*;
pub use scheherazade_story::*;
