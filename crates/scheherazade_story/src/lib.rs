//! Story generation operations for Scheherazade.
//!
//! This crate turns one uploaded image into an illustrated, narrated,
//! serialized short story by sequencing four independent operations against
//! any [`StoryDriver`](scheherazade_interface::StoryDriver) backend:
//!
//! 1. [`StoryGenerator::analyse_image_and_write_story`] — analyse the image
//!    and write a titled opening,
//! 2. [`StoryGenerator::extend_story`] — continue an existing story,
//! 3. [`StoryGenerator::generate_story_image`] — render a stylized
//!    illustration referencing the original image,
//! 4. [`StoryGenerator::generate_narration`] — synthesize narrated audio.
//!
//! The operations are independent; callers sequence them
//! (analyse → extend* → illustrate → narrate) to build a session. The
//! generator holds no mutable state between calls.
//!
//! # Example
//!
//! ```no_run
//! use scheherazade_core::ToneSet;
//! use scheherazade_models::GeminiClient;
//! use scheherazade_story::StoryGenerator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = StoryGenerator::new(GeminiClient::new()?);
//! let tones = ToneSet::new(vec!["gothic".to_string(), "whimsical".to_string()])?;
//!
//! let opening = generator
//!     .analyse_image_and_write_story("data:image/png;base64,...", &tones, None)
//!     .await?;
//! println!("{}: {}", opening.title(), opening.story());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
mod generator;
pub mod prompt;
pub mod schema;
mod settings;

pub use generator::{Continuation, OpeningScene, StoryGenerator};
pub use settings::{FailurePolicy, StorySettings, StorySettingsBuilder};
