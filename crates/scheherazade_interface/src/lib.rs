//! Trait definitions for Scheherazade model backends.
//!
//! The [`StoryDriver`] trait is the minimal interface every backend
//! implements; optional capability traits advertise what a backend can do
//! beyond plain text generation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Metadata, SpeechSynthesis, StoryDriver, Vision};
pub use types::ModelMetadata;
