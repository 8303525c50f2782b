//! Error types for the Scheherazade library.
//!
//! This crate provides the foundation error types used throughout the
//! Scheherazade workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scheherazade_error::{ScheherazadeResult, JsonError};
//!
//! fn decode_body() -> ScheherazadeResult<String> {
//!     Err(JsonError::new("unexpected end of input"))?
//! }
//!
//! match decode_body() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod json;
mod story;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{ScheherazadeError, ScheherazadeErrorKind, ScheherazadeResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use story::{StoryError, StoryErrorKind};
