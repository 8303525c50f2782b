//! Story generation error types.

/// Story generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Input image was not a well-formed data URI
    #[display("Invalid data URI: {}", _0)]
    InvalidDataUri(String),
    /// Tone list was empty
    #[display("A story session requires at least one tone")]
    EmptyTones,
    /// Style list was empty
    #[display("An illustration requires at least one style descriptor")]
    EmptyStyles,
    /// Structured response decoded cleanly but lacks a required key.
    ///
    /// This is the "incomplete result" condition: the model returned a
    /// parseable (possibly empty) object that does not satisfy the declared
    /// response schema.
    #[display("Incomplete structured response: missing required key '{}'", missing)]
    IncompleteResponse {
        /// The required key absent from the decoded record
        missing: String,
    },
}

/// Story generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::IncompleteResponse {
///     missing: "title".to_string(),
/// });
/// assert!(format!("{}", err).contains("title"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The kind of error that occurred
    pub kind: StoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
