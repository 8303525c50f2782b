//! Builder error types.

/// Raised when a derived builder rejects a partially-specified value.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", message, line, file)]
pub struct BuilderError {
    /// The underlying builder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BuilderError {
    /// Create a new BuilderError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheherazade_error::BuilderError;
    ///
    /// let err = BuilderError::new("field `messages` is not set");
    /// assert!(err.message.contains("messages"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
