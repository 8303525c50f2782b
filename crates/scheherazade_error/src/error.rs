//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, JsonError, StoryError};

/// The foundation error enum for the Scheherazade workspace.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{ScheherazadeError, JsonError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: ScheherazadeError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScheherazadeErrorKind {
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Story generation error
    #[from(StoryError)]
    Story(StoryError),
}

/// Scheherazade error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{ScheherazadeResult, ConfigError};
///
/// fn might_fail() -> ScheherazadeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scheherazade Error: {}", _0)]
pub struct ScheherazadeError(Box<ScheherazadeErrorKind>);

impl ScheherazadeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScheherazadeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScheherazadeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScheherazadeErrorKind
impl<T> From<T> for ScheherazadeError
where
    T: Into<ScheherazadeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scheherazade operations.
///
/// # Examples
///
/// ```
/// use scheherazade_error::{ScheherazadeResult, JsonError};
///
/// fn decode() -> ScheherazadeResult<String> {
///     Err(JsonError::new("expected value"))?
/// }
/// ```
pub type ScheherazadeResult<T> = std::result::Result<T, ScheherazadeError>;
