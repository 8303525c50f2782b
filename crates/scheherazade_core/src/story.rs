//! Story session value types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One narrative beat plus its optional illustration.
///
/// `image_url` is a `data:image/png;base64,...` URI, or `None` when image
/// generation failed or was omitted. Parts are immutable once appended to a
/// session's ordered sequence; assembling that sequence (and the
/// concatenated full-story text fed back into continuation requests) is the
/// caller's responsibility.
///
/// # Examples
///
/// ```
/// use scheherazade_core::StoryPart;
///
/// let part = StoryPart::new("The lighthouse blinked twice.".to_string(), None);
/// assert!(part.image_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryPart {
    /// The narrative text of this beat
    text: String,
    /// Illustration for this beat as a data URI, when one was produced
    image_url: Option<String>,
}

impl StoryPart {
    /// Create a story part from its text and optional illustration.
    pub fn new(text: String, image_url: Option<String>) -> Self {
        Self { text, image_url }
    }
}

/// Session lifecycle states, owned by the caller.
///
/// This layer never transitions or inspects the status; the enum documents
/// the lifecycle context in which the four operations are invoked: analysis
/// runs inside `Analysing`, continuations inside `Extending`, any operation
/// failure moves the session to `Error`, and `Ready` follows a completed
/// operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppStatus {
    /// No session in progress
    Idle,
    /// Waiting for an optional narrative hint from the user
    HintEntry,
    /// First analysis call in flight
    Analysing,
    /// Last operation completed
    Ready,
    /// Last operation failed
    Error,
    /// Continuation call in flight
    Extending,
}
