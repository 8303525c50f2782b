//! Response modality selection.

use serde::{Deserialize, Serialize};

/// Which modalities the model is asked to respond with.
///
/// Serialized in the upper-case form the Gemini wire format expects.
///
/// # Examples
///
/// ```
/// use scheherazade_core::Modality;
///
/// assert_eq!(serde_json::to_string(&Modality::Audio).unwrap(), "\"AUDIO\"");
/// assert_eq!(Modality::Image.as_str(), "IMAGE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    /// Plain text
    Text,
    /// Inline image data
    Image,
    /// Inline audio data
    Audio,
}

impl Modality {
    /// The wire-format name of this modality.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "TEXT",
            Modality::Image => "IMAGE",
            Modality::Audio => "AUDIO",
        }
    }
}
