//! Tone sets for steering narrative atmosphere.

use serde::{Deserialize, Serialize};

/// Raised when a tone set is constructed from an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("a tone set must contain at least one tone label")]
pub struct EmptyToneSet;

/// An ordered, non-empty list of tone labels blended into a single
/// instruction string.
///
/// Order is preserved and duplicates are kept: the blend is exactly the
/// labels the caller supplied, comma-joined.
///
/// # Examples
///
/// ```
/// use scheherazade_core::ToneSet;
///
/// let tones = ToneSet::new(vec!["gothic".to_string(), "whimsical".to_string()]).unwrap();
/// assert_eq!(tones.blended(), "gothic, whimsical");
///
/// assert!(ToneSet::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToneSet(Vec<String>);

impl ToneSet {
    /// Create a tone set from an ordered list of labels.
    pub fn new(tones: Vec<String>) -> Result<Self, EmptyToneSet> {
        if tones.is_empty() {
            Err(EmptyToneSet)
        } else {
            Ok(Self(tones))
        }
    }

    /// The individual labels, in caller order.
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Blend all labels into one comma-joined instruction string.
    pub fn blended(&self) -> String {
        self.0.join(", ")
    }
}

impl TryFrom<Vec<String>> for ToneSet {
    type Error = EmptyToneSet;

    fn try_from(tones: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(tones)
    }
}
