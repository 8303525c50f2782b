//! Style sets for steering illustration rendering.

use serde::{Deserialize, Serialize};

/// Raised when a style set is constructed from an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("a style set must contain at least one style descriptor")]
pub struct EmptyStyleSet;

/// An ordered, non-empty list of independent style descriptors combined into
/// one directive.
///
/// Descriptors are joined with an explicit blend connective, preserving
/// order, without deduplication.
///
/// # Examples
///
/// ```
/// use scheherazade_core::StyleSet;
///
/// let styles =
///     StyleSet::new(vec!["oil painting".to_string(), "neon noir".to_string()]).unwrap();
/// assert_eq!(styles.blended(), "oil painting blended with neon noir");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSet(Vec<String>);

impl StyleSet {
    /// The connective joining consecutive style descriptors.
    pub const BLEND_CONNECTIVE: &'static str = " blended with ";

    /// Create a style set from an ordered list of descriptors.
    pub fn new(styles: Vec<String>) -> Result<Self, EmptyStyleSet> {
        if styles.is_empty() {
            Err(EmptyStyleSet)
        } else {
            Ok(Self(styles))
        }
    }

    /// The individual descriptors, in caller order.
    pub fn descriptors(&self) -> &[String] {
        &self.0
    }

    /// Combine all descriptors into one style directive.
    pub fn blended(&self) -> String {
        self.0.join(Self::BLEND_CONNECTIVE)
    }
}

impl TryFrom<Vec<String>> for StyleSet {
    type Error = EmptyStyleSet;

    fn try_from(styles: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(styles)
    }
}
