//! Media source types for multimodal content.

use serde::{Deserialize, Serialize};

/// Raised when a data URI carries no comma-delimited payload.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("data URI has no comma-delimited base64 payload")]
pub struct DataUriError;

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use scheherazade_core::MediaSource;
///
/// let url = MediaSource::Url("https://example.com/image.png".to_string());
/// let base64 = MediaSource::Base64("iVBORw0KGgo...".to_string());
/// let binary = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// Extract the base64 payload of a data URI.
    ///
    /// Only the substring following the FIRST comma is taken; any further
    /// commas belong to the payload itself. The MIME portion of the URI is
    /// not inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheherazade_core::MediaSource;
    ///
    /// let source = MediaSource::from_data_uri("data:image/png;base64,iVBOR").unwrap();
    /// assert_eq!(source, MediaSource::Base64("iVBOR".to_string()));
    ///
    /// assert!(MediaSource::from_data_uri("not a data uri").is_err());
    /// ```
    pub fn from_data_uri(uri: &str) -> Result<Self, DataUriError> {
        match uri.split_once(',') {
            Some((_, payload)) => Ok(Self::Base64(payload.to_string())),
            None => Err(DataUriError),
        }
    }
}
