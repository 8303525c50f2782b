//! Session-wide generation settings.

use derive_builder::Builder;
use derive_getters::Getters;
use scheherazade_core::ImageOutputConfig;
use serde::{Deserialize, Serialize};

/// How an operation responds when its model call fails.
///
/// The reference behavior degrades illustrations to an absent result while
/// letting narration failures surface; here that asymmetry is an explicit,
/// named per-operation choice rather than an accident.
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
pub enum FailurePolicy {
    /// Log the failure and return an absent result
    Degrade,
    /// Propagate the failure to the caller
    Propagate,
}

/// Read-only configuration for a story session.
///
/// Defaults reproduce the reference behavior: the model ids and voice the
/// hosted service expects, a 16:9 "1K" illustration target, best-effort
/// illustrations, and fail-open narration.
///
/// # Examples
///
/// ```
/// use scheherazade_story::{FailurePolicy, StorySettings};
///
/// let settings = StorySettings::builder()
///     .narration_failure(FailurePolicy::Degrade)
///     .build()
///     .unwrap();
/// assert_eq!(settings.voice(), "Charon");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), default)]
pub struct StorySettings {
    /// Model used for the two structured text operations
    story_model: String,
    /// Model used for illustration generation
    image_model: String,
    /// Speech-synthesis model used for narration
    narration_model: String,
    /// Prebuilt voice identity for narration
    voice: String,
    /// Illustration output knobs (aspect ratio, resolution tier)
    image_config: ImageOutputConfig,
    /// What to do when illustration generation fails
    illustration_failure: FailurePolicy,
    /// What to do when narration generation fails
    narration_failure: FailurePolicy,
}

impl StorySettings {
    /// Creates a new builder for `StorySettings`.
    pub fn builder() -> StorySettingsBuilder {
        StorySettingsBuilder::default()
    }
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            story_model: "gemini-3-pro-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            narration_model: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Charon".to_string(),
            image_config: ImageOutputConfig::default(),
            illustration_failure: FailurePolicy::Degrade,
            narration_failure: FailurePolicy::Propagate,
        }
    }
}
