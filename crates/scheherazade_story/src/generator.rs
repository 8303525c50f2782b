//! The story generation client.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use derive_getters::Getters;
use scheherazade_core::{
    GenerateRequest, Input, MediaSource, Message, Modality, Role, StyleSet, ToneSet,
};
use scheherazade_error::{BuilderError, ScheherazadeResult, StoryError, StoryErrorKind};
use scheherazade_interface::StoryDriver;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::settings::{FailurePolicy, StorySettings};
use crate::{decode, prompt, schema};

/// MIME type asserted for every forwarded reference image, regardless of
/// the data URI's own declaration.
const IMAGE_MIME: &str = "image/png";

/// A titled story opening with its companion visual prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpeningScene {
    /// The opening paragraph
    story: String,
    /// Short evocative title (at most five words)
    title: String,
    /// Description of the next scene for the illustration operation
    visual_prompt: String,
}

/// One continuation beat with its companion visual prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Continuation {
    /// The next narrative paragraph
    next_part: String,
    /// Description of the next scene for the illustration operation
    visual_prompt: String,
}

/// Generates illustrated, narrated serial stories through a model backend.
///
/// The generator is stateless between calls: it owns only the driver and a
/// read-only [`StorySettings`], so a handle may be shared freely across
/// concurrent operations. Sequencing (analyse → extend* → illustrate →
/// narrate) and session assembly are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct StoryGenerator<D: StoryDriver> {
    driver: D,
    settings: StorySettings,
}

impl<D: StoryDriver> StoryGenerator<D> {
    /// Create a generator with the reference settings.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            settings: StorySettings::default(),
        }
    }

    /// Create a generator with explicit settings.
    pub fn with_settings(driver: D, settings: StorySettings) -> Self {
        Self { driver, settings }
    }

    /// The active settings.
    pub fn settings(&self) -> &StorySettings {
        &self.settings
    }

    /// Analyse an uploaded image and write a titled story opening.
    ///
    /// `image` is a data-URI string; only the base64 payload after the first
    /// comma is forwarded. The request declares a strict schema requiring
    /// the `story`, `title`, and `visualPrompt` string fields; a response
    /// lacking any of them surfaces as
    /// [`StoryErrorKind::IncompleteResponse`]. Transport and API failures
    /// propagate.
    #[instrument(skip_all)]
    pub async fn analyse_image_and_write_story(
        &self,
        image: &str,
        tones: &ToneSet,
        hint: Option<&str>,
    ) -> ScheherazadeResult<OpeningScene> {
        let message = Message::new(
            Role::User,
            vec![
                image_input(image)?,
                Input::Text(prompt::opening_prompt(tones, hint)),
            ],
        );

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .model(Some(self.settings.story_model().clone()))
            .response_schema(Some(schema::opening_schema()))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.driver.generate(&request).await?;
        let record = decode::structured_record(response.text())?;

        Ok(OpeningScene {
            story: decode::required_str(&record, "story")?,
            title: decode::required_str(&record, "title")?,
            visual_prompt: decode::required_str(&record, "visualPrompt")?,
        })
    }

    /// Continue an existing story against the original image.
    ///
    /// `full_story` is the caller-assembled concatenation of all prior
    /// parts' text; `tones` should stay stable across a session for
    /// narrative consistency, though nothing enforces that here. Contract
    /// and failure handling match
    /// [`analyse_image_and_write_story`](Self::analyse_image_and_write_story).
    #[instrument(skip_all)]
    pub async fn extend_story(
        &self,
        image: &str,
        full_story: &str,
        tones: &ToneSet,
    ) -> ScheherazadeResult<Continuation> {
        let message = Message::new(
            Role::User,
            vec![
                image_input(image)?,
                Input::Text(prompt::continuation_prompt(tones, full_story)),
            ],
        );

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .model(Some(self.settings.story_model().clone()))
            .response_schema(Some(schema::continuation_schema()))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.driver.generate(&request).await?;
        let record = decode::structured_record(response.text())?;

        Ok(Continuation {
            next_part: decode::required_str(&record, "nextPart")?,
            visual_prompt: decode::required_str(&record, "visualPrompt")?,
        })
    }

    /// Render a stylized illustration of `visual_prompt`, preserving the
    /// characters of `reference_image`.
    ///
    /// Returns the first inline image of the response re-encoded as a
    /// `data:image/png;base64,...` URI, or `None` when the response carries
    /// no image. Under the default
    /// [`FailurePolicy::Degrade`] any failure is logged and
    /// converted to `None` so a missing illustration never aborts a story
    /// session; under [`FailurePolicy::Propagate`] failures surface.
    #[instrument(skip_all)]
    pub async fn generate_story_image(
        &self,
        reference_image: &str,
        visual_prompt: &str,
        styles: &StyleSet,
    ) -> ScheherazadeResult<Option<String>> {
        let attempt = self
            .try_generate_story_image(reference_image, visual_prompt, styles)
            .await;

        match attempt {
            Ok(image) => Ok(image),
            Err(e) => match self.settings.illustration_failure() {
                FailurePolicy::Degrade => {
                    warn!(error = %e, "Illustration generation failed, continuing without an image");
                    Ok(None)
                }
                FailurePolicy::Propagate => Err(e),
            },
        }
    }

    async fn try_generate_story_image(
        &self,
        reference_image: &str,
        visual_prompt: &str,
        styles: &StyleSet,
    ) -> ScheherazadeResult<Option<String>> {
        let directive = styles.blended();
        let message = Message::new(
            Role::User,
            vec![
                image_input(reference_image)?,
                Input::Text(prompt::illustration_prompt(visual_prompt, &directive)),
            ],
        );

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .model(Some(self.settings.image_model().clone()))
            .response_modalities(Some(vec![Modality::Text, Modality::Image]))
            .image_config(Some(self.settings.image_config().clone()))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.driver.generate(&request).await?;

        Ok(response
            .first_image()
            .map(|bytes| format!("data:image/png;base64,{}", BASE64.encode(bytes))))
    }

    /// Synthesize narrated audio for `text` with the configured voice.
    ///
    /// Returns the base64-encoded audio payload of the first audio output,
    /// or `None` when the response carries no audio — a legitimate empty
    /// result, not an error. Under the default
    /// [`FailurePolicy::Propagate`] failures surface to the
    /// caller; under [`FailurePolicy::Degrade`] they are logged
    /// and converted to `None`.
    #[instrument(skip_all)]
    pub async fn generate_narration(&self, text: &str) -> ScheherazadeResult<Option<String>> {
        let attempt = self.try_generate_narration(text).await;

        match attempt {
            Ok(audio) => Ok(audio),
            Err(e) => match self.settings.narration_failure() {
                FailurePolicy::Degrade => {
                    warn!(error = %e, "Narration generation failed, continuing without audio");
                    Ok(None)
                }
                FailurePolicy::Propagate => Err(e),
            },
        }
    }

    async fn try_generate_narration(&self, text: &str) -> ScheherazadeResult<Option<String>> {
        let message = Message::new(Role::User, vec![Input::Text(prompt::narration_prompt(text))]);

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .model(Some(self.settings.narration_model().clone()))
            .response_modalities(Some(vec![Modality::Audio]))
            .voice(Some(self.settings.voice().clone()))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.driver.generate(&request).await?;

        Ok(response.first_audio().map(|bytes| BASE64.encode(bytes)))
    }
}

/// Build the inline reference-image input from a data URI.
fn image_input(image: &str) -> ScheherazadeResult<Input> {
    let source = MediaSource::from_data_uri(image)
        .map_err(|e| StoryError::new(StoryErrorKind::InvalidDataUri(e.to_string())))?;
    Ok(Input::Image {
        mime: Some(IMAGE_MIME.to_string()),
        source,
    })
}
