//! Mock story driver for testing.

use async_trait::async_trait;
use scheherazade_core::{GenerateRequest, GenerateResponse, Output};
use scheherazade_error::{GeminiError, GeminiErrorKind, ScheherazadeResult};
use scheherazade_interface::StoryDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return a single text output
    Text(String),
    /// Return a caption plus an inline image with the given bytes
    Image(Vec<u8>),
    /// Return an inline audio output with the given bytes
    Audio(Vec<u8>),
    /// Return a response with no outputs at all
    Empty,
    /// Always return the specified error
    Error(GeminiErrorKind),
}

/// Mock driver that records requests and returns scripted responses.
///
/// Clones share the same counters, so a test can hand a clone to the
/// generator and keep one for assertions.
#[derive(Debug, Clone)]
pub struct MockStoryDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerateRequest>>>,
}

impl MockStoryDriver {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Mock that always succeeds with the given text body.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Text(text.into()))
    }

    /// Mock that returns an inline image.
    pub fn with_image(bytes: Vec<u8>) -> Self {
        Self::new(MockBehavior::Image(bytes))
    }

    /// Mock that returns inline audio.
    pub fn with_audio(bytes: Vec<u8>) -> Self {
        Self::new(MockBehavior::Audio(bytes))
    }

    /// Mock that returns a response with no outputs.
    pub fn with_empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Mock that always fails with the given error.
    pub fn with_error(kind: GeminiErrorKind) -> Self {
        Self::new(MockBehavior::Error(kind))
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryDriver for MockStoryDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScheherazadeResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(req.clone());

        // Minimal delay to keep the suspension point honest
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;

        match &self.behavior {
            MockBehavior::Text(text) => {
                Ok(GenerateResponse::new(vec![Output::Text(text.clone())]))
            }
            MockBehavior::Image(bytes) => Ok(GenerateResponse::new(vec![
                Output::Text("A caption".to_string()),
                Output::Image {
                    mime: Some("image/png".to_string()),
                    data: bytes.clone(),
                },
            ])),
            MockBehavior::Audio(bytes) => Ok(GenerateResponse::new(vec![Output::Audio {
                mime: Some("audio/pcm".to_string()),
                data: bytes.clone(),
            }])),
            MockBehavior::Empty => Ok(GenerateResponse::new(vec![])),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
