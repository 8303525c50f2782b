// Tests for the Gemini client implementation.

use scheherazade_core::{GenerateRequest, Input, Message, Role};
use scheherazade_error::{GeminiError, GeminiErrorKind};
use scheherazade_interface::{Metadata, SpeechSynthesis, StoryDriver, Vision};
use scheherazade_models::GeminiClient;

//
// ─── ERROR HANDLING TESTS ───────────────────────────────────────────────────
//

#[test]
fn test_gemini_error_display() {
    let error = GeminiError::new(GeminiErrorKind::MissingApiKey);
    let display = format!("{}", error);
    assert!(display.contains("GEMINI_API_KEY environment variable not set"));
    assert!(display.contains("Gemini Error:"));
    assert!(display.contains("at line"));
}

#[test]
fn test_gemini_error_kind_display() {
    let cases = vec![
        (
            GeminiErrorKind::MissingApiKey,
            "GEMINI_API_KEY environment variable not set".to_string(),
        ),
        (
            GeminiErrorKind::ApiRequest("request failed".to_string()),
            "Gemini API request failed: request failed".to_string(),
        ),
        (
            GeminiErrorKind::HttpError {
                status_code: 503,
                message: "overloaded".to_string(),
            },
            "HTTP 503 error: overloaded".to_string(),
        ),
        (
            GeminiErrorKind::UrlMediaNotSupported,
            "URL media sources not supported for Gemini inline data".to_string(),
        ),
        (
            GeminiErrorKind::Base64Decode("invalid base64".to_string()),
            "Base64 decode error: invalid base64".to_string(),
        ),
    ];

    for (kind, expected) in cases {
        assert_eq!(format!("{}", kind), expected, "Error kind display mismatch");
    }
}

//
// ─── CAPABILITY TESTS ───────────────────────────────────────────────────────
//

#[test]
fn test_vision_capabilities() {
    let client = GeminiClient::with_api_key("test-key");
    assert_eq!(client.max_images_per_request(), 16);
    assert!(client.supported_image_formats().contains(&"image/png"));
    assert_eq!(client.max_image_size_bytes(), 20 * 1024 * 1024);
}

#[test]
fn test_speech_capabilities() {
    let client = GeminiClient::with_api_key("test-key");
    assert_eq!(client.default_voice(), "Charon");
    assert!(client.prebuilt_voices().contains(&"Charon"));
}

#[test]
fn test_metadata_reports_multimodal_support() {
    let client = GeminiClient::with_api_key("test-key").with_model("gemini-2.5-flash-image");
    let metadata = client.metadata();
    assert_eq!(metadata.provider, "gemini");
    assert_eq!(metadata.model, "gemini-2.5-flash-image");
    assert!(metadata.supports_vision);
    assert!(metadata.supports_json_mode);
    assert!(metadata.supports_image_output);
    assert!(metadata.supports_audio_output);
}

//
// ─── LIVE API TESTS (require GEMINI_API_KEY) ────────────────────────────────
//

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and network access"]
async fn test_live_text_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::new()?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            vec![Input::Text("Reply with the single word: lantern".to_string())],
        )])
        .max_tokens(Some(32u32))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(response.text().is_some());
    Ok(())
}
