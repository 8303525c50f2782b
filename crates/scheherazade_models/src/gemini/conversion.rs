//! Type conversions between Scheherazade and Gemini wire types.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use scheherazade_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output};
use scheherazade_error::{GeminiError, GeminiErrorKind};

use super::GeminiResult;
use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, InlineDataPart, Part, PrebuiltVoiceConfig, SpeechConfig, SystemInstruction,
    TextPart, VoiceConfig,
};

/// Converts a Scheherazade request into the `generateContent` request body.
///
/// System messages are lifted into the separate `systemInstruction` field;
/// user and assistant turns become `contents` entries with the roles the
/// wire format expects ("user"/"model").
pub fn to_gemini_request(request: &GenerateRequest) -> GeminiResult<GenerateContentRequest> {
    let mut contents = Vec::new();
    let mut system_instruction = None;

    for message in request.messages() {
        let parts = to_parts(&message.content)?;
        match message.role {
            scheherazade_core::Role::System => {
                system_instruction = Some(SystemInstruction { parts });
            }
            scheherazade_core::Role::User => contents.push(Content {
                role: Some("user".to_string()),
                parts,
            }),
            scheherazade_core::Role::Assistant => contents.push(Content {
                role: Some("model".to_string()),
                parts,
            }),
        }
    }

    Ok(GenerateContentRequest {
        contents,
        system_instruction,
        generation_config: to_generation_config(request),
    })
}

/// Converts the `generateContent` response body into a Scheherazade response.
///
/// Only the first candidate is read. Text parts become [`Output::Text`];
/// inline-data parts are base64-decoded into [`Output::Audio`] or
/// [`Output::Image`] depending on the declared MIME prefix.
pub fn from_gemini_response(response: GenerateContentResponse) -> GeminiResult<GenerateResponse> {
    let mut outputs = Vec::new();

    if let Some(candidate) = response.candidates.into_iter().next() {
        if let Some(content) = candidate.content {
            for part in content.parts {
                match part {
                    Part::Text(text_part) => outputs.push(Output::Text(text_part.text)),
                    Part::InlineData(inline_part) => {
                        let InlineData { mime_type, data } = inline_part.inline_data;
                        let bytes = BASE64.decode(data.as_bytes()).map_err(|e| {
                            GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string()))
                        })?;
                        let output = if mime_type.starts_with("audio/") {
                            Output::Audio {
                                mime: Some(mime_type),
                                data: bytes,
                            }
                        } else {
                            Output::Image {
                                mime: Some(mime_type),
                                data: bytes,
                            }
                        };
                        outputs.push(output);
                    }
                }
            }
        }
    }

    Ok(GenerateResponse::new(outputs))
}

fn to_parts(inputs: &[Input]) -> GeminiResult<Vec<Part>> {
    inputs.iter().map(to_part).collect()
}

fn to_part(input: &Input) -> GeminiResult<Part> {
    match input {
        Input::Text(text) => Ok(Part::Text(TextPart { text: text.clone() })),
        Input::Image { mime, source } => {
            let data = match source {
                MediaSource::Base64(payload) => payload.clone(),
                MediaSource::Binary(bytes) => BASE64.encode(bytes),
                MediaSource::Url(_) => {
                    return Err(GeminiError::new(GeminiErrorKind::UrlMediaNotSupported));
                }
            };
            Ok(Part::InlineData(InlineDataPart {
                inline_data: InlineData {
                    mime_type: mime.clone().unwrap_or_else(|| "image/png".to_string()),
                    data,
                },
            }))
        }
    }
}

fn to_generation_config(request: &GenerateRequest) -> Option<GenerationConfig> {
    let config = GenerationConfig {
        temperature: *request.temperature(),
        max_output_tokens: *request.max_tokens(),
        response_mime_type: request
            .response_schema()
            .is_some()
            .then(|| "application/json".to_string()),
        response_schema: request.response_schema().clone(),
        response_modalities: request
            .response_modalities()
            .as_ref()
            .map(|modalities| modalities.iter().map(|m| m.as_str().to_string()).collect()),
        speech_config: request.voice().as_ref().map(|voice| SpeechConfig {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice.clone(),
                },
            },
        }),
        image_config: request.image_config().as_ref().map(|config| ImageConfig {
            aspect_ratio: config.aspect_ratio().clone(),
            image_size: config.image_size().clone(),
        }),
    };

    if config == GenerationConfig::default() {
        None
    } else {
        Some(config)
    }
}
