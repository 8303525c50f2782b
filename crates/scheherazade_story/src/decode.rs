//! Structured-response decoding.
//!
//! The decode step and the key-extraction step fail differently on purpose:
//! an empty body is coerced to `{}` and decodes cleanly to a record with no
//! keys, so the caller-visible failure for a vacuous response is the
//! distinct "incomplete structured response" condition raised on key
//! access, not a parse error. A non-empty body that is not valid JSON is a
//! parse error.

use scheherazade_error::{JsonError, ScheherazadeResult, StoryError, StoryErrorKind};
use serde_json::{Map, Value};

/// Decode the text body of a structured response into a JSON record.
///
/// An absent, empty, or whitespace-only body yields an empty record.
pub fn structured_record(body: Option<String>) -> ScheherazadeResult<Map<String, Value>> {
    let raw = body.unwrap_or_default();
    let raw = if raw.trim().is_empty() { "{}" } else { raw.as_str() };

    let value: Value =
        serde_json::from_str(raw).map_err(|e| JsonError::new(e.to_string()))?;

    match value {
        Value::Object(record) => Ok(record),
        other => Err(JsonError::new(format!(
            "expected a JSON object, got: {other}"
        )))?,
    }
}

/// Extract a required string field from a decoded record.
///
/// A missing or non-string field is an
/// [`IncompleteResponse`](StoryErrorKind::IncompleteResponse) naming the
/// absent key.
pub fn required_str(record: &Map<String, Value>, key: &str) -> ScheherazadeResult<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            StoryError::new(StoryErrorKind::IncompleteResponse {
                missing: key.to_string(),
            })
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scheherazade_error::ScheherazadeErrorKind;

    #[test]
    fn valid_json_round_trips_every_field() {
        let record = structured_record(Some(
            r#"{"story": "It began.", "title": "Dusk", "visualPrompt": "low angle"}"#.to_string(),
        ))
        .unwrap();
        assert_eq!(required_str(&record, "story").unwrap(), "It began.");
        assert_eq!(required_str(&record, "title").unwrap(), "Dusk");
        assert_eq!(required_str(&record, "visualPrompt").unwrap(), "low angle");
    }

    #[test]
    fn empty_body_decodes_to_a_record_with_no_keys() {
        let record = structured_record(Some(String::new())).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn absent_body_decodes_to_a_record_with_no_keys() {
        let record = structured_record(None).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn whitespace_body_decodes_to_a_record_with_no_keys() {
        let record = structured_record(Some("  \n ".to_string())).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        let err = structured_record(Some("not json".to_string())).unwrap_err();
        assert!(matches!(err.kind(), ScheherazadeErrorKind::Json(_)));
    }

    #[test]
    fn non_object_body_is_a_json_error() {
        let err = structured_record(Some("[1, 2, 3]".to_string())).unwrap_err();
        assert!(matches!(err.kind(), ScheherazadeErrorKind::Json(_)));
    }

    #[test]
    fn missing_key_is_an_incomplete_response() {
        let record = structured_record(Some("{}".to_string())).unwrap();
        let err = required_str(&record, "story").unwrap_err();
        match err.kind() {
            ScheherazadeErrorKind::Story(story_err) => {
                assert_eq!(
                    story_err.kind,
                    StoryErrorKind::IncompleteResponse {
                        missing: "story".to_string()
                    }
                );
            }
            other => panic!("expected a story error, got {other}"),
        }
    }

    #[test]
    fn non_string_value_is_an_incomplete_response() {
        let record = structured_record(Some(r#"{"story": 7}"#.to_string())).unwrap();
        assert!(required_str(&record, "story").is_err());
    }
}
