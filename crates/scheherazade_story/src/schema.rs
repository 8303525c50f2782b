//! Strict response schemas for the structured text operations.
//!
//! Both schemas declare object-typed responses whose string fields are all
//! required; the decoder still re-validates key presence after parsing
//! rather than trusting the provider.

use serde_json::{Value, json};

/// Schema for the opening analysis: `story`, `title`, `visualPrompt`.
pub fn opening_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "story": { "type": "STRING" },
            "title": { "type": "STRING" },
            "visualPrompt": { "type": "STRING" }
        },
        "required": ["story", "title", "visualPrompt"]
    })
}

/// Schema for a continuation: `nextPart`, `visualPrompt`.
pub fn continuation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "nextPart": { "type": "STRING" },
            "visualPrompt": { "type": "STRING" }
        },
        "required": ["nextPart", "visualPrompt"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_schema_requires_all_three_fields() {
        let schema = opening_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["story", "title", "visualPrompt"]));
        assert_eq!(schema["properties"]["visualPrompt"]["type"], "STRING");
    }

    #[test]
    fn continuation_schema_requires_both_fields() {
        let schema = continuation_schema();
        assert_eq!(schema["required"], json!(["nextPart", "visualPrompt"]));
        assert_eq!(schema["properties"]["nextPart"]["type"], "STRING");
    }
}
