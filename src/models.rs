use serde::{Deserialize, Serialize};
use serde_json::Value;

// inbound body, prompt kept loose so a wrong type reads as "missing".
// stricter than a plain truthiness check: 42, true or {} are rejected too,
// only a non-empty string is ever forwarded
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<Value>
}

impl PromptRequest {

    /// Returns the prompt only when it is a non-empty string.
    pub fn prompt_text(&self) -> Option<&str> {

        match &self.prompt {
            Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None
        }

    }

}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig
}

impl GenerateContentRequest {

    pub fn from_prompt(prompt: &str) -> Self {

        GenerateContentRequest {
            contents: vec![
                Content {
                    parts: vec![Part { text: prompt.to_string() }]
                }
            ],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string()
            }
        }

    }

}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String
}

/// True unless `candidates` is absent, falsy or an empty list.
///
/// Only an empty array (or string) counts as "no candidates"; any other
/// truthy value is left for the caller to interpret.
pub fn has_candidates(response: &Value) -> bool {

    match response.get("candidates") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Array(candidates)) => !candidates.is_empty(),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true
    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {

        let payload = serde_json::to_value(GenerateContentRequest::from_prompt("Hello"))
            .expect("payload should serialize");

        assert_eq!(payload, json!({
            "contents": [{ "parts": [{ "text": "Hello" }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        }));

    }

    #[test]
    fn test_prompt_text_rejects_falsy_values() {

        let cases = [
            json!({}),
            json!({ "prompt": null }),
            json!({ "prompt": "" }),
            json!({ "prompt": 42 }),
            json!({ "prompt": false })
        ];

        for case in cases {
            let request: PromptRequest = serde_json::from_value(case.clone())
                .expect("object bodies should deserialize");
            assert!(request.prompt_text().is_none(), "expected no prompt for {}", case);
        }

    }

    #[test]
    fn test_prompt_text_keeps_whitespace() {

        let request: PromptRequest = serde_json::from_value(json!({ "prompt": "  " }))
            .expect("object bodies should deserialize");

        assert_eq!(request.prompt_text(), Some("  "));

    }

    #[test]
    fn test_has_candidates() {

        assert!(has_candidates(&json!({ "candidates": [{ "content": {} }] })));
        assert!(!has_candidates(&json!({ "candidates": [] })));
        assert!(!has_candidates(&json!({ "promptFeedback": { "blockReason": "SAFETY" } })));
        assert!(!has_candidates(&json!({ "candidates": null })));
        assert!(!has_candidates(&json!({ "candidates": "" })));
        assert!(!has_candidates(&json!(5)));

    }

    #[test]
    fn test_non_array_candidates_pass_through() {

        assert!(has_candidates(&json!({ "candidates": {} })));
        assert!(has_candidates(&json!({ "candidates": "abc" })));
        assert!(has_candidates(&json!({ "candidates": true })));

    }

}
