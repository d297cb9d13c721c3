use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Serialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<TextPart>,
}

/// Body of a `generateContent` call: `{"contents":[{"parts":[{"text":...}]}]}`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, GenerationError> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| GenerationError::MalformedResponse("no candidates".to_string()))?;
        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| GenerationError::MalformedResponse("candidate has no content".to_string()))?;
        let part = content
            .parts
            .first()
            .ok_or_else(|| GenerationError::MalformedResponse("content has no parts".to_string()))?;
        part.text
            .as_deref()
            .ok_or_else(|| GenerationError::MalformedResponse("part has no text".to_string()))
    }
}

#[derive(Error, Debug)]
pub enum GenerationError {
    /// Network unreachable, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote rejected request (status {status}): {body}")]
    RemoteRejected { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("response contained no usable text")]
    EmptyResponse,
    #[error("no API key configured")]
    MissingCredential,
}

impl GenerationError {
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::Transport(_) => "network_error",
            GenerationError::RemoteRejected { status, body } => {
                let lowered = body.to_lowercase();
                if *status == 401 || *status == 403 {
                    "auth_error"
                } else if *status == 429 || lowered.contains("quota") || lowered.contains("resource_exhausted") {
                    "rate_limit"
                } else if *status >= 500 {
                    "server_error"
                } else {
                    "api_error"
                }
            }
            GenerationError::MalformedResponse(_) => "parse_error",
            GenerationError::EmptyResponse => "empty_response",
            GenerationError::MissingCredential => "missing_credential",
        }
    }
}

/// One prompt in, one block of text out.
pub trait GenerativeBackend: Send + Sync {
    fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_expected_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(body, serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]}));
    }

    #[test]
    fn first_text_reads_nested_part() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"one"},{"text":"two"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text().unwrap(), "one");
    }

    #[test]
    fn first_text_reports_missing_shape() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(matches!(
            parsed.first_text(),
            Err(GenerationError::MalformedResponse(_))
        ));

        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(
            parsed.first_text(),
            Err(GenerationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn rejected_codes_follow_status() {
        let err = |status: u16, body: &str| GenerationError::RemoteRejected {
            status,
            body: body.to_string(),
        };
        assert_eq!(err(403, "").code(), "auth_error");
        assert_eq!(err(429, "").code(), "rate_limit");
        assert_eq!(err(400, "RESOURCE_EXHAUSTED").code(), "rate_limit");
        assert_eq!(err(503, "").code(), "server_error");
        assert_eq!(err(404, "").code(), "api_error");
    }
}
