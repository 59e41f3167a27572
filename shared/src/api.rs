use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::protocol::{NO_ANSWER, QUESTION_FIELD, UPLOAD_FAILED};

/// Transport-level failure talking to the server.
///
/// Application errors (the server answered with an `error` field) are not
/// represented here; they travel inside [`UploadResponse`] / [`AskResponse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The response body could not be read or was not usable JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Returns the display text of a JSON field, or `None` when the value is
/// falsy (`null`, `false`, `0`, `""`).
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Reads a response body. A `null` body has no fields to read and is treated
/// like an unparseable one.
fn parse_body(body: &str) -> Result<Value, ApiError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => Err(ApiError::Parse("response body is null".to_string())),
        Ok(value) => Ok(value),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

/// Response from `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// What the page does with an upload response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Show the preview with the uploaded file's name
    Accepted,
    /// Alert the user with this message
    Rejected(String),
}

impl UploadResponse {
    pub fn from_json(value: &Value) -> Self {
        Self {
            message: value.get("message").cloned(),
            error: value.get("error").cloned(),
        }
    }

    pub fn parse(body: &str) -> Result<Self, ApiError> {
        parse_body(body).map(|v| Self::from_json(&v))
    }

    pub fn outcome(&self) -> UploadOutcome {
        if field_text(self.message.as_ref()).is_some() {
            UploadOutcome::Accepted
        } else {
            UploadOutcome::Rejected(
                field_text(self.error.as_ref()).unwrap_or_else(|| UPLOAD_FAILED.to_string()),
            )
        }
    }
}

/// Response from `POST /ask`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl AskResponse {
    pub fn from_json(value: &Value) -> Self {
        Self {
            answer: value.get("answer").cloned(),
            error: value.get("error").cloned(),
        }
    }

    pub fn parse(body: &str) -> Result<Self, ApiError> {
        parse_body(body).map(|v| Self::from_json(&v))
    }

    /// Text of the bot entry: the answer, else the error, else [`NO_ANSWER`].
    pub fn reply_text(&self) -> String {
        field_text(self.answer.as_ref())
            .or_else(|| field_text(self.error.as_ref()))
            .unwrap_or_else(|| NO_ANSWER.to_string())
    }
}

/// Trims a raw question; blank input yields `None`.
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// URL-encoded body for `POST /ask` (e.g. "question=What%20now%3F")
pub fn question_form_body(question: &str) -> String {
    format!("{}={}", QUESTION_FIELD, urlencoding::encode(question))
}

/// API endpoint definitions
pub mod endpoints {
    pub const UPLOAD: &str = "/upload";
    pub const ASK: &str = "/ask";
}

/// Where the client sends its requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:5000")
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub fn upload_url(&self) -> String {
        self.url(endpoints::UPLOAD)
    }

    pub fn ask_url(&self) -> String {
        self.url(endpoints::ASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_message_is_accepted() {
        let resp = UploadResponse::parse(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(resp.outcome(), UploadOutcome::Accepted);
    }

    #[test]
    fn test_upload_truthy_non_string_message() {
        let resp = UploadResponse::from_json(&json!({"message": true}));
        assert_eq!(resp.outcome(), UploadOutcome::Accepted);

        let resp = UploadResponse::from_json(&json!({"message": {"id": 1}}));
        assert_eq!(resp.outcome(), UploadOutcome::Accepted);
    }

    #[test]
    fn test_upload_error_is_rejected_with_server_text() {
        let resp = UploadResponse::parse(r#"{"error": "too large"}"#).unwrap();
        assert_eq!(resp.outcome(), UploadOutcome::Rejected("too large".into()));
    }

    #[test]
    fn test_upload_falsy_message_falls_back() {
        let resp = UploadResponse::from_json(&json!({"message": "", "error": ""}));
        assert_eq!(resp.outcome(), UploadOutcome::Rejected(UPLOAD_FAILED.into()));

        let resp = UploadResponse::from_json(&json!({"message": 0}));
        assert_eq!(resp.outcome(), UploadOutcome::Rejected(UPLOAD_FAILED.into()));

        let resp = UploadResponse::parse("{}").unwrap();
        assert_eq!(resp.outcome(), UploadOutcome::Rejected(UPLOAD_FAILED.into()));
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let resp = UploadResponse::parse("[1, 2]").unwrap();
        assert_eq!(resp.outcome(), UploadOutcome::Rejected(UPLOAD_FAILED.into()));
    }

    #[test]
    fn test_unparseable_body_is_transport_error() {
        assert!(matches!(
            UploadResponse::parse("<html>500</html>"),
            Err(ApiError::Parse(_))
        ));
        assert!(matches!(AskResponse::parse("null"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_reply_text_precedence() {
        let resp = AskResponse::parse(r#"{"answer": "42", "error": "ignored"}"#).unwrap();
        assert_eq!(resp.reply_text(), "42");

        let resp = AskResponse::parse(r#"{"error": "no document loaded"}"#).unwrap();
        assert_eq!(resp.reply_text(), "no document loaded");

        let resp = AskResponse::parse(r#"{"answer": "", "error": "empty"}"#).unwrap();
        assert_eq!(resp.reply_text(), "empty");
    }

    #[test]
    fn test_reply_text_fallback() {
        let resp = AskResponse::parse("{}").unwrap();
        assert_eq!(resp.reply_text(), "No answer.");
    }

    #[test]
    fn test_reply_text_renders_numbers() {
        let resp = AskResponse::from_json(&json!({"answer": 42}));
        assert_eq!(resp.reply_text(), "42");
    }

    #[test]
    fn test_normalize_question() {
        assert_eq!(normalize_question("  hi there \n"), Some("hi there".into()));
        assert_eq!(normalize_question(""), None);
        assert_eq!(normalize_question(" \t\n "), None);
    }

    #[test]
    fn test_question_form_body_encodes() {
        assert_eq!(
            question_form_body("What is 1+1 & why?"),
            "question=What%20is%201%2B1%20%26%20why%3F"
        );
    }

    #[test]
    fn test_client_config_urls() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.upload_url(), "http://localhost:5000/upload");
        assert_eq!(config.ask_url(), "http://localhost:5000/ask");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
