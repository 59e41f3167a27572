//! Question input and transcript state for the chat panel.

use docqa_shared::api::normalize_question;
use docqa_shared::protocol::ASK_REQUEST_FAILED;
use docqa_shared::{ApiError, AskResponse};

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "message user",
            Role::Bot => "message bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
}

/// Owns the question input and the append-only transcript.
#[derive(Debug, Default)]
pub struct ChatController {
    transcript: Vec<ChatEntry>,
    input: String,
    scroll_pending: bool,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// Appends the user entry and returns the question to send.
    /// Blank input is ignored. The input keeps its text until a response arrives.
    pub fn submit(&mut self) -> Option<String> {
        let question = normalize_question(&self.input)?;
        self.transcript.push(ChatEntry {
            role: Role::User,
            text: question.clone(),
        });
        Some(question)
    }

    /// Applies a question response. Returns the alert text on transport failure.
    pub fn resolve(&mut self, result: Result<AskResponse, ApiError>) -> Option<&'static str> {
        match result {
            Ok(response) => {
                self.transcript.push(ChatEntry {
                    role: Role::Bot,
                    text: response.reply_text(),
                });
                self.scroll_pending = true;
                self.input.clear();
                None
            }
            Err(e) => {
                log::error!("Question request failed: {}", e);
                Some(ASK_REQUEST_FAILED)
            }
        }
    }

    /// True once after each appended bot entry
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer(body: serde_json::Value) -> Result<AskResponse, ApiError> {
        Ok(AskResponse::from_json(&body))
    }

    #[test]
    fn test_submit_appends_user_entry_immediately() {
        let mut chat = ChatController::new();
        chat.set_input("  What is the answer?  ".into());

        assert_eq!(chat.submit().as_deref(), Some("What is the answer?"));
        assert_eq!(
            chat.transcript(),
            &[ChatEntry {
                role: Role::User,
                text: "What is the answer?".into()
            }]
        );
        // Cleared only once the response arrives
        assert_eq!(chat.input(), "  What is the answer?  ");
    }

    #[test]
    fn test_blank_question_is_noop() {
        let mut chat = ChatController::new();
        chat.set_input(" \n\t ".into());
        assert_eq!(chat.submit(), None);
        assert!(chat.transcript().is_empty());
    }

    #[test]
    fn test_answer_appends_bot_entry_and_clears_input() {
        let mut chat = ChatController::new();
        chat.set_input("What is the answer?".into());
        chat.submit();

        assert_eq!(chat.resolve(answer(json!({"answer": "42"}))), None);
        let roles: Vec<Role> = chat.transcript().iter().map(|e| e.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot]);
        assert_eq!(chat.transcript()[1].text, "42");
        assert_eq!(chat.input(), "");
        assert!(chat.take_scroll());
        assert!(!chat.take_scroll());
    }

    #[test]
    fn test_application_error_becomes_bot_entry() {
        let mut chat = ChatController::new();
        chat.set_input("hello".into());
        chat.submit();

        assert_eq!(chat.resolve(answer(json!({"error": "no document"}))), None);
        assert_eq!(chat.transcript()[1].text, "no document");
    }

    #[test]
    fn test_empty_response_uses_fallback() {
        let mut chat = ChatController::new();
        chat.set_input("hello".into());
        chat.submit();
        chat.resolve(answer(json!({})));
        assert_eq!(chat.transcript()[1].text, "No answer.");
    }

    #[test]
    fn test_transport_failure_alerts_without_entry() {
        let mut chat = ChatController::new();
        chat.set_input("hello".into());
        chat.submit();

        let alert = chat.resolve(Err(ApiError::Network("offline".into())));
        assert_eq!(alert, Some("Error asking question."));
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.input(), "hello");
        assert!(!chat.take_scroll());
    }

    #[test]
    fn test_overlapping_requests_resolve_in_arrival_order() {
        let mut chat = ChatController::new();
        chat.set_input("first".into());
        chat.submit();
        chat.set_input("second".into());
        chat.submit();

        chat.resolve(answer(json!({"answer": "reply to second"})));
        chat.resolve(answer(json!({"answer": "reply to first"})));

        let texts: Vec<&str> = chat.transcript().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["first", "second", "reply to second", "reply to first"]
        );
    }

    #[test]
    fn test_role_classes() {
        assert_eq!(Role::User.css_class(), "message user");
        assert_eq!(Role::Bot.css_class(), "message bot");
    }
}
