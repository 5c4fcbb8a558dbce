//! Chat widget payloads and transcript types.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// First bot message of every transcript.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Bot message appended when a send fails.
pub const ERROR_REPLY: &str = "Sorry, an error occurred.";

/// Synthetic "typing" pause before a reply is shown.
pub const TYPING_DELAY: Duration = Duration::from_millis(1000);

/// Local-storage key holding the chat session id.
pub const SESSION_STORAGE_KEY: &str = "chat_session_id";

/// Body of the session-aware `POST /api/v1/chatbot/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Body of the stateless `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenericChatRequest {
    pub message: String,
}

/// Reply from either chat transport or the file upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(alias = "response", alias = "message")]
    pub reply: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }

    /// User bubble recorded for a file attachment.
    #[must_use]
    pub fn uploaded_file(file_name: &str) -> Self {
        Self::user(format!("Uploaded file: {file_name}"))
    }
}

/// What the widget should send for the current input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outgoing {
    Text(String),
    File(String),
}

/// Decide what a send press does. An attached file wins over typed text;
/// blank text with no file sends nothing.
#[must_use]
pub fn outgoing(input: &str, attached_file: Option<&str>) -> Option<Outgoing> {
    if let Some(name) = attached_file {
        return Some(Outgoing::File(name.to_owned()));
    }
    let text = input.trim();
    if text.is_empty() {
        None
    } else {
        Some(Outgoing::Text(text.to_owned()))
    }
}
