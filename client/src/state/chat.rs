//! Chat widget transcript state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use wire::ApiError;
use wire::chat::{self, ChatMessage, ChatReply, Outgoing};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Name of the attached file; while set, text input is disabled.
    pub attachment: Option<String>,
    pub typing: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::greeting()],
            input: String::new(),
            attachment: None,
            typing: false,
        }
    }
}

impl ChatState {
    pub fn attach(&mut self, file_name: Option<String>) {
        self.attachment = file_name;
    }

    pub fn input_disabled(&self) -> bool {
        self.attachment.is_some()
    }

    /// Record the user's bubble and clear the inputs.
    ///
    /// Returns what to send, or `None` when there is nothing to send or a
    /// reply is still pending.
    pub fn begin_send(&mut self) -> Option<Outgoing> {
        if self.typing {
            return None;
        }
        let out = chat::outgoing(&self.input, self.attachment.as_deref())?;
        let bubble = match &out {
            Outgoing::Text(text) => ChatMessage::user(text.clone()),
            Outgoing::File(name) => ChatMessage::uploaded_file(name),
        };
        self.messages.push(bubble);
        self.input.clear();
        self.attachment = None;
        self.typing = true;
        Some(out)
    }

    /// Append the bot's reply, or the error bubble.
    pub fn finish(&mut self, result: Result<ChatReply, ApiError>) {
        self.typing = false;
        let text = match result {
            Ok(reply) => reply.reply,
            Err(_) => chat::ERROR_REPLY.to_owned(),
        };
        self.messages.push(ChatMessage::bot(text));
    }
}

/// Pause before a result is appended. Only real replies get the typing
/// delay; the error bubble shows at once.
pub fn reply_delay(result: &Result<ChatReply, ApiError>) -> Option<Duration> {
    result.is_ok().then_some(chat::TYPING_DELAY)
}

/// Stored chat session id, or `fresh()` persisted as the new one.
pub fn session_id_or_else(stored: Option<String>, fresh: impl FnOnce() -> String) -> (String, bool) {
    match stored {
        Some(id) => (id, false),
        None => (fresh(), true),
    }
}

/// Chat session id for this browser, created on first use.
pub fn chat_session_id() -> String {
    let (id, created) = session_id_or_else(crate::util::storage::load_chat_session_id(), || {
        uuid::Uuid::new_v4().to_string()
    });
    if created {
        crate::util::storage::save_chat_session_id(&id);
    }
    id
}
