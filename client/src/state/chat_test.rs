use super::*;
use wire::chat::Sender;

#[test]
fn transcript_starts_with_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages, [ChatMessage::greeting()]);
}

#[test]
fn blank_input_sends_nothing() {
    let mut state = ChatState {
        input: "   ".to_owned(),
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.typing);
}

#[test]
fn text_send_appends_user_bubble_then_reply() {
    let mut state = ChatState {
        input: " hi ".to_owned(),
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), Some(Outgoing::Text("hi".to_owned())));
    assert!(state.typing);
    assert!(state.input.is_empty());
    assert_eq!(state.begin_send(), None);
    state.finish(Ok(ChatReply {
        reply: "hello".to_owned(),
        session_id: None,
    }));
    assert!(!state.typing);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, "hello");
}

#[test]
fn attachment_wins_and_disables_input() {
    let mut state = ChatState::default();
    state.attach(Some("brief.pdf".to_owned()));
    assert!(state.input_disabled());
    assert_eq!(state.begin_send(), Some(Outgoing::File("brief.pdf".to_owned())));
    assert_eq!(state.messages[1].text, "Uploaded file: brief.pdf");
    assert!(!state.input_disabled());
}

#[test]
fn failure_appends_error_bubble() {
    let mut state = ChatState {
        input: "hi".to_owned(),
        ..ChatState::default()
    };
    state.begin_send();
    state.finish(Err(ApiError::Status(500)));
    assert_eq!(state.messages.last().unwrap().text, "Sorry, an error occurred.");
}

#[test]
fn stored_session_id_is_reused() {
    let (id, created) = session_id_or_else(Some("abc".to_owned()), || unreachable!());
    assert_eq!(id, "abc");
    assert!(!created);
    let (id, created) = session_id_or_else(None, || "fresh".to_owned());
    assert_eq!(id, "fresh");
    assert!(created);
}

#[test]
fn chat_session_id_is_a_uuid_outside_browser() {
    let id = chat_session_id();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[test]
fn only_replies_wait_for_typing_delay() {
    let reply = ChatReply {
        reply: "hey".to_owned(),
        session_id: None,
    };
    assert_eq!(reply_delay(&Ok(reply)), Some(chat::TYPING_DELAY));
    assert_eq!(reply_delay(&Err(ApiError::Status(500))), None);
}
