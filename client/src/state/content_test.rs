use super::*;

fn filled(text: &str) -> ContentEditorState {
    let mut state = ContentEditorState::default();
    state.set_content(text);
    state
}

#[test]
fn saving_empty_content_is_rejected() {
    let mut state = filled("   \n ");
    assert_eq!(state.begin_save(), None);
    assert_eq!(state.error.as_deref(), Some("Editor content is empty."));
    assert!(!state.busy);
}

#[test]
fn content_is_truncated_at_limit() {
    let state = filled(&"a".repeat(1200));
    assert_eq!(state.stats().characters, 1000);
}

#[test]
fn successful_save_appends_and_clears_editor() {
    let mut state = filled("Big launch today");
    state.scheduled_date = NaiveDate::from_ymd_opt(2026, 5, 4);
    let draft = state.begin_save().unwrap();
    assert!(state.busy);
    state.finish_save(draft, Ok(()));
    assert_eq!(state.drafts.len(), 1);
    assert_eq!(state.drafts.items()[0].word_count, 3);
    assert!(state.content.is_empty());
    assert_eq!(state.scheduled_date, None);
    assert_eq!(state.notice.as_deref(), Some(SAVED_MESSAGE));
}

#[test]
fn failed_save_keeps_editor_content() {
    let mut state = filled("Keep me");
    let draft = state.begin_save().unwrap();
    state.finish_save(draft, Err(ApiError::Status(500)));
    assert_eq!(state.content, "Keep me");
    assert!(state.drafts.is_empty());
    assert_eq!(state.error.as_deref(), Some("request failed with status 500"));
}

#[test]
fn editing_then_saving_replaces_entry() {
    let mut state = ContentEditorState::default();
    for text in ["first", "second"] {
        state.set_content(text);
        let draft = state.begin_save().unwrap();
        state.finish_save(draft, Ok(()));
    }
    state.edit(0);
    assert_eq!(state.content, "first");
    assert_eq!(state.save_label(), "Update Content");
    state.set_content("first, revised");
    let draft = state.begin_save().unwrap();
    state.finish_save(draft, Ok(()));
    let texts: Vec<&str> = state.drafts.items().iter().map(|d| d.content.as_str()).collect();
    assert_eq!(texts, ["first, revised", "second"]);
    assert_eq!(state.save_label(), "Save Content");
}

#[test]
fn generated_text_is_inserted_at_cursor() {
    let mut state = filled("Hello world");
    state.cursor = 5;
    state.finish_generate(Ok(" there\n".to_owned()));
    assert_eq!(state.content, "Hellothere world");
    assert_eq!(state.cursor, 10);
}

#[test]
fn generate_request_omits_blank_prompt() {
    let mut state = ContentEditorState {
        tone: Tone::Casual,
        industry: " retail ".to_owned(),
        keywords: "sale, spring".to_owned(),
        ..ContentEditorState::default()
    };
    let request = state.generate_request();
    assert_eq!(request.prompt, None);
    assert_eq!(request.industry, "retail");
    assert_eq!(request.keywords, ["sale", "spring"]);
    state.prompt = "Write a teaser".to_owned();
    assert_eq!(state.generate_request().prompt.as_deref(), Some("Write a teaser"));
}

#[test]
fn generate_failure_uses_generic_message() {
    let mut state = filled("x");
    state.finish_generate(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.error.as_deref(), Some(GENERATE_FAILED));
    assert_eq!(state.content, "x");
}
