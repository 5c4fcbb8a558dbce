use super::*;

fn with_file() -> LeadScoringState {
    let mut state = LeadScoringState::default();
    assert!(state.select_file(Some(("leads.csv", "text/csv"))));
    state
}

#[test]
fn default_mode_scores_all_after_upload() {
    assert_eq!(LeadScoringState::default().mode, ScoringMode::ScoreAll);
}

#[test]
fn selecting_nothing_reports_no_file() {
    let mut state = with_file();
    assert!(!state.select_file(None));
    assert_eq!(state.file_name, None);
    assert_eq!(state.error.as_deref(), Some("No file selected."));
}

#[test]
fn selecting_non_csv_is_rejected_and_blocks_upload() {
    let mut state = LeadScoringState::default();
    assert!(!state.select_file(Some(("photo.png", "image/png"))));
    assert_eq!(state.error.as_deref(), Some("Please upload a valid CSV file."));
    assert!(!state.begin_upload(true));
    assert!(!state.loading);
}

#[test]
fn csv_extension_is_enough_without_mime() {
    let mut state = LeadScoringState::default();
    assert!(state.select_file(Some(("LEADS.CSV", ""))));
    assert_eq!(state.file_name.as_deref(), Some("LEADS.CSV"));
}

#[test]
fn upload_requires_token() {
    let mut state = with_file();
    assert!(!state.begin_upload(false));
    assert_eq!(state.error.as_deref(), Some("User not authenticated."));
}

#[test]
fn upload_sets_loading_and_ignores_double_press() {
    let mut state = with_file();
    assert!(state.begin_upload(true));
    assert!(state.loading);
    assert!(!state.begin_upload(true));
}

#[test]
fn failed_chain_shows_generic_message() {
    let mut state = with_file();
    state.begin_upload(true);
    state.finish_upload(Err(ApiError::Status(500)));
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred while processing the file.")
    );
    assert!(!state.has_results());
}

#[test]
fn successful_chain_stores_leads() {
    let mut state = with_file();
    state.begin_upload(true);
    state.finish_upload(Ok(leads::parse_scored_csv("name,score\nAda,85\n")));
    assert!(state.has_results());
    assert_eq!(state.leads[0].interpretation(), "Hot Lead");
    assert_eq!(state.error, None);
}
