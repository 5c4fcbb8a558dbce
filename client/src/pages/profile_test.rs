use super::*;

#[test]
fn failure_prefers_server_detail() {
    let err = ApiError::Rejected {
        status: 404,
        detail: "User not found".to_owned(),
    };
    assert_eq!(profile_failure_message(&err), "User not found");
}

#[test]
fn failure_without_detail_uses_fetch_message() {
    assert_eq!(profile_failure_message(&ApiError::Status(500)), FETCH_FAILED);
}

#[test]
fn transport_failure_is_unexpected() {
    assert_eq!(profile_failure_message(&ApiError::Network("offline".to_owned())), UNEXPECTED);
}

#[test]
fn active_flag_renders_yes_no() {
    assert_eq!(active_label(true), "Yes");
    assert_eq!(active_label(false), "No");
}
