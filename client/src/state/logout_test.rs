use super::*;

#[test]
fn phases_advance_in_order() {
    let phase = LogoutPhase::default();
    assert_eq!(phase, LogoutPhase::LoggingOut);
    assert_eq!(phase.next(), LogoutPhase::LoggedOut);
    assert_eq!(phase.next().next(), LogoutPhase::Redirecting);
    assert_eq!(LogoutPhase::Redirecting.next(), LogoutPhase::Redirecting);
}

#[test]
fn delays_total_four_and_a_half_seconds() {
    assert_eq!(LogoutPhase::LoggingOut.delay(), Some(Duration::from_millis(3000)));
    assert_eq!(LogoutPhase::LoggedOut.delay(), Some(Duration::from_millis(1500)));
    assert_eq!(LogoutPhase::Redirecting.delay(), None);
}

#[test]
fn only_logged_out_clears_token() {
    assert!(!LogoutPhase::LoggingOut.clears_token());
    assert!(LogoutPhase::LoggedOut.clears_token());
    assert!(!LogoutPhase::Redirecting.clears_token());
}

#[test]
fn copy_changes_after_token_is_cleared() {
    assert_eq!(LogoutPhase::LoggingOut.title(), "Logging out...");
    assert_eq!(LogoutPhase::LoggedOut.title(), "Logged out successfully!");
    assert_eq!(LogoutPhase::LoggedOut.subtitle(), "Redirecting to dashboard...");
}
