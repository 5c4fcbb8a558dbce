use super::*;

#[test]
fn api_url_joins_configured_base() {
    let url = api_url(endpoints::USERS_ME);
    assert!(url.starts_with(api_base().trim_end_matches('/')));
    assert!(url.ends_with("/api/v1/users/me"));
}

#[test]
fn api_base_is_never_empty() {
    assert!(!api_base().is_empty());
}
