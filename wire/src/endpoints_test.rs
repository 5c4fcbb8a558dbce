use super::*;

#[test]
fn url_joins_base_and_path() {
    assert_eq!(
        url("http://localhost:8000", AUTH_LOGIN),
        "http://localhost:8000/api/v1/auth/login"
    );
}

#[test]
fn url_strips_trailing_slashes_from_base() {
    assert_eq!(url("http://api.test//", USERS_ME), "http://api.test/api/v1/users/me");
}

#[test]
fn url_inserts_separator_for_relative_path() {
    assert_eq!(url("http://api.test", "healthz"), "http://api.test/healthz");
}

#[test]
fn url_with_empty_base_keeps_path_relative_to_origin() {
    assert_eq!(url("", GENERIC_CHAT), "/api/chat");
}

#[test]
fn download_path_without_options_has_no_query() {
    assert_eq!(
        download_scored_csv_path(DownloadOptions::default()),
        "/api/v1/leads/download-scored-csv"
    );
}

#[test]
fn download_path_renders_limit_and_empty_score_flag() {
    let options = DownloadOptions {
        limit: Some(25),
        include_empty_scores: Some(false),
    };
    assert_eq!(
        download_scored_csv_path(options),
        "/api/v1/leads/download-scored-csv?limit=25&include_empty_scores=false"
    );
}

#[test]
fn download_path_renders_single_flag() {
    let options = DownloadOptions {
        limit: None,
        include_empty_scores: Some(true),
    };
    assert_eq!(options.query_string(), "?include_empty_scores=true");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}
