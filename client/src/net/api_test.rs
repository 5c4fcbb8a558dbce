use super::*;

#[test]
fn auth_header_requires_stored_token() {
    assert_eq!(auth_header(), Err(ApiError::MissingToken));
}

#[test]
fn authenticated_helpers_fail_fast_without_token() {
    let result = block_on(fetch_current_user());
    assert_eq!(result, Err(ApiError::MissingToken));
    let result = block_on(score_all_leads());
    assert_eq!(result, Err(ApiError::MissingToken));
    let result = block_on(fetch_scheduled_campaigns());
    assert_eq!(result, Err(ApiError::MissingToken));
}

#[test]
fn missing_token_message_is_user_facing() {
    let err = block_on(fetch_scored_csv(DownloadOptions::default())).unwrap_err();
    assert_eq!(err.to_string(), "User not authenticated.");
}

#[test]
fn scored_leads_keeps_raw_csv() {
    let csv = "name,score\nAda,85\nBob,\n".to_owned();
    let result = scored_leads(csv.clone());
    assert_eq!(result.csv, csv);
    assert_eq!(result.leads.len(), 2);
    assert_eq!(result.leads[0].interpretation(), "Hot Lead");
    assert_eq!(result.leads[1].interpretation(), "Unscored");
}

#[test]
fn error_helpers_preserve_messages() {
    assert_eq!(network_error("offline"), ApiError::Network("offline".to_owned()));
    assert_eq!(decode_error("bad json"), ApiError::Decode("bad json".to_owned()));
}

/// Drive a future that never awaits a real pending resource.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
