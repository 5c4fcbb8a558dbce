use super::*;

fn scratch_backend() -> Backend {
    let path = std::env::temp_dir().join(format!("adpilot-backend-{}", uuid::Uuid::new_v4()));
    Backend::new("http://localhost:8000/".to_owned(), TokenStore::new(path))
}

#[test]
fn urls_join_without_double_slash() {
    let backend = scratch_backend();
    assert_eq!(backend.url(endpoints::USERS_ME), "http://localhost:8000/api/v1/users/me");
}

#[test]
fn bearer_requires_token_file() {
    let backend = scratch_backend();
    assert!(matches!(backend.bearer(), Err(CliError::Api(ApiError::MissingToken))));
    backend.store().save("tok").unwrap();
    assert_eq!(backend.bearer().unwrap(), "Bearer tok");
    backend.store().clear().unwrap();
}

#[test]
fn file_name_uses_last_component() {
    assert_eq!(file_name(Path::new("/tmp/exports/leads.csv")), "leads.csv");
    assert_eq!(file_name(Path::new("/")), "");
}

#[tokio::test]
async fn non_csv_upload_is_rejected_before_reading() {
    let err = csv_part(Path::new("/does/not/exist/photo.png")).await.unwrap_err();
    assert_eq!(err.to_string(), "Please upload a valid CSV file.");
}

#[tokio::test]
async fn authenticated_call_without_token_never_hits_network() {
    let backend = scratch_backend();
    let err = backend.current_user().await.unwrap_err();
    assert_eq!(err.to_string(), "User not authenticated.");
}

#[tokio::test]
async fn failed_chain_names_first_step() {
    let backend = scratch_backend();
    let err = backend
        .run_lead_scoring(Path::new("leads.csv"), ScoringMode::ScoreAll, DownloadOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("CSV upload failed"));
}

/// Serve one connection with `status_line` and a JSON `body`, then close.
async fn answer_once(status_line: &'static str, body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}")
}

fn local_backend(base_url: String) -> Backend {
    let path = std::env::temp_dir().join(format!("adpilot-backend-{}", uuid::Uuid::new_v4()));
    Backend {
        http: reqwest::Client::builder().no_proxy().build().unwrap(),
        base_url,
        store: TokenStore::new(path),
    }
}

#[tokio::test]
async fn unauthorized_response_clears_token_file() {
    let base = answer_once("401 Unauthorized", r#"{"detail":"Could not validate credentials"}"#).await;
    let backend = local_backend(base);
    backend.store().save("stale").unwrap();

    let err = backend.current_user().await.unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Unauthorized)));
    assert_eq!(backend.store().load().unwrap(), None);
}

#[tokio::test]
async fn rejected_response_keeps_token_file() {
    let base = answer_once("400 Bad Request", r#"{"detail":"Bad input"}"#).await;
    let backend = local_backend(base);
    backend.store().save("tok").unwrap();

    let err = backend.current_user().await.unwrap_err();

    assert_eq!(err.to_string(), "Bad input");
    assert_eq!(backend.store().load().unwrap().as_deref(), Some("tok"));
    backend.store().clear().unwrap();
}
