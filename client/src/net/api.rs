//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Authenticated helpers read the
//! token from storage per call and fail with `MissingToken` before touching
//! the network. A 401 from any of them runs the shared unauthorized handler
//! (clear token, redirect to `/login`) before the error reaches the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::ApiError;
use wire::endpoints::{self, DownloadOptions};
use wire::leads::Lead;
#[cfg(feature = "hydrate")]
use wire::leads::ScoringMode;

use super::types::{
    Campaign, ChatReply, ContentDraft, GenerateContentRequest, LoginForm, RegisterRequest, TokenResponse,
    UserProfile,
};
#[cfg(feature = "hydrate")]
use crate::config;
#[cfg(feature = "hydrate")]
use crate::util::auth::handle_unauthorized;
use crate::util::storage;

/// Result of one run of the lead-scoring chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoredLeads {
    pub leads: Vec<Lead>,
    /// Raw scored CSV as returned by the backend.
    pub csv: String,
}

/// `Authorization` header value from the stored token.
fn auth_header() -> Result<String, ApiError> {
    storage::load_token()
        .map(|token| endpoints::bearer(&token))
        .ok_or(ApiError::MissingToken)
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn js_error(e: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

/// Send a request and map non-2xx responses into [`ApiError`].
#[cfg(feature = "hydrate")]
async fn send_authed(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(network_error)?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    if err.is_unauthorized() {
        handle_unauthorized();
    }
    log::error!("{} failed: {err}", resp.url());
    Err(err)
}

/// Send an unauthenticated request (login, register).
#[cfg(feature = "hydrate")]
async fn send_public(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(network_error)?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_public_response(status, &body))
}

#[cfg(feature = "hydrate")]
fn file_form(file: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| js_error(&e))?;
    Ok(form)
}

/// Exchange credentials for a token via `POST /api/v1/auth/login`.
///
/// # Errors
///
/// Returns the server's refusal or a transport error.
pub async fn login(form: &LoginForm) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| js_error(&e))?;
        for (key, value) in form.pairs() {
            params.append(key, value);
        }
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::AUTH_LOGIN))
            .body(params)
            .map_err(network_error)?;
        let resp = send_public(request).await?;
        resp.json::<TokenResponse>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(unavailable())
    }
}

/// Create an account via `POST /api/v1/auth/register`.
///
/// # Errors
///
/// Returns the server's refusal or a transport error.
pub async fn register(request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::AUTH_REGISTER))
            .json(request)
            .map_err(network_error)?;
        let resp = send_public(request).await?;
        resp.json::<TokenResponse>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Fetch the signed-in account from `GET /api/v1/users/me`.
///
/// # Errors
///
/// Returns `MissingToken` without a stored token, otherwise any request error.
pub async fn fetch_current_user() -> Result<UserProfile, ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&config::api_url(endpoints::USERS_ME))
            .header("Authorization", &auth)
            .build()
            .map_err(network_error)?;
        let resp = send_authed(request).await?;
        resp.json::<UserProfile>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(unavailable())
    }
}

/// Upload a CSV to `POST /api/v1/leads/upload-csv` (multipart field `file`).
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
#[cfg(feature = "hydrate")]
pub async fn upload_leads_csv(file: &web_sys::File) -> Result<(), ApiError> {
    let auth = auth_header()?;
    let request = gloo_net::http::Request::post(&config::api_url(endpoints::LEADS_UPLOAD_CSV))
        .header("Authorization", &auth)
        .body(file_form(file)?)
        .map_err(network_error)?;
    send_authed(request).await?;
    Ok(())
}

/// Ask the backend to score every uploaded lead.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn score_all_leads() -> Result<(), ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::LEADS_SCORE_ALL))
            .header("Authorization", &auth)
            .build()
            .map_err(network_error)?;
        send_authed(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(unavailable())
    }
}

/// Fetch the scored CSV as text.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn fetch_scored_csv(options: DownloadOptions) -> Result<String, ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let url = config::api_url(&endpoints::download_scored_csv_path(options));
        let request = gloo_net::http::Request::get(&url)
            .header("Authorization", &auth)
            .build()
            .map_err(network_error)?;
        let resp = send_authed(request).await?;
        resp.text().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, options);
        Err(unavailable())
    }
}

/// Run the upload, score and fetch chain for `file`.
///
/// Steps run strictly in order and the first failure aborts the chain.
///
/// # Errors
///
/// Returns the error of the failing step.
#[cfg(feature = "hydrate")]
pub async fn run_lead_scoring(file: &web_sys::File, mode: ScoringMode) -> Result<ScoredLeads, ApiError> {
    use wire::leads::LeadStep;

    let mut csv = String::new();
    for step in mode.steps() {
        let result = match step {
            LeadStep::Upload => upload_leads_csv(file).await,
            LeadStep::ScoreAll => score_all_leads().await,
            LeadStep::FetchScored => fetch_scored_csv(DownloadOptions::default())
                .await
                .map(|text| csv = text),
        };
        if let Err(e) = result {
            log::error!("{}: {e}", step.failure_message());
            return Err(e);
        }
    }
    Ok(scored_leads(csv))
}

/// Parse a scored CSV body into the dashboard result.
#[cfg(any(test, feature = "hydrate"))]
fn scored_leads(csv: String) -> ScoredLeads {
    ScoredLeads {
        leads: wire::leads::parse_scored_csv(&csv),
        csv,
    }
}

/// Fetch the scored CSV and hand it to the browser as `lead_scores.csv`.
///
/// # Errors
///
/// Returns any request error, or a `Validation` error if the browser refused
/// the download.
pub async fn download_scored_csv() -> Result<(), ApiError> {
    let csv = fetch_scored_csv(DownloadOptions::default()).await?;
    crate::util::download::save_text_file(wire::leads::SCORED_CSV_FILE_NAME, &csv, "text/csv")
        .map_err(ApiError::Validation)
}

/// Ask the backend for generated copy.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn generate_content(request: &GenerateContentRequest) -> Result<String, ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::CONTENT_GENERATE))
            .header("Authorization", &auth)
            .json(request)
            .map_err(network_error)?;
        let resp = send_authed(request).await?;
        let body: wire::content::GenerateContentResponse = resp.json().await.map_err(decode_error)?;
        Ok(body.content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(unavailable())
    }
}

/// Persist a content draft.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn save_content(draft: &ContentDraft) -> Result<(), ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::CONTENT_SAVE))
            .header("Authorization", &auth)
            .json(draft)
            .map_err(network_error)?;
        send_authed(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, draft);
        Err(unavailable())
    }
}

/// Create a campaign and return the backend's stored record.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn create_campaign(campaign: &Campaign) -> Result<Campaign, ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config::api_url(endpoints::SOCIAL_CAMPAIGNS))
            .header("Authorization", &auth)
            .json(campaign)
            .map_err(network_error)?;
        let resp = send_authed(request).await?;
        resp.json::<Campaign>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, campaign);
        Err(unavailable())
    }
}

/// List campaigns the backend has scheduled.
///
/// # Errors
///
/// Returns `MissingToken` or any request error.
pub async fn fetch_scheduled_campaigns() -> Result<Vec<Campaign>, ApiError> {
    let auth = auth_header()?;
    #[cfg(feature = "hydrate")]
    {
        let url = config::api_url(endpoints::SOCIAL_PROCESS_SCHEDULED_POSTS);
        let request = gloo_net::http::Request::get(&url)
            .header("Authorization", &auth)
            .build()
            .map_err(network_error)?;
        let resp = send_authed(request).await?;
        let body: Option<Vec<Campaign>> = resp.json().await.map_err(decode_error)?;
        Ok(body.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(unavailable())
    }
}

/// Send one message to the session-aware chatbot.
///
/// The chat endpoints are public; the token is attached when present.
///
/// # Errors
///
/// Returns any request error.
pub async fn send_chat(session_id: &str, message: &str) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = wire::chat::ChatRequest {
            session_id: session_id.to_owned(),
            message: message.to_owned(),
        };
        let mut builder = gloo_net::http::Request::post(&config::api_url(endpoints::CHATBOT_CHAT));
        if let Ok(auth) = auth_header() {
            builder = builder.header("Authorization", &auth);
        }
        let request = builder.json(&body).map_err(network_error)?;
        let resp = send_authed(request).await?;
        resp.json::<ChatReply>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, message);
        Err(unavailable())
    }
}

/// Send a chat attachment to `POST /api/upload-file`.
///
/// # Errors
///
/// Returns any request error.
#[cfg(feature = "hydrate")]
pub async fn upload_chat_file(file: &web_sys::File) -> Result<ChatReply, ApiError> {
    let request = gloo_net::http::Request::post(&config::api_url(endpoints::GENERIC_UPLOAD_FILE))
        .body(file_form(file)?)
        .map_err(network_error)?;
    let resp = send_authed(request).await?;
    resp.json::<ChatReply>().await.map_err(decode_error)
}
