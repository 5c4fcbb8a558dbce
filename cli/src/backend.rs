//! HTTP client for the marketing backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified with `wire::ApiError`. A 401 on an
//! authenticated call clears the token file, the headless counterpart of the
//! browser's redirect to `/login`.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::path::Path;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::ApiError;
use wire::auth::{LoginForm, RegisterRequest, TokenResponse, UserProfile};
use wire::campaign::Campaign;
use wire::chat::{ChatReply, ChatRequest, GenericChatRequest};
use wire::content::{ContentDraft, GenerateContentRequest, GenerateContentResponse};
use wire::endpoints::{self, DownloadOptions};
use wire::leads::{LeadStep, ScoringMode};

use crate::CliError;
use crate::session::TokenStore;

pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    store: TokenStore,
}

impl Backend {
    pub fn new(base_url: String, store: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    fn bearer(&self) -> Result<String, CliError> {
        let token = self.store.load().map_err(|source| CliError::Io {
            path: self.store.path().display().to_string(),
            source,
        })?;
        token
            .map(|t| endpoints::bearer(&t))
            .ok_or(CliError::Api(ApiError::MissingToken))
    }

    /// Send an authenticated request and return the successful response.
    async fn send_authed(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, CliError> {
        let response = request.header(AUTHORIZATION, self.bearer()?).send().await?;
        let status = response.status().as_u16();
        if wire::error::is_success(status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        if err.is_unauthorized() {
            tracing::warn!(path = %self.store.path().display(), "session expired; clearing token");
            if let Err(e) = self.store.clear() {
                tracing::warn!(error = %e, path = %self.store.path().display(), "failed to clear token file");
            }
        }
        Err(CliError::Api(err))
    }

    async fn send_public(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, CliError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        if wire::error::is_success(status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Api(ApiError::from_public_response(status, &body)))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| CliError::Api(ApiError::Decode(e.to_string())))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, CliError> {
        let response = self.send_authed(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn login(&self, form: &LoginForm) -> Result<TokenResponse, CliError> {
        let request = self.http.post(self.url(endpoints::AUTH_LOGIN)).form(&form.pairs());
        Self::decode(self.send_public(request).await?).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<TokenResponse, CliError> {
        let request = self.http.post(self.url(endpoints::AUTH_REGISTER)).json(body);
        Self::decode(self.send_public(request).await?).await
    }

    pub async fn current_user(&self) -> Result<UserProfile, CliError> {
        let response = self.send_authed(self.http.get(self.url(endpoints::USERS_ME))).await?;
        Self::decode(response).await
    }

    pub async fn upload_leads_csv(&self, path: &Path) -> Result<(), CliError> {
        let form = Form::new().part("file", csv_part(path).await?);
        let request = self.http.post(self.url(endpoints::LEADS_UPLOAD_CSV)).multipart(form);
        self.send_authed(request).await?;
        Ok(())
    }

    pub async fn score_all_leads(&self) -> Result<(), CliError> {
        self.send_authed(self.http.post(self.url(endpoints::LEADS_SCORE_ALL))).await?;
        Ok(())
    }

    pub async fn scored_csv(&self, options: DownloadOptions) -> Result<String, CliError> {
        let url = self.url(&endpoints::download_scored_csv_path(options));
        let response = self.send_authed(self.http.get(url)).await?;
        Ok(response.text().await?)
    }

    /// Upload, optionally score, then fetch the scored CSV.
    ///
    /// The first failing step aborts the chain and is named in the error.
    pub async fn run_lead_scoring(
        &self,
        path: &Path,
        mode: ScoringMode,
        options: DownloadOptions,
    ) -> Result<String, CliError> {
        let mut csv = String::new();
        for &step in mode.steps() {
            tracing::info!(step = ?step, "lead scoring");
            let result = match step {
                LeadStep::Upload => self.upload_leads_csv(path).await,
                LeadStep::ScoreAll => self.score_all_leads().await,
                LeadStep::FetchScored => self.scored_csv(options).await.map(|text| csv = text),
            };
            result.map_err(|e| e.in_step(step))?;
        }
        Ok(csv)
    }

    pub async fn generate_content(&self, body: &GenerateContentRequest) -> Result<String, CliError> {
        let reply: GenerateContentResponse = self.post_json(endpoints::CONTENT_GENERATE, body).await?;
        Ok(reply.content)
    }

    pub async fn save_content(&self, draft: &ContentDraft) -> Result<serde_json::Value, CliError> {
        self.post_json(endpoints::CONTENT_SAVE, draft).await
    }

    pub async fn create_campaign(&self, campaign: &Campaign) -> Result<Campaign, CliError> {
        self.post_json(endpoints::SOCIAL_CAMPAIGNS, campaign).await
    }

    pub async fn scheduled_campaigns(&self) -> Result<Vec<Campaign>, CliError> {
        let url = self.url(endpoints::SOCIAL_PROCESS_SCHEDULED_POSTS);
        let response = self.send_authed(self.http.get(url)).await?;
        let campaigns: Option<Vec<Campaign>> = Self::decode(response).await?;
        Ok(campaigns.unwrap_or_default())
    }

    pub async fn chat(&self, session_id: &str, message: &str) -> Result<ChatReply, CliError> {
        let body = ChatRequest {
            session_id: session_id.to_owned(),
            message: message.to_owned(),
        };
        let request = self.with_optional_auth(self.http.post(self.url(endpoints::CHATBOT_CHAT)).json(&body))?;
        Self::decode(self.send_public(request).await?).await
    }

    pub async fn generic_chat(&self, message: &str) -> Result<ChatReply, CliError> {
        let body = GenericChatRequest {
            message: message.to_owned(),
        };
        let request = self.http.post(self.url(endpoints::GENERIC_CHAT)).json(&body);
        Self::decode(self.send_public(request).await?).await
    }

    pub async fn chat_upload(&self, path: &Path) -> Result<ChatReply, CliError> {
        let form = Form::new().part("file", file_part(path, "application/octet-stream").await?);
        let request = self.http.post(self.url(endpoints::GENERIC_UPLOAD_FILE)).multipart(form);
        Self::decode(self.send_public(request).await?).await
    }

    fn with_optional_auth(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, CliError> {
        match self.bearer() {
            Ok(auth) => Ok(request.header(AUTHORIZATION, auth)),
            Err(CliError::Api(ApiError::MissingToken)) => Ok(request),
            Err(e) => Err(e),
        }
    }
}

async fn csv_part(path: &Path) -> Result<Part, CliError> {
    let name = file_name(path);
    if !wire::leads::is_csv_upload(&name, "") {
        return Err(CliError::Api(ApiError::Validation(
            wire::leads::INVALID_CSV_FILE.to_owned(),
        )));
    }
    file_part(path, "text/csv").await
}

async fn file_part(path: &Path, mime: &str) -> Result<Part, CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Part::bytes(bytes).file_name(file_name(path)).mime_str(mime)?)
}

/// Final path component as sent in the multipart `filename`.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
}
