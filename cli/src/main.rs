mod backend;
mod render;
mod session;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use wire::ApiError;
use wire::auth::{LoginForm, RegisterRequest, Role};
use wire::campaign::{Audience, CampaignForm};
use wire::content::{self, ContentDraft, ContentType, GenerateContentRequest, Tone};
use wire::endpoints::DownloadOptions;
use wire::leads::{self, LeadStep, ScoringMode};

use backend::Backend;
use session::TokenStore;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{}: {source}", .step.failure_message())]
    Step { step: LeadStep, source: Box<CliError> },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error on {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Attribute this error to a step of the lead-scoring chain.
    pub fn in_step(self, step: LeadStep) -> Self {
        Self::Step {
            step,
            source: Box::new(self),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "adpilot-cli", about = "AdPilot marketing backend CLI")]
struct Cli {
    #[arg(long, env = "ADPILOT_BASE_URL", default_value = wire::endpoints::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "ADPILOT_TOKEN_FILE", default_value = ".adpilot-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and store it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADPILOT_PASSWORD")]
        password: String,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "ADPILOT_PASSWORD")]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Admin)]
        role: RoleArg,
        #[arg(long, default_value_t = false)]
        inactive: bool,
    },
    /// Forget the stored token.
    Logout,
    /// Show the signed-in account.
    Me,
    Leads(LeadsCommand),
    Content(ContentCommand),
    Campaign(CampaignCommand),
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
struct LeadsCommand {
    #[command(subcommand)]
    command: LeadsSubcommand,
}

#[derive(Args, Debug, Clone, Copy)]
struct DownloadArgs {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    include_empty_scores: Option<bool>,
}

impl From<DownloadArgs> for DownloadOptions {
    fn from(args: DownloadArgs) -> Self {
        Self {
            limit: args.limit,
            include_empty_scores: args.include_empty_scores,
        }
    }
}

#[derive(Subcommand, Debug)]
enum LeadsSubcommand {
    /// Upload a CSV, score it and print the results.
    Score {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ModeArg::ScoreAll)]
        mode: ModeArg,
        #[command(flatten)]
        download: DownloadArgs,
    },
    /// Save the scored CSV to disk.
    Download {
        #[arg(long, default_value = leads::SCORED_CSV_FILE_NAME)]
        output: PathBuf,
        #[command(flatten)]
        download: DownloadArgs,
    },
}

#[derive(Args, Debug)]
struct ContentCommand {
    #[command(subcommand)]
    command: ContentSubcommand,
}

#[derive(Args, Debug, Clone)]
struct ContentOptions {
    #[arg(long, value_parser = parse_tone, default_value = "professional")]
    tone: Tone,
    #[arg(long, value_parser = parse_content_type, default_value = "social_post")]
    content_type: ContentType,
    #[arg(long, default_value = "")]
    industry: String,
    /// Comma-separated keywords.
    #[arg(long, default_value = "")]
    keywords: String,
}

#[derive(Subcommand, Debug)]
enum ContentSubcommand {
    Generate {
        #[command(flatten)]
        options: ContentOptions,
        #[arg(long)]
        prompt: Option<String>,
    },
    Save {
        #[command(flatten)]
        options: ContentOptions,
        /// Markdown file to save; `-` is not supported.
        file: PathBuf,
        #[arg(long)]
        scheduled_date: Option<NaiveDate>,
    },
}

#[derive(Args, Debug)]
struct CampaignCommand {
    #[command(subcommand)]
    command: CampaignSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignSubcommand {
    Create(CampaignArgs),
    /// List campaigns the backend has scheduled.
    Scheduled,
}

#[derive(Args, Debug)]
struct CampaignArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    /// `YYYY-MM-DD`; defaults to today.
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long, default_value = wire::campaign::DEFAULT_START_TIME)]
    start_time: String,
    #[arg(long)]
    end_date: Option<String>,
    #[arg(long, default_value = wire::campaign::DEFAULT_END_TIME)]
    end_time: String,
    #[arg(long, value_parser = parse_audience, default_value = "general")]
    audience: Audience,
    #[arg(long, default_value = wire::campaign::DEFAULT_BUDGET)]
    budget: String,
}

impl CampaignArgs {
    fn into_form(self, today: NaiveDate) -> CampaignForm {
        let blank = CampaignForm::new(today);
        CampaignForm {
            name: self.name,
            description: self.description,
            start_date: self.start_date.unwrap_or(blank.start_date),
            start_time: self.start_time,
            end_date: self.end_date.unwrap_or(blank.end_date),
            end_time: self.end_time,
            audience: self.audience,
            budget: self.budget,
        }
    }
}

#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("input").required(true).args(["message", "file"]))]
struct ChatArgs {
    message: Option<String>,
    /// Send a file to the upload endpoint instead of a message.
    #[arg(long, conflicts_with = "message")]
    file: Option<PathBuf>,
    /// Use the stateless chat transport.
    #[arg(long, default_value_t = false)]
    generic: bool,
    /// Overrides the persisted session id for this call.
    #[arg(long, env = "ADPILOT_CHAT_SESSION")]
    session_id: Option<String>,
    #[arg(long, env = "ADPILOT_CHAT_SESSION_FILE", default_value = ".adpilot-chat-session")]
    session_file: PathBuf,
}

impl ChatArgs {
    /// Explicit id, else the persisted one, else a fresh id that is saved
    /// for the next call.
    fn resolve_session_id(&self) -> Result<String, CliError> {
        if let Some(id) = self.session_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(id.to_owned());
        }
        let store = TokenStore::new(&self.session_file);
        let (id, created) = store
            .load_or_else(|| uuid::Uuid::new_v4().to_string())
            .map_err(|source| CliError::Io {
                path: self.session_file.display().to_string(),
                source,
            })?;
        if created {
            tracing::info!(session_id = %id, "new chat session");
        }
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    OnUpload,
    ScoreAll,
}

impl From<ModeArg> for ScoringMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::OnUpload => Self::OnUpload,
            ModeArg::ScoreAll => Self::ScoreAll,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Self::Admin,
            RoleArg::User => Self::User,
        }
    }
}

fn parse_tone(raw: &str) -> Result<Tone, String> {
    Tone::parse(raw).ok_or_else(|| format!("unknown tone `{raw}`"))
}

fn parse_content_type(raw: &str) -> Result<ContentType, String> {
    ContentType::parse(raw).ok_or_else(|| format!("unknown content type `{raw}`"))
}

fn parse_audience(raw: &str) -> Result<Audience, String> {
    Audience::parse(raw).ok_or_else(|| format!("unknown audience `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let backend = Backend::new(cli.base_url, TokenStore::new(cli.token_file));

    match cli.command {
        Command::Login { email, password } => run_login(&backend, email, password).await,
        Command::Register {
            email,
            username,
            password,
            role,
            inactive,
        } => {
            let body = RegisterRequest {
                email,
                username,
                password,
                role: role.into(),
                is_active: !inactive,
            };
            run_register(&backend, &body).await
        }
        Command::Logout => {
            backend.store().clear().map_err(|source| io_error(&backend, source))?;
            println!("Logged out.");
            Ok(())
        }
        Command::Me => {
            let user = backend.current_user().await?;
            println!("{}", render::profile(&user));
            Ok(())
        }
        Command::Leads(command) => run_leads(&backend, command).await,
        Command::Content(command) => run_content(&backend, command).await,
        Command::Campaign(command) => run_campaign(&backend, command).await,
        Command::Chat(args) => run_chat(&backend, args).await,
    }
}

fn io_error(backend: &Backend, source: std::io::Error) -> CliError {
    CliError::Io {
        path: backend.store().path().display().to_string(),
        source,
    }
}

async fn run_login(backend: &Backend, email: String, password: String) -> Result<(), CliError> {
    let form = LoginForm {
        username: email,
        password,
    };
    let response = backend.login(&form).await?;
    store_token(backend, &response.access_token)?;
    println!("Login successful.");
    Ok(())
}

async fn run_register(backend: &Backend, body: &RegisterRequest) -> Result<(), CliError> {
    let response = backend.register(body).await?;
    store_token(backend, &response.access_token)?;
    println!("Registration successful.");
    if !response.extra.is_empty() {
        println!("{}", serde_json::to_string_pretty(&response.extra)?);
    }
    Ok(())
}

fn store_token(backend: &Backend, token: &str) -> Result<(), CliError> {
    if token.trim().is_empty() {
        return Err(ApiError::Decode("response carried an empty access_token".to_owned()).into());
    }
    backend.store().save(token).map_err(|source| io_error(backend, source))?;
    match wire::auth::decode_token_payload(token) {
        Ok(payload) => tracing::info!(%payload, "token stored"),
        Err(e) => tracing::warn!(error = %e, "failed to decode token payload"),
    }
    Ok(())
}

async fn run_leads(backend: &Backend, command: LeadsCommand) -> Result<(), CliError> {
    match command.command {
        LeadsSubcommand::Score { file, mode, download } => {
            let csv = backend.run_lead_scoring(&file, mode.into(), download.into()).await?;
            let scored = leads::parse_scored_csv(&csv);
            println!("{}", render::lead_table(&scored));
            Ok(())
        }
        LeadsSubcommand::Download { output, download } => {
            let csv = backend.scored_csv(download.into()).await?;
            tokio::fs::write(&output, csv).await.map_err(|source| CliError::Io {
                path: output.display().to_string(),
                source,
            })?;
            println!("Saved {}", output.display());
            Ok(())
        }
    }
}

async fn run_content(backend: &Backend, command: ContentCommand) -> Result<(), CliError> {
    match command.command {
        ContentSubcommand::Generate { options, prompt } => {
            let body = GenerateContentRequest {
                prompt: prompt.filter(|p| !p.trim().is_empty()),
                tone: options.tone,
                content_type: options.content_type,
                industry: options.industry.trim().to_owned(),
                keywords: content::parse_keywords(&options.keywords),
            };
            let text = backend.generate_content(&body).await?;
            println!("{}", text.trim());
            Ok(())
        }
        ContentSubcommand::Save {
            options,
            file,
            scheduled_date,
        } => {
            let raw = tokio::fs::read_to_string(&file).await.map_err(|source| CliError::Io {
                path: file.display().to_string(),
                source,
            })?;
            let draft = ContentDraft::new(
                content::clamp_to_limit(&raw),
                options.tone,
                options.content_type,
                options.industry.trim().to_owned(),
                content::parse_keywords(&options.keywords),
                scheduled_date,
            );
            draft
                .validate()
                .map_err(|msg| ApiError::Validation(msg.to_owned()))?;
            let saved = backend.save_content(&draft).await?;
            println!("Saved: {}", draft.preview());
            tracing::debug!(%saved, "content save response");
            Ok(())
        }
    }
}

async fn run_campaign(backend: &Backend, command: CampaignCommand) -> Result<(), CliError> {
    match command.command {
        CampaignSubcommand::Create(args) => {
            let today = chrono::Local::now().date_naive();
            let campaign = args
                .into_form(today)
                .to_campaign()
                .map_err(|msg| ApiError::Validation(msg.to_owned()))?;
            let saved = backend.create_campaign(&campaign).await?;
            println!("{}", render::campaign_table(std::slice::from_ref(&saved)));
            Ok(())
        }
        CampaignSubcommand::Scheduled => {
            let campaigns = backend.scheduled_campaigns().await?;
            if campaigns.is_empty() {
                println!("No scheduled campaigns found.");
            } else {
                println!("{}", render::campaign_table(&campaigns));
            }
            Ok(())
        }
    }
}

async fn run_chat(backend: &Backend, args: ChatArgs) -> Result<(), CliError> {
    let reply = if let Some(file) = &args.file {
        backend.chat_upload(file).await
    } else {
        let message = args.message.as_deref().unwrap_or_default().trim();
        if message.is_empty() {
            return Ok(());
        }
        if args.generic {
            backend.generic_chat(message).await
        } else {
            let session_id = args.resolve_session_id()?;
            backend.chat(&session_id, message).await
        }
    };
    match reply {
        Ok(reply) => println!("{}", reply.reply),
        Err(e) => {
            tracing::error!(error = %e, "chat failed");
            println!("{}", wire::chat::ERROR_REPLY);
        }
    }
    Ok(())
}
