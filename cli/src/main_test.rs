use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["adpilot-cli", "--base-url", "http://api.test"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn step_errors_lead_with_failure_message() {
    let err = CliError::Api(ApiError::Status(500)).in_step(LeadStep::ScoreAll);
    assert_eq!(err.to_string(), "Scoring failed: request failed with status 500");
}

#[test]
fn api_errors_display_transparently() {
    let err: CliError = ApiError::Validation("Campaign name is required.".to_owned()).into();
    assert_eq!(err.to_string(), "Campaign name is required.");
}

#[test]
fn leads_score_defaults_to_score_all() {
    let cli = parse(&["leads", "score", "leads.csv"]);
    let Command::Leads(LeadsCommand {
        command: LeadsSubcommand::Score { file, mode, download },
    }) = cli.command
    else {
        panic!("expected leads score");
    };
    assert_eq!(file, PathBuf::from("leads.csv"));
    assert_eq!(ScoringMode::from(mode), ScoringMode::ScoreAll);
    assert_eq!(DownloadOptions::from(download), DownloadOptions::default());
}

#[test]
fn leads_download_accepts_query_options() {
    let cli = parse(&["leads", "download", "--limit", "10", "--include-empty-scores", "false"]);
    let Command::Leads(LeadsCommand {
        command: LeadsSubcommand::Download { output, download },
    }) = cli.command
    else {
        panic!("expected leads download");
    };
    assert_eq!(output, PathBuf::from(leads::SCORED_CSV_FILE_NAME));
    assert_eq!(download.limit, Some(10));
    assert_eq!(download.include_empty_scores, Some(false));
}

#[test]
fn content_generate_parses_enums() {
    let cli = parse(&[
        "content",
        "generate",
        "--tone",
        "casual",
        "--content-type",
        "blog_post",
        "--keywords",
        "spring, sale",
    ]);
    let Command::Content(ContentCommand {
        command: ContentSubcommand::Generate { options, prompt },
    }) = cli.command
    else {
        panic!("expected content generate");
    };
    assert_eq!(options.tone, Tone::Casual);
    assert_eq!(options.content_type, ContentType::BlogPost);
    assert_eq!(options.keywords, "spring, sale");
    assert_eq!(prompt, None);
}

#[test]
fn unknown_tone_is_rejected() {
    let err = Cli::try_parse_from(["adpilot-cli", "content", "generate", "--tone", "angry"]).unwrap_err();
    assert!(err.to_string().contains("unknown tone `angry`"));
}

#[test]
fn campaign_args_fill_form_defaults() {
    let cli = parse(&["campaign", "create", "--name", "Launch", "--audience", "vip"]);
    let Command::Campaign(CampaignCommand {
        command: CampaignSubcommand::Create(args),
    }) = cli.command
    else {
        panic!("expected campaign create");
    };
    let today = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
    let form = args.into_form(today);
    assert_eq!(form.start_date, "2026-05-04");
    assert_eq!(form.end_time, "17:00");
    assert_eq!(form.audience, Audience::Vip);
    let campaign = form.to_campaign().unwrap();
    assert_eq!(campaign.budget, 1000.0);
}

#[test]
fn chat_requires_message_or_file() {
    assert!(Cli::try_parse_from(["adpilot-cli", "chat"]).is_err());
    assert!(Cli::try_parse_from(["adpilot-cli", "chat", "hi", "--file", "a.pdf"]).is_err());
    let cli = parse(&["chat", "--file", "brief.pdf"]);
    let Command::Chat(args) = cli.command else {
        panic!("expected chat");
    };
    assert_eq!(args.file, Some(PathBuf::from("brief.pdf")));
    assert!(!args.generic);
}

#[test]
fn register_defaults_to_active_admin() {
    let cli = parse(&[
        "register",
        "--email",
        "ada@example.com",
        "--username",
        "ada",
        "--password",
        "pw",
    ]);
    let Command::Register { role, inactive, .. } = cli.command else {
        panic!("expected register");
    };
    assert_eq!(Role::from(role), Role::Admin);
    assert!(!inactive);
}

fn chat_args(session_file: &std::path::Path, extra: &[&str]) -> ChatArgs {
    let file = session_file.display().to_string();
    let mut argv = vec!["chat", "hi", "--session-file", file.as_str()];
    argv.extend_from_slice(extra);
    let Command::Chat(args) = parse(&argv).command else {
        panic!("expected chat");
    };
    args
}

#[test]
fn chat_session_id_is_persisted_and_reused() {
    let path = std::env::temp_dir().join(format!("adpilot-chat-{}", uuid::Uuid::new_v4()));
    let first = chat_args(&path, &[]).resolve_session_id().unwrap();
    let second = chat_args(&path, &[]).resolve_session_id().unwrap();
    assert_eq!(first, second);
    assert_eq!(TokenStore::new(&path).load().unwrap().as_deref(), Some(first.as_str()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn explicit_chat_session_id_wins_without_touching_file() {
    let path = std::env::temp_dir().join(format!("adpilot-chat-{}", uuid::Uuid::new_v4()));
    let id = chat_args(&path, &["--session-id", "s-42"]).resolve_session_id().unwrap();
    assert_eq!(id, "s-42");
    assert!(!path.exists());
}
