use super::*;

fn lead_with_score(score: f64) -> Lead {
    Lead {
        name: "Ada".to_owned(),
        score: Some(score),
        ..Lead::default()
    }
}

// =============================================================
// Banding
// =============================================================

#[test]
fn score_85_is_hot() {
    assert_eq!(lead_with_score(85.0).interpretation(), "Hot Lead");
}

#[test]
fn score_65_is_warm() {
    assert_eq!(lead_with_score(65.0).interpretation(), "Warm Lead");
}

#[test]
fn score_40_is_cold() {
    assert_eq!(lead_with_score(40.0).interpretation(), "Cold Lead");
}

#[test]
fn band_boundaries_are_inclusive() {
    assert_eq!(LeadBand::from_score(80.0), LeadBand::Hot);
    assert_eq!(LeadBand::from_score(79.9), LeadBand::Warm);
    assert_eq!(LeadBand::from_score(60.0), LeadBand::Warm);
    assert_eq!(LeadBand::from_score(59.9), LeadBand::Cold);
    assert_eq!(LeadBand::from_score(0.0), LeadBand::Cold);
}

#[test]
fn missing_score_is_unscored() {
    let lead = Lead {
        name: "Bob".to_owned(),
        ..Lead::default()
    };
    assert_eq!(lead.band(), None);
    assert_eq!(lead.interpretation(), "Unscored");
}

#[test]
fn format_score_trims_whole_numbers() {
    assert_eq!(format_score(Some(85.0)), "85");
    assert_eq!(format_score(Some(72.46)), "72.5");
    assert_eq!(format_score(None), "-");
}

// =============================================================
// Upload validation
// =============================================================

#[test]
fn csv_detection_accepts_mime_or_extension() {
    assert!(is_csv_upload("leads.csv", "text/csv"));
    assert!(is_csv_upload("LEADS.CSV", "application/vnd.ms-excel"));
    assert!(is_csv_upload("export", "text/csv"));
    assert!(!is_csv_upload("leads.xlsx", "application/vnd.openxmlformats"));
    assert!(!is_csv_upload("notes.txt", "text/plain"));
}

#[test]
fn scoring_mode_steps() {
    assert_eq!(ScoringMode::default(), ScoringMode::ScoreAll);
    assert_eq!(
        ScoringMode::ScoreAll.steps(),
        &[LeadStep::Upload, LeadStep::ScoreAll, LeadStep::FetchScored]
    );
    assert_eq!(ScoringMode::OnUpload.steps(), &[LeadStep::Upload, LeadStep::FetchScored]);
    assert_eq!(LeadStep::ScoreAll.failure_message(), "Scoring failed");
}

// =============================================================
// Scored CSV parsing
// =============================================================

#[test]
fn parse_two_column_csv_skips_header() {
    let leads = parse_scored_csv("name,score\nAda,85\nBob,40\n");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].name, "Ada");
    assert_eq!(leads[0].score, Some(85.0));
    assert_eq!(leads[1].name, "Bob");
    assert_eq!(leads[1].interpretation(), "Cold Lead");
}

#[test]
fn parse_locates_columns_by_header() {
    let csv = "Company,Job Title,Score,Name,Website Visits,Source\r\n\
               Acme,CTO,91.5,Ada,12,referral\r\n";
    let leads = parse_scored_csv(csv);
    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.name, "Ada");
    assert_eq!(lead.score, Some(91.5));
    assert_eq!(lead.company.as_deref(), Some("Acme"));
    assert_eq!(lead.job_title.as_deref(), Some("CTO"));
    assert_eq!(lead.website_visits, Some(12));
    assert_eq!(lead.source.as_deref(), Some("referral"));
    assert_eq!(lead.page_views, None);
}

#[test]
fn parse_keeps_rows_with_empty_scores() {
    let leads = parse_scored_csv("name,score\nAda,\nBob,n/a\n\n");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].score, None);
    assert_eq!(leads[1].score, None);
}

#[test]
fn parse_handles_quoted_commas() {
    let leads = parse_scored_csv("name,score,company\n\"Lovelace, Ada\",70,\"Analytical \"\"Engines\"\"\"\n");
    assert_eq!(leads[0].name, "Lovelace, Ada");
    assert_eq!(leads[0].company.as_deref(), Some("Analytical \"Engines\""));
}

#[test]
fn parse_empty_body_yields_nothing() {
    assert!(parse_scored_csv("").is_empty());
    assert!(parse_scored_csv("name,score\n").is_empty());
}

#[test]
fn parse_counts_from_float_cells() {
    let leads = parse_scored_csv("name,score,page_views,time_spent\nAda,50,7.0,3.25\n");
    assert_eq!(leads[0].page_views, Some(7));
    assert_eq!(leads[0].time_spent, Some(3.25));
}

#[test]
fn parse_keeps_line_breaks_inside_quotes() {
    let leads = parse_scored_csv("name,score,company\nAda,85,\"Acme\nWest\"\nBob,40,Globex\n");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].name, "Ada");
    assert_eq!(leads[0].company.as_deref(), Some("Acme\nWest"));
    assert_eq!(leads[1].name, "Bob");
    assert_eq!(leads[1].score, Some(40.0));
}

#[test]
fn split_csv_records_keeps_empty_fields() {
    assert_eq!(split_csv_records("a,,c,"), vec![vec!["a", "", "c", ""]]);
}

#[test]
fn split_csv_records_handles_crlf_without_trailing_newline() {
    assert_eq!(
        split_csv_records("a,b\r\n\r\nc,d"),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
}

#[test]
fn max_score_ignores_unscored() {
    let mut leads = vec![lead_with_score(40.0), lead_with_score(92.0)];
    leads.push(Lead::default());
    assert_eq!(max_score(&leads), 92.0);
    assert_eq!(max_score(&[]), 0.0);
}
