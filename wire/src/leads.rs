//! Lead records, score banding and the scored-CSV format.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scoring happens entirely on the backend. The client uploads a CSV, asks
//! for scoring (unless the upload already scored it), then reads back a
//! scored CSV which it parses here for the chart and table.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use serde::{Deserialize, Serialize};

/// File name offered for the scored-CSV download.
pub const SCORED_CSV_FILE_NAME: &str = "lead_scores.csv";

pub const NO_FILE_SELECTED: &str = "No file selected.";
pub const INVALID_CSV_FILE: &str = "Please upload a valid CSV file.";
pub const PROCESSING_FAILED: &str = "An error occurred while processing the file.";
pub const DOWNLOAD_FAILED: &str = "Failed to download CSV.";

/// Score at or above which a lead is hot.
pub const HOT_THRESHOLD: f64 = 80.0;
/// Score at or above which a lead is warm.
pub const WARM_THRESHOLD: f64 = 60.0;

/// One scored lead as rendered by the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub score: Option<f64>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub website_visits: Option<u32>,
    pub page_views: Option<u32>,
    pub time_spent: Option<f64>,
    pub source: Option<String>,
}

impl Lead {
    #[must_use]
    pub fn band(&self) -> Option<LeadBand> {
        self.score.map(LeadBand::from_score)
    }

    /// Interpretation column text.
    #[must_use]
    pub fn interpretation(&self) -> &'static str {
        self.band().map_or("Unscored", LeadBand::label)
    }
}

/// Hot/Warm/Cold classification of a lead score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadBand {
    Hot,
    Warm,
    Cold,
}

impl LeadBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HOT_THRESHOLD {
            Self::Hot
        } else if score >= WARM_THRESHOLD {
            Self::Warm
        } else {
            Self::Cold
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "Hot Lead",
            Self::Warm => "Warm Lead",
            Self::Cold => "Cold Lead",
        }
    }

    /// CSS modifier used by the table badge and chart bar.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }
}

/// Render a score without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    match score {
        None => "-".to_owned(),
        Some(s) if s.fract() == 0.0 => format!("{s:.0}"),
        Some(s) => format!("{s:.1}"),
    }
}

/// Whether a selected file is acceptable for upload.
///
/// Browsers are inconsistent about the CSV MIME type, so a `.csv`
/// extension is accepted too.
#[must_use]
pub fn is_csv_upload(file_name: &str, mime_type: &str) -> bool {
    mime_type.eq_ignore_ascii_case("text/csv")
        || file_name.to_ascii_lowercase().ends_with(".csv")
}

/// How the backend expects scoring to be triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// The upload call scores the file itself.
    OnUpload,
    /// An explicit `score-all` call follows the upload.
    #[default]
    ScoreAll,
}

impl ScoringMode {
    /// Requests issued for one run of the chain, in order.
    #[must_use]
    pub fn steps(self) -> &'static [LeadStep] {
        match self {
            Self::OnUpload => &[LeadStep::Upload, LeadStep::FetchScored],
            Self::ScoreAll => &[LeadStep::Upload, LeadStep::ScoreAll, LeadStep::FetchScored],
        }
    }
}

/// One request in the upload/score/fetch chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadStep {
    Upload,
    ScoreAll,
    FetchScored,
}

impl LeadStep {
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Upload => "CSV upload failed",
            Self::ScoreAll => "Scoring failed",
            Self::FetchScored => "Failed to fetch scored CSV",
        }
    }
}

/// Parse the scored CSV returned by the backend.
///
/// The first non-empty record is the header. `name` and `score` columns are
/// located by header name and fall back to the first two columns. Optional
/// columns are read when present. Blank records are skipped; a score that is
/// empty or not numeric is kept as `None`.
#[must_use]
pub fn parse_scored_csv(text: &str) -> Vec<Lead> {
    let mut records = split_csv_records(text).into_iter();
    let Some(header) = records.next() else {
        return Vec::new();
    };
    let columns = Columns::from_header(&header);

    records.map(|fields| columns.lead(&fields)).collect()
}

#[derive(Debug, Default)]
struct Columns {
    name: usize,
    score: usize,
    job_title: Option<usize>,
    company: Option<usize>,
    category: Option<usize>,
    website_visits: Option<usize>,
    page_views: Option<usize>,
    time_spent: Option<usize>,
    source: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Self {
        let normalized: Vec<String> = header
            .iter()
            .map(|h| h.trim().to_ascii_lowercase().replace([' ', '-'], "_"))
            .collect();
        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        Self {
            name: find(&["name", "lead_name", "full_name"]).unwrap_or(0),
            score: find(&["score", "lead_score"]).unwrap_or(1),
            job_title: find(&["job_title", "title"]),
            company: find(&["company", "company_name"]),
            category: find(&["category"]),
            website_visits: find(&["website_visits"]),
            page_views: find(&["page_views"]),
            time_spent: find(&["time_spent"]),
            source: find(&["source", "lead_source"]),
        }
    }

    fn lead(&self, fields: &[String]) -> Lead {
        let text = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        Lead {
            name: text(Some(self.name)).unwrap_or_default(),
            score: text(Some(self.score)).and_then(|v| v.parse::<f64>().ok()),
            job_title: text(self.job_title),
            company: text(self.company),
            category: text(self.category),
            website_visits: text(self.website_visits).and_then(|v| parse_count(&v)),
            page_views: text(self.page_views).and_then(|v| parse_count(&v)),
            time_spent: text(self.time_spent).and_then(|v| v.parse::<f64>().ok()),
            source: text(self.source),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(value: &str) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u32))
}

/// Split a CSV body into records of fields.
///
/// Double-quoted fields may contain commas, `""` escapes and line breaks.
/// Records end at `\n` or `\r\n` outside quotes; blank records are dropped.
#[must_use]
pub fn split_csv_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                push_record(&mut records, std::mem::take(&mut fields));
            }
            other => current.push(other),
        }
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        push_record(&mut records, fields);
    }
    records
}

fn push_record(records: &mut Vec<Vec<String>>, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        records.push(fields);
    }
}

/// Highest score in `leads`, used to scale the chart.
#[must_use]
pub fn max_score(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter_map(|l| l.score)
        .fold(0.0_f64, f64::max)
}
