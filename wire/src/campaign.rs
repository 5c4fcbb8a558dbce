//! Campaign records and the scheduler form that produces them.
//!
//! DESIGN
//! ======
//! The form keeps raw input strings so the page can bind inputs directly;
//! [`CampaignForm::to_campaign`] is the single validation point before the
//! create call.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";
pub const DEFAULT_BUDGET: &str = "1000";
pub const DEFAULT_STATUS: &str = "scheduled";

/// Who a campaign targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    #[default]
    General,
    Subscribers,
    NewCustomers,
    Vip,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::General,
        Audience::Subscribers,
        Audience::NewCustomers,
        Audience::Vip,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Subscribers => "subscribers",
            Self::NewCustomers => "new-customers",
            Self::Vip => "vip",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Subscribers => "Subscribers",
            Self::NewCustomers => "New Customers",
            Self::Vip => "VIP",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

/// A campaign as sent to and echoed by `POST /api/v1/social/campaigns`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_start")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_end")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub target_audience: Audience,
    #[serde(default)]
    pub budget: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_owned()
}

fn deserialize_start<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_timestamp(deserializer, DEFAULT_START_TIME)
}

fn deserialize_end<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_timestamp(deserializer, DEFAULT_END_TIME)
}

/// Accept RFC 3339 (offset dropped), naive ISO 8601, or a bare date placed
/// at `bare_date_time`.
fn deserialize_timestamp<'de, D>(deserializer: D, bare_date_time: &str) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let time = NaiveTime::parse_from_str(bare_date_time, "%H:%M").unwrap_or(NaiveTime::MIN);
    parse_timestamp_at(&raw, time).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Parse a backend timestamp leniently. A bare date lands at midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp_at(raw, NaiveTime::MIN)
}

/// Parse a backend timestamp leniently, placing a bare date at `bare_date_time`.
#[must_use]
pub fn parse_timestamp_at(raw: &str, bare_date_time: NaiveTime) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(bare_date_time))
}

/// Human-readable schedule timestamp.
#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

/// Raw scheduler form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignForm {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub start_date: String,
    /// `HH:MM`, as produced by a time input.
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub audience: Audience,
    pub budget: String,
}

impl CampaignForm {
    /// Blank form with both dates on `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            name: String::new(),
            description: String::new(),
            start_date: date.clone(),
            start_time: DEFAULT_START_TIME.to_owned(),
            end_date: date,
            end_time: DEFAULT_END_TIME.to_owned(),
            audience: Audience::General,
            budget: DEFAULT_BUDGET.to_owned(),
        }
    }

    /// Load an existing record back into the form for editing.
    #[must_use]
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            start_date: campaign.start_date.format("%Y-%m-%d").to_string(),
            start_time: campaign.start_date.format("%H:%M").to_string(),
            end_date: campaign.end_date.format("%Y-%m-%d").to_string(),
            end_time: campaign.end_date.format("%H:%M").to_string(),
            audience: campaign.target_audience,
            budget: format_budget(campaign.budget),
        }
    }

    /// Validate and build the record to submit.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for the first invalid field.
    pub fn to_campaign(&self) -> Result<Campaign, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Campaign name is required.");
        }
        let start = combine(&self.start_date, &self.start_time).ok_or("Start date and time are invalid.")?;
        let end = combine(&self.end_date, &self.end_time).ok_or("End date and time are invalid.")?;
        if end < start {
            return Err("End must not be before start.");
        }
        let budget = self
            .budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b >= 0.0)
            .ok_or("Budget must be a non-negative number.")?;

        Ok(Campaign {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            start_date: start,
            end_date: end,
            target_audience: self.audience,
            budget,
            status: DEFAULT_STATUS.to_owned(),
        })
    }
}

fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time))
}

/// Render a budget without a trailing `.0` for whole amounts.
#[must_use]
pub fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{budget:.0}")
    } else {
        format!("{budget:.2}")
    }
}
