//! Plain-text rendering of backend records for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use wire::auth::UserProfile;
use wire::campaign::{self, Campaign};
use wire::leads::{self, Lead};

/// Name / Score / Interpretation table.
pub fn lead_table(rows: &[Lead]) -> String {
    let name_width = rows
        .iter()
        .map(|lead| lead.name.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);
    let mut out = format!("{:<name_width$}  {:>6}  Interpretation\n", "Name", "Score");
    for lead in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>6}  {}",
            lead.name,
            leads::format_score(lead.score),
            lead.interpretation()
        );
    }
    out.truncate(out.trim_end().len());
    out
}

/// Name / Start / End / Status table.
pub fn campaign_table(rows: &[Campaign]) -> String {
    let name_width = rows
        .iter()
        .map(|c| c.name.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);
    let mut out = format!("{:<name_width$}  {:<18}  {:<18}  Status\n", "Name", "Start Date", "End Date");
    for c in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<18}  {:<18}  {}",
            c.name,
            campaign::format_timestamp(&c.start_date),
            campaign::format_timestamp(&c.end_date),
            c.status
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn profile(user: &UserProfile) -> String {
    format!(
        "Username: {}\nEmail: {}\nRole: {}\nActive: {}\nUser ID: {}",
        user.username,
        user.email,
        user.role,
        if user.is_active { "Yes" } else { "No" },
        user.id
    )
}
