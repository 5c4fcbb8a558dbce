use super::*;
use crate::DraftList;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()
}

fn valid_form(name: &str) -> CampaignForm {
    CampaignForm {
        name: name.to_owned(),
        description: "Spring promo".to_owned(),
        ..CampaignForm::new(today())
    }
}

#[test]
fn new_form_uses_default_times_and_budget() {
    let form = CampaignForm::new(today());
    assert_eq!(form.start_date, "2026-05-04");
    assert_eq!(form.end_date, "2026-05-04");
    assert_eq!(form.start_time, "09:00");
    assert_eq!(form.end_time, "17:00");
    assert_eq!(form.audience, Audience::General);
    assert_eq!(form.budget, "1000");
}

#[test]
fn to_campaign_builds_scheduled_record() {
    let campaign = valid_form("  Launch ").to_campaign().unwrap();
    assert_eq!(campaign.name, "Launch");
    assert_eq!(campaign.status, "scheduled");
    assert_eq!(campaign.budget, 1000.0);
    assert_eq!(campaign.start_date.to_string(), "2026-05-04 09:00:00");
    assert_eq!(campaign.end_date.to_string(), "2026-05-04 17:00:00");
}

#[test]
fn to_campaign_requires_name() {
    assert_eq!(valid_form("  ").to_campaign(), Err("Campaign name is required."));
}

#[test]
fn to_campaign_rejects_end_before_start() {
    let form = CampaignForm {
        end_date: "2026-05-03".to_owned(),
        ..valid_form("Launch")
    };
    assert_eq!(form.to_campaign(), Err("End must not be before start."));
}

#[test]
fn to_campaign_rejects_bad_budget_and_dates() {
    let negative = CampaignForm {
        budget: "-5".to_owned(),
        ..valid_form("Launch")
    };
    assert_eq!(negative.to_campaign(), Err("Budget must be a non-negative number."));

    let bad_time = CampaignForm {
        start_time: "25:00".to_owned(),
        ..valid_form("Launch")
    };
    assert_eq!(bad_time.to_campaign(), Err("Start date and time are invalid."));
}

#[test]
fn campaign_serializes_kebab_audience() {
    let campaign = CampaignForm {
        audience: Audience::NewCustomers,
        ..valid_form("Launch")
    }
    .to_campaign()
    .unwrap();
    let json = serde_json::to_value(&campaign).unwrap();
    assert_eq!(json["target_audience"], "new-customers");
    assert_eq!(json["start_date"], "2026-05-04T09:00:00");
}

#[test]
fn campaign_deserializes_rfc3339_and_defaults() {
    let body = r#"{"name":"Echo","start_date":"2026-05-04T09:00:00Z","end_date":"2026-05-05"}"#;
    let campaign: Campaign = serde_json::from_str(body).unwrap();
    assert_eq!(campaign.start_date.to_string(), "2026-05-04 09:00:00");
    assert_eq!(campaign.end_date.to_string(), "2026-05-05 17:00:00");
    assert_eq!(campaign.status, "scheduled");
    assert_eq!(campaign.target_audience, Audience::General);
}

#[test]
fn bare_dates_use_default_schedule_times() {
    let body = r#"{"name":"Echo","start_date":"2026-05-04","end_date":"2026-05-06"}"#;
    let campaign: Campaign = serde_json::from_str(body).unwrap();
    assert_eq!(campaign.start_date.to_string(), "2026-05-04 09:00:00");
    assert_eq!(campaign.end_date.to_string(), "2026-05-06 17:00:00");
    assert_eq!(parse_timestamp("2026-05-04").unwrap().to_string(), "2026-05-04 00:00:00");
}

#[test]
fn campaign_rejects_garbage_timestamp() {
    let body = r#"{"name":"Echo","start_date":"soon","end_date":"2026-05-05"}"#;
    assert!(serde_json::from_str::<Campaign>(body).is_err());
}

#[test]
fn from_campaign_round_trips_form_fields() {
    let form = CampaignForm {
        budget: "250.5".to_owned(),
        audience: Audience::Vip,
        ..valid_form("Launch")
    };
    let campaign = form.to_campaign().unwrap();
    let reloaded = CampaignForm::from_campaign(&campaign);
    assert_eq!(reloaded.start_time, "09:00");
    assert_eq!(reloaded.audience, Audience::Vip);
    assert_eq!(reloaded.budget, "250.50");
    assert_eq!(reloaded.to_campaign().unwrap(), campaign);
}

#[test]
fn deleting_campaign_draft_keeps_others_in_order() {
    let mut drafts = DraftList::new();
    for name in ["one", "two", "three"] {
        drafts.save(valid_form(name).to_campaign().unwrap());
    }
    drafts.remove(1);
    let names: Vec<&str> = drafts.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["one", "three"]);
}

#[test]
fn format_timestamp_is_readable() {
    let ts = parse_timestamp("2026-05-04T17:30:00").unwrap();
    assert_eq!(format_timestamp(&ts), "May 4, 2026 17:30");
}

#[test]
fn audience_parse_matches_form_values() {
    for audience in Audience::ALL {
        assert_eq!(Audience::parse(audience.as_str()), Some(audience));
    }
    assert_eq!(Audience::parse("everyone"), None);
}
