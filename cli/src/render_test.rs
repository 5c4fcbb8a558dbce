use super::*;

fn lead(name: &str, score: Option<f64>) -> Lead {
    Lead {
        name: name.to_owned(),
        score,
        ..Lead::default()
    }
}

#[test]
fn lead_table_bands_each_row() {
    let table = lead_table(&[lead("Ada", Some(85.0)), lead("Bob", Some(65.0)), lead("Cy", Some(40.0))]);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Name   Score  Interpretation");
    assert_eq!(lines[1], "Ada       85  Hot Lead");
    assert_eq!(lines[2], "Bob       65  Warm Lead");
    assert_eq!(lines[3], "Cy        40  Cold Lead");
}

#[test]
fn lead_table_marks_unscored() {
    let table = lead_table(&[lead("Dana", None)]);
    assert!(table.ends_with("Unscored"));
}

#[test]
fn profile_lists_every_field() {
    let user = UserProfile {
        id: "42".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "Admin".to_owned(),
        is_active: false,
    };
    assert_eq!(
        profile(&user),
        "Username: ada\nEmail: ada@example.com\nRole: Admin\nActive: No\nUser ID: 42"
    );
}

#[test]
fn campaign_table_formats_dates() {
    let c: Campaign = serde_json::from_str(
        r#"{"name":"Launch","start_date":"2026-05-04T09:00:00","end_date":"2026-05-05T17:00:00","status":"scheduled"}"#,
    )
    .unwrap();
    let table = campaign_table(&[c]);
    let row = table.lines().nth(1).unwrap();
    assert!(row.starts_with("Launch  May 4, 2026 09:00"));
    assert!(row.ends_with("scheduled"));
}
