//! Response aggregation and export tests:
//! - Respondent-presence filtering and stable submission-time sorting
//! - CSV header/column order, cell formatting, and quoting

mod common;

use chrono::{Duration, TimeZone, Utc};
use serde_json::{Map, Value, json};

use common::*;
use formbox::models::form::{FieldKind, FieldSchema, Form};
use formbox::models::response::export::export_csv;
use formbox::models::response::query::{ResponseFilter, SortOrder, filter_and_sort};
use formbox::models::response::{FileUpload, Response};

fn form_with(fields: Vec<FieldSchema>) -> Form {
    let now = Utc::now();
    Form {
        id: "form-1".to_string(),
        owner_id: OWNER_ID.to_string(),
        title: "Survey".to_string(),
        description: None,
        fields,
        is_public: true,
        expires_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn response_at(
    id: &str,
    minutes: i64,
    email: Option<&str>,
    answers: &[(&str, Value)],
) -> Response {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Response {
        id: id.to_string(),
        form_id: "form-1".to_string(),
        respondent_email: email.map(String::from),
        respondent_name: None,
        responses: answers
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<Map<String, Value>>(),
        file_uploads: Vec::new(),
        submitted_at: base + Duration::minutes(minutes),
        ip_address: None,
        user_agent: None,
    }
}

#[test]
fn filter_splits_identified_and_anonymous() {
    let responses = vec![
        response_at("r1", 0, Some("a@x.com"), &[]),
        response_at("r2", 1, None, &[]),
        response_at("r3", 2, Some("b@x.com"), &[]),
    ];

    let identified = filter_and_sort(
        responses.clone(),
        ResponseFilter::Identified,
        SortOrder::Oldest,
    );
    assert_eq!(identified.len(), 2);
    assert!(identified.iter().all(|r| r.is_identified()));

    let anonymous = filter_and_sort(responses, ResponseFilter::Anonymous, SortOrder::Oldest);
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0].id, "r2");
}

#[test]
fn sort_is_stable_on_equal_timestamps() {
    // r1 and r2 share a timestamp; creation order must hold in both
    // directions
    let responses = vec![
        response_at("r1", 5, None, &[]),
        response_at("r2", 5, None, &[]),
        response_at("r3", 0, None, &[]),
    ];

    let oldest = filter_and_sort(responses.clone(), ResponseFilter::All, SortOrder::Oldest);
    let ids: Vec<&str> = oldest.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r1", "r2"]);

    let newest = filter_and_sort(responses, ResponseFilter::All, SortOrder::Newest);
    let ids: Vec<&str> = newest.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

#[test]
fn csv_header_and_missing_cells() {
    let form = form_with(vec![text_field("f1", "Name", false)]);
    let responses = vec![
        response_at("r1", 0, Some("ann@x.com"), &[("f1", json!("Ann"))]),
        response_at("r2", 1, None, &[]),
    ];

    let csv = export_csv(&form, &responses);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Respondent,Date,Name");
    assert_eq!(lines[1], "ann@x.com,2024-03-01,Ann");
    // Anonymous respondent, no answer: Name cell is empty
    assert_eq!(lines[2], "Anonymous,2024-03-01,");
}

#[test]
fn csv_formats_booleans_and_files() {
    let form = form_with(vec![
        FieldSchema::new("agree", FieldKind::Checkbox, "Agree"),
        FieldSchema::new("att", FieldKind::File, "Attachment"),
    ]);

    let mut with_file = response_at("r1", 0, None, &[("agree", json!(true))]);
    with_file.file_uploads.push(FileUpload {
        field_id: "att".to_string(),
        file_name: "photo.png".to_string(),
        file_size: 2048,
        file_type: "image/png".to_string(),
        file_url: "/uploads/abc/photo.png".to_string(),
    });
    let without_file = response_at("r2", 1, None, &[("agree", json!(false))]);

    let csv = export_csv(&form, &[with_file, without_file]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Anonymous,2024-03-01,Yes,photo.png");
    assert_eq!(lines[2], "Anonymous,2024-03-01,No,");
}

#[test]
fn csv_quotes_embedded_delimiters() {
    let form = form_with(vec![text_field("f1", "Comment, if any", false)]);
    let responses = vec![response_at(
        "r1",
        0,
        None,
        &[("f1", json!("well, \"quoted\"\nand multiline"))],
    )];

    let csv = export_csv(&form, &responses);
    // Quoted header cell
    assert!(csv.starts_with("Respondent,Date,\"Comment, if any\""));
    // Embedded quotes double, embedded newline survives inside quotes
    assert!(csv.contains("\"well, \"\"quoted\"\"\nand multiline\""));
}

#[test]
fn csv_joins_array_answers() {
    let form = form_with(vec![text_field("f1", "Tags", false)]);
    let responses = vec![response_at("r1", 0, None, &[("f1", json!(["a", "b"]))])];

    let csv = export_csv(&form, &responses);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Anonymous,2024-03-01,\"a, b\"");
}
