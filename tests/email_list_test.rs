//! Email list tests — CSV ingestion and owner-scoped CRUD:
//! - Header detection, malformed-row skipping, optional names
//! - Duplicate addresses tolerated
//! - Cross-tenant lookups read as absent

mod common;

use common::*;
use formbox::models::email_list::import::parse_recipients_csv;
use formbox::models::email_list::{EmailListData, Recipient};
use formbox::store::Store;

fn recipient(email: &str, name: Option<&str>) -> Recipient {
    Recipient { email: email.to_string(), name: name.map(String::from) }
}

#[test]
fn import_skips_malformed_rows_and_reports() {
    let outcome = parse_recipients_csv("email,name\na@x.com,Ann\nbad-email,Bob\nc@x.com,");

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.accepted[0].email, "a@x.com");
    assert_eq!(outcome.accepted[0].name.as_deref(), Some("Ann"));
    assert_eq!(outcome.accepted[1].email, "c@x.com");
    assert_eq!(outcome.accepted[1].name, None);
    assert_eq!(outcome.skipped, 1);
    assert!(outcome.had_skips());
}

#[test]
fn import_without_header_reads_the_first_row() {
    let outcome = parse_recipients_csv("a@x.com,Ann\nb@x.com,Bob");

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn import_ignores_blank_lines() {
    let outcome = parse_recipients_csv("email\n\na@x.com\n\n\nb@x.com\n");

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.skipped, 0);
}

#[actix_rt::test]
async fn list_crud_round_trip() {
    let (_state, store, _mailer) = make_state();

    let created = store
        .create_email_list(
            OWNER_ID,
            EmailListData {
                name: "Beta testers".to_string(),
                emails: vec![
                    recipient("a@x.com", Some("Ann")),
                    // Duplicates are a caller concern, not rejected
                    recipient("a@x.com", None),
                ],
            },
        )
        .await
        .expect("create list");
    assert_eq!(created.emails.len(), 2);

    let fetched = store
        .get_email_list(&created.id, OWNER_ID)
        .await
        .expect("get list")
        .expect("list exists");
    assert_eq!(fetched.name, "Beta testers");
    assert_eq!(fetched.emails[0].email, "a@x.com");

    let updated = store
        .update_email_list(
            &created.id,
            OWNER_ID,
            EmailListData { name: "Testers".to_string(), emails: fetched.emails },
        )
        .await
        .expect("update list")
        .expect("list exists");
    assert_eq!(updated.name, "Testers");
    assert!(updated.updated_at >= created.updated_at);

    assert!(store.delete_email_list(&created.id, OWNER_ID).await.expect("delete"));
    assert!(
        store
            .get_email_list(&created.id, OWNER_ID)
            .await
            .expect("get after delete")
            .is_none()
    );
}

#[actix_rt::test]
async fn cross_tenant_lookup_reads_as_absent() {
    let (_state, store, _mailer) = make_state();

    let created = store
        .create_email_list(
            OWNER_ID,
            EmailListData { name: "Private".to_string(), emails: Vec::new() },
        )
        .await
        .expect("create list");

    let other = store
        .get_email_list(&created.id, INTRUDER_ID)
        .await
        .expect("lookup succeeds");
    assert!(other.is_none(), "another tenant must not see the list");

    assert!(
        !store
            .delete_email_list(&created.id, INTRUDER_ID)
            .await
            .expect("delete call"),
        "another tenant must not delete the list"
    );
}
