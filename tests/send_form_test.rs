//! List distribution tests — invitation rendering and batch delivery:
//! - One message per recipient with the public deep link
//! - Sender fallback and optional description embedding
//! - Batch recording through the mailer collaborator

mod common;

use common::*;
use formbox::models::email_list::Recipient;
use formbox::services::mail::{Mailer, build_invitations};
use formbox::store::Store;

fn recipient(email: &str) -> Recipient {
    Recipient { email: email.to_string(), name: None }
}

#[actix_rt::test]
async fn invitations_embed_title_link_and_description() {
    let (state, store, _mailer) = make_state();

    let mut data = form_data("Team survey", vec![text_field("f1", "Name", false)]);
    data.description = Some("Quick one".to_string());
    let form = store.create_form(OWNER_ID, data).await.expect("create form");

    let messages = build_invitations(
        &form,
        &[recipient("a@x.com"), recipient("b@x.com")],
        Some("Ann"),
        &state.config.base_url,
        &state.config.from_email,
    );

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].to, "a@x.com");
    assert_eq!(messages[0].subject, "Ann: Team survey");
    let link = format!("{}/form/{}", state.config.base_url, form.id);
    assert!(messages[0].html.contains(&link));
    assert!(messages[0].html.contains("Quick one"));
}

#[actix_rt::test]
async fn sender_name_falls_back_when_absent() {
    let (state, store, _mailer) = make_state();

    let form = store
        .create_form(OWNER_ID, form_data("Survey", Vec::new()))
        .await
        .expect("create form");

    let messages = build_invitations(
        &form,
        &[recipient("a@x.com")],
        None,
        &state.config.base_url,
        &state.config.from_email,
    );
    assert_eq!(messages[0].subject, "Form App: Survey");

    // Description absent: no stray empty paragraph
    assert!(!messages[0].html.contains("<p></p>"));
}

#[actix_rt::test]
async fn mailer_records_the_whole_batch() {
    let (state, store, mailer) = make_state();

    let form = store
        .create_form(OWNER_ID, form_data("Survey", Vec::new()))
        .await
        .expect("create form");

    let messages = build_invitations(
        &form,
        &[recipient("a@x.com"), recipient("b@x.com"), recipient("c@x.com")],
        None,
        &state.config.base_url,
        &state.config.from_email,
    );
    state.mailer.send_batch(&messages).await.expect("send batch");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].to, "c@x.com");
}
