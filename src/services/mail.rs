//! Invitation rendering and delivery. Message construction is pure and
//! local; transport is delegated to the `Mailer` collaborator as one
//! batch. Delivery succeeds or fails as a whole — per-recipient outcomes
//! would need a richer trait, which is why transport sits behind one.

use std::fmt;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::models::email_list::Recipient;
use crate::models::form::Form;

#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug)]
pub enum MailError {
    Transport(String),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the whole batch; a failure reports the batch as failed.
    async fn send_batch(&self, messages: &[OutboundEmail]) -> Result<(), MailError>;
}

/// One invitation per recipient: subject carries the sender and title, the
/// body embeds the form's title, its description when present, and the
/// public deep link.
pub fn build_invitations(
    form: &Form,
    recipients: &[Recipient],
    sender_name: Option<&str>,
    base_url: &str,
    from: &str,
) -> Vec<OutboundEmail> {
    let form_url = format!("{base_url}/form/{}", form.id);
    let sender = sender_name.filter(|s| !s.is_empty()).unwrap_or("Form App");
    let description = form
        .description
        .as_deref()
        .map(|d| format!("<p>{d}</p>"))
        .unwrap_or_default();

    recipients
        .iter()
        .map(|recipient| OutboundEmail {
            to: recipient.email.clone(),
            from: from.to_string(),
            subject: format!("{sender}: {}", form.title),
            html: format!(
                r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>{title}</h2>
  {description}
  <p>You've been invited to fill out this form.</p>
  <div style="margin: 30px 0;">
    <a href="{form_url}" style="background-color: #4F46E5; color: white; padding: 12px 20px; text-decoration: none; border-radius: 4px; display: inline-block;">
      Fill Out Form
    </a>
  </div>
  <p>Or copy and paste this link into your browser:</p>
  <p>{form_url}</p>
</div>"#,
                title = form.title,
            ),
        })
        .collect()
}

/// Delivery stand-in: records every message and logs the batch instead of
/// calling a transactional-email API.
#[derive(Default)]
pub struct LogMailer {
    sent: RwLock<Vec<OutboundEmail>>,
}

impl LogMailer {
    pub fn new() -> Self {
        LogMailer::default()
    }

    /// Messages delivered so far, in send order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_batch(&self, messages: &[OutboundEmail]) -> Result<(), MailError> {
        for message in messages {
            log::info!("Sending '{}' to {}", message.subject, message.to);
        }
        self.sent
            .write()
            .map_err(|_| MailError::Transport("mailer lock poisoned".to_string()))?
            .extend(messages.iter().cloned());
        Ok(())
    }
}
