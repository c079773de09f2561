//! CSV ingestion for recipient lists: column 1 is the address, column 2 an
//! optional display name. Malformed rows are skipped and counted, never
//! fatal.

use super::types::Recipient;
use crate::models::form::validate::is_valid_email;

/// Result of one CSV ingestion pass.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub accepted: Vec<Recipient>,
    pub skipped: usize,
}

impl ImportOutcome {
    pub fn had_skips(&self) -> bool {
        self.skipped > 0
    }
}

/// Parse recipient rows out of CSV text. A first line mentioning `email`
/// is treated as a header and skipped; blank lines are ignored entirely.
pub fn parse_recipients_csv(text: &str) -> ImportOutcome {
    let mut accepted = Vec::new();
    let mut skipped = 0;

    let mut lines = text.lines();
    let mut first = lines.next();
    if first.is_some_and(|line| line.to_lowercase().contains("email")) {
        first = lines.next();
    }

    for line in first.into_iter().chain(lines) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut cells = line.split(',');
        let email = cells.next().map(str::trim).unwrap_or_default();
        let name = cells.next().map(str::trim).filter(|n| !n.is_empty());

        if is_valid_email(email) {
            accepted.push(Recipient {
                email: email.to_string(),
                name: name.map(String::from),
            });
        } else {
            skipped += 1;
        }
    }

    ImportOutcome { accepted, skipped }
}
