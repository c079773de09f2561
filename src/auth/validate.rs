//! Request-shape validation for owner-authored documents. Per-field
//! submission rules live in `models::form::validate`; these checks guard
//! what owners store, not what respondents submit.

use std::collections::HashSet;

use crate::models::email_list::Recipient;
use crate::models::form::FieldSchema;
use crate::models::form::validate::is_valid_email;

/// Validate a form title: required, max 200 chars.
pub fn validate_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some("Title is required".to_string());
    }
    if trimmed.chars().count() > 200 {
        return Some("Title must be at most 200 characters".to_string());
    }
    None
}

/// Validate an email list name: required, max 100 chars.
pub fn validate_list_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Some("Name must be at most 100 characters".to_string());
    }
    None
}

/// Validate a field schema list: ids present and unique, labels present,
/// and choice kinds carrying at least one option. Ids are builder-assigned
/// and never reassigned here — reordering keeps them stable.
pub fn validate_fields(fields: &[FieldSchema]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for field in fields {
        if field.id.trim().is_empty() {
            errors.push(format!("Field '{}' is missing an id", field.label));
            continue;
        }
        if !seen.insert(field.id.as_str()) {
            errors.push(format!("Duplicate field id '{}'", field.id));
        }
        if field.label.trim().is_empty() {
            errors.push(format!("Field '{}' is missing a label", field.id));
        }
        if field.kind.needs_options() && field.options.iter().all(|o| o.trim().is_empty()) {
            errors.push(format!("Field '{}' needs at least one option", field.id));
        }
    }

    errors
}

/// Validate recipient entries: every address must look like an email.
pub fn validate_recipients(recipients: &[Recipient]) -> Vec<String> {
    recipients
        .iter()
        .filter(|r| !is_valid_email(r.email.trim()))
        .map(|r| format!("Invalid email address '{}'", r.email))
        .collect()
}
