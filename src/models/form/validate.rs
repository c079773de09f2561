//! Per-field validation. Pure and deterministic: the builder UI runs the
//! same rules for immediate feedback, but this server-side pass is the
//! authoritative gate — a client result is never trusted on its own.

use serde_json::Value;

use super::types::{FieldKind, FieldSchema};

/// Default upload cap applied when a file field sets no explicit limit.
const DEFAULT_MAX_FILE_SIZE_MB: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    MissingRequired,
    InvalidFormat,
    OutOfRange,
    TooLong,
    InvalidOption,
    FileTooLarge,
    FileTypeNotAllowed,
}

/// A single rejected field, with the human-readable reason shown to the
/// respondent.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field_id: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &FieldSchema, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        FieldError { field_id: field.id.clone(), kind, message: message.into() }
    }
}

/// Candidate upload metadata, as validation sees it. The bytes themselves
/// are not needed here — only name, declared MIME type, and size.
#[derive(Debug, Clone)]
pub struct FileMeta<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub size_bytes: u64,
}

/// Validate one field against its submitted value (and upload, for file
/// fields). Returns the value to persist under the field's id, or `None`
/// when the field was legitimately left blank (or is answered via its
/// upload instead of the responses map).
///
/// Presence is checked first; kind-specific rules only run on present
/// values, so an optional field left empty never trips a format rule.
pub fn validate_field(
    field: &FieldSchema,
    value: Option<&Value>,
    file: Option<&FileMeta>,
) -> Result<Option<Value>, FieldError> {
    if field.kind == FieldKind::File {
        return validate_file_field(field, file);
    }

    let Some(value) = value.filter(|v| is_present(v)) else {
        if field.required {
            let message = if field.kind.needs_options() {
                "Please select an option"
            } else {
                "This field is required"
            };
            return Err(FieldError::new(field, FieldErrorKind::MissingRequired, message));
        }
        return Ok(None);
    };

    match field.kind {
        FieldKind::Email => {
            let ok = value.as_str().is_some_and(is_valid_email);
            if !ok {
                return Err(FieldError::new(
                    field,
                    FieldErrorKind::InvalidFormat,
                    "Please enter a valid email address",
                ));
            }
        }
        FieldKind::Url => {
            let ok = value.as_str().is_some_and(|s| url::Url::parse(s).is_ok());
            if !ok {
                return Err(FieldError::new(
                    field,
                    FieldErrorKind::InvalidFormat,
                    "Please enter a valid URL",
                ));
            }
        }
        FieldKind::Number | FieldKind::Rating => {
            let Some(number) = numeric_value(value) else {
                return Err(FieldError::new(
                    field,
                    FieldErrorKind::OutOfRange,
                    "Value must be a number",
                ));
            };
            if let Some(min) = field.min_value {
                if number < min {
                    return Err(FieldError::new(
                        field,
                        FieldErrorKind::OutOfRange,
                        format!("Value must be at least {min}"),
                    ));
                }
            }
            if let Some(max) = field.max_value {
                if number > max {
                    return Err(FieldError::new(
                        field,
                        FieldErrorKind::OutOfRange,
                        format!("Value must be at most {max}"),
                    ));
                }
            }
        }
        FieldKind::Text | FieldKind::Textarea => {
            if let (Some(text), Some(max)) = (value.as_str(), field.max_length) {
                if text.chars().count() > max {
                    return Err(FieldError::new(
                        field,
                        FieldErrorKind::TooLong,
                        format!("Text must be at most {max} characters"),
                    ));
                }
            }
        }
        FieldKind::Dropdown | FieldKind::Radio => {
            let ok = value
                .as_str()
                .is_some_and(|choice| field.options.iter().any(|opt| opt == choice));
            if !ok {
                return Err(FieldError::new(
                    field,
                    FieldErrorKind::InvalidOption,
                    "Please select a valid option",
                ));
            }
        }
        // Presence is the only rule for these kinds
        FieldKind::Date | FieldKind::Phone | FieldKind::Checkbox => {}
        FieldKind::File => unreachable!("file fields handled above"),
    }

    Ok(Some(value.clone()))
}

fn validate_file_field(
    field: &FieldSchema,
    file: Option<&FileMeta>,
) -> Result<Option<Value>, FieldError> {
    let Some(file) = file else {
        if field.required {
            return Err(FieldError::new(
                field,
                FieldErrorKind::MissingRequired,
                "This field is required",
            ));
        }
        return Ok(None);
    };

    let max_mb = field.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);
    let size_mb = file.size_bytes as f64 / (1024.0 * 1024.0);
    if size_mb > max_mb {
        return Err(FieldError::new(
            field,
            FieldErrorKind::FileTooLarge,
            format!("File size exceeds the maximum limit of {max_mb}MB"),
        ));
    }

    if !field.allowed_file_types.is_empty() {
        let allowed = field
            .allowed_file_types
            .iter()
            .any(|pattern| mime_matches(pattern, file.content_type));
        if !allowed {
            return Err(FieldError::new(
                field,
                FieldErrorKind::FileTypeNotAllowed,
                "File type not allowed",
            ));
        }
    }

    // File answers are recorded as upload metadata, not in the responses map
    Ok(None)
}

/// `image/*` style patterns match any subtype of the category; anything else
/// must match the declared MIME type exactly.
fn mime_matches(pattern: &str, content_type: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(category) => content_type
            .strip_prefix(category)
            .is_some_and(|rest| rest.starts_with('/')),
        None => pattern == content_type,
    }
}

/// Null and the empty string count as absent; everything else — including
/// an unchecked (`false`) checkbox — is a present value.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Loose RFC-5322-shaped check shared with email-list ingestion: one `@`,
/// a dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
