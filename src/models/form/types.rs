use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The twelve input kinds a form field can take. Serialized with the wire
/// names the builder UI and stored documents use (`text`, `email`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    Dropdown,
    Checkbox,
    Textarea,
    File,
    Phone,
    Url,
    Rating,
    Radio,
}

impl FieldKind {
    /// Kinds whose constraints require a non-empty `options` list.
    pub fn needs_options(self) -> bool {
        matches!(self, FieldKind::Dropdown | FieldKind::Radio)
    }
}

/// One input definition within a form. The `id` is assigned by the builder
/// at creation and stays stable across reorders; it is the key respondents'
/// answers are recorded under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Choices for dropdown/radio fields; ignored for every other kind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Upload cap in megabytes (file fields). Falls back to 5 MB when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<f64>,
    /// Accepted MIME patterns (file fields); `category/*` matches any subtype.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_file_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl FieldSchema {
    /// Minimal schema for the given kind; constraint fields start unset.
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        FieldSchema {
            id: id.into(),
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            options: Vec::new(),
            max_file_size: None,
            allowed_file_types: Vec::new(),
            max_length: None,
            min_value: None,
            max_value: None,
        }
    }
}

/// Owner-authored form document. Field order is significant: it defines both
/// render order and CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldSchema>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// A form past its expiry timestamp no longer accepts submissions.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }
}

/// Mutable portion of a form, shared by create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<FieldSchema>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Renderable shape of a public form — no owner-only fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicForm {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&Form> for PublicForm {
    fn from(form: &Form) -> Self {
        PublicForm {
            id: form.id.clone(),
            title: form.title.clone(),
            description: form.description.clone(),
            fields: form.fields.clone(),
            expires_at: form.expires_at,
        }
    }
}
