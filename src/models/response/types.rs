use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Durable record of one uploaded file, pointing at the storage
/// collaborator's URL rather than the bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub field_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub file_url: String,
}

/// One respondent's completed submission. Immutable once created; the form
/// it references may later be deleted (orphan responses are tolerated).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub form_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_name: Option<String>,
    /// Field id → accepted value; shapes follow the field kind.
    pub responses: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_uploads: Vec<FileUpload>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Response {
    /// Whether the respondent identified themselves with an email address.
    pub fn is_identified(&self) -> bool {
        self.respondent_email.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Everything the store needs to mint a Response document.
#[derive(Debug, Clone)]
pub struct NewResponse {
    pub form_id: String,
    pub respondent_email: Option<String>,
    pub respondent_name: Option<String>,
    pub responses: Map<String, Value>,
    pub file_uploads: Vec<FileUpload>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
