use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recipient entry. Duplicate addresses within a list are the caller's
/// concern and are not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Owner-curated named collection of recipients, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailList {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub emails: Vec<Recipient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable portion of an email list, shared by create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailListData {
    pub name: String,
    #[serde(default)]
    pub emails: Vec<Recipient>,
}
