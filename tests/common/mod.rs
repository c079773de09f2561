//! Shared test infrastructure: state construction with in-memory
//! collaborators, field-schema builders, and failing collaborator doubles
//! for the degraded-dependency paths.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;

use formbox::config::AppConfig;
use formbox::models::email_list::{EmailList, EmailListData};
use formbox::models::form::{FieldKind, FieldSchema, Form, FormData};
use formbox::models::response::{NewResponse, Response};
use formbox::services::identity::DevTokens;
use formbox::services::mail::LogMailer;
use formbox::services::uploads::{FileStore, MemoryFileStore, UploadError, UploadedFile};
use formbox::state::AppState;
use formbox::store::{MemoryStore, Store, StoreError};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const OWNER_TOKEN: &str = "owner-token";
pub const OWNER_ID: &str = "user-owner";
pub const INTRUDER_TOKEN: &str = "intruder-token";
pub const INTRUDER_ID: &str = "user-intruder";

// ============================================================================
// STATE SETUP
// ============================================================================

/// Build an AppState wired to in-memory everything. The concrete store and
/// mailer are returned alongside so tests can seed and inspect them.
pub fn make_state() -> (AppState, Arc<MemoryStore>, Arc<LogMailer>) {
    let store = Arc::new(MemoryStore::new());
    let mailer = Arc::new(LogMailer::new());
    let state = AppState {
        config: AppConfig::default(),
        store: store.clone(),
        identity: Arc::new(
            DevTokens::new()
                .with_token(OWNER_TOKEN, OWNER_ID)
                .with_token(INTRUDER_TOKEN, INTRUDER_ID),
        ),
        mailer: mailer.clone(),
        uploads: Arc::new(MemoryFileStore::new()),
    };
    (state, store, mailer)
}

// ============================================================================
// FIELD BUILDERS
// ============================================================================

pub fn text_field(id: &str, label: &str, required: bool) -> FieldSchema {
    let mut field = FieldSchema::new(id, FieldKind::Text, label);
    field.required = required;
    field
}

pub fn email_field(id: &str, required: bool) -> FieldSchema {
    let mut field = FieldSchema::new(id, FieldKind::Email, "Email");
    field.required = required;
    field
}

pub fn number_field(id: &str, min: Option<f64>, max: Option<f64>) -> FieldSchema {
    let mut field = FieldSchema::new(id, FieldKind::Number, "Number");
    field.min_value = min;
    field.max_value = max;
    field
}

pub fn dropdown_field(id: &str, options: &[&str]) -> FieldSchema {
    let mut field = FieldSchema::new(id, FieldKind::Dropdown, "Choice");
    field.options = options.iter().map(|o| o.to_string()).collect();
    field
}

pub fn file_field(id: &str, allowed: &[&str], max_mb: Option<f64>) -> FieldSchema {
    let mut field = FieldSchema::new(id, FieldKind::File, "Attachment");
    field.allowed_file_types = allowed.iter().map(|t| t.to_string()).collect();
    field.max_file_size = max_mb;
    field
}

pub fn form_data(title: &str, fields: Vec<FieldSchema>) -> FormData {
    FormData {
        title: title.to_string(),
        description: None,
        fields,
        is_public: false,
        expires_at: None,
    }
}

pub fn upload(field_id: &str, file_name: &str, content_type: &str, bytes: usize) -> UploadedFile {
    UploadedFile {
        field_id: field_id.to_string(),
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        bytes: vec![0u8; bytes],
    }
}

// ============================================================================
// FAILING COLLABORATOR DOUBLES
// ============================================================================

/// File storage that is always down; every submission with an upload must
/// fail as a whole against it.
pub struct FailingFileStore;

#[async_trait]
impl FileStore for FailingFileStore {
    async fn store(&self, _upload: &UploadedFile) -> Result<String, UploadError> {
        Err(UploadError::Storage("object store unreachable".to_string()))
    }
}

/// A store whose every call fails, for exercising the degraded-read paths.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Unavailable("document store unreachable".to_string())
}

#[async_trait]
impl Store for FailingStore {
    async fn create_form(&self, _: &str, _: FormData) -> Result<Form, StoreError> {
        Err(down())
    }
    async fn get_form(&self, _: &str) -> Result<Option<Form>, StoreError> {
        Err(down())
    }
    async fn get_form_owned(&self, _: &str, _: &str) -> Result<Option<Form>, StoreError> {
        Err(down())
    }
    async fn list_forms(&self, _: &str) -> Result<Vec<Form>, StoreError> {
        Err(down())
    }
    async fn update_form(&self, _: &str, _: &str, _: FormData) -> Result<Option<Form>, StoreError> {
        Err(down())
    }
    async fn delete_form(&self, _: &str, _: &str) -> Result<bool, StoreError> {
        Err(down())
    }
    async fn create_response(&self, _: NewResponse) -> Result<Response, StoreError> {
        Err(down())
    }
    async fn list_responses(&self, _: &str) -> Result<Vec<Response>, StoreError> {
        Err(down())
    }
    async fn create_email_list(&self, _: &str, _: EmailListData) -> Result<EmailList, StoreError> {
        Err(down())
    }
    async fn get_email_list(&self, _: &str, _: &str) -> Result<Option<EmailList>, StoreError> {
        Err(down())
    }
    async fn list_email_lists(&self, _: &str) -> Result<Vec<EmailList>, StoreError> {
        Err(down())
    }
    async fn update_email_list(
        &self,
        _: &str,
        _: &str,
        _: EmailListData,
    ) -> Result<Option<EmailList>, StoreError> {
        Err(down())
    }
    async fn delete_email_list(&self, _: &str, _: &str) -> Result<bool, StoreError> {
        Err(down())
    }
}
