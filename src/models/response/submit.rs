//! The submission pipeline: form lookup, expiry gate, full-field
//! validation, file ingestion, then a single atomic response insert.
//! Any failing step aborts the whole attempt — there is no partial
//! persistence of a submission.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::form::FieldKind;
use crate::models::form::validate::{FieldError, FileMeta, validate_field};
use crate::services::uploads::{FileStore, UploadError, UploadedFile};
use crate::store::{Store, StoreError};

use super::types::{FileUpload, NewResponse, Response};

/// Raw payload of one submission attempt, before validation.
#[derive(Debug, Default)]
pub struct SubmissionInput {
    pub form_id: String,
    pub responses: Map<String, Value>,
    pub respondent_email: Option<String>,
    pub respondent_name: Option<String>,
    pub files: Vec<UploadedFile>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub enum SubmitError {
    FormNotFound,
    FormExpired,
    /// Every failing field, not just the first.
    Validation(Vec<FieldError>),
    Upload(UploadError),
    Store(StoreError),
}

impl From<SubmitError> for AppError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::FormNotFound => AppError::NotFound,
            SubmitError::FormExpired => AppError::FormExpired,
            SubmitError::Validation(errors) => {
                AppError::ValidationFailed(errors.into_iter().map(|e| e.field_id).collect())
            }
            SubmitError::Upload(e) => e.into(),
            SubmitError::Store(e) => e.into(),
        }
    }
}

/// Run one submission through the pipeline. On success exactly one Response
/// document exists; on any rejection, none.
pub async fn submit(
    store: &dyn Store,
    uploads: &dyn FileStore,
    input: SubmissionInput,
) -> Result<Response, SubmitError> {
    let form = store
        .get_form(&input.form_id)
        .await
        .map_err(SubmitError::Store)?
        .ok_or(SubmitError::FormNotFound)?;

    if form.is_expired(Utc::now()) {
        return Err(SubmitError::FormExpired);
    }

    // Validate every schema field, collecting all failures. Keys in the
    // payload that match no schema field are dropped, not persisted.
    let mut errors = Vec::new();
    let mut accepted = Map::new();
    for field in &form.fields {
        let value = input.responses.get(&field.id);
        let upload = input.files.iter().find(|f| f.field_id == field.id);
        let meta = upload.map(|u| FileMeta {
            file_name: &u.file_name,
            content_type: &u.content_type,
            size_bytes: u.bytes.len() as u64,
        });
        match validate_field(field, value, meta.as_ref()) {
            Ok(Some(value)) => {
                accepted.insert(field.id.clone(), value);
            }
            Ok(None) => {}
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(SubmitError::Validation(errors));
    }

    // Hand accepted uploads to the storage collaborator. A single failure
    // fails the submission — never some files persisted and others not.
    let mut file_uploads = Vec::new();
    for field in form.fields.iter().filter(|f| f.kind == FieldKind::File) {
        if let Some(upload) = input.files.iter().find(|f| f.field_id == field.id) {
            let file_url = uploads.store(upload).await.map_err(SubmitError::Upload)?;
            file_uploads.push(FileUpload {
                field_id: field.id.clone(),
                file_name: upload.file_name.clone(),
                file_size: upload.bytes.len() as u64,
                file_type: upload.content_type.clone(),
                file_url,
            });
        }
    }

    store
        .create_response(NewResponse {
            form_id: form.id.clone(),
            respondent_email: input.respondent_email.filter(|e| !e.is_empty()),
            respondent_name: input.respondent_name.filter(|n| !n.is_empty()),
            responses: accepted,
            file_uploads,
            ip_address: input.ip_address,
            user_agent: input.user_agent,
        })
        .await
        .map_err(SubmitError::Store)
}
