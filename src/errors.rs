use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use std::fmt;

use crate::services::identity::IdentityError;
use crate::services::mail::MailError;
use crate::services::uploads::UploadError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    NotFound,
    InvalidInput(String),
    ValidationFailed(Vec<String>),
    FormNotPublic,
    FormExpired,
    Store(StoreError),
    Collaborator(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::ValidationFailed(fields) => {
                write!(f, "Validation failed for fields: {}", fields.join(", "))
            }
            AppError::FormNotPublic => write!(f, "Form is not public"),
            AppError::FormExpired => write!(f, "Form has expired"),
            AppError::Store(e) => write!(f, "Store error: {e}"),
            AppError::Collaborator(msg) => write!(f, "Collaborator error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::FormNotPublic | AppError::FormExpired => StatusCode::FORBIDDEN,
            AppError::Store(_) | AppError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Unauthorized => json!({ "error": "Unauthorized" }),
            // Absent and not-owned ids present identically
            AppError::NotFound => json!({ "error": "Not found" }),
            AppError::InvalidInput(msg) => json!({ "error": msg }),
            AppError::ValidationFailed(fields) => {
                json!({ "error": "Validation failed", "fields": fields })
            }
            AppError::FormNotPublic => json!({ "error": "This form is not publicly accessible" }),
            AppError::FormExpired => json!({ "error": "This form has expired" }),
            AppError::Store(e) => {
                log::error!("Store failure: {e}");
                json!({ "error": "Internal server error" })
            }
            AppError::Collaborator(msg) => {
                log::error!("Collaborator failure: {msg}");
                json!({ "error": "Internal server error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<IdentityError> for AppError {
    fn from(_: IdentityError) -> Self {
        AppError::Unauthorized
    }
}

impl From<MailError> for AppError {
    fn from(e: MailError) -> Self {
        AppError::Collaborator(format!("Email delivery failed: {e}"))
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        AppError::Collaborator(format!("File storage failed: {e}"))
    }
}
