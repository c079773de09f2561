//! Persistence behind a repository trait. The in-memory document store in
//! `memory` is the only implementation in this snapshot; a transactional
//! document or relational store can be swapped in without touching the
//! model layer or the handlers.

pub mod memory;

use std::fmt;

use async_trait::async_trait;
use rand::Rng;

use crate::models::email_list::{EmailList, EmailListData};
use crate::models::form::{Form, FormData};
use crate::models::response::{NewResponse, Response};

pub use memory::MemoryStore;

#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

/// Document repository. Owner-scoped lookups take the caller's resolved
/// owner id and filter on `(id, owner_id)` — a document owned by someone
/// else reads as absent.
#[async_trait]
pub trait Store: Send + Sync {
    // Forms
    async fn create_form(&self, owner_id: &str, data: FormData) -> Result<Form, StoreError>;
    /// Unscoped lookup, used by the public read and submission paths.
    async fn get_form(&self, id: &str) -> Result<Option<Form>, StoreError>;
    async fn get_form_owned(&self, id: &str, owner_id: &str) -> Result<Option<Form>, StoreError>;
    /// The owner's forms, newest first.
    async fn list_forms(&self, owner_id: &str) -> Result<Vec<Form>, StoreError>;
    /// Full replacement of the mutable portion; refreshes `updated_at`.
    async fn update_form(
        &self,
        id: &str,
        owner_id: &str,
        data: FormData,
    ) -> Result<Option<Form>, StoreError>;
    async fn delete_form(&self, id: &str, owner_id: &str) -> Result<bool, StoreError>;

    // Responses (append-only)
    async fn create_response(&self, data: NewResponse) -> Result<Response, StoreError>;
    /// All responses for a form, in creation order.
    async fn list_responses(&self, form_id: &str) -> Result<Vec<Response>, StoreError>;

    // Email lists
    async fn create_email_list(
        &self,
        owner_id: &str,
        data: EmailListData,
    ) -> Result<EmailList, StoreError>;
    async fn get_email_list(
        &self,
        id: &str,
        owner_id: &str,
    ) -> Result<Option<EmailList>, StoreError>;
    /// The owner's lists, newest first.
    async fn list_email_lists(&self, owner_id: &str) -> Result<Vec<EmailList>, StoreError>;
    async fn update_email_list(
        &self,
        id: &str,
        owner_id: &str,
        data: EmailListData,
    ) -> Result<Option<EmailList>, StoreError>;
    async fn delete_email_list(&self, id: &str, owner_id: &str) -> Result<bool, StoreError>;
}

/// Random 24-hex-char document id, minted once at creation.
pub fn new_id() -> String {
    let bytes: [u8; 12] = rand::rng().random();
    hex::encode(bytes)
}
