//! In-memory stand-in for the document database. Collections are plain
//! maps behind `RwLock`s; each write holds one lock, which is what makes a
//! single document insert or replacement atomic here. Last writer wins —
//! there is no version field.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::email_list::{EmailList, EmailListData};
use crate::models::form::{Form, FormData};
use crate::models::response::{NewResponse, Response};

use super::{Store, StoreError, new_id};

#[derive(Default)]
pub struct MemoryStore {
    forms: RwLock<HashMap<String, Form>>,
    /// Append-only; a plain Vec keeps creation order for tie-breaking.
    responses: RwLock<Vec<Response>>,
    email_lists: RwLock<HashMap<String, EmailList>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

/// A poisoned lock means a writer panicked mid-update; surface it as the
/// store being unavailable rather than poisoning every caller.
fn lock_failed<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_form(&self, owner_id: &str, data: FormData) -> Result<Form, StoreError> {
        let now = Utc::now();
        let form = Form {
            id: new_id(),
            owner_id: owner_id.to_string(),
            title: data.title,
            description: data.description,
            fields: data.fields,
            is_public: data.is_public,
            expires_at: data.expires_at,
            created_at: now,
            updated_at: now,
        };
        let mut forms = self.forms.write().map_err(lock_failed)?;
        forms.insert(form.id.clone(), form.clone());
        Ok(form)
    }

    async fn get_form(&self, id: &str) -> Result<Option<Form>, StoreError> {
        let forms = self.forms.read().map_err(lock_failed)?;
        Ok(forms.get(id).cloned())
    }

    async fn get_form_owned(&self, id: &str, owner_id: &str) -> Result<Option<Form>, StoreError> {
        let forms = self.forms.read().map_err(lock_failed)?;
        Ok(forms.get(id).filter(|f| f.owner_id == owner_id).cloned())
    }

    async fn list_forms(&self, owner_id: &str) -> Result<Vec<Form>, StoreError> {
        let forms = self.forms.read().map_err(lock_failed)?;
        let mut owned: Vec<Form> = forms
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_form(
        &self,
        id: &str,
        owner_id: &str,
        data: FormData,
    ) -> Result<Option<Form>, StoreError> {
        let mut forms = self.forms.write().map_err(lock_failed)?;
        let Some(form) = forms.get_mut(id).filter(|f| f.owner_id == owner_id) else {
            return Ok(None);
        };
        form.title = data.title;
        form.description = data.description;
        form.fields = data.fields;
        form.is_public = data.is_public;
        form.expires_at = data.expires_at;
        form.updated_at = Utc::now();
        Ok(Some(form.clone()))
    }

    async fn delete_form(&self, id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let mut forms = self.forms.write().map_err(lock_failed)?;
        let owned = forms.get(id).is_some_and(|f| f.owner_id == owner_id);
        if owned {
            forms.remove(id);
        }
        Ok(owned)
    }

    async fn create_response(&self, data: NewResponse) -> Result<Response, StoreError> {
        let response = Response {
            id: new_id(),
            form_id: data.form_id,
            respondent_email: data.respondent_email,
            respondent_name: data.respondent_name,
            responses: data.responses,
            file_uploads: data.file_uploads,
            submitted_at: Utc::now(),
            ip_address: data.ip_address,
            user_agent: data.user_agent,
        };
        let mut responses = self.responses.write().map_err(lock_failed)?;
        responses.push(response.clone());
        Ok(response)
    }

    async fn list_responses(&self, form_id: &str) -> Result<Vec<Response>, StoreError> {
        let responses = self.responses.read().map_err(lock_failed)?;
        Ok(responses
            .iter()
            .filter(|r| r.form_id == form_id)
            .cloned()
            .collect())
    }

    async fn create_email_list(
        &self,
        owner_id: &str,
        data: EmailListData,
    ) -> Result<EmailList, StoreError> {
        let now = Utc::now();
        let list = EmailList {
            id: new_id(),
            owner_id: owner_id.to_string(),
            name: data.name,
            emails: data.emails,
            created_at: now,
            updated_at: now,
        };
        let mut lists = self.email_lists.write().map_err(lock_failed)?;
        lists.insert(list.id.clone(), list.clone());
        Ok(list)
    }

    async fn get_email_list(
        &self,
        id: &str,
        owner_id: &str,
    ) -> Result<Option<EmailList>, StoreError> {
        let lists = self.email_lists.read().map_err(lock_failed)?;
        Ok(lists.get(id).filter(|l| l.owner_id == owner_id).cloned())
    }

    async fn list_email_lists(&self, owner_id: &str) -> Result<Vec<EmailList>, StoreError> {
        let lists = self.email_lists.read().map_err(lock_failed)?;
        let mut owned: Vec<EmailList> = lists
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_email_list(
        &self,
        id: &str,
        owner_id: &str,
        data: EmailListData,
    ) -> Result<Option<EmailList>, StoreError> {
        let mut lists = self.email_lists.write().map_err(lock_failed)?;
        let Some(list) = lists.get_mut(id).filter(|l| l.owner_id == owner_id) else {
            return Ok(None);
        };
        list.name = data.name;
        list.emails = data.emails;
        list.updated_at = Utc::now();
        Ok(Some(list.clone()))
    }

    async fn delete_email_list(&self, id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let mut lists = self.email_lists.write().map_err(lock_failed)?;
        let owned = lists.get(id).is_some_and(|l| l.owner_id == owner_id);
        if owned {
            lists.remove(id);
        }
        Ok(owned)
    }
}
