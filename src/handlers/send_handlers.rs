use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::auth::bearer;
use crate::errors::AppError;
use crate::models::email_list::Recipient;
use crate::services::mail::build_invitations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFormRequest {
    pub form_id: Option<String>,
    pub emails: Option<Vec<Recipient>>,
    pub sender_name: Option<String>,
}

/// POST /send-form - Invite recipients to an owned form:
/// `{formId, emails[], senderName?}`. Delivery is one batch; it succeeds
/// or fails as a whole.
pub async fn send_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SendFormRequest>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let body = body.into_inner();

    let (Some(form_id), Some(emails)) = (body.form_id, body.emails) else {
        return Err(AppError::InvalidInput(
            "Form ID and emails are required".to_string(),
        ));
    };
    if emails.is_empty() {
        return Err(AppError::InvalidInput(
            "Form ID and emails are required".to_string(),
        ));
    }

    let form = state
        .store
        .get_form_owned(&form_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let messages = build_invitations(
        &form,
        &emails,
        body.sender_name.as_deref(),
        &state.config.base_url,
        &state.config.from_email,
    );
    state.mailer.send_batch(&messages).await?;
    log::info!(
        "Form {} sent to {} recipients by {}",
        form.id,
        messages.len(),
        owner_id
    );

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Form sent to {} recipients", messages.len())
    })))
}
