use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::auth::{bearer, validate};
use crate::errors::AppError;
use crate::models::email_list::EmailListData;
use crate::models::email_list::import::parse_recipients_csv;
use crate::state::AppState;

/// GET /email-lists - List the caller's email lists, newest first.
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;

    // Same degraded-store stance as the forms dashboard: empty, not 500
    let lists = match state.store.list_email_lists(&owner_id).await {
        Ok(lists) => lists,
        Err(e) => {
            log::error!("Email list listing for {} failed, returning empty: {e}", owner_id);
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(json!({ "emailLists": lists })))
}

/// POST /email-lists - Create a list `{name, emails[]}`. Duplicate
/// addresses are tolerated; invalid ones are not.
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<EmailListData>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let data = body.into_inner();

    let mut errors = Vec::new();
    errors.extend(validate::validate_list_name(&data.name));
    errors.extend(validate::validate_recipients(&data.emails));
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("; ")));
    }

    let list = state.store.create_email_list(&owner_id, data).await?;
    log::info!("Email list {} created by {}", list.id, owner_id);

    Ok(HttpResponse::Created().json(json!({
        "emailList": list,
        "message": "Email list created successfully"
    })))
}

/// GET /email-lists/{id} - Read one owned list
pub async fn read(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let list_id = path.into_inner();

    let list = state
        .store
        .get_email_list(&list_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(json!({ "emailList": list })))
}

/// PUT /email-lists/{id} - Replace name and recipients of an owned list
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<EmailListData>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let list_id = path.into_inner();
    let data = body.into_inner();

    let mut errors = Vec::new();
    errors.extend(validate::validate_list_name(&data.name));
    errors.extend(validate::validate_recipients(&data.emails));
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("; ")));
    }

    let list = state
        .store
        .update_email_list(&list_id, &owner_id, data)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(json!({
        "emailList": list,
        "message": "Email list updated successfully"
    })))
}

/// DELETE /email-lists/{id} - Delete an owned list
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let list_id = path.into_inner();

    let deleted = state.store.delete_email_list(&list_id, &owner_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Email list deleted successfully" })))
}

/// POST /email-lists/{id}/import - Append recipients from a CSV body.
/// Column 1 is the address, column 2 an optional name; an optional header
/// row is detected and skipped. Malformed rows are skipped and counted.
pub async fn import(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: String,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let list_id = path.into_inner();

    let list = state
        .store
        .get_email_list(&list_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let outcome = parse_recipients_csv(&body);
    let added = outcome.accepted.len();

    let mut emails = list.emails;
    emails.extend(outcome.accepted);

    let list = state
        .store
        .update_email_list(&list_id, &owner_id, EmailListData { name: list.name, emails })
        .await?
        .ok_or(AppError::NotFound)?;

    let message = if outcome.skipped > 0 {
        "Some rows were invalid and were skipped"
    } else {
        "Recipients imported successfully"
    };

    Ok(HttpResponse::Ok().json(json!({
        "emailList": list,
        "added": added,
        "skipped": outcome.skipped,
        "message": message
    })))
}
