use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::auth::{bearer, validate};
use crate::errors::AppError;
use crate::models::form::FormData;
use crate::state::AppState;

/// POST /forms - Create a form `{title, description?, fields[], isPublic?,
/// expiresAt?}`
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<FormData>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let data = body.into_inner();

    // Validate request shape
    let mut errors = Vec::new();
    errors.extend(validate::validate_title(&data.title));
    errors.extend(validate::validate_fields(&data.fields));
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("; ")));
    }

    let form = state.store.create_form(&owner_id, data).await?;
    log::info!("Form {} created by {}", form.id, owner_id);

    Ok(HttpResponse::Created().json(json!({
        "form": form,
        "message": "Form created successfully"
    })))
}

/// GET /forms/{id} - Read one owned form
pub async fn read(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let form_id = path.into_inner();

    let form = state
        .store
        .get_form_owned(&form_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(json!({ "form": form })))
}

/// PUT /forms/{id} - Replace the mutable portion of an owned form
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<FormData>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let form_id = path.into_inner();
    let data = body.into_inner();

    let mut errors = Vec::new();
    errors.extend(validate::validate_title(&data.title));
    errors.extend(validate::validate_fields(&data.fields));
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("; ")));
    }

    let form = state
        .store
        .update_form(&form_id, &owner_id, data)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(json!({
        "form": form,
        "message": "Form updated successfully"
    })))
}

/// DELETE /forms/{id} - Delete an owned form. Its responses are left
/// behind as orphans.
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let form_id = path.into_inner();

    let deleted = state.store.delete_form(&form_id, &owner_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    log::info!("Form {} deleted by {}", form_id, owner_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Form deleted successfully" })))
}
