use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::auth::bearer;
use crate::errors::AppError;
use crate::models::response::export::export_csv;
use crate::models::response::query::{ResponseFilter, SortOrder, filter_and_sort};
use crate::state::AppState;

/// GET /forms/{id}/responses - List responses for an owned form.
/// Query params: filter (all|identified|anonymous), sort (newest|oldest).
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let form_id = path.into_inner();

    // Ownership gate before any response data is touched
    state
        .store
        .get_form_owned(&form_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let filter = ResponseFilter::parse(query.get("filter").map(String::as_str));
    let order = SortOrder::parse(query.get("sort").map(String::as_str));

    let responses = state.store.list_responses(&form_id).await?;
    let responses = filter_and_sort(responses, filter, order);

    Ok(HttpResponse::Ok().json(json!({ "responses": responses })))
}

/// GET /forms/{id}/responses/export - Download responses as CSV, honoring
/// the same filter/sort params as the listing.
pub async fn export(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let owner_id = bearer::require_owner(&req, state.identity.as_ref()).await?;
    let form_id = path.into_inner();

    let form = state
        .store
        .get_form_owned(&form_id, &owner_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let filter = ResponseFilter::parse(query.get("filter").map(String::as_str));
    let order = SortOrder::parse(query.get("sort").map(String::as_str));

    let responses = state.store.list_responses(&form_id).await?;
    let responses = filter_and_sort(responses, filter, order);

    let csv = export_csv(&form, &responses);
    let filename = format!(
        "{}_responses.csv",
        form.title.replace(['/', '\\', '"'], "_")
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(csv))
}
