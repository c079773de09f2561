use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use futures_util::StreamExt as _;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::errors::AppError;
use crate::models::form::PublicForm;
use crate::models::response::submit::{SubmissionInput, submit};
use crate::services::uploads::UploadedFile;
use crate::state::AppState;

/// GET /public/forms/{id} - Renderable shape of a public form; no
/// owner-only fields, no mutation on read.
pub async fn read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let form_id = path.into_inner();

    let form = state
        .store
        .get_form(&form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !form.is_public {
        return Err(AppError::FormNotPublic);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "form": PublicForm::from(&form)
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSubmission {
    pub form_id: Option<String>,
    pub responses: Option<Map<String, Value>>,
    pub respondent_email: Option<String>,
    pub respondent_name: Option<String>,
}

/// POST /public/submit-form - Unauthenticated JSON submission
/// `{formId, responses, respondentEmail?, respondentName?}`.
pub async fn submit_json(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PublicSubmission>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let (Some(form_id), Some(responses)) = (body.form_id, body.responses) else {
        return Err(AppError::InvalidInput(
            "Form ID and responses are required".to_string(),
        ));
    };

    let input = SubmissionInput {
        form_id,
        responses,
        respondent_email: body.respondent_email,
        respondent_name: body.respondent_name,
        files: Vec::new(),
        ip_address: client_ip(&req),
        user_agent: user_agent(&req),
    };

    let response = submit(state.store.as_ref(), state.uploads.as_ref(), input).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Form submitted successfully",
        "responseId": response.id
    })))
}

/// POST /forms/{id}/submit - Unauthenticated multipart submission: a
/// `responses` JSON part plus one `file_{fieldId}` part per upload.
pub async fn submit_multipart(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form_id = path.into_inner();
    let parts = read_multipart(payload).await?;

    let input = SubmissionInput {
        form_id,
        responses: parts.responses,
        respondent_email: parts.respondent_email,
        respondent_name: parts.respondent_name,
        files: parts.files,
        ip_address: client_ip(&req),
        user_agent: user_agent(&req),
    };

    let response = submit(state.store.as_ref(), state.uploads.as_ref(), input).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Form submitted successfully",
        "responseId": response.id
    })))
}

#[derive(Debug, Default)]
struct MultipartParts {
    responses: Map<String, Value>,
    files: Vec<UploadedFile>,
    respondent_email: Option<String>,
    respondent_name: Option<String>,
}

/// Drain the multipart stream into structured parts. Unrecognized part
/// names are ignored; a malformed stream or a non-object `responses` part
/// rejects the request.
async fn read_multipart(mut payload: Multipart) -> Result<MultipartParts, AppError> {
    let mut parts = MultipartParts::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(bad_payload)?;

        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk.map_err(bad_payload)?);
        }

        if name == "responses" {
            parts.responses = serde_json::from_slice(&data).map_err(|_| {
                AppError::InvalidInput("responses part must be a JSON object".to_string())
            })?;
        } else if let Some(field_id) = name.strip_prefix("file_") {
            parts.files.push(UploadedFile {
                field_id: field_id.to_string(),
                file_name: file_name.unwrap_or_else(|| "upload".to_string()),
                content_type: content_type
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                bytes: data,
            });
        } else if name == "respondentEmail" {
            parts.respondent_email = Some(String::from_utf8_lossy(&data).into_owned());
        } else if name == "respondentName" {
            parts.respondent_name = Some(String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok(parts)
}

fn bad_payload(e: actix_multipart::MultipartError) -> AppError {
    AppError::InvalidInput(format!("Malformed multipart payload: {e}"))
}

fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(str::to_string)
}

fn user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
