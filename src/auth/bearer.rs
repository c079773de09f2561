use actix_web::{HttpRequest, http::header};

use crate::errors::AppError;
use crate::services::identity::IdentityProvider;

/// Resolve the caller's owner id from the `Authorization: Bearer <token>`
/// header. Every owner-scoped handler calls this first and threads the
/// returned id explicitly — there is no ambient current-user state.
pub async fn require_owner(
    req: &HttpRequest,
    identity: &dyn IdentityProvider,
) -> Result<String, AppError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let Some(token) = header.strip_prefix("Bearer ") else {
        return Err(AppError::Unauthorized);
    };

    Ok(identity.verify(token.trim()).await?)
}
