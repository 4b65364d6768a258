//! Admin guard for the catalog write endpoints.
//!
//! Every mutating route (CRUD, imports, photo uploads) takes an [`AdminUser`]
//! argument. Reads are public, so there is no plain "any user" extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use dram_core::error::CoreError;
use dram_core::roles::ROLE_ADMIN;
use dram_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// An administrator authenticated by a Bearer JWT.
///
/// Missing or invalid tokens are rejected with 401, valid tokens of any
/// other role with 403.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: DbId,
    pub username: String,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

/// The token of a `Bearer <token>` Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if claims.role != ROLE_ADMIN {
            tracing::warn!(
                user_id = claims.sub,
                role = %claims.role,
                path = %parts.uri.path(),
                "Catalog write refused for non-admin"
            );
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }

        Ok(AdminUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
