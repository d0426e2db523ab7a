/**
 * Authentication Extractor
 *
 * This module resolves the current user for protected routes. It extracts
 * the bearer token from the Authorization header, verifies it, and checks
 * that the subject still exists in the users table.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::server::state::AppState;
use crate::backend::users::store::get_user_by_id;

/// Authenticated user resolved from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                StatusCode::UNAUTHORIZED
            })?;

        // Format: "Bearer <token>"
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            StatusCode::UNAUTHORIZED
        })?;

        let claims = verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            StatusCode::UNAUTHORIZED
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            StatusCode::UNAUTHORIZED
        })?;

        // Tokens can outlive their user; reject subjects no longer present
        let user = get_user_by_id(&state.db_pool, user_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve token subject: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or_else(|| {
                tracing::warn!("Token subject not found: {}", user_id);
                StatusCode::UNAUTHORIZED
            })?;

        Ok(CurrentUser {
            id: user.id,
            username: user.username,
        })
    }
}
