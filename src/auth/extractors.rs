use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::error::ApiError;

use super::claims::TokenKind;
use super::jwt::JwtKeys;

/// Guards protected routes: pulls the bearer token out of the
/// `Authorization` header, verifies it and yields the caller's user ID.
/// Pure function of the header and the signing keys; no DB lookup here.
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Authentication("missing Authorization header".to_string())
            })?;

        // Expect "Bearer <token>"; anything else counts as no token.
        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Authentication("invalid auth scheme".to_string()))?;

        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err(ApiError::Authorization("invalid or expired token".to_string()));
            }
        };

        if claims.kind != TokenKind::Session {
            return Err(ApiError::Authorization("session token required".to_string()));
        }

        Ok(AuthUser(claims.sub))
    }
}
