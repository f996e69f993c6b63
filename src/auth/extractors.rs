use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::dto::{Claims, JwtKeys};
use super::error::ApiError;

/// Verifies the bearer token and yields its claims.
#[derive(Debug)]
pub struct BearerClaims(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for BearerClaims
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
            .ok_or(ApiError::Unauthorized)?;

        // "Bearer <token>": the second whitespace-separated segment
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or(ApiError::Unauthorized)?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Unauthorized
        })?;

        Ok(BearerClaims(claims))
    }
}
