use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{JwtKeys, MeResponse, SignupRequest, SignupResponse},
        error::ApiError,
        extractors::BearerClaims,
        password::hash_password,
        repo::{NewUser, User, UserProfile},
        services::session_cookie,
        validate,
    },
    state::AppState,
};

pub fn signup_routes() -> Router<AppState> {
    // Wrong verbs on the signup path get the legacy 404 body, not a 405
    Router::new().route("/auth/signup", post(signup).fallback(unknown_endpoint))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(HeaderMap, Json<SignupResponse>), ApiError> {
    if let Some(message) = validate::first_failure(&payload) {
        warn!(reason = message, "signup payload rejected");
        return Err(ApiError::Validation(message));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let hashed = hash_password(&payload.password)?;

    let user = User::create(
        &state.db,
        NewUser {
            first_name: &payload.first_name,
            last_name: &payload.last_name,
            email: &payload.email,
            password: &hashed,
            phone: &payload.phone,
            city: &payload.city,
        },
    )
    .await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, session_cookie(&token, keys.cookie_max_age_secs));

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        headers,
        Json(SignupResponse {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            city: user.city,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    BearerClaims(claims): BearerClaims,
) -> Result<Json<MeResponse>, ApiError> {
    // An email with no row is not an error: the client gets `user: null`
    let user = UserProfile::find_by_email(&state.db, &claims.email).await?;
    Ok(Json(MeResponse { user }))
}

pub async fn unknown_endpoint() -> (StatusCode, Json<&'static str>) {
    (StatusCode::NOT_FOUND, Json("Unknown endpoint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn unknown_endpoint_is_404_with_legacy_body() {
        let response = unknown_endpoint().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        assert_eq!(&bytes[..], br#""Unknown endpoint""#);
    }
}
