use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::repo::UserProfile;

/// JWT payload carried by the `jwt` cookie / bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String, // account lookup key
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}

/// Holds JWT signing and verification keys with config data.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
    pub cookie_max_age_secs: i64,
}

/// Request body for signup.
///
/// Fields default to empty when absent so a missing field fails its own
/// validation rule instead of being rejected by the deserializer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
}

/// Body returned after a successful signup. No id, no token; the token
/// travels only in the cookie.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

/// Body of the session endpoint: the token's account, or null when the
/// email has no row.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<UserProfile>,
}
