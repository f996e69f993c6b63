pub(crate) use crate::auth::dto::{Claims, JwtKeys};
use crate::config::JwtConfig;
use crate::state::AppState;
use axum::extract::FromRef;
use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_hours,
            cookie_max_age_secs,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs((ttl_hours as u64) * 3600),
            cookie_max_age_secs,
        }
    }
}

impl JwtKeys {
    /// HS256 token carrying the account email.
    pub fn sign(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            email: email.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(%email, "jwt signed");
        Ok(token)
    }

    /// Verify-and-decode: signature and expiry are both checked and any
    /// failure is a rejection. There is no decode-without-verify path.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        debug!(email = %data.claims.email, "jwt verified");
        Ok(data.claims)
    }
}

/// Set-Cookie value for the `jwt` session cookie.
pub fn session_cookie(token: &str, max_age_secs: i64) -> HeaderValue {
    let cookie = format!("jwt={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}");
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod jwt_tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        let state = AppState::fake();
        JwtKeys::from_ref(&state)
    }

    fn keys_with_secret(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs(24 * 3600),
            cookie_max_age_secs: 60 * 6 * 24,
        }
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign("john@example.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.email, "john@example.com");
        assert_eq!(claims.exp, claims.iat + 24 * 3600);
    }

    #[tokio::test]
    async fn verify_rejects_tampered_token() {
        let keys = make_keys();
        let mut token = keys.sign("john@example.com").expect("sign");
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = keys_with_secret("secret-a")
            .sign("john@example.com")
            .expect("sign");
        assert!(keys_with_secret("secret-b").verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        let now = OffsetDateTime::now_utc().unix_timestamp() as usize;
        let claims = Claims {
            email: "john@example.com".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not.a.token").is_err());
    }
}
