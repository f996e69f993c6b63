use bcrypt::{hash, verify, BcryptError};
use tracing::error;

/// bcrypt work factor for stored passwords.
const HASH_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, HASH_COST).map_err(|e| {
        error!(error = %e, "bcrypt hash_password error");
        e
    })
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plain, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Str0ng!Pass";
        let hashed = hash_password(password).expect("hashing should succeed");
        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed).expect("verify should succeed"));
    }

    #[test]
    fn hash_uses_cost_ten() {
        let hashed = hash_password("Str0ng!Pass").expect("hashing should succeed");
        assert!(hashed.contains("$10$"), "unexpected hash format: {hashed}");
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hashed).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }
}
