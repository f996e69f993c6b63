use lazy_static::lazy_static;
use regex::Regex;

use super::dto::SignupRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// E.164-style mobile number: optional '+', 8 to 15 digits, no leading zero.
pub(crate) fn is_mobile_phone(phone: &str) -> bool {
    lazy_static! {
        static ref PHONE_RE: Regex = Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap();
    }
    PHONE_RE.is_match(phone)
}

/// At least 8 chars with one lowercase, one uppercase, one digit and one
/// symbol.
pub(crate) fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric())
}

fn length_in(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Run every rule in field order and report the first failing message.
///
/// All rules are evaluated even after one has failed; only the first
/// message is surfaced. Clients depend on that ordering.
pub fn first_failure(req: &SignupRequest) -> Option<&'static str> {
    let checks = [
        (length_in(&req.first_name, 3, 20), "First name is invalid"),
        (length_in(&req.last_name, 3, 20), "Last name is invalid"),
        (is_valid_email(&req.email), "Email is invalid"),
        (
            is_strong_password(&req.password),
            "Password is not strong enough",
        ),
        (is_mobile_phone(&req.phone), "Phone number is invalid"),
        (!req.city.is_empty(), "City is invalid"),
    ];

    let failures: Vec<&'static str> = checks
        .iter()
        .filter(|(ok, _)| !ok)
        .map(|&(_, message)| message)
        .collect();

    failures.first().copied()
}
