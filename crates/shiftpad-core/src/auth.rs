//! Account credential helpers.
//!
//! Password hashes use argon2 with a random per-hash salt. Email
//! validation matches the original form check: one `@`, a non-empty local
//! part, a dotted domain, and no whitespace anywhere.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{Result, ShiftpadError};

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ShiftpadError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a candidate password against a stored hash.
///
/// Returns `Ok(false)` for a wrong password; `Err` only if the stored
/// hash itself cannot be parsed.
pub fn verify_password(hash: &str, candidate: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ShiftpadError::Auth(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

/// Lightweight shape check for email addresses.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("correct horse battery").expect("hash");
        assert!(verify_password(&hash, "correct horse battery").expect("verify"));
        assert!(!verify_password(&hash, "wrong password").expect("verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same input").expect("hash");
        let b = hash_password("same input").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("not-a-phc-string", "anything").is_err());
    }

    #[test]
    fn test_validate_email() {
        for valid in [
            "user@example.com",
            "a@b.c",
            "first.last@sub.domain.org",
            "user+tag@example.co.uk",
        ] {
            assert!(validate_email(valid), "{} should be valid", valid);
        }
        for invalid in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@domain",
            "user@.com",
            "user@domain.",
            "two@at@signs.com",
            "spaced user@example.com",
            "user@exa mple.com",
        ] {
            assert!(!validate_email(invalid), "{} should be invalid", invalid);
        }
    }
}
