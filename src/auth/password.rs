// Password hashing with Argon2id
use crate::errors::{AppError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

/// Characters counting as "special" for the strength policy
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>+";

const WEAK_PASSWORD_MESSAGE: &str = "Invalid password. Password must be at least 8 characters \
     long, include letters, numbers, and special characters.";

/// Enforce the account password policy: at least 8 characters, with at
/// least one letter, one digit and one special character.
fn validate_strength(password: &str) -> Result<()> {
    let long_enough = password.chars().count() >= 8;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    if long_enough && has_letter && has_digit && has_special {
        Ok(())
    } else {
        Err(AppError::Validation(WEAK_PASSWORD_MESSAGE.to_string()))
    }
}

/// Hash a password using Argon2id with OWASP recommended parameters.
/// The strength policy is applied first so a weak password can never be
/// hashed, let alone stored.
///
/// Parameters (OWASP 2023):
/// - Memory: 19 MiB (19456 KiB)
/// - Iterations: 2
/// - Parallelism: 1
/// - Output length: 32 bytes
pub fn hash_password(password: &str) -> Result<String> {
    validate_strength(password)?;

    let params = Params::new(
        19456,    // m_cost (memory): 19 MiB
        2,        // t_cost (iterations)
        1,        // p_cost (parallelism)
        Some(32), // output length
    )
    .map_err(|e| AppError::Internal(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::error!("Password verification error: {}", e);
            Err(AppError::Internal(format!(
                "Password verification error: {}",
                e
            )))
        }
    }
}
