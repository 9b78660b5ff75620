//! Password hashing for member registration.
//!
//! Uses Argon2id; the PHC string embeds salt and parameters.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;

use crate::{CorkboardError, Result};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Create the Argon2 hasher with recommended parameters.
///
/// Memory cost 64 MB, 3 iterations, 4 lanes.
fn create_argon2() -> Argon2<'static> {
    let params = Params::new(65536, 3, 4, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Validate password length requirements.
pub fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(CorkboardError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(CorkboardError::Validation(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id, returning a PHC-formatted string.
pub fn hash_password(password: &str) -> Result<String> {
    validate_password(password)?;

    let salt = SaltString::generate(&mut OsRng);
    let hash = create_argon2()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CorkboardError::Internal(format!("password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Returns `true` when the password matches. An unparseable stored hash is
/// an internal error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| CorkboardError::Internal("invalid password hash format".to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
