//! Account password hashing.
//!
//! New hashes are bcrypt at a fixed cost of 12. Verification also accepts
//! PHC-formatted Argon2 strings, which earlier builds of this service wrote
//! for the seed account.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use rand::Rng;
use thiserror::Error;

/// Work factor for every hash written by this service.
pub const BCRYPT_COST: u32 = 12;

const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#%+=";

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hash family recognized from a stored hash string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// Modular-crypt bcrypt: `$2a$`, `$2b$`, `$2x$` or `$2y$`.
    Bcrypt,
    /// PHC string: `$argon2id$`, `$argon2i$` or `$argon2d$`.
    Argon2,
}

impl HashScheme {
    pub fn detect(hash: &str) -> Option<Self> {
        if ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| hash.starts_with(prefix))
        {
            Some(HashScheme::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(HashScheme::Argon2)
        } else {
            None
        }
    }
}

/// Hashes a password with bcrypt at [`BCRYPT_COST`].
///
/// # Example
/// ```
/// use shared::password::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$2b$12$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored bcrypt or Argon2 hash.
///
/// Returns `Ok(false)` on mismatch and an error only when the stored hash
/// cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    match HashScheme::detect(hash) {
        Some(HashScheme::Bcrypt) => {
            bcrypt::verify(password, hash).map_err(|_| PasswordError::InvalidHashFormat)
        }
        Some(HashScheme::Argon2) => verify_argon2(password, hash),
        None => Err(PasswordError::InvalidHashFormat),
    }
}

fn verify_argon2(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    // Parameters come from the PHC string itself
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// Generates a random password of `len` characters.
///
/// Ambiguous glyphs (`0`/`O`, `1`/`l`/`I`) are excluded so the value can be
/// copied from a log line by hand.
pub fn generate_password(len: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    #[test]
    fn test_hash_uses_bcrypt_cost_twelve() {
        let hash = hash_password("test_password").unwrap();
        assert!(hash.starts_with("$2b$12$"));
        assert_eq!(HashScheme::detect(&hash), Some(HashScheme::Bcrypt));
    }

    #[test]
    fn test_hash_password_produces_unique_hashes() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_round_trip() {
        let hash = hash_password("رمز123!пароль").unwrap();
        assert!(verify_password("رمز123!пароль", &hash).unwrap());
        assert!(!verify_password("different", &hash).unwrap());
    }

    #[test]
    fn test_verify_legacy_2a_cost_twelve_hash() {
        let legacy = bcrypt::hash_with_result("admin123", BCRYPT_COST)
            .unwrap()
            .format_for_version(bcrypt::Version::TwoA);
        assert!(legacy.starts_with("$2a$12$"));

        assert!(verify_password("admin123", &legacy).unwrap());
        assert!(!verify_password("admin124", &legacy).unwrap());
    }

    #[test]
    fn test_verify_published_2a_vector() {
        let hash = "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";
        assert!(verify_password("U*U", hash).unwrap());
        assert!(!verify_password("U*V", hash).unwrap());
    }

    #[test]
    fn test_verify_argon2_phc_hash() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"earlier_build", &salt)
            .unwrap()
            .to_string();
        assert_eq!(HashScheme::detect(&hash), Some(HashScheme::Argon2));

        assert!(verify_password("earlier_build", &hash).unwrap());
        assert!(!verify_password("later_build", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        assert!(matches!(
            verify_password("password", "invalid_hash_format"),
            Err(PasswordError::InvalidHashFormat)
        ));
        assert!(matches!(
            verify_password("password", "$2b$12$tooshort"),
            Err(PasswordError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_generate_password_length_and_charset() {
        let password = generate_password(24);
        assert_eq!(password.chars().count(), 24);
        assert!(password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
        assert_ne!(password, generate_password(24));
    }
}
