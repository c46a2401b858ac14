//! Password value object.
//!
//! Hashes are PHC strings produced by Argon2. The cost profile comes from
//! `Settings::password_hasher`; verification always reads the parameters
//! stored in the hash.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::{PasswordHasher, MIN_PASSWORD_LENGTH};
use crate::errors::{AppError, AppResult};

/// Hashed password.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with the default profile.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Self::with_hasher(plain_text, PasswordHasher::default())
    }

    /// Hash a plain text password with an explicit profile.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than the minimum.
    pub fn with_hasher(plain_text: &str, hasher: PasswordHasher) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2_for(hasher)?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash (from the database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// Malformed hashes never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

fn argon2_for(hasher: PasswordHasher) -> AppResult<Argon2<'static>> {
    match hasher {
        PasswordHasher::Argon2 => Ok(Argon2::default()),
        PasswordHasher::Argon2Fast => {
            let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, 1, None)
                .map_err(|e| AppError::internal(format!("Invalid Argon2 params: {}", e)))?;
            Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "testpass123";
        let password = Password::with_hasher(plain, PasswordHasher::Argon2Fast).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("testpass124"));
    }

    #[test]
    fn test_default_profile_round_trip() {
        let password = Password::new("SecurePassword123!").unwrap();
        assert!(password.as_str().starts_with("$argon2id$"));
        assert!(password.verify("SecurePassword123!"));
    }

    #[test]
    fn test_profiles_verify_each_other() {
        let fast = Password::with_hasher("crossprofile1", PasswordHasher::Argon2Fast).unwrap();
        let restored = Password::from_hash(fast.into_string());
        assert!(restored.verify("crossprofile1"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::with_hasher(plain, PasswordHasher::Argon2Fast).unwrap();
        let pass2 = Password::with_hasher(plain, PasswordHasher::Argon2Fast).unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_password_too_short() {
        assert!(Password::with_hasher("short", PasswordHasher::Argon2Fast).is_err());
        assert!(Password::with_hasher("12345678", PasswordHasher::Argon2Fast).is_ok());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("md5$legacy$abc".to_string());
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::with_hasher("redactme123", PasswordHasher::Argon2Fast).unwrap();
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
