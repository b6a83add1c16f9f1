use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::PasswordError;

/// Well-formed hash of no real password, with the parameters `hash` uses.
const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Salted one-way password hashing (Argon2id).
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Two calls with the same input yield different strings; both verify.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A wrong password or an unparseable hash is `Ok(false)`; only faults
    /// inside the hasher itself are errors.
    ///
    /// # Errors
    /// * `VerificationFailed` - The hasher failed while computing the candidate
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return Ok(false),
        };

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(HashError::Crypto) => Err(PasswordError::VerificationFailed(
                HashError::Crypto.to_string(),
            )),
            // Mismatch, or a hash produced by different parameters/algorithm
            Err(_) => Ok(false),
        }
    }

    /// Spend the same work as a real `verify` without a stored hash.
    ///
    /// Run on the unknown-account path so it costs what a wrong password costs.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, DECOY_HASH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("Secr3t!A").unwrap();
        let second = hasher.hash("Secr3t!A").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("Secr3t!A", &first).unwrap());
        assert!(hasher.verify("Secr3t!A", &second).unwrap());
    }

    #[test]
    fn test_empty_password() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("").expect("Empty password should hash");
        assert!(hasher.verify("", &hash).unwrap());
        assert!(!hasher.verify("nonemptypassword", &hash).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "invalid_hash").unwrap());
        assert!(!hasher.verify("password", "").unwrap());
        assert!(!hasher
            .verify("password", "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy")
            .unwrap());
    }

    #[test]
    fn test_decoy_hash_matches_real_parameters() {
        let fresh_hash = PasswordHasher::new().hash("Secr3t!A").unwrap();
        let fresh = PasswordHash::new(&fresh_hash).unwrap();
        let decoy = PasswordHash::new(DECOY_HASH).unwrap();

        assert_eq!(decoy.algorithm, fresh.algorithm);
        assert_eq!(decoy.version, fresh.version);
        assert_eq!(decoy.params.to_string(), fresh.params.to_string());
        assert_eq!(decoy.hash.map(|h| h.len()), fresh.hash.map(|h| h.len()));
    }

    #[test]
    fn test_decoy_never_matches() {
        let hasher = PasswordHasher::new();

        hasher.verify_decoy("Secr3t!A");
        assert!(!hasher.verify("", DECOY_HASH).unwrap());
        assert!(!hasher.verify("Secr3t!A", DECOY_HASH).unwrap());
    }
}
