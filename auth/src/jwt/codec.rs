use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// A freshly signed token together with its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Signs and verifies compact HS256 tokens with a single shared secret.
///
/// Expiry is evaluated here against the injected [`Clock`] rather than by
/// `jsonwebtoken`, with no leeway: a token is expired once `exp < now`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec using the system clock.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it once at startup; never read it per request
    pub fn new(secret: &[u8]) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Create a codec with an explicit time source.
    pub fn with_clock(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Stamp `iat = now`, `exp = now + ttl` onto the claims and sign them.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing primitive failed
    pub fn sign<C: TokenClaims>(
        &self,
        mut claims: C,
        ttl: Duration,
    ) -> Result<SignedToken, TokenError> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + ttl.as_secs() as i64;
        claims.set_validity(issued_at, expires_at);

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(SignedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Verify signature, structure and expiry.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, malformed token, wrong algorithm or claim shape
    /// * `Expired` - Authentic but past its `exp`
    pub fn verify<C: TokenClaims>(&self, token: &str) -> Result<C, TokenError> {
        let claims: C = self.decode_authentic(token)?;

        if claims.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify signature and structure, accepting only tokens that have expired.
    ///
    /// Used to read whose session is being refreshed. A token that is still
    /// live is rejected with `StillValid`.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, malformed token, wrong algorithm or claim shape
    /// * `StillValid` - Authentic and not yet expired
    pub fn verify_allowing_expired<C: TokenClaims>(&self, token: &str) -> Result<C, TokenError> {
        let claims: C = self.decode_authentic(token)?;

        if !claims.is_expired(self.clock.now()) {
            return Err(TokenError::StillValid);
        }

        Ok(claims)
    }

    fn decode_authentic<C: TokenClaims>(&self, token: &str) -> Result<C, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against our own clock
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<C>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
