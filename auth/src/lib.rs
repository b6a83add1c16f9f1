//! Authentication utilities library
//!
//! Provides the credential primitives used by the calendar service:
//! - Password hashing (Argon2id)
//! - Signed access / refresh tokens (HS256) with an injectable clock
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use std::time::Duration;
//!
//! use auth::{AccessClaims, TokenCodec};
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_user(Uuid::new_v4(), "Alice", "alice@example.com");
//! let signed = codec.sign(claims, Duration::from_secs(900)).unwrap();
//! let decoded: AccessClaims = codec.verify(&signed.token).unwrap();
//! assert_eq!(decoded.name, "Alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token pair
//! let result = auth
//!     .authenticate("password123", &hash, Uuid::new_v4(), "Alice", "alice@example.com")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_access_token(&result.access_token.token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::AccessClaims;
pub use jwt::IssuedAccessToken;
pub use jwt::RefreshClaims;
pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use jwt::ACCESS_TOKEN_TTL;
pub use jwt::REFRESH_TOKEN_TTL;
pub use password::PasswordError;
pub use password::PasswordHasher;
