pub mod claims;
pub mod codec;
pub mod errors;
pub mod issuer;

pub use claims::AccessClaims;
pub use claims::RefreshClaims;
pub use claims::TokenClaims;
pub use codec::SignedToken;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use issuer::AccessTokenIssuer;
pub use issuer::IssuedAccessToken;
pub use issuer::RefreshTokenIssuer;
pub use issuer::ACCESS_TOKEN_TTL;
pub use issuer::REFRESH_TOKEN_TTL;
