//! Compact JWS (JWT) tokens: claim building, deterministic encoding,
//! and signature verification per RFC 7515/7519.
//!
//! The crate covers the unsecured `none` form, the HMAC family
//! (HS256/HS384/HS512) with raw shared secrets, and RS256 with
//! PEM-encoded RSA keys. Payload serialization is sorted-key and
//! compact, so encoding a given claim set is byte-stable.
//!
//! ```
//! use webtoken::{Algorithm, Jwt};
//!
//! # fn main() -> webtoken::Result<()> {
//! let secret = b"012345678901234567890123456789XY";
//!
//! let mut token = Jwt::new();
//! token.add_grant("iss", "files.maclara-llc.com")?;
//! token.add_grant_int("iat", 1475980545)?;
//! token.set_alg(Algorithm::Hs256, secret)?;
//!
//! let encoded = token.encode()?;
//! let verified = Jwt::decode(&encoded, secret)?;
//! assert_eq!(verified.grant("iss").as_deref(), Some("files.maclara-llc.com"));
//! assert_eq!(verified.grant_int("iat"), Some(1475980545));
//! # Ok(())
//! # }
//! ```

mod alg;
mod algorithms;
mod b64;
mod claims;
mod decode;
mod encode;
mod error;
mod token;

pub use alg::Algorithm;
pub use error::{Error, Result};
pub use token::Jwt;
