//! Signing algorithm tags and their wire labels.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Signing algorithm carried in the JOSE header's `alg` field.
///
/// `None` is an unsecured token: empty key, empty signature segment, no
/// `typ` in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Unsecured JWS.
    #[default]
    None,
    /// HMAC-SHA256.
    Hs256,
    /// HMAC-SHA384.
    Hs384,
    /// HMAC-SHA512.
    Hs512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
}

impl Algorithm {
    /// Canonical label emitted in encoded headers.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::Rs256 => "RS256",
        }
    }

    /// Parse a header label. Matching is case-insensitive; the canonical
    /// form is what [`Algorithm::label`] returns.
    pub fn from_label(label: &str) -> Result<Self> {
        if label.eq_ignore_ascii_case("none") {
            Ok(Algorithm::None)
        } else if label.eq_ignore_ascii_case("HS256") {
            Ok(Algorithm::Hs256)
        } else if label.eq_ignore_ascii_case("HS384") {
            Ok(Algorithm::Hs384)
        } else if label.eq_ignore_ascii_case("HS512") {
            Ok(Algorithm::Hs512)
        } else if label.eq_ignore_ascii_case("RS256") {
            Ok(Algorithm::Rs256)
        } else {
            Err(Error::Invalid)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_label(s)
    }
}
