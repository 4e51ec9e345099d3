//! Signature primitives and the per-algorithm dispatch.
//!
//! The signing input is always the exact bytes
//! `base64url(header) || '.' || base64url(payload)`; callers hand it in
//! as received (verify) or as assembled (sign), never re-encoded.

use crate::alg::Algorithm;
use crate::b64;
use crate::error::{Error, Result};
use subtle::ConstantTimeEq;

mod hmac;
mod rsa;

/// Produce the raw signature bytes for the signing input.
///
/// `Algorithm::None` signs nothing and yields an empty signature.
pub(crate) fn sign(alg: Algorithm, key: &[u8], input: &str) -> Result<Vec<u8>> {
    match alg {
        Algorithm::None => Ok(Vec::new()),
        Algorithm::Hs256 => hmac::sign_hs256(input, key),
        Algorithm::Hs384 => hmac::sign_hs384(input, key),
        Algorithm::Hs512 => hmac::sign_hs512(input, key),
        Algorithm::Rs256 => rsa::sign_rs256(input, key),
    }
}

/// Check a received signature segment against the signing input.
///
/// HMAC algorithms recompute the signature and compare the base64url
/// forms; the comparison is length-checked and constant-time. RS256
/// decodes the segment and verifies it against the public key.
pub(crate) fn verify(alg: Algorithm, key: &[u8], input: &str, sig_segment: &str) -> Result<()> {
    match alg {
        Algorithm::None => Ok(()),
        Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => {
            let computed = b64::encode(&sign(alg, key, input)?);
            if computed.len() != sig_segment.len() {
                return Err(Error::Invalid);
            }
            if bool::from(computed.as_bytes().ct_eq(sig_segment.as_bytes())) {
                Ok(())
            } else {
                Err(Error::Invalid)
            }
        }
        Algorithm::Rs256 => {
            let signature = b64::decode(sig_segment)?;
            rsa::verify_rs256(input, &signature, key)
        }
    }
}
