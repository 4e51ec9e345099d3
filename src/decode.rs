//! Decoding and signature verification of received tokens.

use crate::alg::Algorithm;
use crate::algorithms;
use crate::b64;
use crate::claims;
use crate::error::{Error, Result};
use crate::token::{Jwt, KeyMaterial};

/// Log a rejection and collapse it to the caller-visible error. The
/// reason stays in the log; the return value never carries it.
fn reject(reason: &'static str) -> Error {
    tracing::debug!(reason, "token rejected");
    Error::Invalid
}

fn decode_inner(token: &str, key: &[u8], expected: Option<Algorithm>) -> Result<Jwt> {
    let (head, rest) = token
        .split_once('.')
        .ok_or_else(|| reject("missing header separator"))?;
    let (body, sig) = rest
        .split_once('.')
        .ok_or_else(|| reject("missing payload separator"))?;
    if head.is_empty() || body.is_empty() {
        return Err(reject("empty header or payload segment"));
    }

    let header_bytes = b64::decode(head).map_err(|_| reject("header is not base64url"))?;
    let header = claims::parse_object(&header_bytes).map_err(|_| reject("malformed header"))?;
    let label = claims::get_string(&header, "alg").ok_or_else(|| reject("header has no alg"))?;
    let alg =
        Algorithm::from_label(&label).map_err(|_| reject("unknown algorithm label"))?;

    match alg {
        Algorithm::None => {
            // Refusing a key here closes the alg-none downgrade: an
            // attacker who strips the signature cannot make a keyed
            // caller accept the result.
            if !key.is_empty() {
                return Err(reject("key supplied for an unsecured token"));
            }
        }
        _ => {
            if key.is_empty() {
                return Err(reject("no key for a signed algorithm"));
            }
            let typ =
                claims::get_string(&header, "typ").ok_or_else(|| reject("header has no typ"))?;
            if !typ.eq_ignore_ascii_case("JWT") {
                return Err(reject("typ is not JWT"));
            }
        }
    }

    if let Some(expected) = expected {
        if alg != expected {
            return Err(reject("algorithm differs from the expected one"));
        }
    }

    let payload_bytes = b64::decode(body).map_err(|_| reject("payload is not base64url"))?;
    let parsed_claims =
        claims::parse_object(&payload_bytes).map_err(|_| reject("malformed payload"))?;

    if alg != Algorithm::None {
        // Verify over the header and payload exactly as received, not a
        // re-encoded form.
        let signed_input = &token[..head.len() + 1 + body.len()];
        algorithms::verify(alg, key, signed_input, sig)
            .map_err(|_| reject("signature verification failed"))?;
    }

    tracing::debug!(alg = %alg, "token decoded");
    Ok(Jwt {
        alg,
        key: KeyMaterial::from_slice(key),
        claims: parsed_claims,
    })
}

impl Jwt {
    /// Decode a compact-serialized token and verify its signature.
    ///
    /// The header's `alg` drives verification. Unsecured (`none`)
    /// tokens require an empty `key`; every other algorithm requires a
    /// non-empty key and a header `typ` of `"JWT"`. All failures read
    /// as [`Error::Invalid`] without saying which check rejected the
    /// token.
    pub fn decode(token: &str, key: &[u8]) -> Result<Jwt> {
        decode_inner(token, key, None)
    }

    /// Like [`Jwt::decode`], but additionally requires the header to
    /// declare `expected`. A token signed with any other algorithm is
    /// rejected even if its signature would verify.
    pub fn decode_with_alg(token: &str, key: &[u8], expected: Algorithm) -> Result<Jwt> {
        decode_inner(token, key, Some(expected))
    }
}
