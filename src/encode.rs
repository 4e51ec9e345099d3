//! Compact JWS serialization and the diagnostic dump form.

use crate::alg::Algorithm;
use crate::algorithms;
use crate::b64;
use crate::error::{Error, Result};
use crate::token::Jwt;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Write the JOSE header by hand: `typ` must come before `alg`, and a
/// generic serializer does not make that ordering promise.
///
/// An unsecured JWS provides no `typ` (draft-ietf-oauth-json-web-token
/// §6), so `none` headers carry the single `alg` member.
pub(crate) fn header_json(alg: Algorithm, pretty: bool) -> String {
    let sep = if pretty { " " } else { "" };
    let mut out = String::from("{");
    if pretty {
        out.push('\n');
    }

    if alg != Algorithm::None {
        if pretty {
            out.push_str("    ");
        }
        let _ = write!(out, "\"typ\":{sep}\"JWT\",");
        if pretty {
            out.push('\n');
        }
    }

    if pretty {
        out.push_str("    ");
    }
    let _ = write!(out, "\"alg\":{sep}\"{}\"", alg.label());
    if pretty {
        out.push('\n');
    }

    out.push('}');
    if pretty {
        out.push('\n');
    }
    out
}

/// Serialize the claim object. The map keeps its keys sorted, so the
/// compact form is deterministic for a given claim set. Pretty form
/// indents by four spaces.
pub(crate) fn payload_json(claims: &Map<String, Value>, pretty: bool) -> Result<String> {
    if pretty {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        claims.serialize(&mut ser).map_err(|_| Error::Invalid)?;
        String::from_utf8(buf).map_err(|_| Error::Invalid)
    } else {
        serde_json::to_string(claims).map_err(|_| Error::Invalid)
    }
}

impl Jwt {
    /// Encode to the compact serialization
    /// `base64url(header).base64url(payload).base64url(signature)`.
    ///
    /// The signature covers the exact bytes of the first two segments
    /// joined by the dot. Unsecured tokens have an empty third segment
    /// but keep the trailing dot.
    pub fn encode(&self) -> Result<String> {
        let header = header_json(self.alg, false);
        let payload = payload_json(&self.claims, false)?;

        let mut token = b64::encode(header.as_bytes());
        token.push('.');
        token.push_str(&b64::encode(payload.as_bytes()));

        let signature = algorithms::sign(self.alg, self.key.as_slice(), &token)?;
        token.push('.');
        token.push_str(&b64::encode(&signature));

        tracing::debug!(alg = %self.alg, "token encoded");
        Ok(token)
    }

    /// Diagnostic `header.payload` dump, not a wire format.
    ///
    /// Pretty mode puts the separating dot on its own line and indents
    /// both JSON documents by four spaces.
    pub fn dump(&self, pretty: bool) -> Result<String> {
        let mut out = header_json(self.alg, pretty);
        out.push('.');
        if pretty {
            out.push('\n');
        }
        out.push_str(&payload_json(&self.claims, pretty)?);
        if pretty {
            out.push('\n');
        }
        Ok(out)
    }
}
