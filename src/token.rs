//! The token object: algorithm, key material, and the claim set.

use crate::alg::Algorithm;
use crate::claims;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Owned key bytes, zeroized before release on reassignment and drop.
#[derive(Clone, Default, PartialEq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeyMaterial(Vec<u8>);

impl KeyMaterial {
    pub(crate) fn from_slice(key: &[u8]) -> Self {
        KeyMaterial(key.to_vec())
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overwrite the bytes with zero and empty the buffer.
    pub(crate) fn scrub(&mut self) {
        self.0.zeroize();
    }
}

/// A JSON Web Token: a signing algorithm, the key for it, and a mutable
/// claim object.
///
/// A fresh token is unsecured (`Algorithm::None`, no key) with an empty
/// claim set. `Clone` produces a deep copy with its own key buffer and
/// claim tree. Dropping the token scrubs the key.
///
/// The token is a single-owner mutable value; it carries no internal
/// synchronization.
#[derive(Clone, Default, PartialEq)]
pub struct Jwt {
    pub(crate) alg: Algorithm,
    pub(crate) key: KeyMaterial,
    pub(crate) claims: Map<String, Value>,
}

impl Jwt {
    /// Create an empty unsecured token.
    pub fn new() -> Self {
        Jwt::default()
    }

    /// The token's signing algorithm.
    pub fn alg(&self) -> Algorithm {
        self.alg
    }

    /// Read-only view of the claim object.
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Drop back to the unsecured state, zeroizing any held key.
    fn scrub_key(&mut self) {
        self.key.scrub();
        self.alg = Algorithm::None;
    }

    /// Set the algorithm and key together.
    ///
    /// Any previously held key is scrubbed first, no matter what.
    /// `Algorithm::None` demands an empty key, every other algorithm a
    /// non-empty one; for HS* the key is the shared secret, for RS256 a
    /// PEM-encoded RSA key. On error the token is left in the scrubbed
    /// `(None, no key)` state rather than keeping a stale pairing.
    pub fn set_alg(&mut self, alg: Algorithm, key: &[u8]) -> Result<()> {
        self.scrub_key();

        match alg {
            Algorithm::None => {
                if !key.is_empty() {
                    tracing::debug!("key supplied with the unsecured algorithm");
                    return Err(Error::Invalid);
                }
            }
            _ => {
                if key.is_empty() {
                    tracing::debug!(alg = %alg, "empty key for a signed algorithm");
                    return Err(Error::Invalid);
                }
                self.key = KeyMaterial::from_slice(key);
            }
        }

        self.alg = alg;
        Ok(())
    }

    /// Add a string claim. Claims are add-once: a present claim of any
    /// type makes this fail with [`Error::Exists`].
    pub fn add_grant(&mut self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            tracing::debug!("empty claim name");
            return Err(Error::Invalid);
        }
        if claims::get_string(&self.claims, name).is_some() {
            tracing::debug!(name, "claim already present");
            return Err(Error::Exists);
        }
        self.claims
            .insert(name.to_owned(), Value::String(value.to_owned()));
        Ok(())
    }

    /// Add an integer claim.
    ///
    /// The collision check reads through the integer getter, so only a
    /// present integer claim other than `-1` counts as a collision; a
    /// stored `-1` is indistinguishable from absent here.
    pub fn add_grant_int(&mut self, name: &str, value: i64) -> Result<()> {
        if name.is_empty() {
            tracing::debug!("empty claim name");
            return Err(Error::Invalid);
        }
        if claims::get_int(&self.claims, name).is_some_and(|v| v != -1) {
            tracing::debug!(name, "claim already present");
            return Err(Error::Exists);
        }
        self.claims.insert(name.to_owned(), Value::from(value));
        Ok(())
    }

    /// Bulk-import claims from a JSON object.
    ///
    /// The text must parse to an object with unique top-level keys.
    /// Unlike the add-once single-claim calls, the merge overwrites
    /// claims that are already present.
    pub fn add_grants_json(&mut self, json: &str) -> Result<()> {
        let parsed = claims::parse_object_strict(json).map_err(|e| {
            tracing::debug!("claim import is not a duplicate-free object");
            e
        })?;
        if parsed.keys().any(|k| k.is_empty()) {
            tracing::debug!("empty claim name in import");
            return Err(Error::Invalid);
        }
        for (name, value) in parsed {
            self.claims.insert(name, value);
        }
        Ok(())
    }

    /// String view of a claim.
    ///
    /// String claims are borrowed; any other present value comes back
    /// as its compact JSON text. Absent claims are `None`. The borrow
    /// is only valid until the token is mutated.
    pub fn grant(&self, name: &str) -> Option<Cow<'_, str>> {
        if name.is_empty() {
            return None;
        }
        claims::get_string(&self.claims, name)
    }

    /// Integer view of a claim; `None` when absent or not an integer.
    pub fn grant_int(&self, name: &str) -> Option<i64> {
        if name.is_empty() {
            return None;
        }
        claims::get_int(&self.claims, name)
    }

    /// Remove a claim. Removing an absent claim succeeds.
    pub fn del_grant(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            tracing::debug!("empty claim name");
            return Err(Error::Invalid);
        }
        self.claims.remove(name);
        Ok(())
    }
}

impl fmt::Debug for Jwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwt")
            .field("alg", &self.alg)
            .field("key_len", &self.key.as_slice().len())
            .field("claims", &self.claims)
            .finish()
    }
}
