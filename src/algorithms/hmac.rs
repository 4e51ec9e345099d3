//! HMAC-SHA signing for the HS256/HS384/HS512 family.

use crate::error::{Error, Result};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

fn compute<M>(secret: &[u8], message: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(secret).map_err(|_| Error::Invalid)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HMAC-SHA256 over the signing input.
pub(crate) fn sign_hs256(message: &str, secret: &[u8]) -> Result<Vec<u8>> {
    compute::<HmacSha256>(secret, message.as_bytes())
}

/// HMAC-SHA384 over the signing input.
pub(crate) fn sign_hs384(message: &str, secret: &[u8]) -> Result<Vec<u8>> {
    compute::<HmacSha384>(secret, message.as_bytes())
}

/// HMAC-SHA512 over the signing input.
pub(crate) fn sign_hs512(message: &str, secret: &[u8]) -> Result<Vec<u8>> {
    compute::<HmacSha512>(secret, message.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths() {
        let secret = b"0123456789abcdef";
        assert_eq!(sign_hs256("a.b", secret).unwrap().len(), 32);
        assert_eq!(sign_hs384("a.b", secret).unwrap().len(), 48);
        assert_eq!(sign_hs512("a.b", secret).unwrap().len(), 64);
    }

    #[test]
    fn same_input_same_mac() {
        let secret = b"secret";
        assert_eq!(
            sign_hs256("x.y", secret).unwrap(),
            sign_hs256("x.y", secret).unwrap()
        );
        assert_ne!(
            sign_hs256("x.y", secret).unwrap(),
            sign_hs256("x.z", secret).unwrap()
        );
    }
}
