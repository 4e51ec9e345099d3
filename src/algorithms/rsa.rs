//! RS256 (RSASSA-PKCS1-v1_5 with SHA-256) over PEM-encoded keys.
//!
//! Sign takes a PEM private key, verify a PEM public key. Both PKCS#8
//! and the older PKCS#1 PEM framings are accepted.

use crate::error::{Error, Result};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

fn private_key_from_pem(key: &[u8]) -> Result<RsaPrivateKey> {
    let pem = std::str::from_utf8(key).map_err(|_| Error::Invalid)?;
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|_| Error::Invalid)
}

fn public_key_from_pem(key: &[u8]) -> Result<RsaPublicKey> {
    let pem = std::str::from_utf8(key).map_err(|_| Error::Invalid)?;
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|_| Error::Invalid)
}

/// Sign the input with an RSA private key.
pub(crate) fn sign_rs256(message: &str, private_key_pem: &[u8]) -> Result<Vec<u8>> {
    let key = private_key_from_pem(private_key_pem)?;
    let signing_key = SigningKey::<Sha256>::new(key);
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|_| Error::Invalid)?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify a raw (already base64url-decoded) signature with an RSA
/// public key.
pub(crate) fn verify_rs256(message: &str, signature: &[u8], public_key_pem: &[u8]) -> Result<()> {
    let key = public_key_from_pem(public_key_pem)?;
    let verifying_key = VerifyingKey::<Sha256>::new(key);
    let signature = Signature::try_from(signature).map_err(|_| Error::Invalid)?;
    verifying_key
        .verify(message.as_bytes(), &signature)
        .map_err(|_| Error::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

    fn test_keypair() -> (String, String) {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        let private_pem = private.to_pkcs8_pem(LineEnding::LF).unwrap().to_string();
        let public_pem = public.to_public_key_pem(LineEnding::LF).unwrap();
        (private_pem, public_pem)
    }

    #[test]
    fn sign_verify_round_trip() {
        let (private_pem, public_pem) = test_keypair();
        let sig = sign_rs256("head.body", private_pem.as_bytes()).unwrap();
        assert_eq!(sig.len(), 256);
        verify_rs256("head.body", &sig, public_pem.as_bytes()).unwrap();
        assert_eq!(
            verify_rs256("head.tampered", &sig, public_pem.as_bytes()),
            Err(Error::Invalid)
        );
    }

    #[test]
    fn garbage_pem_rejected() {
        assert_eq!(
            sign_rs256("x", b"not a pem key"),
            Err(Error::Invalid)
        );
        assert_eq!(
            verify_rs256("x", &[0u8; 256], b"not a pem key"),
            Err(Error::Invalid)
        );
    }
}
