//! base64url codec, RFC 4648 §5: URL-safe alphabet, no padding on encode.
//!
//! Decoding is tolerant the way the wire demands: padded or unpadded
//! input, and either the URL-safe or the standard alphabet (`-`/`_` are
//! normalized to `+`/`/` before decoding). Anything outside those
//! alphabets is rejected.

use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard-alphabet engine that takes padded and unpadded input alike.
const STANDARD_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to unpadded base64url.
pub(crate) fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode base64url (or plain base64) into bytes.
pub(crate) fn decode(src: &str) -> Result<Vec<u8>> {
    let normalized: String = src
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    STANDARD_INDIFFERENT
        .decode(normalized)
        .map_err(|_| Error::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_rfc4648_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn url_safe_alphabet_on_encode() {
        // 0xfb 0xef 0xbe maps onto characters that differ between the
        // standard and URL-safe alphabets.
        assert_eq!(encode(&[0xfb, 0xef, 0xbe]), "----");
        assert_eq!(encode(&[0xff, 0xff, 0xfe]), "___-");
    }

    #[test]
    fn decodes_with_or_without_padding() {
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
    }

    #[test]
    fn decodes_both_alphabets() {
        assert_eq!(decode("----").unwrap(), vec![0xfb, 0xef, 0xbe]);
        assert_eq!(decode("++++").unwrap(), vec![0xfb, 0xef, 0xbe]);
    }

    #[test]
    fn rejects_non_alphabet_input() {
        assert_eq!(decode("a!bc"), Err(Error::Invalid));
        assert_eq!(decode("a.bc"), Err(Error::Invalid));
        assert_eq!(decode("ab\ncd"), Err(Error::Invalid));
    }

    proptest! {
        #[test]
        fn round_trips_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(decode(&encode(&data)).unwrap(), data);
        }
    }
}
