//! HMAC-SHA512 signature generation for Poloniex API authentication.
//!
//! Poloniex private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA512(POST_data, api_secret))
//! ```
//!
//! `POST_data` is the exact url-encoded body, `nonce` included. The lowercase
//! hex digest is sent in the `Sign` header and the API key in the `Key` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::PoloniexError;
use crate::types::Params;

type HmacSha512 = Hmac<Sha512>;

/// Name of the header carrying the API key.
pub const KEY_HEADER: &str = "Key";
/// Name of the header carrying the signature.
pub const SIGN_HEADER: &str = "Sign";

/// Encode parameters as an `application/x-www-form-urlencoded` string.
///
/// The output is both the HMAC message and the POST body; any difference
/// between the two makes the exchange reject the signature.
pub fn encode_params(params: &Params) -> Result<String, PoloniexError> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Sign a message with the API secret.
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA512 digest (always 128 characters).
///
/// # Example
///
/// ```rust
/// use poloniex_api_client::auth::sign;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign(b"command=returnBalances&nonce=1", b"secret")?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign(message: &[u8], secret: &[u8]) -> Result<String, PoloniexError> {
    let mut hmac = HmacSha512::new_from_slice(secret)
        .map_err(|e| PoloniexError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message);
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// The authentication header pair for a private request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value of the `Key` header.
    pub key: String,
    /// Value of the `Sign` header.
    pub sign: String,
}

impl AuthHeaders {
    /// Header `(name, value)` pairs in the order they are sent.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [(KEY_HEADER, self.key.as_str()), (SIGN_HEADER, self.sign.as_str())]
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("key", &self.key)
            .field("sign", &"[REDACTED]")
            .finish()
    }
}

/// Build the `Key`/`Sign` header pair.
pub fn build_headers(api_key: impl Into<String>, signature: impl Into<String>) -> AuthHeaders {
    AuthHeaders {
        key: api_key.into(),
        sign: signature.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_signature_known_vector() {
        // RFC 4231, test case 2.
        let signature = sign(b"what do ya want for nothing?", b"Jefe").unwrap();
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signature_consistency() {
        let sig1 = sign(b"command=returnBalances&nonce=12345", b"my_secret").unwrap();
        let sig2 = sign(b"command=returnBalances&nonce=12345", b"my_secret").unwrap();

        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 128);
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let sig1 = sign(b"command=returnBalances&nonce=12345", b"my_secret").unwrap();
        let sig2 = sign(b"command=returnBalances&nonce=12346", b"my_secret").unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_with_empty_inputs() {
        let signature = sign(b"", b"").unwrap();
        assert_eq!(signature.len(), 128);
    }

    #[test]
    fn test_encode_round_trip() {
        let params: Params = [
            ("command", "withdraw"),
            ("address", "addr with spaces&symbols=+/"),
            ("paymentId", "ünïcode"),
            ("amount", "1.5"),
        ]
        .into_iter()
        .collect();

        let encoded = encode_params(&params).unwrap();
        assert!(!encoded.contains(' '));

        let decoded: BTreeMap<String, String> = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, BTreeMap::from(params));
    }

    #[test]
    fn test_encode_format() {
        let params = Params::new()
            .with("command", "returnBalances")
            .with("nonce", 1_500_000_000_000_000u64);
        assert_eq!(
            encode_params(&params).unwrap(),
            "command=returnBalances&nonce=1500000000000000"
        );
    }

    #[test]
    fn test_headers_redact_signature() {
        let headers = build_headers("my_key", "abcdef");
        assert_eq!(headers.pairs(), [("Key", "my_key"), ("Sign", "abcdef")]);
        let debug_str = format!("{:?}", headers);
        assert!(!debug_str.contains("abcdef"));
    }
}
