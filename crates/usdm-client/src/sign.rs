//! Canonical query encoding and HMAC-SHA256 request signing.
//!
//! Uses the `ring` crate for constant-time HMAC computation. Secrets are
//! never logged or included in error messages.

use crate::error::Result;
use ring::hmac;

/// Encode parameters into the canonical query string.
///
/// Insertion order is preserved; values are percent-encoded. This one
/// function produces both the payload that gets signed and the string
/// that gets transmitted — there must never be a second encoder.
pub fn encode_query(params: &[(String, String)]) -> Result<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Sign a canonical query string: `HMAC-SHA256(secret, query_string)`.
///
/// The resulting lowercase hex signature is appended as `&signature=...`.
pub fn sign_query(secret: &[u8], query_string: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    let signature = hmac::sign(&key, query_string.as_bytes());
    hex::encode(signature.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known vector from the public futures API docs.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOC_QUERY: &str = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
    const DOC_SIGNATURE: &str = "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71";

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_signing_known_vector() {
        let sig = sign_query(DOC_SECRET.as_bytes(), DOC_QUERY);
        assert_eq!(sig, DOC_SIGNATURE);
    }

    #[test]
    fn test_signature_is_64_lowercase_hex_chars() {
        let sig = sign_query(b"key", "data");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_signing_deterministic() {
        let sig1 = sign_query(b"secret", "symbol=BTCUSDT&timestamp=1000");
        let sig2 = sign_query(b"secret", "symbol=BTCUSDT&timestamp=1000");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_different_secrets_differ() {
        let query = "symbol=BTCUSDT&timestamp=1000000";
        assert_ne!(
            sign_query(b"secret_a", query),
            sign_query(b"secret_b", query)
        );
    }

    #[test]
    fn test_single_field_mutation_changes_signature() {
        let secret = b"my_secret";
        let base = sign_query(secret, "symbol=BTCUSDT&quantity=0.001&timestamp=1000");
        let sym = sign_query(secret, "symbol=ETHUSDT&quantity=0.001&timestamp=1000");
        let qty = sign_query(secret, "symbol=BTCUSDT&quantity=0.002&timestamp=1000");
        let ts = sign_query(secret, "symbol=BTCUSDT&quantity=0.001&timestamp=1001");
        assert_ne!(base, sym);
        assert_ne!(base, qty);
        assert_ne!(base, ts);
    }

    #[test]
    fn test_encode_preserves_insertion_order() {
        let params = pairs(&[
            ("symbol", "BTCUSDT"),
            ("side", "BUY"),
            ("type", "MARKET"),
            ("quantity", "0.001"),
        ]);
        let encoded = encode_query(&params).unwrap();
        assert_eq!(encoded, "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.001");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let params = pairs(&[("a", "1"), ("b", "2")]);
        assert_eq!(
            encode_query(&params).unwrap(),
            encode_query(&params).unwrap()
        );
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let params = pairs(&[
            ("symbol", "BTCUSDT"),
            ("quantity", "0.001"),
            ("note", "a b&c=d"),
        ]);
        let encoded = encode_query(&params).unwrap();
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, params);
    }
}
