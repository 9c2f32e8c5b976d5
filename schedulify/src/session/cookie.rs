//! Signed session cookie codec.
//!
//! The cookie value is `<uuid>.<hex sha256(secret "." uuid)>`. The digest
//! only guards against clients minting or editing IDs by hand; a value
//! that fails verification is treated as no cookie at all.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

fn signature(id: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b".");
    hasher.update(id.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare hashes of both sides instead of the strings themselves so the
/// comparison cannot leak how much of a forged signature matched.
fn signatures_match(expected: &str, provided: &str) -> bool {
    Sha256::digest(expected.as_bytes()) == Sha256::digest(provided.as_bytes())
}

/// Render a session ID as a signed cookie value.
pub fn encode(id: Uuid, secret: &str) -> String {
    let id = id.to_string();
    let sig = signature(&id, secret);
    format!("{id}.{sig}")
}

/// Parse and verify a signed cookie value back into a session ID.
pub fn decode(value: &str, secret: &str) -> Option<Uuid> {
    let (id, sig) = value.split_once('.')?;
    if !signatures_match(&signature(id, secret), sig) {
        return None;
    }
    Uuid::parse_str(id).ok()
}

/// Extract the session ID from a request's `Cookie` header, if present
/// and validly signed.
pub fn from_headers(headers: &HeaderMap, secret: &str) -> Option<Uuid> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| decode(value, secret))
}

/// Full `Set-Cookie` header value for a session ID.
pub fn set_cookie_value(id: Uuid, secret: &str, max_age_secs: u64) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; Max-Age={max_age_secs}",
        encode(id, secret)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_encode_decode_round_trips() {
        let id = Uuid::now_v7();
        let value = encode(id, SECRET);
        assert_eq!(decode(&value, SECRET), Some(id));
    }

    #[test]
    fn test_tampered_id_is_rejected() {
        let value = encode(Uuid::now_v7(), SECRET);
        let other = Uuid::now_v7().to_string();
        let sig = value.split_once('.').unwrap().1;
        assert!(decode(&format!("{other}.{sig}"), SECRET).is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let value = encode(Uuid::now_v7(), SECRET);
        assert!(decode(&value, "other-secret").is_none());
    }

    #[test]
    fn test_truncated_signature_is_rejected() {
        let value = encode(Uuid::now_v7(), SECRET);
        let (id, sig) = value.split_once('.').unwrap();
        assert!(decode(&format!("{id}.{}", &sig[..sig.len() - 2]), SECRET).is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(decode("not-a-cookie", SECRET).is_none());
        assert!(decode("", SECRET).is_none());
    }

    #[test]
    fn test_from_headers_finds_sid_among_other_cookies() {
        let id = Uuid::now_v7();
        let mut headers = HeaderMap::new();
        let raw = format!("theme=dark; sid={}; lang=en", encode(id, SECRET));
        headers.insert(COOKIE, HeaderValue::from_str(&raw).unwrap());

        assert_eq!(from_headers(&headers, SECRET), Some(id));
    }

    #[test]
    fn test_from_headers_without_cookie_is_none() {
        assert!(from_headers(&HeaderMap::new(), SECRET).is_none());
    }
}
