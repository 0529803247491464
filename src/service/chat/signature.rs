//! LINE webhook signature verification.
//!
//! LINE signs every webhook body with HMAC-SHA256 keyed by the channel secret
//! and sends the base64 digest in the `x-line-signature` header.
//!
//! The digest MUST be computed over the raw request body bytes. Re-serializing
//! the parsed JSON changes key order and whitespace, and the digest no longer
//! matches.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Compute the base64 HMAC-SHA256 of `body` keyed with `channel_secret`.
pub fn compute_signature(body: &[u8], channel_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes()).expect("HMAC accepts keys of any length");

    mac.update(body);

    STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify an `x-line-signature` header value against the raw body.
///
/// Returns `true` only if the header equals the base64 digest exactly.
pub fn verify_signature(body: &[u8], signature: &str, channel_secret: &str) -> bool {
    let expected = compute_signature(body, channel_secret);

    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
