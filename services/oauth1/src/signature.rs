//! HMAC-SHA1 signature.
//!
//! - [RFC 5849 Section 3.4.2](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.2)

use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::Result;

use crate::encode::encode;

/// Build the HMAC-SHA1 signing key.
///
/// ```text
/// encode(consumer_secret) + "&" + encode(token_secret or "")
/// ```
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        encode(consumer_secret),
        encode(token_secret.unwrap_or_default())
    )
}

/// Compute the base64 encoded HMAC-SHA1 digest of the base string.
///
/// The result is NOT percent-encoded, callers must encode it exactly once
/// wherever it's placed.
pub fn digest(
    base_string: &str,
    consumer_secret: &str,
    token_secret: Option<&str>,
) -> Result<String> {
    let key = signing_key(consumer_secret, token_secret);
    base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
}

/// Compute the percent-encoded `oauth_signature` of the base string.
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    token_secret: Option<&str>,
) -> Result<String> {
    digest(base_string, consumer_secret, token_secret).map(|v| encode(&v))
}
