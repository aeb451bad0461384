//! Percent encoding used by OAuth 1.0a.
//!
//! - [RFC 5849 Section 3.6](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Everything except `A-Z a-z 0-9 - . _ ~` is escaped.
///
/// `! ' ( ) *` are escaped as well, unlike `encodeURIComponent` style encoders.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value for the signature base string, header and query.
///
/// Bytes are escaped as uppercase `%XY` and space becomes `%20`.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Percent-encode a value for an `application/x-www-form-urlencoded` body.
///
/// Same as [`encode`] but space becomes `+`. Never use this for the signature
/// base string.
pub fn encode_form(value: &str) -> String {
    // `%` itself is escaped to `%25`, so `%20` can only come from a space.
    encode(value).replace("%20", "+")
}
