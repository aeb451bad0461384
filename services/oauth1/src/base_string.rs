//! Signature base string.
//!
//! - [RFC 5849 Section 3.4.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1)

use http::uri::Scheme;

use crate::encode::encode;

/// Build the base string uri from scheme, host and path.
///
/// The query never takes part in the base string uri, so anything after `?`
/// in `path` is dropped. Scheme and host are lower-cased and a default port
/// (`:80` for http, `:443` for https) is removed.
pub fn base_url(scheme: &Scheme, host: &str, path: &str) -> String {
    let scheme = scheme.as_str().to_ascii_lowercase();
    let host = host.to_ascii_lowercase();
    let host = match scheme.as_str() {
        "http" => host.strip_suffix(":80").unwrap_or(host.as_str()),
        "https" => host.strip_suffix(":443").unwrap_or(host.as_str()),
        _ => host.as_str(),
    };
    let path = path.split_once('?').map_or(path, |(p, _)| p);

    format!("{scheme}://{host}{path}")
}

/// Build the signature base string.
///
/// ```text
/// UPPER(method) + "&" + encode(base_url) + "&" + encode(parameter_string)
/// ```
pub fn base_string(method: &str, base_url: &str, parameter_string: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url),
        encode(parameter_string)
    )
}
