use std::collections::BTreeMap;

use crate::constants::*;
use crate::encode::{encode, encode_form};

/// Build the normalized parameter string.
///
/// Pairs are sorted by key in byte order and emitted as `key=encode(value)`
/// joined by `&`. Keys must already be protocol safe and are not encoded.
///
/// ```text
/// {b: "2", a: "x y"} => "a=x%20y&b=2"
/// ```
///
/// - [RFC 5849 Section 3.4.1.3.2](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.2)
pub fn parameter_string<K, V>(params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    join_sorted(params, encode)
}

/// Build an `application/x-www-form-urlencoded` body.
///
/// Same layout as [`parameter_string`], but spaces in values become `+`.
pub fn form_string<K, V>(params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    join_sorted(params, encode_form)
}

fn join_sorted<K, V>(
    params: impl IntoIterator<Item = (K, V)>,
    encode_value: fn(&str) -> String,
) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut params: Vec<(K, V)> = params.into_iter().collect();
    params.sort_by(|(ka, va), (kb, vb)| {
        (ka.as_ref(), va.as_ref()).cmp(&(kb.as_ref(), vb.as_ref()))
    });

    let mut s = String::with_capacity(16);
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(k.as_ref());
        s.push('=');
        s.push_str(&encode_value(v.as_ref()));
    }

    s
}

/// The `oauth_*` parameters sent with every request.
///
/// `oauth_signature` is not part of this struct: it's added exactly once by
/// [`ProtocolParameters::into_signed`], after every other value is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParameters {
    consumer_key: String,
    token: Option<String>,
    nonce: String,
    timestamp: i64,
    extra: BTreeMap<String, String>,
}

impl ProtocolParameters {
    /// Create protocol parameters for one request.
    pub fn new(consumer_key: impl Into<String>, nonce: impl Into<String>, timestamp: i64) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            token: None,
            nonce: nonce.into(),
            timestamp,
            extra: BTreeMap::new(),
        }
    }

    /// Set `oauth_token`, it's omitted when `None`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Add caller configured extra protocol parameters, like `oauth_callback`.
    ///
    /// Extras never override the fixed `oauth_*` parameters.
    pub fn with_extra_params(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    /// Nonce of this request.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Timestamp of this request in unix seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// All parameters that take part in the signature, `oauth_signature` excluded.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut m = self.extra.clone();

        m.insert(OAUTH_CONSUMER_KEY.to_string(), self.consumer_key.clone());
        if let Some(token) = &self.token {
            m.insert(OAUTH_TOKEN.to_string(), token.clone());
        }
        m.insert(OAUTH_NONCE.to_string(), self.nonce.clone());
        m.insert(OAUTH_TIMESTAMP.to_string(), self.timestamp.to_string());
        m.insert(OAUTH_SIGNATURE_METHOD.to_string(), HMAC_SHA1.to_string());
        m.insert(OAUTH_VERSION.to_string(), VERSION_1_0.to_string());

        m
    }

    /// Consume the parameters and attach the (unencoded) signature.
    pub fn into_signed(self, signature: String) -> BTreeMap<String, String> {
        let mut m = self.to_map();
        m.insert(OAUTH_SIGNATURE.to_string(), signature);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_parameter_string() {
        let params = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "x y".to_string()),
            ("c".to_string(), "!".to_string()),
        ]);

        assert_eq!(parameter_string(&params), "a=x%20y&b=2&c=%21");
        assert_eq!(form_string(&params), "a=x+y&b=2&c=%21");
    }

    #[test]
    fn test_parameter_string_empty() {
        assert_eq!(parameter_string(&BTreeMap::<String, String>::new()), "");
        assert_eq!(form_string(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn test_parameter_string_ignores_insertion_order() {
        let forward = vec![("oauth_nonce", "n"), ("Zeta", "z"), ("alpha", "a b"), ("a", "1")];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();
        let hashed: HashMap<&str, &str> = forward.iter().cloned().collect();

        let expected = "Zeta=z&a=1&alpha=a%20b&oauth_nonce=n";
        assert_eq!(parameter_string(forward), expected);
        assert_eq!(parameter_string(backward), expected);
        assert_eq!(parameter_string(hashed), expected);
    }

    #[test]
    fn test_protocol_parameters() {
        let params = ProtocolParameters::new("key", "nonce", 1191242096)
            .with_token(Some("token".to_string()))
            .with_extra_params(BTreeMap::from([
                ("oauth_callback".to_string(), "oob".to_string()),
                (OAUTH_NONCE.to_string(), "ignored".to_string()),
            ]));

        assert_eq!(params.nonce(), "nonce");
        assert_eq!(params.timestamp(), 1191242096);
        assert_eq!(
            parameter_string(params.to_map()),
            "oauth_callback=oob&oauth_consumer_key=key&oauth_nonce=nonce\
             &oauth_signature_method=HMAC-SHA1&oauth_timestamp=1191242096\
             &oauth_token=token&oauth_version=1.0"
        );

        let signed = params.into_signed("a+b=".to_string());
        assert_eq!(signed[OAUTH_SIGNATURE], "a+b=");
        assert_eq!(signed.len(), 8);
    }

    #[test]
    fn test_protocol_parameters_without_token() {
        let m = ProtocolParameters::new("key", "nonce", 1).to_map();
        assert!(!m.contains_key(OAUTH_TOKEN));
        assert_eq!(m.len(), 5);
    }
}
