use std::collections::BTreeMap;

use bytes::Bytes;
use http::header::HeaderName;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::Result;

/// Unsigned request as described by the caller.
///
/// Signing never mutates a `SigningRequest`: the signer reads it and returns a
/// brand new [`SignedRequest`]. A fresh nonce and timestamp are generated on
/// every signing, so the same `SigningRequest` may be signed many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP path, may carry a `?query` that will be folded into `query`.
    pub path: String,
    /// Query parameters, not yet encoded.
    pub query: BTreeMap<String, String>,
    /// Form body parameters, not yet encoded.
    pub form: BTreeMap<String, String>,
}

impl SigningRequest {
    /// Create a new signing request without any parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            form: BTreeMap::new(),
        }
    }

    /// Create a `GET` signing request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a `POST` signing request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add all query parameters from given iterator.
    pub fn with_query_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a form body parameter.
    pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    /// Add all form body parameters from given iterator.
    pub fn with_form_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.form
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Fully assembled request, ready to be sent.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// Host, with an optional port.
    pub host: String,
    /// Path with the encoded query string appended if any.
    pub path: String,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Encoded request body, empty if no body is sent.
    pub body: Bytes,
}

impl SignedRequest {
    /// The encoded query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, q)| q)
    }

    /// Decode query string into key/value pairs, in the order they appear.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query()
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Decode form body into key/value pairs, in the order they appear.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Build the full uri of this request.
    ///
    /// Malformed host or path are reported here instead of during signing.
    pub fn uri(&self) -> Result<Uri> {
        Ok(Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.host.as_str())
            .path_and_query(self.path.as_str())
            .build()?)
    }

    /// Convert into an `http::Request` that can be handed to [`HttpSend`](crate::HttpSend).
    pub fn into_http_request(self) -> Result<http::Request<Bytes>> {
        let uri = self.uri()?;

        let mut req = http::Request::new(self.body);
        *req.method_mut() = self.method;
        *req.uri_mut() = uri;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}
