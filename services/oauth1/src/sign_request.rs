//! OAuth 1.0a request assembler.
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use log::debug;
use oauthsign_core::time::{now, unix_seconds, DateTime};
use oauthsign_core::{Context, Error, Result, SignRequest, SignedRequest, SigningRequest};

use crate::base_string::{base_string, base_url};
use crate::config::{Config, DeliveryMode};
use crate::constants::*;
use crate::credential::Credential;
use crate::encode::encode;
use crate::nonce::{GenerateNonce, RandomNonce};
use crate::parameters::{form_string, parameter_string, ProtocolParameters};
use crate::signature::digest;

/// RequestSigner that implements OAuth 1.0a HMAC-SHA1 signing.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://datatracker.ietf.org/doc/html/rfc5849)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    host: String,
    scheme: Scheme,
    delivery_mode: DeliveryMode,
    extra_params: BTreeMap<String, String>,
    nonce: Arc<dyn GenerateNonce>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for given host, like `example.com` or `example.com:8080`.
    ///
    /// Defaults to `https` and [`DeliveryMode::Header`].
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: Scheme::HTTPS,
            delivery_mode: DeliveryMode::default(),
            extra_params: BTreeMap::new(),
            nonce: Arc::new(RandomNonce),
            time: None,
        }
    }

    /// Create a signer from config.
    ///
    /// Returns an error if `host` is not configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let host = config
            .host
            .as_deref()
            .ok_or_else(|| Error::config_invalid("host is required"))?;

        let mut signer = Self::new(host)
            .with_delivery_mode(config.delivery_mode.unwrap_or_default())
            .with_extra_params(config.extra_params.clone());
        if let Some(scheme) = &config.scheme {
            signer = signer.with_scheme(scheme.clone());
        }

        Ok(signer)
    }

    /// Set the scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set where the signature is placed.
    pub fn with_delivery_mode(mut self, delivery_mode: DeliveryMode) -> Self {
        self.delivery_mode = delivery_mode;
        self
    }

    /// Add an extra protocol parameter merged into every signature.
    pub fn with_extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Add extra protocol parameters merged into every signature.
    pub fn with_extra_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.extra_params.extend(params);
        self
    }

    /// Replace the nonce generator.
    pub fn with_nonce_generator(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Assemble a signed request.
    ///
    /// This is pure and synchronous: no I/O happens here, and `req` is left
    /// untouched. Malformed host or path are passed through as is.
    pub fn assemble(&self, cred: &Credential, req: &SigningRequest) -> Result<SignedRequest> {
        let now = self.time.unwrap_or_else(now);
        let (path, query) = split_path(&req.path, &req.query);
        let form = &req.form;

        let protocol = ProtocolParameters::new(
            cred.consumer_key.as_str(),
            self.nonce.generate_nonce(),
            unix_seconds(now),
        )
        .with_token(cred.token.clone())
        .with_extra_params(self.extra_params.clone());

        let string_to_sign = {
            let unsigned = protocol.to_map();
            let params = merge(&[&query, form, &unsigned]);

            base_string(
                req.method.as_str(),
                &base_url(&self.scheme, &self.host, &path),
                &parameter_string(params),
            )
        };
        debug!("signature base string: {string_to_sign}");

        let signature = digest(
            &string_to_sign,
            &cred.consumer_secret,
            cred.token_secret.as_deref(),
        )?;
        let oauth = protocol.into_signed(signature);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));

        let mut path = path;
        let body = match self.delivery_mode {
            DeliveryMode::Header => {
                headers.insert(AUTHORIZATION, {
                    let mut value: HeaderValue = authorization_header(&oauth)?.parse()?;
                    value.set_sensitive(true);

                    value
                });
                // Caller query is still sent next to the header.
                push_query(&mut path, &parameter_string(&query));
                form_string(form)
            }
            DeliveryMode::Query => {
                push_query(&mut path, &parameter_string(merge(&[&query, &oauth])));
                form_string(form)
            }
            DeliveryMode::Body => {
                push_query(&mut path, &parameter_string(&query));
                form_string(merge(&[form, &oauth]))
            }
        };
        debug!(
            "assembled request with {:?} delivery: {} {path}",
            self.delivery_mode, req.method
        );

        Ok(SignedRequest {
            method: req.method.clone(),
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            path,
            headers,
            body: Bytes::from(body),
        })
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SignedRequest> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        self.assemble(cred, req)
    }
}

/// Build the `Authorization` header value.
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", ..., oauth_version="1.0"
/// ```
///
/// - [RFC 5849 Section 3.5.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.5.1)
pub fn authorization_header(oauth: &BTreeMap<String, String>) -> Result<String> {
    let mut s = String::with_capacity(256);
    s.write_str(AUTHORIZATION_SCHEME)?;
    s.write_str(" ")?;

    for (idx, (k, v)) in oauth.iter().enumerate() {
        if idx != 0 {
            s.write_str(", ")?;
        }
        write!(s, "{k}=\"{}\"", encode(v))?;
    }

    Ok(s)
}

/// Normalize path to start with `/` and fold its `?query` into the query parameters.
///
/// Explicit query parameters win over the ones embedded in path.
fn split_path(path: &str, query: &BTreeMap<String, String>) -> (String, BTreeMap<String, String>) {
    let (path, embedded) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let mut merged: BTreeMap<String, String> = embedded
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    merged.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));

    (path, merged)
}

/// Union all sources, later sources win on key collision.
fn merge<'a>(sources: &[&'a BTreeMap<String, String>]) -> BTreeMap<&'a str, &'a str> {
    sources
        .iter()
        .flat_map(|m| m.iter())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

fn push_query(path: &mut String, query: &str) {
    if !query.is_empty() {
        path.push('?');
        path.push_str(query);
    }
}
