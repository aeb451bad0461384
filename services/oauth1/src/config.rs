use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use http::uri::Scheme;
use oauthsign_core::{utils::Redact, Context, Error, Result};

use super::constants::*;
use super::credential::Credential;

/// Where the signature and the `oauth_*` parameters are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// `Authorization: OAuth ...` header.
    #[default]
    Header,
    /// Query string of the request uri.
    Query,
    /// `application/x-www-form-urlencoded` request body.
    Body,
}

impl FromStr for DeliveryMode {
    type Err = Error;

    /// Accepts `header`, `query`, `body` and the legacy `head`, `get`, `post`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "header" | "head" => Ok(DeliveryMode::Header),
            "query" | "get" => Ok(DeliveryMode::Query),
            "body" | "post" => Ok(DeliveryMode::Body),
            v => Err(Error::config_invalid(format!("unknown delivery mode: {v}"))),
        }
    }
}

/// Parse a scheme, accepting a trailing `:` like `https:`.
pub fn parse_scheme(s: &str) -> Result<Scheme> {
    match s.trim_end_matches(':').to_ascii_lowercase().as_str() {
        "http" => Ok(Scheme::HTTP),
        "https" => Ok(Scheme::HTTPS),
        v => Err(Error::config_invalid(format!("unsupported scheme: {v}"))),
    }
}

/// Config carries all the configuration for an oauth 1.0a client.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_HOST`]
    pub host: Option<String>,
    /// `scheme` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_SCHEME`]
    ///
    /// Default to `https` if not set.
    pub scheme: Option<Scheme>,
    /// `delivery_mode` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_DELIVERY_MODE`]
    ///
    /// Default to [`DeliveryMode::Header`] if not set.
    pub delivery_mode: Option<DeliveryMode>,
    /// Extra protocol parameters merged into every signature.
    pub extra_params: BTreeMap<String, String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set host, with an optional port like `example.com:8080`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Set delivery_mode
    pub fn with_delivery_mode(mut self, delivery_mode: DeliveryMode) -> Self {
        self.delivery_mode = Some(delivery_mode);
        self
    }

    /// Add an extra protocol parameter, like `oauth_callback`.
    pub fn with_extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_HOST) {
            self.host.get_or_insert(v);
        }
        if self.scheme.is_none() {
            if let Some(v) = ctx.env_var(OAUTH1_SCHEME) {
                self.scheme = Some(parse_scheme(&v)?);
            }
        }
        if self.delivery_mode.is_none() {
            if let Some(v) = ctx.env_var(OAUTH1_DELIVERY_MODE) {
                self.delivery_mode = Some(v.parse()?);
            }
        }

        Ok(self)
    }

    /// Build the credential carried by this config.
    ///
    /// Returns `None` if `consumer_key` is not set. Missing secrets are
    /// treated as empty.
    pub fn credential(&self) -> Option<Credential> {
        let consumer_key = self.consumer_key.clone()?;

        Some(Credential {
            consumer_key,
            consumer_secret: self.consumer_secret.clone().unwrap_or_default(),
            token: self.token.clone(),
            token_secret: self.token_secret.clone(),
        })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("delivery_mode", &self.delivery_mode)
            .field("extra_params", &self.extra_params)
            .finish()
    }
}
