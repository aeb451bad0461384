use log::debug;
use oauthsign_core::{Context, Result, SignedRequest, SigningRequest};

use crate::oauth1::{self, Config, DefaultSigner};

/// Client signs and sends OAuth 1.0a requests to a single host.
///
/// Every call signs with a fresh nonce and timestamp. Response bodies are
/// returned as text for any completed response, whatever the status code.
#[derive(Debug, Clone)]
pub struct Client {
    signer: DefaultSigner,
}

impl Client {
    /// Create a client with the default context.
    ///
    /// `config` is used as is, call [`Config::from_env`] first to load
    /// `OAUTH1_*` env.
    #[cfg(feature = "default-context")]
    pub fn new(config: Config) -> Result<Self> {
        Self::with_context(crate::default_context(), config)
    }

    /// Create a client within given context.
    pub fn with_context(ctx: Context, config: Config) -> Result<Self> {
        debug!("building oauth1 client with config: {config:?}");

        Ok(Self {
            signer: oauth1::signer(ctx, &config)?,
        })
    }

    /// Send a signed `GET` request and return the response body.
    pub async fn get<K, V>(
        &self,
        path: &str,
        query: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.send(&SigningRequest::get(path).with_query_params(query))
            .await
    }

    /// Send a signed `POST` request with a form body and return the response body.
    pub async fn post<K, V, BK, BV>(
        &self,
        path: &str,
        query: impl IntoIterator<Item = (K, V)>,
        body: impl IntoIterator<Item = (BK, BV)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<String>,
        BK: Into<String>,
        BV: Into<String>,
    {
        let req = SigningRequest::post(path)
            .with_query_params(query)
            .with_form_params(body);
        self.send(&req).await
    }

    /// Sign and send a request and return the response body.
    pub async fn send(&self, req: &SigningRequest) -> Result<String> {
        self.signer.send(req).await
    }

    /// Sign the request without sending it.
    pub async fn sign(&self, req: &SigningRequest) -> Result<SignedRequest> {
        self.signer.sign(req).await
    }
}
