use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use oauthsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads oauth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`: The consumer key
/// - `OAUTH1_CONSUMER_SECRET`: The consumer secret (optional, empty if absent)
/// - `OAUTH1_TOKEN`: The token (optional)
/// - `OAUTH1_TOKEN_SECRET`: The token secret (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let Some(consumer_key) = envs.get(OAUTH1_CONSUMER_KEY) else {
            debug!("{OAUTH1_CONSUMER_KEY} is not set, skip loading credential from env");
            return Ok(None);
        };

        Ok(Some(Credential {
            consumer_key: consumer_key.clone(),
            consumer_secret: envs
                .get(OAUTH1_CONSUMER_SECRET)
                .cloned()
                .unwrap_or_default(),
            token: envs.get(OAUTH1_TOKEN).cloned(),
            token_secret: envs.get(OAUTH1_TOKEN_SECRET).cloned(),
        }))
    }
}
