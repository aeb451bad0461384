// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! OAuth 1.0a support with convenience APIs
//!
//! This module provides OAuth 1.0a signing functionality along with convenience
//! functions for common use cases.

// Re-export all OAuth 1.0a signing types
pub use oauthsign_oauth1::*;

use crate::{Context, Error, Result, Signer};

/// Default OAuth 1.0a Signer type with commonly used components
pub type DefaultSigner = Signer<Credential>;

/// Create an OAuth 1.0a signer for given config within given context.
///
/// The credential is built from `config` only, env is never consulted here.
/// Use [`Config::from_env`] to fill unset fields from `OAUTH1_*` first.
///
/// Returns [`ErrorKind::CredentialInvalid`](crate::ErrorKind::CredentialInvalid)
/// if `consumer_key` is not set.
pub fn signer(ctx: Context, config: &Config) -> Result<DefaultSigner> {
    let builder = RequestSigner::from_config(config)?;
    let cred = config
        .credential()
        .ok_or_else(|| Error::credential_invalid("consumer_key is required"))?;

    Ok(Signer::new(ctx, StaticCredentialProvider::from(cred), builder))
}

/// Create a default OAuth 1.0a signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (with reqwest HTTP client, OS environment)
/// - Config completed from `OAUTH1_*` env vars
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> oauthsign_core::Result<()> {
/// use oauthsign::oauth1::Config;
/// use oauthsign::SigningRequest;
///
/// let signer = oauthsign::oauth1::default_signer(Config::new())?;
/// let body = signer.send(&SigningRequest::get("/1.1/account/verify_credentials.json")).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(config: Config) -> Result<DefaultSigner> {
    let ctx = crate::default_context();
    let config = config.from_env(&ctx)?;
    signer(ctx, &config)
}
