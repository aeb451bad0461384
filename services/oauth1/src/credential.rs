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

use std::fmt::{Debug, Formatter};

use oauthsign_core::{utils::Redact, SigningCredential};

/// Credential for oauth 1.0a.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key identifying the client application.
    pub consumer_key: String,
    /// Consumer secret, empty if not configured.
    pub consumer_secret: String,
    /// Token identifying the authorized user, if any.
    pub token: Option<String>,
    /// Token secret, treated as empty if not set.
    pub token_secret: Option<String>,
}

impl Credential {
    /// Create a new credential without token.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
            token_secret: None,
        }
    }

    /// Set token and token secret.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    // OAuth 1.0a credentials never expire on the client side.
    fn is_valid(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
            .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");

        let s = format!("{cred:?}");
        assert!(!s.contains("kd94hf93k423kf44"));
        assert!(!s.contains("pfkkdhi9sl3r4s00"));
        assert!(s.contains("kd9***f44"));
    }

    #[test]
    fn test_credential_without_token() {
        let cred = Credential::new("key", "");
        assert!(cred.token.is_none());
        assert!(cred.token_secret.is_none());
        assert!(cred.is_valid());
        assert!(format!("{cred:?}").contains("token: EMPTY"));
    }
}
