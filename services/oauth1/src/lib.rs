//! OAuth 1.0a HMAC-SHA1 signer.
//!
//! The signing is split into two stages:
//!
//! - [`RequestSigner::assemble`] turns a [`SigningRequest`](oauthsign_core::SigningRequest)
//!   into a fully signed request without doing any I/O.
//! - [`Signer::send`](oauthsign_core::Signer::send) sends it through the transport
//!   carried by [`Context`](oauthsign_core::Context).
//!
//! ```no_run
//! use oauthsign_core::{Context, Signer, SigningRequest};
//! use oauthsign_oauth1::{DeliveryMode, RequestSigner, StaticCredentialProvider};
//!
//! # async fn example(ctx: Context) -> oauthsign_core::Result<()> {
//! let loader = StaticCredentialProvider::new("consumer_key", "consumer_secret")
//!     .with_token("token", "token_secret");
//! let builder = RequestSigner::new("api.example.com").with_delivery_mode(DeliveryMode::Header);
//! let signer = Signer::new(ctx, loader, builder);
//!
//! let body = signer
//!     .send(&SigningRequest::get("/statuses").with_query("count", "10"))
//!     .await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    OAUTH1_CONSUMER_KEY, OAUTH1_CONSUMER_SECRET, OAUTH1_DELIVERY_MODE, OAUTH1_HOST,
    OAUTH1_SCHEME, OAUTH1_TOKEN, OAUTH1_TOKEN_SECRET,
};

mod encode;
pub use encode::{encode, encode_form};

mod parameters;
pub use parameters::{form_string, parameter_string, ProtocolParameters};

mod base_string;
pub use base_string::{base_string, base_url};

mod signature;
pub use signature::{digest, sign, signing_key};

mod nonce;
pub use nonce::{GenerateNonce, RandomNonce, StaticNonce, NONCE_LENGTH};

mod credential;
pub use credential::Credential;

mod config;
pub use config::{parse_scheme, Config, DeliveryMode};

mod sign_request;
pub use sign_request::{authorization_header, RequestSigner};

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
