// OAuth 1.0a protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";

pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const VERSION_1_0: &str = "1.0";

// Headers used in oauth 1.0a.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const AUTHORIZATION_SCHEME: &str = "OAuth";

// Env values used in oauth 1.0a.
/// Env name of the consumer key.
pub const OAUTH1_CONSUMER_KEY: &str = "OAUTH1_CONSUMER_KEY";
/// Env name of the consumer secret.
pub const OAUTH1_CONSUMER_SECRET: &str = "OAUTH1_CONSUMER_SECRET";
/// Env name of the token.
pub const OAUTH1_TOKEN: &str = "OAUTH1_TOKEN";
/// Env name of the token secret.
pub const OAUTH1_TOKEN_SECRET: &str = "OAUTH1_TOKEN_SECRET";
/// Env name of the host, like `example.com:8080`.
pub const OAUTH1_HOST: &str = "OAUTH1_HOST";
/// Env name of the scheme, `http` or `https`.
pub const OAUTH1_SCHEME: &str = "OAUTH1_SCHEME";
/// Env name of the delivery mode, `header`, `query` or `body`.
pub const OAUTH1_DELIVERY_MODE: &str = "OAUTH1_DELIVERY_MODE";
