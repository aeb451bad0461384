use std::fmt::Debug;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of nonces generated by [`RandomNonce`].
pub const NONCE_LENGTH: usize = 30;

/// GenerateNonce produces the `oauth_nonce` of every request.
///
/// Implementations must be safe to call from many requests at once.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Generate a fresh nonce.
    fn generate_nonce(&self) -> String;
}

/// RandomNonce draws [`NONCE_LENGTH`] characters uniformly from `[A-Za-z0-9]`.
///
/// Uses the thread local CSPRNG of `rand`, so no state is shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl GenerateNonce for RandomNonce {
    fn generate_nonce(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// StaticNonce always returns the same nonce.
///
/// This is useful for testing, never use it to talk to a real server.
#[derive(Debug, Clone)]
pub struct StaticNonce(String);

impl StaticNonce {
    /// Create a new StaticNonce.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl GenerateNonce for StaticNonce {
    fn generate_nonce(&self) -> String {
        self.0.clone()
    }
}
