use oauthsign_core::{Context, OsEnv};
use oauthsign_http_send_reqwest::ReqwestHttpSend;

/// Create a context with reqwest as http client and the os environment.
///
/// ```no_run
/// let ctx = oauthsign::default_context();
/// ```
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
