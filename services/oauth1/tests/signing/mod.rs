mod body;
mod header;
mod query;

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::StatusCode;
use oauthsign_core::time::DateTime;
use oauthsign_core::{Context, HttpSend, Result};
use oauthsign_oauth1::{Credential, RequestSigner, StaticNonce};

pub const NONCE: &str = "abcdefghijklmnopqrstuvwxyz0123";
pub const TIMESTAMP: i64 = 1700000000;

/// Initialize logger and build a signer with fixed nonce and time.
pub fn init_signer(host: &str) -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new(host)
        .with_nonce_generator(StaticNonce::new(NONCE))
        .with_time(DateTime::from_timestamp(TIMESTAMP, 0).expect("timestamp must be valid"))
}

pub fn consumer_only() -> Credential {
    Credential::new("key", "secret")
}

pub fn with_token() -> Credential {
    Credential::new("key", "secret").with_token("tok", "toksecret")
}

/// RecordingHttpSend keeps the last request and replies with a canned response.
#[derive(Debug, Clone)]
pub struct RecordingHttpSend {
    status: StatusCode,
    body: &'static str,
    last: Arc<Mutex<Option<http::Request<Bytes>>>>,
}

impl RecordingHttpSend {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            last: Arc::default(),
        }
    }

    pub fn last_request(&self) -> http::Request<Bytes> {
        self.last
            .lock()
            .expect("lock poisoned")
            .take()
            .expect("a request must be sent")
    }

    pub fn context(&self) -> Context {
        Context::new().with_http_send(self.clone())
    }
}

#[async_trait::async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        *self.last.lock().expect("lock poisoned") = Some(req);

        let mut resp = http::Response::new(Bytes::from_static(self.body.as_bytes()));
        *resp.status_mut() = self.status;
        Ok(resp)
    }
}
