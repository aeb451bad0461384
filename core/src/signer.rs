use crate::{
    Context, ProvideCredential, Result, SignRequest, SignedRequest, SigningCredential,
    SigningRequest,
};
use log::debug;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign and send the request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    pub async fn sign(&self, req: &SigningRequest) -> Result<SignedRequest> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            debug!("no valid credential cached, loading from provider");
            let credential = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = credential.clone();
            credential
        };

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
            .await
    }

    /// Sign the request, send it and return the response body as text.
    ///
    /// The body is returned for every completed response regardless of the
    /// status code. Failures are never retried.
    pub async fn send(&self, req: &SigningRequest) -> Result<String> {
        let signed = self.sign(req).await?;
        let req = signed.into_http_request()?;

        debug!("sending signed request: {} {}", req.method(), req.uri());
        let resp = self.ctx.http_send_as_string(req).await?;
        debug!("received response with status {}", resp.status());

        Ok(resp.into_body())
    }
}
