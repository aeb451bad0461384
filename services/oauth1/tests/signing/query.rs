use super::{consumer_only, init_signer, RecordingHttpSend, NONCE};
use anyhow::Result;
use http::header::AUTHORIZATION;
use http::StatusCode;
use oauthsign_core::{Signer, SigningRequest};
use oauthsign_oauth1::{DeliveryMode, StaticCredentialProvider};
use pretty_assertions::assert_eq;

#[test]
fn test_query_signature() -> Result<()> {
    let signer = init_signer("api.example.com").with_delivery_mode(DeliveryMode::Query);

    let req = SigningRequest::get("/p").with_query("a", "1");
    let signed = signer.assemble(&consumer_only(), &req)?;

    assert_eq!(
        signed.path,
        "/p?a=1&oauth_consumer_key=key\
         &oauth_nonce=abcdefghijklmnopqrstuvwxyz0123\
         &oauth_signature=t2aKZQ%2BUWoPEwcJkwfgTA%2FGvjvM%3D\
         &oauth_signature_method=HMAC-SHA1\
         &oauth_timestamp=1700000000\
         &oauth_version=1.0"
    );
    assert!(signed.headers.get(AUTHORIZATION).is_none());
    assert!(signed.body.is_empty());

    // The signature must be decodable back to raw base64.
    let sig = signed
        .query_pairs()
        .into_iter()
        .find(|(k, _)| k == "oauth_signature")
        .map(|(_, v)| v);
    assert_eq!(sig.as_deref(), Some("t2aKZQ+UWoPEwcJkwfgTA/GvjvM="));

    Ok(())
}

#[test]
fn test_query_embedded_in_path() -> Result<()> {
    let signer = init_signer("api.example.com").with_delivery_mode(DeliveryMode::Query);

    let embedded = signer.assemble(&consumer_only(), &SigningRequest::get("p?a=1"))?;
    let explicit =
        signer.assemble(&consumer_only(), &SigningRequest::get("/p").with_query("a", "1"))?;

    assert_eq!(embedded.path, explicit.path);

    Ok(())
}

#[tokio::test]
async fn test_query_send() -> Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "ok");
    let signer = Signer::new(
        http.context(),
        StaticCredentialProvider::new("key", "secret"),
        init_signer("api.example.com").with_delivery_mode(DeliveryMode::Query),
    );

    let body = signer
        .send(&SigningRequest::get("/p").with_query("a", "1"))
        .await?;
    assert_eq!(body, "ok");

    let sent = http.last_request();
    let uri = sent.uri().to_string();
    assert!(uri.starts_with("https://api.example.com/p?a=1&oauth_consumer_key=key&"));
    assert!(uri.contains(&format!("oauth_nonce={NONCE}")));
    assert!(sent.body().is_empty());

    Ok(())
}
