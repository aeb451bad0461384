use super::{init_signer, with_token, RecordingHttpSend};
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::uri::Scheme;
use http::StatusCode;
use oauthsign_core::{ErrorKind, Signer, SigningRequest};
use oauthsign_oauth1::{DeliveryMode, StaticCredentialProvider};
use pretty_assertions::assert_eq;

fn update_request() -> SigningRequest {
    SigningRequest::post("/statuses/update")
        .with_query("include_entities", "true")
        .with_form("status", "hello world")
        .with_form("in_reply_to", "a~b*c")
}

#[test]
fn test_body_signature() -> Result<()> {
    // Scheme and host are normalized for the signature only.
    let signer = init_signer("Api.Example.COM:80")
        .with_scheme(Scheme::HTTP)
        .with_delivery_mode(DeliveryMode::Body);

    let signed = signer.assemble(&with_token(), &update_request())?;

    assert_eq!(signed.host, "Api.Example.COM:80");
    assert_eq!(signed.path, "/statuses/update?include_entities=true");
    assert!(signed.headers.get(AUTHORIZATION).is_none());
    assert_eq!(
        signed.header_get_or_default(&CONTENT_TYPE)?,
        "application/x-www-form-urlencoded"
    );
    assert_eq!(
        std::str::from_utf8(&signed.body)?,
        "in_reply_to=a~b%2Ac\
         &oauth_consumer_key=key\
         &oauth_nonce=abcdefghijklmnopqrstuvwxyz0123\
         &oauth_signature=DmVcXckxkx4P3XHNzOciHldEUII%3D\
         &oauth_signature_method=HMAC-SHA1\
         &oauth_timestamp=1700000000\
         &oauth_token=tok\
         &oauth_version=1.0\
         &status=hello+world"
    );

    let form = signed.form_pairs();
    assert!(form.contains(&("status".to_string(), "hello world".to_string())));
    assert!(form.contains(&(
        "oauth_signature".to_string(),
        "DmVcXckxkx4P3XHNzOciHldEUII=".to_string()
    )));

    Ok(())
}

#[tokio::test]
async fn test_body_send() -> Result<()> {
    let http = RecordingHttpSend::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
    let signer = Signer::new(
        http.context(),
        StaticCredentialProvider::new("key", "secret").with_token("tok", "toksecret"),
        init_signer("api.example.com:80")
            .with_scheme(Scheme::HTTP)
            .with_delivery_mode(DeliveryMode::Body),
    );

    let body = signer.send(&update_request()).await?;
    assert_eq!(body, "oops");

    let sent = http.last_request();
    assert_eq!(
        sent.uri().to_string(),
        "http://api.example.com:80/statuses/update?include_entities=true"
    );
    assert!(std::str::from_utf8(sent.body())?
        .contains("&oauth_signature=DmVcXckxkx4P3XHNzOciHldEUII%3D&"));

    Ok(())
}

#[tokio::test]
async fn test_body_send_without_transport() -> Result<()> {
    let signer = Signer::new(
        oauthsign_core::Context::new(),
        StaticCredentialProvider::new("key", "secret"),
        init_signer("api.example.com").with_delivery_mode(DeliveryMode::Body),
    );

    let err = signer.send(&update_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);

    Ok(())
}
