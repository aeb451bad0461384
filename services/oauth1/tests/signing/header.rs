use super::{consumer_only, init_signer, with_token, RecordingHttpSend};
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::uri::Scheme;
use http::{Method, StatusCode};
use log::debug;
use oauthsign_core::{Signer, SigningRequest};
use oauthsign_oauth1::{Credential, DeliveryMode, StaticCredentialProvider, StaticNonce};
use pretty_assertions::assert_eq;

#[test]
fn test_header_rfc5849_example() -> Result<()> {
    let signer = init_signer("photos.example.net")
        .with_scheme(Scheme::HTTP)
        .with_nonce_generator(StaticNonce::new("kllo9940pd9333jh"))
        .with_time(oauthsign_core::time::DateTime::from_timestamp(1191242096, 0).unwrap());
    let cred = Credential::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
        .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");

    let req = SigningRequest::get("/photos")
        .with_query("size", "original")
        .with_query("file", "vacation.jpg");
    let signed = signer.assemble(&cred, &req)?;
    debug!("signed request: {signed:?}");

    assert_eq!(signed.method, Method::GET);
    assert_eq!(signed.host, "photos.example.net");
    assert_eq!(signed.path, "/photos?file=vacation.jpg&size=original");
    assert_eq!(
        signed.header_get_or_default(&AUTHORIZATION)?,
        "OAuth oauth_consumer_key=\"dpf43f3p2l4k3l03\", \
         oauth_nonce=\"kllo9940pd9333jh\", \
         oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1191242096\", \
         oauth_token=\"nnch734d00sl2jdk\", \
         oauth_version=\"1.0\""
    );
    assert!(signed.body.is_empty());

    Ok(())
}

#[test]
fn test_header_post_with_form() -> Result<()> {
    // Default port is stripped from the signature base, but kept on the wire.
    let signer = init_signer("api.example.com:443");

    let req = SigningRequest::post("statuses/update").with_form("status", "hello world");
    let signed = signer.assemble(&with_token(), &req)?;

    assert_eq!(signed.path, "/statuses/update");
    assert_eq!(signed.host, "api.example.com:443");
    assert_eq!(signed.body.as_ref(), b"status=hello+world");
    assert_eq!(
        signed.header_get_or_default(&CONTENT_TYPE)?,
        "application/x-www-form-urlencoded"
    );
    assert_eq!(
        signed.header_get_or_default(&AUTHORIZATION)?,
        "OAuth oauth_consumer_key=\"key\", \
         oauth_nonce=\"abcdefghijklmnopqrstuvwxyz0123\", \
         oauth_signature=\"CIbhl4Rzosxmtz8tLoPYCTATsIM%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1700000000\", \
         oauth_token=\"tok\", \
         oauth_version=\"1.0\""
    );

    Ok(())
}

#[test]
fn test_header_with_extra_params() -> Result<()> {
    let signer = init_signer("api.example.com")
        .with_extra_param("oauth_callback", "http://localhost/cb")
        // Fixed protocol parameters can't be overridden.
        .with_extra_param("oauth_version", "2.0");

    let signed = signer.assemble(&consumer_only(), &SigningRequest::get("/request_token"))?;

    assert_eq!(signed.path, "/request_token");
    assert_eq!(
        signed.header_get_or_default(&AUTHORIZATION)?,
        "OAuth oauth_callback=\"http%3A%2F%2Flocalhost%2Fcb\", \
         oauth_consumer_key=\"key\", \
         oauth_nonce=\"abcdefghijklmnopqrstuvwxyz0123\", \
         oauth_signature=\"wNVfFqz1bzAaVfhFoU4TnsS7MKU%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1700000000\", \
         oauth_version=\"1.0\""
    );

    Ok(())
}

#[tokio::test]
async fn test_header_send_returns_body_on_error_status() -> Result<()> {
    let http = RecordingHttpSend::new(StatusCode::UNAUTHORIZED, "{\"errors\":\"bad nonce\"}");
    let signer = Signer::new(
        http.context(),
        StaticCredentialProvider::new("key", "secret").with_token("tok", "toksecret"),
        init_signer("api.example.com").with_delivery_mode(DeliveryMode::Header),
    );

    let body = signer
        .send(&SigningRequest::post("/statuses/update").with_form("status", "hello world"))
        .await?;
    assert_eq!(body, "{\"errors\":\"bad nonce\"}");

    let sent = http.last_request();
    assert_eq!(sent.method(), Method::POST);
    assert_eq!(
        sent.uri().to_string(),
        "https://api.example.com/statuses/update"
    );
    assert_eq!(sent.body().as_ref(), b"status=hello+world");
    assert!(sent
        .headers()
        .get(AUTHORIZATION)
        .expect("authorization must be set")
        .to_str()?
        .contains("oauth_signature=\"CIbhl4Rzosxmtz8tLoPYCTATsIM%3D\""));

    Ok(())
}
