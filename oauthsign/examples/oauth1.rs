use anyhow::Result;
use oauthsign::oauth1::Config;
use oauthsign::{default_context, Client, SigningRequest};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Load OAUTH1_* from env, like OAUTH1_HOST=api.example.com
    let ctx = default_context();
    let config = Config::new().from_env(&ctx)?;

    let client = Client::with_context(ctx, config)?;

    // Inspect the signed request without sending it
    let req = SigningRequest::get("/1.1/account/verify_credentials.json")
        .with_query("include_email", "true");
    let signed = client.sign(&req).await?;
    println!("Signed request: {} {}", signed.method, signed.path);

    // Send it, the body is returned even for error statuses
    let body = client.send(&req).await?;
    println!("Response: {body}");

    Ok(())
}
