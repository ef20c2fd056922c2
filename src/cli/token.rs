use reqwest::Client;

use crate::{Res, config, spotify::auth, success};

/// Checks the configured credentials by requesting a token.
///
/// The token itself is never printed, only its type and when it expires.
pub async fn token() -> Res<()> {
    let credentials = config::credentials()?;

    let pb = super::spinner("Requesting access token...");
    let token = auth::request_token(
        &Client::new(),
        &config::spotify_apitoken_url(),
        &credentials,
    )
    .await;
    pb.finish_and_clear();
    let token = token?;

    let expiry = match token.expires_at() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} seconds from now", token.expires_in),
    };
    success!(
        "Credentials accepted. {} token valid until {}",
        token.token_type,
        expiry
    );
    Ok(())
}
