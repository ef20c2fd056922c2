use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    Res,
    types::{Credentials, Token, TokenResponse},
    utils,
};

/// Exchanges client credentials for an access token.
///
/// Sends the OAuth 2.0 client-credentials grant to `token_url` with the id and
/// secret encoded as HTTP Basic authentication.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `token_url` - Spotify token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret of the registered application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Bearer token, its type and lifetime, stamped with the current time
/// - `Err(Error::Http)` - Network error, non-success status or malformed JSON
///
/// # Token Lifetime
///
/// The token is not cached and never refreshed. Spotify issues client-credential
/// tokens for an hour which is far longer than a single run needs.
///
/// # Example
///
/// ```
/// let token = request_token(&Client::new(), &config::spotify_apitoken_url(), &credentials).await?;
/// println!("Token expires at {:?}", token.expires_at());
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<Token> {
    let response = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<TokenResponse>().await?;

    Ok(Token::from_response(json))
}
