use image::DynamicImage;
use reqwest::Client;

use crate::{
    Res,
    config::Endpoints,
    imaging,
    spotify::{albums, auth, codes},
    types::{Artwork, CodeRequest, CodeStyle, Credentials, SpotifyUri, Token},
};

/// Authenticated client for cover and code downloads.
///
/// The access token is requested once in [`SpotifyClient::connect`] and reused
/// for every later call. Its expiry is never checked.
pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
    token: Token,
}

impl SpotifyClient {
    pub async fn connect(credentials: &Credentials, endpoints: Endpoints) -> Res<Self> {
        let http = Client::new();
        let token = auth::request_token(&http, &endpoints.token_url, credentials).await?;

        Ok(SpotifyClient {
            http,
            endpoints,
            token,
        })
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Resolves `uri` to the URL of its cover image.
    ///
    /// The identifier is parsed and checked before anything is sent, so
    /// malformed and unsupported identifiers never reach the network.
    pub async fn cover_url(&self, uri: &str) -> Res<String> {
        let uri: SpotifyUri = uri.parse()?;
        uri.require_album()?;

        let album = albums::get_album(
            &self.http,
            &self.endpoints.api_url,
            &self.token.access_token,
            &uri.id,
        )
        .await?;
        albums::first_image_url(&album).map(str::to_string)
    }

    pub async fn cover_image(&self, uri: &str) -> Res<DynamicImage> {
        let url = self.cover_url(uri).await?;
        albums::download_image(&self.http, &url).await
    }

    pub async fn code_image(&self, request: &CodeRequest) -> Res<DynamicImage> {
        codes::get_code(&self.http, &self.endpoints.codes_url, request).await
    }

    /// Runs the whole pipeline for `uri` and returns the stitched artwork.
    ///
    /// The code is fetched after the cover because its color and size are
    /// derived from it, unless `style` overrides both.
    pub async fn artwork(&self, uri: &str, style: &CodeStyle) -> Res<Artwork> {
        let cover = self.cover_image(uri).await?;

        let color = match &style.color {
            Some(color) => color.clone(),
            None => imaging::dominant_color(&cover)?,
        };

        let request = CodeRequest {
            uri: uri.to_string(),
            color: color.clone(),
            bar_color: style.bar_color,
            size: style.size.unwrap_or_else(|| cover.width()),
            format: style.format,
        };
        let code = self.code_image(&request).await?;

        Ok(Artwork {
            color,
            cover_size: (cover.width(), cover.height()),
            code_size: (code.width(), code.height()),
            image: imaging::stitch(&cover, &code),
        })
    }
}
