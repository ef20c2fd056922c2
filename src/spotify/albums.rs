use image::DynamicImage;
use reqwest::Client;

use crate::{Error, Res, imaging, types::AlbumResponse};

/// Retrieves an album from the Spotify Web API.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `api_url` - Base URL of the Web API, e.g. `https://api.spotify.com/v1`
/// * `token` - Bearer token from the client-credentials exchange
/// * `album_id` - Spotify ID of the album
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AlbumResponse)` - The album's cover variants
/// - `Err(Error::Http)` - Network error, non-success status or malformed JSON
///
/// # Example
///
/// ```
/// let album = get_album(&client, &config::spotify_apiurl(), &token, "6BzxX6zkDsYKFJ04ziU5xQ").await?;
/// println!("Album has {} cover variants", album.images.len());
/// ```
pub async fn get_album(
    client: &Client,
    api_url: &str,
    token: &str,
    album_id: &str,
) -> Res<AlbumResponse> {
    let api_url = format!("{url}/albums/{id}", url = api_url, id = album_id);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<AlbumResponse>().await?;

    Ok(json)
}

/// Picks the cover to download: always the first variant the API lists.
///
/// Spotify currently orders variants from largest to smallest but the order is
/// taken as-is, no size policy is applied.
pub fn first_image_url(album: &AlbumResponse) -> Res<&str> {
    album
        .images
        .first()
        .map(|image| image.url.as_str())
        .ok_or(Error::NoImages)
}

/// Downloads an image from `url` and decodes it into a bitmap.
///
/// No authentication is sent; both Spotify's image CDN and spotifycodes.com
/// serve images publicly.
pub async fn download_image(client: &Client, url: &str) -> Res<DynamicImage> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    imaging::decode(&bytes)
}
