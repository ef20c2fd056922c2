use image::DynamicImage;
use reqwest::Client;

use crate::{Res, spotify::albums, types::CodeRequest, utils};

/// Builds the spotifycodes.com download URL for `request`.
///
/// The format goes into the `uri` query parameter verbatim, followed by the
/// percent-encoded `/<color>/<bar_color>/<size>/<uri>` segment. A leading `#`
/// on the color is dropped before encoding.
///
/// # Example
///
/// ```
/// let url = code_url("https://www.spotifycodes.com/downloadCode.php", &request);
/// // https://www.spotifycodes.com/downloadCode.php?uri=png%2F1A2B3C%2Fwhite%2F640%2Fspotify%3Aalbum%3A...
/// ```
pub fn code_url(codes_url: &str, request: &CodeRequest) -> String {
    format!(
        "{url}?uri={format}{segment}",
        url = codes_url,
        format = request.format,
        segment = urlencoding::encode(&utils::code_path_segment(request))
    )
}

/// Downloads and decodes the Spotify Code described by `request`.
///
/// The code service is public, so the request is sent without a token.
pub async fn get_code(
    client: &Client,
    codes_url: &str,
    request: &CodeRequest,
) -> Res<DynamicImage> {
    albums::download_image(client, &code_url(codes_url, request)).await
}
