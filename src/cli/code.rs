use std::path::PathBuf;

use image::RgbaImage;
use tabled::Table;

use crate::{
    Res, config, imaging, info,
    spotify::SpotifyClient,
    success,
    types::{ArtworkTableRow, BarColor, CodeFormat, CodeStyle, SpotifyUri},
    utils, warning,
};

/// Arguments of a single `code` run, independent of clap.
#[derive(Debug, Clone)]
pub struct CodeOptions {
    pub uri: String,
    pub output: Option<String>,
    pub bar_color: BarColor,
    pub format: CodeFormat,
    pub color: Option<String>,
    pub size: Option<u32>,
}

/// Builds the cover + Spotify Code artwork for `opts.uri` and writes it to disk.
///
/// # Process Flow
///
/// 1. **Validation**: Parses the identifier and rejects non-album resources
///    before any credentials are used
/// 2. **Authentication**: Exchanges the configured client credentials for a token
/// 3. **Cover**: Resolves and downloads the album cover
/// 4. **Code**: Downloads the Spotify Code in the cover's dominant color
/// 5. **Output**: Stitches both and saves `<output>.png`
///
/// # Error Handling
///
/// Configuration, network and decode failures are returned to the caller. A
/// failed save is only logged, see [`persist`].
pub async fn code(opts: CodeOptions) -> Res<()> {
    let uri: SpotifyUri = opts.uri.parse()?;
    uri.require_album()?;
    let basename = opts
        .output
        .clone()
        .unwrap_or_else(|| utils::default_basename(&uri));

    let credentials = config::credentials()?;

    let pb = super::spinner("Requesting access token...");
    let client = match SpotifyClient::connect(&credentials, config::Endpoints::from_env()).await {
        Ok(client) => client,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message(format!("Fetching cover and code for {}...", uri));
    let style = CodeStyle {
        color: opts.color,
        size: opts.size,
        bar_color: opts.bar_color,
        format: opts.format,
    };
    let artwork = client.artwork(&opts.uri, &style).await;
    pb.finish_and_clear();
    let artwork = artwork?;

    info!("Dominant color: {}", artwork.color);
    let rows = vec![
        ArtworkTableRow {
            part: "cover".to_string(),
            width: artwork.cover_size.0,
            height: artwork.cover_size.1,
        },
        ArtworkTableRow {
            part: "code".to_string(),
            width: artwork.code_size.0,
            height: artwork.code_size.1,
        },
        ArtworkTableRow {
            part: "result".to_string(),
            width: artwork.image.width(),
            height: artwork.image.height(),
        },
    ];
    println!("{}", Table::new(rows));

    persist(&artwork.image, &basename).await;
    Ok(())
}

/// Saves `image` as `<basename>.png`, logging instead of failing.
///
/// Returns the written path, or `None` after a warning when the file could not
/// be created or encoded.
pub async fn persist(image: &RgbaImage, basename: &str) -> Option<PathBuf> {
    match imaging::save_png(image, basename).await {
        Ok(path) => {
            success!("Saved {}", path.display());
            Some(path)
        }
        Err(e) => {
            warning!(
                "Cannot save {}. Err: {}",
                utils::output_path(basename).display(),
                e
            );
            None
        }
    }
}
