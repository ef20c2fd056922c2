//! Spotify Code artwork library
//!
//! This library fetches an album's cover art from the Spotify Web API, derives
//! its dominant color, downloads the matching Spotify Code from spotifycodes.com
//! and stitches both into a single image that is written to disk as PNG.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `imaging` - Dominant color extraction, stitching and PNG output
//! - `spotify` - Spotify Web API and Spotify Code client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotcode::{config, spotify::SpotifyClient, types::CodeStyle};
//!
//! #[tokio::main]
//! async fn main() -> spotcode::Res<()> {
//!     let credentials = config::credentials()?;
//!     let client = SpotifyClient::connect(&credentials, config::Endpoints::from_env()).await?;
//!     let artwork = client
//!         .artwork("spotify:album:6BzxX6zkDsYKFJ04ziU5xQ", &CodeStyle::default())
//!         .await?;
//!     spotcode::imaging::save_png(&artwork.image, "beyonce").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod imaging;
pub mod spotify;
pub mod types;
pub mod utils;

/// Errors produced while building Spotify Code artwork.
///
/// Library functions never terminate the process; every failure is returned
/// to the caller and the binary decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Spotify URI '{0}' is malformed, expected <scheme>:<type>:<id>")]
    MalformedUri(String),

    #[error("no implemented behavior for resource type '{0}'")]
    UnsupportedResource(String),

    #[error("album has no cover images")]
    NoImages,

    #[error("image has no pixels")]
    EmptyImage,

    #[error("missing configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A convenient Result type alias for operations that may fail.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching cover for {}", uri);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Saved {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the binary's top-level error boundary should reach for this macro;
/// library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot create Spotify Code. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, like an output file that could not be written.
///
/// # Example
///
/// ```
/// warning!("Cannot save image. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
