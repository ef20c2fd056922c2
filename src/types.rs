use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::Error;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: DateTime<Utc>,
}

impl Token {
    pub fn from_response(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            token_type: res.token_type,
            expires_in: res.expires_in,
            obtained_at: Utc::now(),
        }
    }

    /// The instant the provider will stop accepting the token.
    ///
    /// `None` when `expires_in` is too large to be represented as a date.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let lifetime = TimeDelta::try_seconds(i64::try_from(self.expires_in).ok()?)?;
        self.obtained_at.checked_add_signed(lifetime)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Resource type segment of a Spotify URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Album,
    Artist,
    Track,
    Playlist,
    Other(String),
}

impl From<&str> for ResourceKind {
    fn from(value: &str) -> Self {
        match value {
            "album" => ResourceKind::Album,
            "artist" => ResourceKind::Artist,
            "track" => ResourceKind::Track,
            "playlist" => ResourceKind::Playlist,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Album => write!(f, "album"),
            ResourceKind::Artist => write!(f, "artist"),
            ResourceKind::Track => write!(f, "track"),
            ResourceKind::Playlist => write!(f, "playlist"),
            ResourceKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// A `scheme:type:id` identifier such as `spotify:album:6BzxX6zkDsYKFJ04ziU5xQ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyUri {
    pub scheme: String,
    pub kind: ResourceKind,
    pub id: String,
}

impl FromStr for SpotifyUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [scheme, kind, id] if !id.is_empty() => Ok(SpotifyUri {
                scheme: scheme.to_string(),
                kind: ResourceKind::from(*kind),
                id: id.to_string(),
            }),
            _ => Err(Error::MalformedUri(s.to_string())),
        }
    }
}

impl SpotifyUri {
    /// Fails with [`Error::UnsupportedResource`] unless this names an album.
    pub fn require_album(&self) -> Result<(), Error> {
        match &self.kind {
            ResourceKind::Album => Ok(()),
            other => Err(Error::UnsupportedResource(other.to_string())),
        }
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.scheme, self.kind, self.id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BarColor {
    #[default]
    White,
    Black,
}

impl fmt::Display for BarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarColor::White => write!(f, "white"),
            BarColor::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CodeFormat {
    #[default]
    Png,
    Jpeg,
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeFormat::Png => write!(f, "png"),
            CodeFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Parameters of a single Spotify Code download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRequest {
    pub uri: String,
    pub color: String,
    pub bar_color: BarColor,
    pub size: u32,
    pub format: CodeFormat,
}

/// How the code below the cover should look.
///
/// `color` and `size` default to the cover's dominant color and width.
#[derive(Debug, Clone, Default)]
pub struct CodeStyle {
    pub color: Option<String>,
    pub size: Option<u32>,
    pub bar_color: BarColor,
    pub format: CodeFormat,
}

#[derive(Debug, Clone)]
pub struct Artwork {
    pub color: String,
    pub cover_size: (u32, u32),
    pub code_size: (u32, u32),
    pub image: RgbaImage,
}

#[derive(Tabled)]
pub struct ArtworkTableRow {
    pub part: String,
    pub width: u32,
    pub height: u32,
}
