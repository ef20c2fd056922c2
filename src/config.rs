//! Configuration management for spotcode.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Spotify API credentials are required; the endpoint
//! URLs fall back to the public Spotify and spotifycodes.com services.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (endpoints only)

use std::{env, path::PathBuf};

use crate::{Error, Res, types::Credentials};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_CODES_URL: &str = "https://www.spotifycodes.com/downloadCode.php";

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory `spotcode/` if it doesn't exist and loads
/// `spotcode/.env` from it, then a `.env` in the working directory. Variables
/// that are already set are never overwritten, and missing files are not an
/// error since the credentials may be exported directly.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotcode/.env`
/// - macOS: `~/Library/Application Support/spotcode/.env`
/// - Windows: `%LOCALAPPDATA%/spotcode/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcode/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`, the client ID obtained when registering
/// the application with Spotify's developer platform.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`. The secret should never end up in
/// logs or version control.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns both client credentials, failing on the first missing one.
pub fn credentials() -> Res<Credentials> {
    Ok(Credentials {
        client_id: spotify_client_id()?,
        client_secret: spotify_client_secret()?,
    })
}

/// Returns the Spotify OAuth token URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify Code download URL (`SPOTIFY_CODES_URL`).
pub fn spotify_codes_url() -> String {
    optional("SPOTIFY_CODES_URL", DEFAULT_CODES_URL)
}

fn required(key: &str) -> Res<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{key} must be set"))),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// The remote services the client talks to.
///
/// Grouped so a whole client can be pointed at another host, for example a
/// local mock server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub api_url: String,
    pub codes_url: String,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Self {
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
            codes_url: spotify_codes_url(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            codes_url: DEFAULT_CODES_URL.to_string(),
        }
    }
}
