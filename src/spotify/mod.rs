//! # Spotify Integration Module
//!
//! This module talks to the two remote services spotcode depends on: the
//! Spotify Web API for authentication and album metadata, and spotifycodes.com
//! for the scannable code image.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotifyClient (token held for the client's lifetime)
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Album Operations (cover lookup, cover download)
//!     └── Code Operations (code URL, code download)
//!     ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges the client id and secret for a bearer token. The
//!   token is fetched once per [`SpotifyClient`] and never refreshed.
//! - [`albums`] - Looks up an album, picks the first cover variant the API
//!   lists and downloads it.
//! - [`codes`] - Builds the spotifycodes.com download URL and fetches the code.
//!
//! ## Error Handling
//!
//! Nothing here retries. Transport errors, non-success statuses and decode
//! failures are returned as [`crate::Error`] and the caller decides what to do
//! with them. Malformed or unsupported identifiers are rejected before any
//! request is sent.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials grant
//! - `GET /albums/{id}` - album images
//! - `GET downloadCode.php?uri=...` - Spotify Code image
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotifyClient::connect(&credentials, Endpoints::from_env()).await?;
//! let cover = client.cover_image("spotify:album:6BzxX6zkDsYKFJ04ziU5xQ").await?;
//! ```

pub mod albums;
pub mod auth;
mod client;
pub mod codes;

pub use client::SpotifyClient;
