use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{CodeRequest, SpotifyUri};

/// `Authorization` header value for the client-credentials grant.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Drops a single leading `#` from a hex color.
pub fn strip_hash(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// Path segment the code service expects, before percent-encoding.
pub fn code_path_segment(request: &CodeRequest) -> String {
    format!(
        "/{color}/{bar_color}/{size}/{uri}",
        color = strip_hash(&request.color),
        bar_color = request.bar_color,
        size = request.size,
        uri = request.uri
    )
}

pub fn output_path(basename: &str) -> PathBuf {
    PathBuf::from(format!("{}.png", basename))
}

/// Output base name used when the caller does not pick one.
pub fn default_basename(uri: &SpotifyUri) -> String {
    uri.id.clone()
}
