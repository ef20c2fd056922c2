//! # CLI Module
//!
//! This module provides the command-line layer for spotcode. It wires
//! configuration, the Spotify client and the imaging helpers together and
//! handles user feedback: spinners while talking to remote services, a summary
//! table of the produced artwork and colored status lines.
//!
//! ## Commands
//!
//! - [`code`] - Builds cover + Spotify Code artwork for a resource and saves it as PNG
//! - [`token`] - Exchanges the configured credentials for a token to verify them
//!
//! ## Error Handling
//!
//! Commands return [`crate::Res`] and leave process termination to `main`. The
//! one exception is saving the final image: a file that cannot be written is
//! reported as a warning and the command still succeeds, since the artwork was
//! produced and nothing else depends on the file.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotcode token                                          # check credentials
//! spotcode code spotify:album:6BzxX6zkDsYKFJ04ziU5xQ -o beyonce
//! spotcode code spotify:album:6BzxX6zkDsYKFJ04ziU5xQ --bar-color black --color 1db954
//! ```

mod code;
mod token;

pub use code::CodeOptions;
pub use code::code;
pub use code::persist;
pub use token::token;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
