//! Fatal setup errors.
//!
//! Everything here terminates the process with a nonzero status before any
//! frame is displayed. Recoverable runtime failures (a stat or read on the
//! watched file) are plain `std::io::Error` values handled at the poll site.

use std::path::PathBuf;

use thiserror::Error;

/// A configuration or setup failure that prevents the display from starting.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no text given; pass it on the command line or with -i <file>")]
    MissingText,

    #[error("couldn't read input file '{path}': {source}")]
    UnreadableInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("couldn't load font '{path}': {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("couldn't create display canvas: {0}")]
    Canvas(#[from] std::io::Error),
}
