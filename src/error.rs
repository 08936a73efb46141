//! Error types for asset generation
//!
//! Every failure is fatal: the first error aborts the run and is reported
//! by `main`. Files written before the failure are left in place.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The source image does not exist
    #[error("source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source exists but could not be opened or read (permissions, I/O)
    #[error("failed to read source image {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was read but is not a decodable raster image
    #[error("failed to decode source image {}", path.display())]
    SourceDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing a derived image failed (missing directory, permissions, disk full)
    #[error("failed to write {}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing a `Generating <path>` progress line failed
    #[error("failed to report progress")]
    Progress(#[source] io::Error),
}

/// Render an error and its whole `source()` chain on one line
pub fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut last = String::new();
    let mut cause = err.source();
    while let Some(inner) = cause {
        // image::ImageError::IoError displays the same text as its io::Error source
        let text = inner.to_string();
        if text != last {
            message.push_str(": ");
            message.push_str(&text);
        }
        last = text;
        cause = inner.source();
    }
    message
}
