//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures a
//! traversal can hit, offering more context than a bare `std::io::Error`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the traversal operations.
///
/// A starting directory that does not exist is distinguished from I/O
/// failures encountered mid-traversal so callers can treat "nothing to
/// scan here" differently from "the scan broke".
#[derive(Error, Debug)]
pub enum Error {
    /// The starting directory does not exist.
    #[error("directory not found: '{path}'", path = .path.display())]
    NotFound {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// Error occurring while opening or reading a directory listing.
    #[error("I/O error reading directory '{path}': {source}", path = .path.display())]
    Io {
        /// The directory that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper to wrap an `std::io::Error` with the directory it occurred in.
///
/// `NotFound` I/O errors are promoted to [`Error::NotFound`]; everything
/// else becomes [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    if source.kind() == std::io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    } else {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
