//! The directory-listing primitive the walker is built on.
//!
//! Abstracting `std::fs::read_dir` behind a small trait keeps the traversal
//! semantics testable against in-memory trees with a deterministic listing
//! order, which the real filesystem does not guarantee.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Classification of a single directory entry.
///
/// Comes from `DirEntry::file_type()`, which does not follow symlinks:
/// a symlink is neither a `Directory` nor a `File` here, so it is never
/// descended into and never yielded. Symlink cycles therefore cannot cause
/// non-termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory.
    Directory,
    /// A regular file.
    File,
    /// Anything else (symlink, socket, device, ...). Ignored by the walker.
    Other,
}

/// A transient directory entry: its base name and classification.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Base name of the entry (no path components).
    pub name: OsString,
    /// What kind of entry this is.
    pub kind: EntryKind,
}

/// Source of directory listings.
///
/// One listing is opened at a time as the walk advances; dropping a
/// `Listing` must release whatever handle backs it.
pub trait DirSource {
    /// Lazy iterator over the entries of one directory.
    type Listing: Iterator<Item = io::Result<RawEntry>>;

    /// Opens the listing for `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Self::Listing>;
}

// Lets tests hand the walker a borrowed source and inspect it afterwards.
impl<S: DirSource> DirSource for &S {
    type Listing = S::Listing;

    fn read_dir(&self, path: &Path) -> io::Result<Self::Listing> {
        (*self).read_dir(path)
    }
}

/// The `std::fs`-backed [`DirSource`] used by all public operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

/// Wraps `fs::ReadDir`, classifying each entry as it is read.
pub struct OsListing(fs::ReadDir);

impl Iterator for OsListing {
    type Item = io::Result<RawEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.0.next()?;
        Some(entry.and_then(|e| {
            let file_type = e.file_type()?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            Ok(RawEntry {
                name: e.file_name(),
                kind,
            })
        }))
    }
}

impl DirSource for OsSource {
    type Listing = OsListing;

    fn read_dir(&self, path: &Path) -> io::Result<Self::Listing> {
        fs::read_dir(path).map(OsListing)
    }
}
