//! The lazy recursive tree walker.
//!
//! `Walker` is an explicit-cursor iterator: instead of a recursive
//! generator it keeps a stack of directory frames and advances one listing
//! entry per step. Dropping the walker drops every open listing handle,
//! which is what gives early-exit consumers (the config probes) their
//! no-leak cancellation guarantee.

use crate::discovery::source::{DirSource, EntryKind, OsSource};
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{is_excluded_dir, SkipSet};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};

/// What a traversal yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Yield each non-excluded directory (pre-order), then descend into it.
    /// Files are never yielded.
    Directories,
    /// Yield each regular file; descend into non-excluded directories
    /// without yielding them.
    Files,
}

enum Frame<L> {
    /// A directory whose listing has not been opened yet. Opening is
    /// deferred to the next advance so a yielded directory costs no I/O
    /// until the consumer actually asks for its children.
    Fresh(PathBuf),
    Open { dir: PathBuf, listing: L },
}

/// Lazy, finite, non-restartable depth-first traversal of a directory tree.
///
/// Yields `Result<PathBuf>`; the first mid-walk I/O error ends the
/// iterator (the stack is released and subsequent calls return `None`).
/// Sibling order follows the underlying listing order. A directory whose
/// base name is in the skip-set or starts with `.` is never opened, so its
/// entire subtree contributes nothing.
pub struct Walker<'a, S: DirSource = OsSource> {
    source: S,
    mode: WalkMode,
    skip: &'a SkipSet,
    stack: Vec<Frame<S::Listing>>,
    opened: usize,
}

impl<'a> Walker<'a, OsSource> {
    /// Starts a traversal of the real filesystem rooted at `dir`.
    ///
    /// The root is canonicalized first, so every yielded path is absolute
    /// and free of `.`/`..` components. Fails with [`Error::NotFound`] if
    /// the root does not exist, or [`Error::Io`] if it cannot be listed.
    pub fn new(dir: impl AsRef<Path>, mode: WalkMode, skip: &'a SkipSet) -> Result<Self> {
        let dir = dir.as_ref();
        let root = fs::canonicalize(dir).map_err(|e| io_error_with_path(e, dir))?;
        Self::with_source(OsSource, root, mode, skip)
    }
}

impl<'a, S: DirSource> Walker<'a, S> {
    /// Starts a traversal over an arbitrary [`DirSource`].
    ///
    /// `root` is used as-is (no canonicalization); yielded paths are built
    /// by joining entry names onto it.
    pub fn with_source(source: S, root: PathBuf, mode: WalkMode, skip: &'a SkipSet) -> Result<Self> {
        // Open the root eagerly so a missing or unreadable start directory
        // fails the call itself rather than the first advance.
        let listing = source
            .read_dir(&root)
            .map_err(|e| io_error_with_path(e, &root))?;
        trace!("walk started at '{}'", root.display());
        Ok(Self {
            source,
            mode,
            skip,
            stack: vec![Frame::Open { dir: root, listing }],
            opened: 1,
        })
    }

    /// Number of directory listings opened so far, including the root.
    pub fn dirs_opened(&self) -> usize {
        self.opened
    }

    /// Aborts the walk, releasing every open listing handle.
    fn abort(&mut self, dir: PathBuf, source: std::io::Error) -> Error {
        self.stack.clear();
        Error::Io { path: dir, source }
    }
}

impl<S: DirSource> Iterator for Walker<'_, S> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.pop()?;
            let (dir, mut listing) = match frame {
                Frame::Fresh(dir) => match self.source.read_dir(&dir) {
                    Ok(listing) => {
                        self.opened += 1;
                        trace!("opened directory listing '{}'", dir.display());
                        (dir, listing)
                    }
                    Err(e) => return Some(Err(self.abort(dir, e))),
                },
                Frame::Open { dir, listing } => (dir, listing),
            };

            let entry = match listing.next() {
                // Listing exhausted; resume the parent frame.
                None => continue,
                Some(Err(e)) => return Some(Err(self.abort(dir, e))),
                Some(Ok(entry)) => {
                    self.stack.push(Frame::Open {
                        dir: dir.clone(),
                        listing,
                    });
                    entry
                }
            };

            match entry.kind {
                EntryKind::Directory => {
                    if is_excluded_dir(&entry.name.to_string_lossy(), self.skip) {
                        trace!("skipping excluded directory '{:?}'", entry.name);
                        continue;
                    }
                    let path = dir.join(&entry.name);
                    // Descend on the next advance; in directory mode the
                    // child is yielded before its own children (pre-order).
                    self.stack.push(Frame::Fresh(path.clone()));
                    if self.mode == WalkMode::Directories {
                        return Some(Ok(path));
                    }
                }
                EntryKind::File => {
                    if self.mode == WalkMode::Files {
                        return Some(Ok(dir.join(&entry.name)));
                    }
                }
                EntryKind::Other => {}
            }
        }
    }
}
