//! In-memory `DirSource` used by the traversal tests.
//!
//! Real directory listings have no guaranteed order, so properties that
//! depend on order (pre-order, early exit) are verified against this stub,
//! which also counts how many listings are opened.

use crate::discovery::source::{DirSource, EntryKind, RawEntry};
use std::cell::Cell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::vec::IntoIter;

pub(crate) struct StubFs {
    dirs: HashMap<PathBuf, Vec<RawEntry>>,
    opened: Rc<Cell<usize>>,
}

impl StubFs {
    /// Builds a stub from `(directory path, ordered entries)` pairs.
    pub(crate) fn new(tree: &[(&str, &[(&str, EntryKind)])]) -> Self {
        let dirs = tree
            .iter()
            .map(|(dir, entries)| {
                let entries = entries
                    .iter()
                    .map(|(name, kind)| RawEntry {
                        name: OsString::from(name),
                        kind: *kind,
                    })
                    .collect();
                (PathBuf::from(dir), entries)
            })
            .collect();
        Self {
            dirs,
            opened: Rc::new(Cell::new(0)),
        }
    }

    /// Number of listings opened so far across all walks of this stub.
    pub(crate) fn open_count(&self) -> usize {
        self.opened.get()
    }
}

impl DirSource for StubFs {
    type Listing = IntoIter<io::Result<RawEntry>>;

    fn read_dir(&self, path: &Path) -> io::Result<Self::Listing> {
        let entries = self
            .dirs
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such stub directory"))?;
        self.opened.set(self.opened.get() + 1);
        Ok(entries
            .iter()
            .cloned()
            .map(Ok)
            .collect::<Vec<_>>()
            .into_iter())
    }
}
