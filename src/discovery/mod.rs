//! Discovers directories and files by walking a local tree under exclusion
//! rules, and probes trees for known configuration files.
//!
//! The aggregate scans ([`collect_dirs`], [`collect_files`]) fully drain a
//! walk; the config probes ([`has_babel_config`], [`has_project_config`])
//! stop at the first match and never open another directory listing.

pub mod source;
pub mod walker;

#[cfg(test)]
pub(crate) mod stub;

use crate::errors::Result;
use crate::filtering::{is_babel_config, is_project_config, SkipSet};
use log::debug;
use std::path::{Path, PathBuf};

use source::DirSource;
use walker::{WalkMode, Walker};

/// Returns every non-excluded directory under `dir`, pre-order, as
/// absolute resolved paths.
///
/// Output order equals traversal yield order. An empty tree yields an
/// empty vector; any I/O failure yields an error, never a partial
/// collection.
pub fn collect_dirs(dir: impl AsRef<Path>, skip: &SkipSet) -> Result<Vec<PathBuf>> {
    let dirs: Vec<PathBuf> = Walker::new(dir, WalkMode::Directories, skip)?.collect::<Result<_>>()?;
    debug!("collected {} directories", dirs.len());
    Ok(dirs)
}

/// Returns every regular file under `dir` whose ancestor chain contains no
/// excluded directory, as absolute resolved paths.
///
/// Same ordering and error guarantees as [`collect_dirs`].
pub fn collect_files(dir: impl AsRef<Path>, skip: &SkipSet) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = Walker::new(dir, WalkMode::Files, skip)?.collect::<Result<_>>()?;
    debug!("collected {} files", files.len());
    Ok(files)
}

/// Returns true if any non-excluded file under `dir` is a Babel
/// configuration file (`.babelrc*`, `babel.config.*`).
///
/// Stops walking at the first match; the remaining tree is not read.
pub fn has_babel_config(dir: impl AsRef<Path>, skip: &SkipSet) -> Result<bool> {
    scan_for_basename(Walker::new(dir, WalkMode::Files, skip)?, is_babel_config)
}

/// Returns true if any non-excluded file under `dir` is a TS/JS project
/// configuration file (`tsconfig.json` / `jsconfig.json`).
///
/// Stops walking at the first match; the remaining tree is not read.
pub fn has_project_config(dir: impl AsRef<Path>, skip: &SkipSet) -> Result<bool> {
    scan_for_basename(Walker::new(dir, WalkMode::Files, skip)?, is_project_config)
}

/// Drains a file-mode walk until a basename matches, dropping the walker
/// (and its open handles) as soon as it does.
fn scan_for_basename<S: DirSource>(
    walker: Walker<'_, S>,
    matches: fn(&str) -> bool,
) -> Result<bool> {
    for path in walker {
        let path = path?;
        let found = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(matches);
        if found {
            debug!("config probe matched '{}'", path.display());
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::source::EntryKind::{Directory, File};
    use crate::discovery::stub::StubFs;

    fn probe_stub(fs: &StubFs, matches: fn(&str) -> bool) -> Result<bool> {
        let skip = SkipSet::new();
        let walker = Walker::with_source(fs, PathBuf::from("/root"), WalkMode::Files, &skip)?;
        scan_for_basename(walker, matches)
    }

    #[test]
    fn test_probe_stops_opening_listings_after_match() {
        // The match sits in the root listing before two unvisited subtrees.
        let fs = StubFs::new(&[
            (
                "/root",
                &[
                    ("babel.config.js", File),
                    ("a", Directory),
                    ("b", Directory),
                ],
            ),
            ("/root/a", &[("x.js", File)]),
            ("/root/b", &[("y.js", File)]),
        ]);
        assert_eq!(probe_stub(&fs, is_babel_config).unwrap(), true);
        // Only the root listing was ever opened.
        assert_eq!(fs.open_count(), 1);
    }

    #[test]
    fn test_probe_match_deep_in_tree_opens_only_the_path_to_it() {
        let fs = StubFs::new(&[
            ("/root", &[("nested", Directory), ("late", Directory)]),
            ("/root/nested", &[("tsconfig.json", File)]),
            ("/root/late", &[("z.ts", File)]),
        ]);
        assert_eq!(probe_stub(&fs, is_project_config).unwrap(), true);
        // Root + nested; `late` is listed after the match and never opened.
        assert_eq!(fs.open_count(), 2);
    }

    #[test]
    fn test_probe_exhausts_tree_without_match() {
        let fs = StubFs::new(&[
            ("/root", &[("a", Directory)]),
            ("/root/a", &[("index.js", File)]),
        ]);
        assert_eq!(probe_stub(&fs, is_project_config).unwrap(), false);
        assert_eq!(fs.open_count(), 2);
    }

    #[test]
    fn test_probe_ignores_matches_inside_excluded_directories() {
        let fs = StubFs::new(&[
            ("/root", &[("node_modules", Directory), ("src", Directory)]),
            ("/root/node_modules", &[("babel.config.js", File)]),
            ("/root/src", &[("app.js", File)]),
        ]);
        let skip: SkipSet = ["node_modules".to_string()].into_iter().collect();
        let walker =
            Walker::with_source(&fs, PathBuf::from("/root"), WalkMode::Files, &skip).unwrap();
        assert_eq!(scan_for_basename(walker, is_babel_config).unwrap(), false);
    }
}
