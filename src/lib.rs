//! `srcwalk` is a library and command-line tool for discovering files and
//! directories in a local tree under exclusion rules, and for classifying
//! discovered files by extension and basename (JavaScript-family source,
//! TypeScript-family source, Babel configs, TS/JS project configs).
//!
//! The core is a lazy recursive tree walker with two modes (directories,
//! files) that never descends into hidden directories or directories named
//! in a caller-supplied skip-set. On top of it sit two kinds of scans:
//!
//! 1. **Aggregate**: [`collect_dirs`] / [`collect_files`] drain a walk and
//!    return absolute, resolved paths in traversal order.
//! 2. **Early-exit**: [`has_babel_config`] / [`has_project_config`] stop at
//!    the first matching basename without reading the rest of the tree.
//!
//! # Example
//!
//! ```
//! use srcwalk::{collect_files, has_babel_config, is_js_extension, SkipSet};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempdir()?;
//! fs::create_dir(temp.path().join("node_modules"))?;
//! fs::write(temp.path().join("index.js"), "")?;
//! fs::write(temp.path().join("node_modules/dep.js"), "")?;
//!
//! let skip: SkipSet = ["node_modules".to_string()].into_iter().collect();
//!
//! let files = collect_files(temp.path(), &skip)?;
//! assert_eq!(files.len(), 1); // node_modules is never descended into
//! assert!(is_js_extension(".js"));
//! assert!(!has_babel_config(temp.path(), &skip)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod filtering;

// Re-export the operation surface for use as a library.
pub use discovery::{collect_dirs, collect_files, has_babel_config, has_project_config};
pub use errors::{Error, Result};
pub use filtering::{is_js_extension, is_ts_extension, SkipSet};
