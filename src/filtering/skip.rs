// src/filtering/skip.rs

use std::collections::HashSet;

/// Set of plain directory base names (not paths) excluded from descent.
///
/// Supplied once per traversal and never consulted for regular files;
/// membership is an exact, case-sensitive match against a directory's base
/// name only.
pub type SkipSet = HashSet<String>;

/// Decides whether a directory entry is excluded from a traversal.
///
/// Returns `true` if `name` is present in `skip` or begins with the hidden
/// marker (a leading period). Applies to directories only: a *file* named
/// with a leading period is still yielded by a file walk.
///
/// # Examples
///
/// ```
/// use srcwalk::filtering::{is_excluded_dir, SkipSet};
///
/// let skip: SkipSet = ["node_modules".to_string()].into_iter().collect();
/// assert!(is_excluded_dir("node_modules", &skip));
/// assert!(is_excluded_dir(".git", &skip));
/// assert!(!is_excluded_dir("src", &skip));
/// ```
pub fn is_excluded_dir(name: &str, skip: &SkipSet) -> bool {
    name.starts_with('.') || skip.contains(name)
}
