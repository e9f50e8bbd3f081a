//! Pure predicate logic: directory exclusion rules and source-family
//! classification of file extensions and config basenames.

mod extension;
mod skip;

pub use extension::{is_babel_config, is_js_extension, is_project_config, is_ts_extension};
pub use skip::{is_excluded_dir, SkipSet};
