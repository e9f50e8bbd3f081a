// src/filtering/extension.rs

use crate::constants::{BABEL_CONFIG_NAMES, JS_EXTENSIONS, PROJECT_CONFIG_NAMES, TS_EXTENSIONS};

/// Tests if the given extension belongs to the JavaScript source family
/// (`.js`, `.jsx`, `.es6`, `.es`, `.mjs`).
///
/// The extension string includes the leading dot and is matched exactly and
/// case-sensitively. Total over any input: unrecognized strings return
/// `false`.
///
/// # Examples
///
/// ```
/// use srcwalk::filtering::is_js_extension;
///
/// assert!(is_js_extension(".js"));
/// assert!(is_js_extension(".mjs"));
/// assert!(!is_js_extension(".ts"));
/// assert!(!is_js_extension("js")); // leading dot required
/// ```
pub fn is_js_extension(extension: &str) -> bool {
    JS_EXTENSIONS.contains(extension)
}

/// Tests if the given extension belongs to the TypeScript source family
/// (`.ts`, `.tsx`).
///
/// Same matching rules as [`is_js_extension`].
pub fn is_ts_extension(extension: &str) -> bool {
    TS_EXTENSIONS.contains(extension)
}

/// Tests if `name` is a recognized Babel configuration basename.
pub fn is_babel_config(name: &str) -> bool {
    BABEL_CONFIG_NAMES.contains(name)
}

/// Tests if `name` is a recognized TS/JS project configuration basename
/// (`tsconfig.json` / `jsconfig.json`).
pub fn is_project_config(name: &str) -> bool {
    PROJECT_CONFIG_NAMES.contains(name)
}
