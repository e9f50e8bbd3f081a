// src/constants.rs

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// File extensions (leading dot included) of the JavaScript source family.
pub static JS_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| [".js", ".jsx", ".es6", ".es", ".mjs"].into_iter().collect());

/// File extensions (leading dot included) of the TypeScript source family.
pub static TS_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| [".ts", ".tsx"].into_iter().collect());

/// Basenames recognized as Babel configuration files.
pub static BABEL_CONFIG_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".babelrc",
        ".babelrc.cjs",
        ".babelrc.js",
        ".babelrc.json",
        ".babelrc.mjs",
        "babel.config.cjs",
        "babel.config.js",
        "babel.config.json",
        "babel.config.mjs",
    ]
    .into_iter()
    .collect()
});

/// Basenames recognized as TypeScript / JavaScript project configuration files.
pub static PROJECT_CONFIG_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["tsconfig.json", "jsconfig.json"].into_iter().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_families_are_disjoint() {
        assert!(JS_EXTENSIONS.is_disjoint(&TS_EXTENSIONS));
        assert!(BABEL_CONFIG_NAMES.is_disjoint(&PROJECT_CONFIG_NAMES));
    }

    #[test]
    fn test_tables_match_expected_sizes() {
        assert_eq!(JS_EXTENSIONS.len(), 5);
        assert_eq!(TS_EXTENSIONS.len(), 2);
        assert_eq!(BABEL_CONFIG_NAMES.len(), 9);
        assert_eq!(PROJECT_CONFIG_NAMES.len(), 2);
    }
}
