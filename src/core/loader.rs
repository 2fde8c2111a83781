use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::core::{
    catalog::{Catalog, LoadOptions},
    parsers::ts::parse_ts_file,
};

/// File-name separators tried between the catalog name and the locale.
const LOCALE_SEPARATORS: &[char] = &['.', '-', '_'];

/// Normalise a locale such as `"es_MX.UTF-8"` or `"es-MX@euro"` to `"es_MX"`.
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.split(['.', '@']).next().unwrap_or("");
    locale.trim().replace('-', "_")
}

/// Locale fallbacks from most to least specific: `es_MX` -> `es_MX`, `es`.
fn locale_fallbacks(locale: &str) -> Vec<String> {
    let normalized = normalize_locale(locale);
    let mut fallbacks = Vec::new();
    let mut current = normalized.as_str();
    while !current.is_empty() {
        fallbacks.push(current.to_string());
        match current.rfind('_') {
            Some(idx) => current = &current[..idx],
            None => break,
        }
    }
    fallbacks
}

/// Candidate file names for `name` in `locale`, most specific first.
///
/// ```
/// use tsglot::core::loader::candidate_names;
///
/// assert_eq!(
///     candidate_names("danbooru_gui", "es_MX.UTF-8"),
///     vec![
///         "danbooru_gui.es_MX.ts",
///         "danbooru_gui-es_MX.ts",
///         "danbooru_gui_es_MX.ts",
///         "danbooru_gui.es.ts",
///         "danbooru_gui-es.ts",
///         "danbooru_gui_es.ts",
///     ]
/// );
/// ```
pub fn candidate_names(name: &str, locale: &str) -> Vec<String> {
    locale_fallbacks(locale)
        .iter()
        .flat_map(|loc| {
            LOCALE_SEPARATORS
                .iter()
                .map(move |sep| format!("{}{}{}.ts", name, sep, loc))
        })
        .collect()
}

/// First existing candidate, searching each path in order.
pub fn resolve(name: &str, locale: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    let candidates = candidate_names(name, locale);
    search_paths.iter().find_map(|dir| {
        candidates
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.is_file())
    })
}

/// Resolve and load the catalog for `name` in `locale`.
pub fn load_catalog(
    name: &str,
    locale: &str,
    search_paths: &[PathBuf],
    options: &LoadOptions,
) -> Result<Catalog> {
    let Some(path) = resolve(name, locale, search_paths) else {
        let searched: Vec<String> = search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        bail!(
            "No translation file for '{}' in locale '{}' (searched: {})",
            name,
            locale,
            searched.join(", ")
        );
    };
    load_catalog_file(&path, options)
}

pub fn load_catalog_file(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    let file = parse_ts_file(path)?;
    Ok(Catalog::from_file(&file, options))
}
