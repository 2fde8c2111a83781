use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::catalog::LoadOptions;

pub const CONFIG_FILE_NAME: &str = ".tsglotrc.json";

/// File extensions a `<location filename=..>` is expected to point at:
/// code that calls `tr()` and Qt Designer forms.
pub const DEFAULT_LOCATION_EXTENSIONS: &[&str] = &[
    "py", "ui", "cpp", "cc", "cxx", "c", "h", "hpp", "qml", "js", "java",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_root", alias = "translationsDir")]
    pub translations_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    /// Base name of the catalog used by `tr --locale` (e.g. "danbooru_gui").
    #[serde(default)]
    pub catalog_name: Option<String>,
    /// Source texts allowed to stay identical in translation (e.g. "ID").
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_location_extensions")]
    pub location_extensions: Vec<String>,
    #[serde(default)]
    pub check_location_files: bool,
    #[serde(default = "default_include_unfinished")]
    pub include_unfinished: bool,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_location_extensions() -> Vec<String> {
    DEFAULT_LOCATION_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_include_unfinished() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            ignores: Vec::new(),
            source_language: default_source_language(),
            catalog_name: None,
            ignore_texts: Vec::new(),
            location_extensions: default_location_extensions(),
            check_location_files: false,
            include_unfinished: default_include_unfinished(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or an
    /// extension in `locationExtensions` carries a leading dot.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        for ext in &self.location_extensions {
            if ext.starts_with('.') || ext.is_empty() {
                anyhow::bail!(
                    "Invalid extension in 'locationExtensions': \"{}\" (use \"py\", not \".py\")",
                    ext
                );
            }
        }

        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            include_unfinished: self.include_unfinished,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` to the first `.tsglotrc.json`, stopping at the
/// repository root (a directory containing `.git`).
///
/// Relative starts such as `.` are resolved first, so the walk reaches the
/// parent directories of the working directory.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
