use std::{
    cell::OnceCell,
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        TranslationFile,
        file_scanner::find_translation_files,
        parsers::ts::{ScanTranslationsResult, scan_translation_files},
    },
    issues::ParseErrorIssue,
};

/// Parsed translation files, and the ones that failed to parse.
struct ParsedTranslations {
    files: Vec<TranslationFile>,
    errors: Vec<ParseErrorIssue>,
}

/// Shared state for checking a set of translation files.
///
/// `CheckContext` resolves the configuration, discovers the `.ts` files and
/// parses them on first access. Rules only ever read from it.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-language en`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (where the config search started).
    pub root_dir: PathBuf,

    /// Directory (or single file) the `.ts` files were collected from.
    pub translations_root: PathBuf,

    /// All `.ts` files to check, sorted.
    pub files: Vec<String>,

    /// Source texts allowed to stay identical (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Initialized on first call to `translation_files()`.
    parsed: OnceCell<ParsedTranslations>,
}

impl CheckContext {
    /// Create a context for the project rooted at `root_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the translations root
    /// does not exist.
    pub fn new(root_dir: &Path, common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let config = merged_config(root_dir, common_args)?;

        let translations_root = translations_root(root_dir, &config);
        if !translations_root.exists() {
            bail!(
                "Translations root '{}' does not exist",
                translations_root.display()
            );
        }

        let scan_result = find_translation_files(&translations_root, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            translations_root,
            files: scan_result.files,
            ignore_texts,
            verbose,
            parsed: OnceCell::new(),
        })
    }

    fn parsed(&self) -> &ParsedTranslations {
        self.parsed.get_or_init(|| {
            let ScanTranslationsResult { files, warnings } = scan_translation_files(&self.files);

            let errors = warnings
                .into_iter()
                .map(|warning| {
                    if self.verbose {
                        eprintln!("Warning: {} - {}", warning.file_path, warning.error);
                    }
                    ParseErrorIssue {
                        file_path: warning.file_path,
                        error: warning.error,
                    }
                })
                .collect();

            ParsedTranslations { files, errors }
        })
    }

    /// Successfully parsed translation files (lazy initialization).
    pub fn translation_files(&self) -> &[TranslationFile] {
        &self.parsed().files
    }

    /// Files that could not be parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parsed().errors
    }

    /// True when the file's `language` is the configured source language,
    /// i.e. the table is an identity mapping.
    pub fn is_source_language_file(&self, file: &TranslationFile) -> bool {
        is_source_language_file(file, &self.config.source_language)
    }
}

/// Load the config found from `root_dir` and apply CLI overrides on top.
pub fn merged_config(root_dir: &Path, common_args: &CommonArgs) -> Result<Config> {
    let config_result = load_config(root_dir)?;
    if common_args.verbose && !config_result.from_file {
        eprintln!("Note: No .tsglotrc.json found, using default configuration");
    }

    let mut config = config_result.config;

    if let Some(ref source_language) = common_args.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(ref translations_root) = common_args.translations_root {
        config.translations_root = translations_root.to_string_lossy().to_string();
    }

    Ok(config)
}

/// `translationsRoot` of `config`, resolved against the project root.
pub fn translations_root(root_dir: &Path, config: &Config) -> PathBuf {
    resolve_against(root_dir, Path::new(&config.translations_root))
}

/// True when `file` declares the same primary language as `source_language`.
pub fn is_source_language_file(file: &TranslationFile, source_language: &str) -> bool {
    file.language
        .as_deref()
        .is_some_and(|lang| primary_subtag(lang) == primary_subtag(source_language))
}

fn primary_subtag(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

/// Join a relative config path onto the project root, leaving it as-is when
/// the root is the current directory.
fn resolve_against(root_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(Path::new(".")).unwrap_or(path);
        root_dir.join(rel)
    }
}
