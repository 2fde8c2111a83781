use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTranslationFilesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "placeholder-mismatch")
    pub rule: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Context name (e.g. "DanbooruGUI")
    pub context: String,
    /// Source text as written in the application
    pub source: String,
    /// Target locale (e.g. "es_ES"); resolved under the translations root
    pub locale: Option<String>,
    /// Explicit .ts file, relative to the project root; takes precedence over locale
    pub file: Option<String>,
    /// Catalog base name; defaults to config `catalogName`
    pub name: Option<String>,
    /// Plural count for numerus messages
    pub count: Option<i64>,
    /// Positional placeholder arguments
    pub args: Option<Vec<String>>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub ignores: Vec<String>,
    pub source_language: String,
    pub catalog_name: Option<String>,
    pub ignore_texts: Vec<String>,
    pub location_extensions: Vec<String>,
    pub check_location_files: bool,
    pub include_unfinished: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            ignores: c.ignores,
            source_language: c.source_language,
            catalog_name: c.catalog_name,
            ignore_texts: c.ignore_texts,
            location_extensions: c.location_extensions,
            check_location_files: c.check_location_files,
            include_unfinished: c.include_unfinished,
        }
    }
}

// ============================================================
// Translation File Types (list_translation_files)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFilesResult {
    pub translations_root: String,
    pub source_language: String,
    pub files: Vec<TranslationFileInfo>,
    /// Files that could not be parsed
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFileInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
    /// Messages with a non-empty, finished translation
    pub finished_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub files_checked: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issue counts per rule, only rules with at least one issue
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub count: usize,
}

// ============================================================
// Issue Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// 0 for file-level issues
    pub line: usize,
    pub col: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub text: String,
    /// False when the source text was used as a fallback
    pub translated: bool,
    /// The catalog file used, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}
