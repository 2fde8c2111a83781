use std::time::Duration;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Fmt(FmtSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files whose canonical layout differs from their content.
    pub changed_files: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct TranslateSummary {
    /// The rendered text.
    pub text: String,
    /// False when the source text was used as a fallback.
    pub translated: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tsglot commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found, sorted. Empty for `tr` and `init`.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of translation files that were checked.
    pub files_checked: usize,
    /// Wall time of the command, when it is worth reporting.
    pub elapsed: Option<Duration>,
}
