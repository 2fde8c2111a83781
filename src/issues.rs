//! Issue types for translation-table checks.
//!
//! Each issue is self-contained with everything a reporter (CLI, MCP) needs
//! to display it: the flagged message, where it lives, and the rule-specific
//! details.

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    PlaceholderMismatch,
    DuplicateMessage,
    Numerus,
    Untranslated,
    Identical,
    Location,
    Whitespace,
    LanguageMismatch,
    ParseError,
}

impl Rule {
    pub fn all() -> &'static [Rule] {
        &[
            Rule::PlaceholderMismatch,
            Rule::DuplicateMessage,
            Rule::Numerus,
            Rule::Untranslated,
            Rule::Identical,
            Rule::Location,
            Rule::Whitespace,
            Rule::LanguageMismatch,
            Rule::ParseError,
        ]
    }

    /// Parse the kebab-case name printed by `Display`.
    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::all().iter().copied().find(|r| r.to_string() == name)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::Numerus => write!(f, "numerus"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Identical => write!(f, "identical"),
            Rule::Location => write!(f, "location"),
            Rule::Whitespace => write!(f, "whitespace"),
            Rule::LanguageMismatch => write!(f, "language-mismatch"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Translation expects different arguments than its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// Placeholders of the source, e.g. "%i".
    pub expected: String,
    /// Placeholders of the offending translation text.
    pub found: String,
    /// Index of the numerus form, for plural messages.
    pub form: Option<usize>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Same (source, comment) defined twice in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: MessageContext,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Plural message with the wrong number of forms for its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: usize,
    pub found: usize,
}

impl NumerusIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Numerus
    }
}

/// Empty or `type="unfinished"` translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    /// True when text is present but marked unfinished.
    pub unfinished: bool,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Translation is a copy of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub context: MessageContext,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

/// Why a `<location>` hint looks wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationProblem {
    /// Extension not listed in `locationExtensions` (None: no extension at all).
    UnexpectedExtension(Option<String>),
    AbsolutePath,
    /// File does not exist relative to the `.ts` file.
    MissingFile,
}

impl std::fmt::Display for LocationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationProblem::UnexpectedExtension(Some(ext)) => {
                write!(f, "unexpected extension '.{}'", ext)
            }
            LocationProblem::UnexpectedExtension(None) => write!(f, "no file extension"),
            LocationProblem::AbsolutePath => write!(f, "absolute path"),
            LocationProblem::MissingFile => write!(f, "file not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationIssue {
    pub context: MessageContext,
    /// The `filename` attribute as written.
    pub filename: String,
    pub problem: LocationProblem,
}

impl LocationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Location
    }
}

/// Which end of the text has diverging whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceEdge {
    Leading,
    Trailing,
    Both,
}

impl std::fmt::Display for WhitespaceEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WhitespaceEdge::Leading => write!(f, "leading"),
            WhitespaceEdge::Trailing => write!(f, "trailing"),
            WhitespaceEdge::Both => write!(f, "leading and trailing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespaceIssue {
    pub context: MessageContext,
    pub edge: WhitespaceEdge,
}

impl WhitespaceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Whitespace
    }
}

// ============================================================
// Issue Types - Whole File
// ============================================================

/// File name locale disagrees with the `language` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMismatchIssue {
    pub file_path: String,
    /// Locale suffix of the file name (e.g. "es" for "app-es.ts").
    pub file_locale: String,
    /// The `language` attribute, if any.
    pub declared: Option<String>,
}

impl LanguageMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LanguageMismatch
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation file.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    PlaceholderMismatch(PlaceholderMismatchIssue),
    DuplicateMessage(DuplicateMessageIssue),
    Numerus(NumerusIssue),
    Untranslated(UntranslatedIssue),
    Identical(IdenticalIssue),
    Location(LocationIssue),
    Whitespace(WhitespaceIssue),
    LanguageMismatch(LanguageMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A `<message>` inside a translation file.
    Message(&'a MessageContext),
    /// File-level only (parse errors, language attribute).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Trait for types that can be reported to CLI and MCP.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, ...).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let form = self
            .form
            .map(|i| format!(" in numerus form {}", i))
            .unwrap_or_default();
        Some(format!(
            "[{}] expected {}, found {}{}",
            self.context.context_name, self.expected, self.found, form
        ))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "[{}] first defined at line {}",
            self.context.context_name, self.first_line
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("add a <comment> to disambiguate, or remove one entry".to_string())
    }
}

impl Report for NumerusIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "[{}] '{}' needs {} plural form(s), found {}",
            self.context.context_name, self.language, self.expected, self.found
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.unfinished {
            Some(format!(
                "[{}] marked unfinished (\"{}\")",
                self.context.context_name, self.context.translation
            ))
        } else {
            Some(format!("[{}] empty translation", self.context.context_name))
        }
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "[{}] translation equals the source text",
            self.context.context_name
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("add the text to 'ignoreTexts' if it is intentionally untranslated".to_string())
    }
}

impl Report for LocationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.filename.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "[{}] {} (\"{}\")",
            self.context.context_name, self.problem, self.context.source
        ))
    }
}

impl Report for WhitespaceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "[{}] {} whitespace differs (\"{}\")",
            self.context.context_name, self.edge, self.context.translation
        ))
    }
}

impl Report for LanguageMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match &self.declared {
            Some(declared) => declared.clone(),
            None => "(no language attribute)".to_string(),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("file name suggests '{}'", self.file_locale))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| a.col().cmp(&b.col()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
