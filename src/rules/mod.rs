//! Rule implementations for tsglot.
//!
//! Each rule is a pure function over one parsed translation file returning a
//! specific issue type, plus a `check_*_issues(ctx)` wrapper that runs it over
//! every file in a `CheckContext`.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (MessageContext construction, parallel fan-out)
//! - `placeholder`: Placeholder parity between source and translation
//! - `duplicate`: Repeated (source, comment) pairs within a context
//! - `numerus`: Plural form count against the language's plural rule
//! - `untranslated`: Empty or unfinished translations
//! - `identical`: Translations copied from the source
//! - `location`: Implausible `<location>` hints
//! - `whitespace`: Leading/trailing whitespace drift
//! - `language`: File name locale vs `language` attribute

pub mod duplicate;
pub mod helpers;
pub mod identical;
pub mod language;
pub mod location;
pub mod numerus;
pub mod placeholder;
pub mod untranslated;
pub mod whitespace;

use crate::{core::CheckContext, issues::Issue};

pub use duplicate::check_duplicate_issues;
pub use identical::check_identical_issues;
pub use language::check_language_issues;
pub use location::check_location_issues;
pub use numerus::check_numerus_issues;
pub use placeholder::check_placeholder_issues;
pub use untranslated::check_untranslated_issues;
pub use whitespace::check_whitespace_issues;

/// A rule that can be selected on the command line or through MCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CheckRule {
    PlaceholderMismatch,
    DuplicateMessage,
    Numerus,
    Untranslated,
    Identical,
    Location,
    Whitespace,
    LanguageMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::PlaceholderMismatch,
            CheckRule::DuplicateMessage,
            CheckRule::Numerus,
            CheckRule::Untranslated,
            CheckRule::Identical,
            CheckRule::Location,
            CheckRule::Whitespace,
            CheckRule::LanguageMismatch,
        ]
    }

    /// Run this rule over every file in `ctx`.
    pub fn run(self, ctx: &CheckContext) -> Vec<Issue> {
        match self {
            CheckRule::PlaceholderMismatch => into_issues(check_placeholder_issues(ctx)),
            CheckRule::DuplicateMessage => into_issues(check_duplicate_issues(ctx)),
            CheckRule::Numerus => into_issues(check_numerus_issues(ctx)),
            CheckRule::Untranslated => into_issues(check_untranslated_issues(ctx)),
            CheckRule::Identical => into_issues(check_identical_issues(ctx)),
            CheckRule::Location => into_issues(check_location_issues(ctx)),
            CheckRule::Whitespace => into_issues(check_whitespace_issues(ctx)),
            CheckRule::LanguageMismatch => into_issues(check_language_issues(ctx)),
        }
    }
}

fn into_issues<T: Into<Issue>>(issues: Vec<T>) -> Vec<Issue> {
    issues.into_iter().map(Into::into).collect()
}

/// Run `rules` (all rules when empty) and append parse errors.
pub fn run_checks(ctx: &CheckContext, rules: &[CheckRule]) -> Vec<Issue> {
    let rules = if rules.is_empty() {
        CheckRule::all()
    } else {
        rules.to_vec()
    };

    let mut issues: Vec<Issue> = rules.into_iter().flat_map(|rule| rule.run(ctx)).collect();
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    issues.sort();
    issues
}
