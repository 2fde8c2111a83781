//! Location hint rule.
//!
//! `<location filename=..>` points at the code or form a string comes from.
//! lupdate writes it relative to the `.ts` file, so an absolute path, an
//! extension that is not a source file, or (optionally) a file that does not
//! exist means the hint is stale or was written by hand.

use std::path::Path;

use crate::{
    core::{CheckContext, TranslationFile},
    issues::{LocationIssue, LocationProblem},
    rules::helpers::{collect_per_file, live_messages, message_context},
};

/// Options for the location rule, taken from the config.
#[derive(Debug, Clone)]
pub struct LocationOptions<'a> {
    pub extensions: &'a [String],
    pub check_files: bool,
}

pub fn check_location_issues(ctx: &CheckContext) -> Vec<LocationIssue> {
    let options = LocationOptions {
        extensions: &ctx.config.location_extensions,
        check_files: ctx.config.check_location_files,
    };
    collect_per_file(ctx.translation_files(), |file| {
        check_locations(file, &options)
    })
}

pub fn check_locations(
    file: &TranslationFile,
    options: &LocationOptions<'_>,
) -> Vec<LocationIssue> {
    let base_dir = Path::new(&file.file_path).parent().unwrap_or(Path::new(""));
    let mut issues = Vec::new();

    for (context_name, message) in live_messages(file) {
        for location in &message.locations {
            let Some(problem) = location_problem(&location.filename, base_dir, options) else {
                continue;
            };
            issues.push(LocationIssue {
                context: message_context(file, context_name, message),
                filename: location.filename.clone(),
                problem,
            });
        }
    }

    issues
}

fn location_problem(
    filename: &str,
    base_dir: &Path,
    options: &LocationOptions<'_>,
) -> Option<LocationProblem> {
    if is_absolute(filename) {
        return Some(LocationProblem::AbsolutePath);
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let known = extension
        .as_deref()
        .is_some_and(|ext| options.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
    if !known {
        return Some(LocationProblem::UnexpectedExtension(extension));
    }

    if options.check_files && !base_dir.join(filename).is_file() {
        return Some(LocationProblem::MissingFile);
    }

    None
}

/// Absolute on any platform: `/src/app.py`, `\\server\share`, `C:\app.py`, `C:/app.py`.
fn is_absolute(filename: &str) -> bool {
    let bytes = filename.as_bytes();
    filename.starts_with('/')
        || filename.starts_with('\\')
        || (bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'/' || bytes[2] == b'\\'))
}
