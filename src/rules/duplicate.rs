//! Duplicate message detection rule.
//!
//! Within a context, a (source, comment) pair identifies one message. A second
//! definition is unreachable at runtime: the catalog keeps the first.

use std::collections::HashMap;

use crate::{
    core::{CheckContext, TranslationFile},
    issues::DuplicateMessageIssue,
    rules::helpers::{collect_per_file, message_context},
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    collect_per_file(ctx.translation_files(), check_duplicates)
}

/// Report every repeated (source, comment) pair after its first occurrence.
pub fn check_duplicates(file: &TranslationFile) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for context in &file.contexts {
        let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();

        for message in &context.messages {
            if message.translation.kind.is_retired() {
                continue;
            }
            let key = (message.source.as_str(), message.comment_or_empty());
            match first_seen.get(&key) {
                Some(&first_line) => issues.push(DuplicateMessageIssue {
                    context: message_context(file, &context.name, message),
                    first_line,
                }),
                None => {
                    first_seen.insert(key, message.line);
                }
            }
        }
    }

    issues
}
