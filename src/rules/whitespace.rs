//! Edge whitespace rule.
//!
//! Leading and trailing whitespace in a source string is usually layout
//! (a trailing space before a value, an indented label). The translation
//! should carry the same, and should not add any of its own.

use crate::{
    core::{CheckContext, TranslationFile},
    issues::{WhitespaceEdge, WhitespaceIssue},
    rules::helpers::{collect_per_file, live_messages, message_context},
    utils::{leading_whitespace, trailing_whitespace},
};

pub fn check_whitespace_issues(ctx: &CheckContext) -> Vec<WhitespaceIssue> {
    collect_per_file(ctx.translation_files(), check_whitespace)
}

pub fn check_whitespace(file: &TranslationFile) -> Vec<WhitespaceIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in live_messages(file) {
        for text in message.translation.texts() {
            if text.is_empty() {
                continue;
            }
            let Some(edge) = whitespace_difference(&message.source, text) else {
                continue;
            };
            let mut context = message_context(file, context_name, message);
            context.translation = text.to_string();
            issues.push(WhitespaceIssue { context, edge });
            // One report per message is enough for numerus forms.
            break;
        }
    }

    issues
}

fn whitespace_difference(source: &str, translation: &str) -> Option<WhitespaceEdge> {
    let leading = leading_whitespace(source) != leading_whitespace(translation);
    let trailing = trailing_whitespace(source) != trailing_whitespace(translation);
    match (leading, trailing) {
        (true, true) => Some(WhitespaceEdge::Both),
        (true, false) => Some(WhitespaceEdge::Leading),
        (false, true) => Some(WhitespaceEdge::Trailing),
        (false, false) => None,
    }
}
