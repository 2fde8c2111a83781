//! Untranslated message detection rule.
//!
//! Flags empty translations (the catalog falls back to the source text) and
//! translations still marked `type="unfinished"`.

use crate::{
    core::{CheckContext, TranslationFile, TranslationKind},
    issues::UntranslatedIssue,
    rules::helpers::{collect_per_file, live_messages, message_context},
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    collect_per_file(ctx.translation_files(), check_untranslated)
}

pub fn check_untranslated(file: &TranslationFile) -> Vec<UntranslatedIssue> {
    live_messages(file)
        .filter_map(|(context_name, message)| {
            let translation = &message.translation;
            let unfinished = translation.kind == TranslationKind::Unfinished;
            if !translation.is_empty() && !unfinished {
                return None;
            }
            Some(UntranslatedIssue {
                context: message_context(file, context_name, message),
                unfinished: unfinished && !translation.is_empty(),
            })
        })
        .collect()
}
