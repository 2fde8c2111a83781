//! Identical translation detection rule.
//!
//! A translation equal to its source usually means the text was copied
//! instead of translated. Texts without letters outside their placeholders
//! ("16:9", "...", "%s") and texts listed in `ignoreTexts` are exempt, as are
//! files whose language is the configured source language.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, TranslationFile, TranslationValue, context::is_source_language_file},
    issues::IdenticalIssue,
    rules::helpers::{collect_per_file, live_messages, message_context},
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    let source_language = ctx.config.source_language.as_str();
    let ignore_texts = &ctx.ignore_texts;
    collect_per_file(ctx.translation_files(), |file| {
        if is_source_language_file(file, source_language) {
            Vec::new()
        } else {
            check_identical(file, ignore_texts)
        }
    })
}

pub fn check_identical(
    file: &TranslationFile,
    ignore_texts: &HashSet<String>,
) -> Vec<IdenticalIssue> {
    live_messages(file)
        .filter(|(_, message)| {
            let TranslationValue::Single(text) = &message.translation.value else {
                return false;
            };
            !text.is_empty()
                && *text == message.source
                && contains_alphabetic(&message.source)
                && !ignore_texts.contains(message.source.trim())
        })
        .map(|(context_name, message)| IdenticalIssue {
            context: message_context(file, context_name, message),
        })
        .collect()
}
