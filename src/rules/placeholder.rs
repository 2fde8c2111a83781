//! Placeholder parity rule.
//!
//! A translation must ask for the same arguments as its source, otherwise
//! substitution at runtime renders garbage or drops values. Numerus forms are
//! compared without `%n`, since a form may spell the count out ("one file").

use crate::{
    core::{
        CheckContext, TranslationFile, TranslationValue,
        placeholder::{PlaceholderSignature, describe_placeholders},
    },
    issues::PlaceholderMismatchIssue,
    rules::helpers::{collect_per_file, live_messages, message_context},
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    collect_per_file(ctx.translation_files(), check_placeholders)
}

/// Check every non-empty translation text of `file` against its source.
pub fn check_placeholders(file: &TranslationFile) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in live_messages(file) {
        let expected = PlaceholderSignature::of(&message.source);

        match &message.translation.value {
            TranslationValue::Single(text) => {
                if text.is_empty() || expected.matches(&PlaceholderSignature::of(text), false) {
                    continue;
                }
                issues.push(PlaceholderMismatchIssue {
                    context: message_context(file, context_name, message),
                    expected: describe_placeholders(&message.source),
                    found: describe_placeholders(text),
                    form: None,
                });
            }
            TranslationValue::Numerus(forms) => {
                for (index, form) in forms.iter().enumerate() {
                    if form.is_empty() || expected.matches(&PlaceholderSignature::of(form), true) {
                        continue;
                    }
                    let mut context = message_context(file, context_name, message);
                    context.translation = form.clone();
                    issues.push(PlaceholderMismatchIssue {
                        context,
                        expected: describe_placeholders(&message.source),
                        found: describe_placeholders(form),
                        form: Some(index),
                    });
                }
            }
        }
    }

    issues
}
