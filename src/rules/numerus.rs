//! Numerus form count rule.
//!
//! A plural message must carry exactly as many forms as the plural rule of
//! the file's language selects from. A missing form makes some counts fall
//! back to the last form. An extra form is never shown.

use crate::{
    core::{CheckContext, TranslationFile, TranslationValue, plural::PluralRule},
    issues::NumerusIssue,
    rules::helpers::{collect_per_file, live_messages, message_context},
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusIssue> {
    collect_per_file(ctx.translation_files(), check_numerus)
}

pub fn check_numerus(file: &TranslationFile) -> Vec<NumerusIssue> {
    let Some(language) = file.language.as_deref() else {
        return Vec::new();
    };
    let expected = PluralRule::for_language(language).form_count();

    live_messages(file)
        .filter_map(|(context_name, message)| {
            let TranslationValue::Numerus(forms) = &message.translation.value else {
                return None;
            };
            if message.translation.is_empty() || forms.len() == expected {
                return None;
            }
            Some(NumerusIssue {
                context: message_context(file, context_name, message),
                language: language.to_string(),
                expected,
                found: forms.len(),
            })
        })
        .collect()
}
