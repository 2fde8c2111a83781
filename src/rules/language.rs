//! Language attribute rule.
//!
//! `danbooru_gui-es.ts` should declare `language="es"`. The loader picks
//! files by name, while plural selection follows the attribute, so the two
//! must agree.

use std::path::Path;

use crate::{
    core::{CheckContext, TranslationFile, loader::normalize_locale},
    issues::LanguageMismatchIssue,
    utils::locale_from_file_name,
};

pub fn check_language_issues(ctx: &CheckContext) -> Vec<LanguageMismatchIssue> {
    ctx.translation_files()
        .iter()
        .filter_map(check_language)
        .collect()
}

pub fn check_language(file: &TranslationFile) -> Option<LanguageMismatchIssue> {
    let file_locale = locale_from_file_name(Path::new(&file.file_path))?;

    let matches = file.language.as_deref().is_some_and(|declared| {
        let declared = normalize_locale(declared);
        if file_locale.contains('_') {
            declared == file_locale
        } else {
            declared.split('_').next() == Some(file_locale.as_str())
        }
    });
    if matches {
        return None;
    }

    Some(LanguageMismatchIssue {
        file_path: file.file_path.clone(),
        file_locale,
        declared: file.language.clone(),
    })
}
