//! Common utility functions shared across the codebase.

use std::path::Path;

use crate::core::placeholder::scan_placeholders;

/// Checks if the text contains at least one Unicode alphabetic character
/// outside its placeholders.
///
/// Returns false for empty strings, pure numbers, pure symbols, and texts
/// made only of placeholders such as `%s` or `%1: %2`.
///
/// # Examples
///
/// ```
/// use tsglot::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("Búsqueda"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(contains_alphabetic("%i selected"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic("16:9"));
/// assert!(!contains_alphabetic("%s"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    let has_letter = |s: &str| s.chars().any(|c| c.is_alphabetic());

    let mut rest = 0;
    for placeholder in scan_placeholders(text) {
        if has_letter(&text[rest..placeholder.start]) {
            return true;
        }
        rest = placeholder.end;
    }
    has_letter(&text[rest..])
}

pub fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - text.trim_start().len()]
}

pub fn trailing_whitespace(text: &str) -> &str {
    &text[text.trim_end().len()..]
}

/// ISO 639-1 language codes, sorted.
const LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODES.binary_search(&code).is_ok()
}

/// Locale encoded in a translation file name, e.g. `es` for
/// `danbooru_gui-es.ts` or `pt_BR` for `app.pt_BR.ts`.
///
/// Only ISO 639-1 language codes are recognised, so base names such as
/// `danbooru_gui.ts` or `main_ui.ts` yield `None`.
pub fn locale_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let segments: Vec<&str> = stem.split(['.', '-', '_']).collect();
    if segments.len() < 2 {
        return None;
    }

    let is_region = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase());

    let last = segments[segments.len() - 1];
    if is_region(last) && segments.len() >= 3 {
        let language = segments[segments.len() - 2];
        if is_language_code(language) {
            return Some(format!("{}_{}", language, last));
        }
        return None;
    }
    is_language_code(last).then(|| last.to_string())
}
