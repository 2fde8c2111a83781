//! Runtime lookup over a parsed translation file.
//!
//! # Invariants
//!
//! 1. **Read-only**: a `Catalog` is built once and never mutated by lookups,
//!    so it is `Send + Sync` and can be shared freely.
//!
//! 2. **Source fallback**: `translate` never fails. A missing, empty or
//!    retired entry renders the source text itself.
//!
//! 3. **First entry wins**: duplicate (context, source, comment) keys keep
//!    the entry that appears first in the file.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing entry | Key not in catalog | Source text is used |
//! | Empty translation | Translator left it blank | Source text is used |
//! | Obsolete/vanished | String removed from the app | Entry ignored |
//! | Missing argument | Fewer args than placeholders | Token left as-is |

use std::collections::HashMap;

use crate::core::{
    TranslationFile, TranslationKind, TranslationValue,
    placeholder::{Arg, render},
    plural::PluralRule,
};

/// Options controlling which entries a catalog accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Use non-empty `type="unfinished"` translations.
    pub include_unfinished: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Single(String),
    Numerus(Vec<String>),
}

/// (source, disambiguation comment) within one context.
type MessageKey = (String, String);

/// Immutable translation table: context -> (source, comment) -> entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<String>,
    plural_rule: Option<PluralRule>,
    contexts: HashMap<String, HashMap<MessageKey, CatalogEntry>>,
}

impl Catalog {
    /// Build a catalog from a parsed file.
    pub fn from_file(file: &TranslationFile, options: &LoadOptions) -> Self {
        let mut catalog = Catalog {
            language: file.language.clone(),
            plural_rule: file.language.as_deref().map(PluralRule::for_language),
            contexts: HashMap::new(),
        };

        for (context_name, message) in file.messages() {
            let translation = &message.translation;
            if translation.kind.is_retired() || translation.is_empty() {
                continue;
            }
            if translation.kind == TranslationKind::Unfinished && !options.include_unfinished {
                continue;
            }

            let entry = match &translation.value {
                TranslationValue::Single(text) => CatalogEntry::Single(text.clone()),
                TranslationValue::Numerus(forms) => CatalogEntry::Numerus(forms.clone()),
            };
            catalog
                .contexts
                .entry(context_name.to_string())
                .or_default()
                .entry((message.source.clone(), message.comment_or_empty().to_string()))
                .or_insert(entry);
        }

        catalog
    }

    /// Target language of the file this catalog was built from.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of usable entries.
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, context: &str, source: &str, comment: &str) -> Option<&CatalogEntry> {
        let messages = self.contexts.get(context)?;
        let key = (source.to_string(), comment.to_string());
        messages.get(&key).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                messages.get(&(source.to_string(), String::new()))
            }
        })
    }

    /// Whether the catalog holds an entry for `source` in `context`.
    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.entry(context, source, "").is_some()
    }

    /// Raw translation for `source` in `context`, without substitution.
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.lookup_disambiguated(context, source, "")
    }

    /// Like [`Catalog::lookup`], preferring the entry with the given
    /// disambiguation comment and falling back to the uncommented one.
    ///
    /// A numerus entry yields its first form, or `None` when that form is
    /// empty.
    pub fn lookup_disambiguated(&self, context: &str, source: &str, comment: &str) -> Option<&str> {
        match self.entry(context, source, comment)? {
            CatalogEntry::Single(text) => Some(text.as_str()),
            CatalogEntry::Numerus(forms) => forms
                .first()
                .map(String::as_str)
                .filter(|form| !form.is_empty()),
        }
    }

    /// Translate and substitute `args`, falling back to `source`.
    ///
    /// With no arguments the text is returned exactly as stored.
    pub fn translate(&self, context: &str, source: &str, args: &[Arg]) -> String {
        let text = self.lookup(context, source).unwrap_or(source);
        if args.is_empty() {
            text.to_string()
        } else {
            render(text, args, None)
        }
    }

    /// Translate a numerus message for count `n`: pick the plural form, then
    /// replace `%n` with `n` and substitute `args`. An empty or missing form
    /// renders `source`.
    pub fn translate_plural(&self, context: &str, source: &str, n: i64, args: &[Arg]) -> String {
        let template = match self.entry(context, source, "") {
            Some(CatalogEntry::Numerus(forms)) => {
                let rule = self.plural_rule.unwrap_or(PluralRule::OneOther);
                forms
                    .get(rule.form_index(n))
                    .filter(|form| !form.is_empty())
                    .map(String::as_str)
                    .unwrap_or(source)
            }
            Some(CatalogEntry::Single(text)) => text.as_str(),
            None => source,
        };
        render(template, args, Some(n))
    }
}

/// Render `source` through an optional catalog.
///
/// Without a catalog the source text itself is rendered, the way the
/// application behaves when no file exists for the user's locale. The flag
/// is true when the catalog held an entry for the message.
pub fn translate_or_source(
    catalog: Option<&Catalog>,
    context: &str,
    source: &str,
    count: Option<i64>,
    args: &[Arg],
) -> (String, bool) {
    let translated = catalog.is_some_and(|c| c.contains(context, source));
    let text = match (catalog, count) {
        (Some(catalog), Some(n)) => catalog.translate_plural(context, source, n, args),
        (Some(catalog), None) => catalog.translate(context, source, args),
        (None, None) if args.is_empty() => source.to_string(),
        (None, count) => render(source, args, count),
    };
    (text, translated)
}
