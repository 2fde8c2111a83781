use std::fmt;

/// A parsed Qt Linguist translation file.
///
/// Mirrors the `<TS>` document: a format version, the target and source
/// languages, and the ordered list of contexts. Order is preserved so the
/// file can be written back in the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    /// Path the file was read from (empty for in-memory documents).
    pub file_path: String,
    /// Value of the `version` attribute (e.g., "2.0", "2.1").
    pub version: String,
    /// Target language (`language` attribute), e.g. "es" or "pt_BR".
    pub language: Option<String>,
    /// Source language (`sourcelanguage` attribute), usually "en".
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl TranslationFile {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            version: "2.1".to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over every message together with the name of its context.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}

/// A named group of messages belonging to one UI surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// One translatable string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub source: String,
    /// Disambiguation comment. Part of the message identity.
    pub comment: Option<String>,
    /// Developer note for translators (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Translator note (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    /// Previous source text kept by lupdate for fuzzy matches (`<oldsource>`).
    pub old_source: Option<String>,
    pub old_comment: Option<String>,
    pub userdata: Option<String>,
    /// `<extra-NAME>` elements as (NAME, value), in file order.
    pub extras: Vec<(String, String)>,
    pub locations: Vec<Location>,
    pub translation: Translation,
    /// Line of the `<message>` element in the `.ts` file (1-indexed, 0 if unknown).
    pub line: usize,
}

impl Message {
    /// A finished, single-form message with no location.
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            comment: None,
            extra_comment: None,
            translator_comment: None,
            old_source: None,
            old_comment: None,
            userdata: None,
            extras: Vec::new(),
            locations: Vec::new(),
            translation: Translation::finished(translation),
            line: 0,
        }
    }

    pub fn with_location(mut self, filename: impl Into<String>, line: u32) -> Self {
        self.locations.push(Location {
            filename: filename.into(),
            line: Some(LineRef::Absolute(line)),
        });
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation.value, TranslationValue::Numerus(_))
    }

    /// The disambiguation comment, or "" when absent.
    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// Where the source text appears in the application.
///
/// Informational only. It is never consulted at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: Option<LineRef>,
}

/// A `line` attribute value: absolute (`"130"`) or relative to the
/// previous location of the same file (`"+3"`, `"-2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    Absolute(u32),
    Relative(i32),
}

impl LineRef {
    pub fn parse(value: &str) -> Option<Self> {
        if value.starts_with('+') || value.starts_with('-') {
            value.parse::<i32>().ok().map(LineRef::Relative)
        } else {
            value.parse::<u32>().ok().map(LineRef::Absolute)
        }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Absolute(n) => write!(f, "{}", n),
            LineRef::Relative(n) if *n >= 0 => write!(f, "+{}", n),
            LineRef::Relative(n) => write!(f, "{}", n),
        }
    }
}

/// State of a translation, from the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationKind {
    /// No `type` attribute.
    #[default]
    Finished,
    Unfinished,
    /// Source string no longer exists in the application.
    Obsolete,
    /// Like obsolete, but written by newer lupdate versions.
    Vanished,
}

impl TranslationKind {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationKind::Unfinished),
            "obsolete" => Some(TranslationKind::Obsolete),
            "vanished" => Some(TranslationKind::Vanished),
            _ => None,
        }
    }

    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationKind::Finished => None,
            TranslationKind::Unfinished => Some("unfinished"),
            TranslationKind::Obsolete => Some("obsolete"),
            TranslationKind::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished entries are kept in the file but never used.
    pub fn is_retired(&self) -> bool {
        matches!(self, TranslationKind::Obsolete | TranslationKind::Vanished)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Single(String),
    /// Plural forms of a `numerus="yes"` message, in the language's rule order.
    Numerus(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub kind: TranslationKind,
    pub value: TranslationValue,
    /// Shorter alternatives from a `variants="yes"` translation, one list per
    /// form (index 0 for single values). The value itself holds the first,
    /// longest variant. Empty when no form has variants.
    pub length_variants: Vec<Vec<String>>,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationKind::Finished,
            value: TranslationValue::Single(text.into()),
            length_variants: Vec::new(),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationKind::Unfinished,
            value: TranslationValue::Single(text.into()),
            length_variants: Vec::new(),
        }
    }

    pub fn numerus(kind: TranslationKind, forms: Vec<String>) -> Self {
        Self {
            kind,
            value: TranslationValue::Numerus(forms),
            length_variants: Vec::new(),
        }
    }

    /// Shorter variants of form `index`, if any.
    pub fn variants_of(&self, index: usize) -> &[String] {
        self.length_variants
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when there is no usable text: a blank single value, or no
    /// non-empty numerus form.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            TranslationValue::Single(text) => text.is_empty(),
            TranslationValue::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }

    /// Every text carried by this translation (one entry for single values).
    pub fn texts(&self) -> Vec<&str> {
        match &self.value {
            TranslationValue::Single(text) => vec![text.as_str()],
            TranslationValue::Numerus(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// The text shown in reports: the single value, or the first numerus form.
    pub fn display_text(&self) -> &str {
        match &self.value {
            TranslationValue::Single(text) => text,
            TranslationValue::Numerus(forms) => forms.first().map(String::as_str).unwrap_or(""),
        }
    }
}
