//! Numerus form selection.
//!
//! Qt stores plural translations as an ordered list of forms. Which form a
//! count selects depends on the target language. The families below cover the
//! languages Qt Linguist ships rules for most often; anything unknown uses the
//! English one/other rule.

/// Plural rule families, each mapping a count to a form index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, Korean, ...).
    Single,
    /// `n == 1` is form 0, everything else form 1 (English, Spanish, German, ...).
    OneOther,
    /// `n <= 1` is form 0 (French, Brazilian Portuguese).
    French,
    /// one / few / many (Russian, Ukrainian, Belarusian, Serbian, Croatian).
    EastSlavic,
    /// one / few / many with `n == 1` only (Polish).
    Polish,
    /// one / few (2-4) / other (Czech, Slovak).
    Czech,
}

impl PluralRule {
    /// Rule for a language tag such as `"es"`, `"pt_BR"` or `"ru-RU"`.
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_lowercase();
        if normalized == "pt_br" {
            return PluralRule::French;
        }
        let primary = normalized.split('_').next().unwrap_or("");
        match primary {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" => PluralRule::Single,
            "fr" | "ff" | "kab" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            _ => PluralRule::OneOther,
        }
    }

    /// Number of forms a translation in this family should carry.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::OneOther | PluralRule::French => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Czech => 3,
        }
    }

    /// Index of the form to use for count `n`.
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let (n10, n100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}
