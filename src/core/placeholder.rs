//! Placeholder scanning and substitution.
//!
//! Two placeholder families show up in Qt translation files:
//!
//! - printf/Python conversions (`%i`, `%s`, `%5.2f`, `%(name)s`), consumed in
//!   order from the argument list,
//! - Qt markers: `%1`..`%99` index the argument list directly, `%n` is the
//!   count of a numerus message.
//!
//! `%%` is a literal percent sign in both.
//!
//! The printf reading is tried first. A digit run directly followed by a
//! conversion letter is a printf width, so `%1s` is `%s` with width 1 and
//! `%10d` is `%d` with width 10. In `%1 s` and `%1:` the `%1` is a Qt marker.

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

/// Alternatives are ordered: escape, printf, Qt positional, count.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"%(?:",
        r"(?P<escape>%)",
        r"|(?:\((?P<name>[A-Za-z_][A-Za-z0-9_]*)\))?(?P<flags>[-#0+]*)(?P<width>\d+|\*)?(?:\.(?P<prec>\d+|\*))?(?:hh|h|ll|l|L|q|j|z|t)?(?P<conv>[diouxXeEfFgGcrsa])",
        r"|L?(?P<pos>[1-9][0-9]?)",
        r"|L?(?P<count>n)",
        r")"
    ))
    .unwrap()
});

/// Flags, width and precision of a printf conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatSpec {
    pub left_align: bool,
    pub zero_pad: bool,
    pub plus: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `%%`
    Escape,
    /// `%i`, `%-5s`, `%.2f`: takes the next argument in order.
    Printf { conversion: char, spec: FormatSpec },
    /// `%(name)s`
    Named { name: String, conversion: char },
    /// `%1`, `%L2`
    Positional(u8),
    /// `%n`, `%Ln`
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The token as written, e.g. `"%-5s"`.
    pub token: String,
    pub kind: PlaceholderKind,
    /// Byte range of the token in the scanned text.
    pub start: usize,
    pub end: usize,
}

impl Placeholder {
    pub fn is_escape(&self) -> bool {
        matches!(self.kind, PlaceholderKind::Escape)
    }
}

/// Scan `text` for placeholders, including `%%` escapes, in order of appearance.
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Placeholder {
                token: whole.as_str().to_string(),
                kind: placeholder_kind(&caps)?,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

fn placeholder_kind(caps: &Captures<'_>) -> Option<PlaceholderKind> {
    if caps.name("escape").is_some() {
        return Some(PlaceholderKind::Escape);
    }
    if let Some(conv) = caps.name("conv") {
        let conversion = conv.as_str().chars().next()?;
        if let Some(name) = caps.name("name") {
            return Some(PlaceholderKind::Named {
                name: name.as_str().to_string(),
                conversion,
            });
        }
        let flags = caps.name("flags").map(|m| m.as_str()).unwrap_or("");
        let spec = FormatSpec {
            left_align: flags.contains('-'),
            zero_pad: flags.contains('0'),
            plus: flags.contains('+'),
            width: caps.name("width").and_then(|m| m.as_str().parse().ok()),
            precision: caps.name("prec").and_then(|m| m.as_str().parse().ok()),
        };
        return Some(PlaceholderKind::Printf { conversion, spec });
    }
    if let Some(pos) = caps.name("pos") {
        return pos.as_str().parse().ok().map(PlaceholderKind::Positional);
    }
    if caps.name("count").is_some() {
        return Some(PlaceholderKind::Count);
    }
    None
}

/// Conversions that accept the same kind of argument compare as equal.
fn conversion_class(c: char) -> char {
    match c {
        'i' | 'u' => 'd',
        'F' => 'f',
        'X' => 'x',
        'E' => 'e',
        'G' => 'g',
        'r' | 'a' => 's',
        other => other,
    }
}

/// What a text expects from its arguments.
///
/// Printf conversions are ordered (they consume arguments in sequence).
/// Named conversions, Qt markers and the count marker may move freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSignature {
    pub sequential: Vec<char>,
    pub named: Vec<(String, char)>,
    pub positional: Vec<u8>,
    pub has_count: bool,
}

impl PlaceholderSignature {
    pub fn of(text: &str) -> Self {
        let mut signature = Self::default();
        for placeholder in scan_placeholders(text) {
            match placeholder.kind {
                PlaceholderKind::Escape => {}
                PlaceholderKind::Printf { conversion, .. } => {
                    signature.sequential.push(conversion_class(conversion))
                }
                PlaceholderKind::Named { name, conversion } => {
                    signature.named.push((name, conversion_class(conversion)))
                }
                PlaceholderKind::Positional(n) => signature.positional.push(n),
                PlaceholderKind::Count => signature.has_count = true,
            }
        }
        signature.named.sort();
        signature.positional.sort_unstable();
        signature
    }

    /// Compare, optionally ignoring `%n` (numerus forms may spell the count out).
    pub fn matches(&self, other: &Self, ignore_count: bool) -> bool {
        self.sequential == other.sequential
            && self.named == other.named
            && self.positional == other.positional
            && (ignore_count || self.has_count == other.has_count)
    }
}

/// True when `translation` expects the same arguments as `source`.
pub fn placeholders_match(source: &str, translation: &str) -> bool {
    PlaceholderSignature::of(source).matches(&PlaceholderSignature::of(translation), false)
}

/// Human readable list of the placeholder tokens in `text`, e.g. `"%i, %s"`.
pub fn describe_placeholders(text: &str) -> String {
    let tokens: Vec<String> = scan_placeholders(text)
        .into_iter()
        .filter(|p| !p.is_escape())
        .map(|p| p.token)
        .collect();
    if tokens.is_empty() {
        "none".to_string()
    } else {
        tokens.join(", ")
    }
}

/// A positional argument for substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Arg {
    /// Interpret command-line text: integers first, then floats, else a string.
    pub fn parse_lossy(text: &str) -> Self {
        if let Ok(n) = text.parse::<i64>() {
            Arg::Int(n)
        } else if let Ok(f) = text.parse::<f64>() {
            Arg::Float(f)
        } else {
            Arg::Str(text.to_string())
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Arg::Int(n) => Some(*n),
            Arg::Float(f) => Some(f.trunc() as i64),
            Arg::Str(s) => s.trim().parse().ok(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Arg::Int(n) => Some(*n as f64),
            Arg::Float(f) => Some(*f),
            Arg::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Arg::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

/// Substitute `args` (and the numerus `count`) into `template`.
///
/// Single pass: substituted text is never rescanned. Tokens without a
/// matching argument, and named conversions, are left as written.
pub fn render(template: &str, args: &[Arg], count: Option<i64>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next_arg = 0;

    for placeholder in scan_placeholders(template) {
        out.push_str(&template[last..placeholder.start]);
        last = placeholder.end;

        let rendered = match &placeholder.kind {
            PlaceholderKind::Escape => Some("%".to_string()),
            PlaceholderKind::Printf { conversion, spec } => {
                let arg = args.get(next_arg);
                next_arg += 1;
                arg.map(|arg| format_conversion(arg, *conversion, spec))
            }
            PlaceholderKind::Named { .. } => None,
            PlaceholderKind::Positional(n) => args.get(usize::from(*n) - 1).map(Arg::to_string),
            PlaceholderKind::Count => count.map(|n| n.to_string()),
        };
        out.push_str(rendered.as_deref().unwrap_or(&placeholder.token));
    }

    out.push_str(&template[last..]);
    out
}

fn format_conversion(arg: &Arg, conversion: char, spec: &FormatSpec) -> String {
    let numeric = matches!(
        conversion,
        'd' | 'i' | 'u' | 'o' | 'x' | 'X' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G'
    );

    let body = match conversion {
        'd' | 'i' | 'u' => arg.as_i64().map(|n| n.to_string()),
        'x' => arg.as_i64().map(|n| signed_radix(n, |v| format!("{:x}", v))),
        'X' => arg.as_i64().map(|n| signed_radix(n, |v| format!("{:X}", v))),
        'o' => arg.as_i64().map(|n| signed_radix(n, |v| format!("{:o}", v))),
        'f' | 'F' => arg
            .as_f64()
            .map(|x| format!("{:.*}", spec.precision.unwrap_or(6), x)),
        'e' | 'E' => arg.as_f64().map(|x| {
            let s = c_exponent(x, spec.precision.unwrap_or(6));
            if conversion == 'E' { s.to_uppercase() } else { s }
        }),
        'g' | 'G' => arg.as_f64().map(|x| x.to_string()),
        'c' => Some(match arg {
            Arg::Int(n) => u32::try_from(*n)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default(),
            other => other.to_string().chars().take(1).collect(),
        }),
        _ => {
            let text = arg.to_string();
            Some(match spec.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            })
        }
    };
    // An argument of the wrong type is shown as-is rather than dropped.
    let mut body = body.unwrap_or_else(|| arg.to_string());

    if numeric && spec.plus && !body.starts_with('-') {
        body.insert(0, '+');
    }

    let Some(width) = spec.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let pad = width - len;
    if spec.left_align {
        format!("{}{}", body, " ".repeat(pad))
    } else if spec.zero_pad && numeric {
        let split = if body.starts_with(['-', '+']) { 1 } else { 0 };
        format!("{}{}{}", &body[..split], "0".repeat(pad), &body[split..])
    } else {
        format!("{}{}", " ".repeat(pad), body)
    }
}

fn signed_radix(n: i64, digits: impl Fn(u64) -> String) -> String {
    if n < 0 {
        format!("-{}", digits(n.unsigned_abs()))
    } else {
        digits(n.unsigned_abs())
    }
}

/// C-style exponent notation: `1.500000e+02`.
fn c_exponent(x: f64, precision: usize) -> String {
    let rust = format!("{:.*e}", precision, x);
    match rust.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => rust,
    }
}
