use std::{fs, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use rayon::prelude::*;

use crate::core::{
    Context, LineRef, Location, Message, Translation, TranslationFile, TranslationKind,
    TranslationValue,
};

/// A warning from scanning translation files.
#[derive(Debug, Clone)]
pub struct TranslationScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanTranslationsResult {
    /// Successfully parsed files, in the order they were given.
    pub files: Vec<TranslationFile>,
    pub warnings: Vec<TranslationScanWarning>,
}

pub fn parse_ts_file(path: &Path) -> Result<TranslationFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {:?}", path))?;
    parse_ts_str(&content, &path.to_string_lossy())
        .with_context(|| format!("Failed to parse translation file: {:?}", path))
}

/// Parse every file in parallel. Unparseable files become warnings.
pub fn scan_translation_files(paths: &[String]) -> ScanTranslationsResult {
    let parsed: Vec<(String, Result<TranslationFile>)> = paths
        .par_iter()
        .map(|path| (path.clone(), parse_ts_file(Path::new(path))))
        .collect();

    let mut result = ScanTranslationsResult::default();
    for (path, parsed) in parsed {
        match parsed {
            Ok(file) => result.files.push(file),
            Err(e) => result.warnings.push(TranslationScanWarning {
                file_path: path,
                error: format!("{:#}", e),
            }),
        }
    }
    result
}

/// Which text-bearing element is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    LengthVariant,
    OldSource,
    OldComment,
    Userdata,
    /// An `<extra-NAME>` element. The name waits in `ParseState::extra_name`.
    Extra,
    /// Whitespace between child elements, or text of unknown elements.
    Skipped,
}

#[derive(Debug, Default)]
struct MessageBuilder {
    line: usize,
    numerus: bool,
    source: Option<String>,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
    old_source: Option<String>,
    old_comment: Option<String>,
    userdata: Option<String>,
    extras: Vec<(String, String)>,
    locations: Vec<Location>,
    kind: TranslationKind,
    single: String,
    forms: Vec<String>,
    /// `<lengthvariant>` texts of the form being read.
    pending_variants: Vec<String>,
    /// Shorter variants per form, as stored on `Translation`.
    length_variants: Vec<Vec<String>>,
}

impl MessageBuilder {
    fn finish(self, context_name: &str) -> Result<Message> {
        let Some(source) = self.source else {
            bail!(
                "line {}: message in context '{}' has no <source>",
                self.line,
                context_name
            );
        };
        let value = if self.numerus {
            TranslationValue::Numerus(self.forms)
        } else {
            TranslationValue::Single(self.single)
        };
        let length_variants = if self.length_variants.iter().all(Vec::is_empty) {
            Vec::new()
        } else {
            self.length_variants
        };
        Ok(Message {
            source,
            comment: self.comment,
            extra_comment: self.extra_comment,
            translator_comment: self.translator_comment,
            old_source: self.old_source,
            old_comment: self.old_comment,
            userdata: self.userdata,
            extras: self.extras,
            locations: self.locations,
            translation: Translation {
                kind: self.kind,
                value,
                length_variants,
            },
            line: self.line,
        })
    }

    /// Close a single translation or numerus form. Returns the longest
    /// variant when the element held `<lengthvariant>` children.
    fn take_variants(&mut self) -> Option<String> {
        if self.pending_variants.is_empty() {
            self.length_variants.push(Vec::new());
            return None;
        }
        let mut variants = std::mem::take(&mut self.pending_variants);
        let first = variants.remove(0);
        self.length_variants.push(variants);
        Some(first)
    }
}

/// Incremental state while walking the XML event stream.
#[derive(Debug, Default)]
struct ParseState {
    seen_root: bool,
    context: Option<Context>,
    message: Option<MessageBuilder>,
    target: Option<TextTarget>,
    text: String,
    extra_name: Option<String>,
}

/// Parse a `.ts` document.
///
/// Text content is kept verbatim: surrounding whitespace inside `<source>`
/// and `<translation>` is significant.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<TranslationFile> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut file = TranslationFile::new(file_path);
    let mut state = ParseState::default();

    loop {
        let offset = reader.buffer_position() as usize;
        let line = offset_to_line(&line_index, offset);
        let event = reader
            .read_event()
            .map_err(|e| anyhow!("line {}: malformed XML: {}", line, e))?;

        match event {
            Event::Start(e) => {
                start_element(&e, line, &mut file, &mut state)?;
            }
            Event::Empty(e) => {
                start_element(&e, line, &mut file, &mut state)?;
                end_element(e.name().as_ref(), line, &mut file, &mut state)?;
            }
            Event::End(e) => {
                end_element(e.name().as_ref(), line, &mut file, &mut state)?;
            }
            Event::Text(t) => {
                if state.target.is_some() {
                    let text = t
                        .unescape()
                        .map_err(|e| anyhow!("line {}: invalid text: {}", line, e))?;
                    state.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if state.target.is_some() {
                    state.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !state.seen_root {
        bail!("missing <TS> root element");
    }

    Ok(file)
}

fn start_element(
    e: &BytesStart<'_>,
    line: usize,
    file: &mut TranslationFile,
    state: &mut ParseState,
) -> Result<()> {
    let name = e.name();
    let name = name.as_ref();

    if !state.seen_root {
        if name != b"TS" {
            bail!(
                "line {}: expected <TS> root element, found <{}>",
                line,
                String::from_utf8_lossy(name)
            );
        }
        state.seen_root = true;
        file.version = attribute(e, "version")?.unwrap_or_else(|| "2.0".to_string());
        file.language = attribute(e, "language")?;
        file.source_language = attribute(e, "sourcelanguage")?;
        return Ok(());
    }

    match name {
        b"context" => {
            state.context = Some(Context::new(String::new()));
        }
        b"name" if state.message.is_none() && state.context.is_some() => {
            begin_text(state, TextTarget::ContextName);
        }
        b"message" => {
            if state.context.is_none() {
                bail!("line {}: <message> outside of <context>", line);
            }
            state.message = Some(MessageBuilder {
                line,
                numerus: attribute(e, "numerus")?.as_deref() == Some("yes"),
                ..Default::default()
            });
        }
        b"location" => {
            if let Some(message) = state.message.as_mut() {
                let filename = attribute(e, "filename")?.unwrap_or_default();
                let line_ref = attribute(e, "line")?.as_deref().and_then(LineRef::parse);
                message.locations.push(Location {
                    filename,
                    line: line_ref,
                });
            }
        }
        b"source" => begin_text(state, TextTarget::Source),
        b"comment" if state.message.is_some() => begin_text(state, TextTarget::Comment),
        b"extracomment" => begin_text(state, TextTarget::ExtraComment),
        b"translatorcomment" => begin_text(state, TextTarget::TranslatorComment),
        b"translation" => {
            if let Some(message) = state.message.as_mut() {
                if let Some(kind) = attribute(e, "type")?.as_deref() {
                    message.kind = TranslationKind::from_attr(kind).ok_or_else(|| {
                        anyhow!("line {}: unknown translation type '{}'", line, kind)
                    })?;
                }
                let numerus = message.numerus;
                begin_text(
                    state,
                    if numerus {
                        TextTarget::Skipped
                    } else {
                        TextTarget::Translation
                    },
                );
            }
        }
        b"numerusform" => begin_text(state, TextTarget::NumerusForm),
        b"lengthvariant" if state.message.is_some() => {
            begin_text(state, TextTarget::LengthVariant);
        }
        b"byte" if state.target.is_some() => {
            if let Some(value) = attribute(e, "value")?
                && let Some(c) = decode_byte(&value)
            {
                state.text.push(c);
            }
        }
        b"oldsource" => begin_text(state, TextTarget::OldSource),
        b"oldcomment" => begin_text(state, TextTarget::OldComment),
        b"userdata" => begin_text(state, TextTarget::Userdata),
        _ if state.message.is_some() && name.starts_with(b"extra-") => {
            state.extra_name = Some(String::from_utf8_lossy(&name[6..]).into_owned());
            begin_text(state, TextTarget::Extra);
        }
        _ => {}
    }

    Ok(())
}

fn end_element(
    name: &[u8],
    line: usize,
    file: &mut TranslationFile,
    state: &mut ParseState,
) -> Result<()> {
    match name {
        b"context" => {
            if let Some(context) = state.context.take() {
                file.contexts.push(context);
            }
        }
        b"message" => {
            if let (Some(builder), Some(context)) = (state.message.take(), state.context.as_mut())
            {
                let message = builder.finish(&context.name)?;
                context.messages.push(message);
            }
        }
        b"name" | b"source" | b"comment" | b"extracomment" | b"translatorcomment"
        | b"oldsource" | b"oldcomment" | b"userdata" => {
            finish_text(state, line)?;
        }
        b"numerusform" => {
            close_form(state, line, TextTarget::NumerusForm)?;
            // Numerus forms nest inside <translation>, which stays open.
            if state.message.is_some() {
                state.target = Some(TextTarget::Skipped);
            }
        }
        b"lengthvariant" => {
            finish_text(state, line)?;
            state.target = Some(TextTarget::Skipped);
        }
        b"translation" => {
            let numerus = state.message.as_ref().is_some_and(|m| m.numerus);
            if numerus {
                state.target = None;
                state.text.clear();
            } else {
                close_form(state, line, TextTarget::Translation)?;
            }
        }
        _ if name.starts_with(b"extra-") => {
            finish_text(state, line)?;
        }
        _ => {}
    }
    Ok(())
}

/// End a `<translation>` or `<numerusform>`: either its text, or the first of
/// its `<lengthvariant>` children, becomes the form.
fn close_form(state: &mut ParseState, line: usize, target: TextTarget) -> Result<()> {
    let variant = state.message.as_mut().and_then(MessageBuilder::take_variants);
    match variant {
        Some(first) => {
            state.target = Some(target);
            state.text = first;
        }
        None if state.target != Some(target) => {
            state.target = None;
            state.text.clear();
            return Ok(());
        }
        None => {}
    }
    finish_text(state, line)
}

fn begin_text(state: &mut ParseState, target: TextTarget) {
    state.target = Some(target);
    state.text.clear();
}

fn finish_text(state: &mut ParseState, line: usize) -> Result<()> {
    let Some(target) = state.target.take() else {
        return Ok(());
    };
    let text = std::mem::take(&mut state.text);

    if target == TextTarget::ContextName {
        if let Some(context) = state.context.as_mut() {
            context.name = text;
        }
        return Ok(());
    }

    let Some(message) = state.message.as_mut() else {
        if target == TextTarget::Skipped {
            return Ok(());
        }
        bail!("line {}: text element outside of <message>", line);
    };

    match target {
        TextTarget::Source => message.source = Some(text),
        TextTarget::Comment => message.comment = Some(text),
        TextTarget::ExtraComment => message.extra_comment = Some(text),
        TextTarget::TranslatorComment => message.translator_comment = Some(text),
        TextTarget::Translation => message.single = text,
        TextTarget::NumerusForm => message.forms.push(text),
        TextTarget::LengthVariant => message.pending_variants.push(text),
        TextTarget::OldSource => message.old_source = Some(text),
        TextTarget::OldComment => message.old_comment = Some(text),
        TextTarget::Userdata => message.userdata = Some(text),
        TextTarget::Extra => {
            let name = state.extra_name.take().unwrap_or_default();
            message.extras.push((name, text));
        }
        TextTarget::ContextName | TextTarget::Skipped => {}
    }
    Ok(())
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Decode the value of a `<byte value="..."/>` escape: `x1b` is hex, `27` decimal.
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
