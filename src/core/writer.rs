//! Serialization of translation files in lupdate layout.
//!
//! Output matches what Qt's extraction tool writes: XML declaration,
//! `<!DOCTYPE TS>`, unindented `<context>` blocks and four-space indented
//! messages. A file that already uses this layout is reproduced byte for byte.
//!
//! Message children follow lupdate's order: locations, `source`, `oldsource`,
//! `comment`, `oldcomment`, `extracomment`, `translatorcomment`,
//! `translation`, `userdata`, then `extra-*`.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::core::{Location, Message, TranslationFile, TranslationValue};

const MESSAGE_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";
const FORM_INDENT: &str = "            ";

pub fn write_ts(file: &TranslationFile) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(out, "<TS version=\"{}\"", escape(&file.version));
    if let Some(language) = &file.language {
        let _ = write!(out, " language=\"{}\"", escape(language));
    }
    if let Some(source_language) = &file.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language));
    }
    out.push_str(">\n");

    for context in &file.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "{}<name>{}</name>", MESSAGE_INDENT, escape(&context.name));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    if message.is_numerus() {
        let _ = writeln!(out, "{}<message numerus=\"yes\">", MESSAGE_INDENT);
    } else {
        let _ = writeln!(out, "{}<message>", MESSAGE_INDENT);
    }

    for location in &message.locations {
        write_location(out, location);
    }

    write_text_element(out, "source", &message.source);
    if let Some(old_source) = &message.old_source {
        write_text_element(out, "oldsource", old_source);
    }
    if let Some(comment) = &message.comment {
        write_text_element(out, "comment", comment);
    }
    if let Some(old_comment) = &message.old_comment {
        write_text_element(out, "oldcomment", old_comment);
    }
    if let Some(extra) = &message.extra_comment {
        write_text_element(out, "extracomment", extra);
    }
    if let Some(note) = &message.translator_comment {
        write_text_element(out, "translatorcomment", note);
    }

    let translation = &message.translation;
    let type_attr = match translation.kind.as_attr() {
        Some(kind) => format!(" type=\"{}\"", kind),
        None => String::new(),
    };
    match &translation.value {
        TranslationValue::Single(text) => {
            let _ = write!(out, "{}<translation{}", FIELD_INDENT, type_attr);
            write_form(out, FIELD_INDENT, text, translation.variants_of(0));
            out.push_str("</translation>\n");
        }
        TranslationValue::Numerus(forms) => {
            let _ = writeln!(out, "{}<translation{}>", FIELD_INDENT, type_attr);
            for (index, form) in forms.iter().enumerate() {
                let _ = write!(out, "{}<numerusform", FORM_INDENT);
                write_form(out, FORM_INDENT, form, translation.variants_of(index));
                out.push_str("</numerusform>\n");
            }
            let _ = writeln!(out, "{}</translation>", FIELD_INDENT);
        }
    }

    if let Some(userdata) = &message.userdata {
        write_text_element(out, "userdata", userdata);
    }
    for (name, value) in &message.extras {
        write_text_element(out, &format!("extra-{}", name), value);
    }

    let _ = writeln!(out, "{}</message>", MESSAGE_INDENT);
}

/// Finish an open `<translation` or `<numerusform` tag and write its text.
/// With shorter variants the text becomes the first `<lengthvariant>`.
fn write_form(out: &mut String, indent: &str, text: &str, shorter: &[String]) {
    if shorter.is_empty() {
        let _ = write!(out, ">{}", escape(text));
        return;
    }
    out.push_str(" variants=\"yes\">\n");
    for variant in std::iter::once(text).chain(shorter.iter().map(String::as_str)) {
        let _ = writeln!(
            out,
            "{}    <lengthvariant>{}</lengthvariant>",
            indent,
            escape(variant)
        );
    }
    out.push_str(indent);
}

fn write_location(out: &mut String, location: &Location) {
    let _ = write!(
        out,
        "{}<location filename=\"{}\"",
        FIELD_INDENT,
        escape(&location.filename)
    );
    if let Some(line) = location.line {
        let _ = write!(out, " line=\"{}\"", line);
    }
    out.push_str("/>\n");
}

fn write_text_element(out: &mut String, tag: &str, text: &str) {
    let _ = writeln!(out, "{}<{}>{}</{}>", FIELD_INDENT, tag, escape(text), tag);
}
