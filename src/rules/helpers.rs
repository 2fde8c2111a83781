//! Helper functions for rule implementations.
//!
//! - `message_context`: builds the `MessageContext` every message issue carries
//! - `live_messages`: iterates the messages a rule should look at
//! - `collect_per_file`: runs a per-file rule over all files in parallel

use rayon::prelude::*;

use crate::core::{Message, MessageContext, MessageLocation, TranslationFile};

/// Build the report context for `message` in `context_name` of `file`.
pub fn message_context(
    file: &TranslationFile,
    context_name: &str,
    message: &Message,
) -> MessageContext {
    MessageContext::new(
        MessageLocation::with_line(&file.file_path, message.line),
        context_name,
        &message.source,
        message.translation.display_text(),
    )
}

/// Messages that are still in use: obsolete and vanished entries are skipped.
pub fn live_messages(file: &TranslationFile) -> impl Iterator<Item = (&str, &Message)> {
    file.messages()
        .filter(|(_, message)| !message.translation.kind.is_retired())
}

/// Apply `check` to every file in parallel and flatten the results, keeping
/// file order.
pub fn collect_per_file<T, F>(files: &[TranslationFile], check: F) -> Vec<T>
where
    T: Send,
    F: Fn(&TranslationFile) -> Vec<T> + Send + Sync,
{
    files.par_iter().flat_map_iter(check).collect()
}
