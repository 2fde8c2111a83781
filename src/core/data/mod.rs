//! Core data types shared by the parser, writer, catalog and rules.
//!
//! ## Module Structure
//!
//! - `message`: Diagnostic positions inside `.ts` files (MessageLocation, MessageContext)
//! - `translation`: The translation-file model (TranslationFile, Context, Message, ...)

pub mod message;
pub mod translation;

pub use message::{MessageContext, MessageLocation};
pub use translation::{
    Context, LineRef, Location, Message, Translation, TranslationFile, TranslationKind,
    TranslationValue,
};
