//! Core translation-table engine.
//!
//! ## Module Structure
//!
//! - `data`: The `.ts` file model and diagnostic positions
//! - `parsers`: `.ts` XML parsing (single file and parallel scan)
//! - `writer`: Serialization back to lupdate layout
//! - `placeholder`: printf / Qt placeholder scanning and rendering
//! - `plural`: Numerus form selection per language
//! - `catalog`: Immutable runtime lookup table
//! - `loader`: Locale-aware catalog file resolution
//! - `file_scanner`: Discovery of `.ts` files under a root
//! - `context`: `CheckContext`, the shared state for `check` and the MCP tools

pub mod catalog;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod loader;
pub mod parsers;
pub mod placeholder;
pub mod plural;
pub mod writer;

pub use context::CheckContext;
pub use data::*;
