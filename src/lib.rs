//! tsglot - Qt Linguist translation tables for the Danbooru GUI
//!
//! tsglot reads and writes Qt Linguist `.ts` files, looks up translated
//! strings with `%`-placeholder substitution, and checks translation tables
//! for problems such as broken placeholders, duplicate messages, and
//! untranslated entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`check`, `fmt`, `tr`, `init`, `serve`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Data model, `.ts` parser and writer, catalogs and locale resolution
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Validation rules run over parsed translation files
//! - `utils`: Shared utility functions
//!
//! ## Example
//!
//! ```
//! use tsglot::core::{
//!     catalog::{Catalog, LoadOptions},
//!     parsers::ts::parse_ts_str,
//!     placeholder::Arg,
//! };
//!
//! let xml = r#"<?xml version="1.0" encoding="utf-8"?>
//! <!DOCTYPE TS>
//! <TS version="2.0" language="es">
//! <context>
//!     <name>DanbooruGUI</name>
//!     <message>
//!         <source>Found %i images</source>
//!         <translation>Se encontraron %i imágenes</translation>
//!     </message>
//! </context>
//! </TS>
//! "#;
//!
//! let file = parse_ts_str(xml, "danbooru_gui-es.ts").unwrap();
//! let catalog = Catalog::from_file(&file, &LoadOptions::default());
//! assert_eq!(
//!     catalog.translate("DanbooruGUI", "Found %i images", &[Arg::Int(12)]),
//!     "Se encontraron 12 imágenes"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
