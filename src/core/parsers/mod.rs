//! File parsers.
//!
//! - `ts`: Qt Linguist `.ts` XML parser (quick-xml streaming reader)

pub mod ts;
