//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes configuration, file listing, checks and lookups to AI assistants
//! over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Synchronous scan, pagination and translate helpers
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result DTOs

mod helpers;
mod server;
pub mod types;

pub use server::{TsglotMcpServer, run_server};
