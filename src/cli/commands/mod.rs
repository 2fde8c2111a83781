pub mod check;
mod command_result;
pub mod fmt;
pub mod helper;
pub mod init;
pub mod tr;

pub use command_result::*;
