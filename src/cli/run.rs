use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, fmt::fmt, init::init, tr::tr},
};
use anyhow::Result;

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with issue counts and exit behavior
/// - `Err` if the command fails (e.g., invalid config, unreadable file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Tr(cmd)) => tr(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
