use std::{env, path::Path, time::Instant};

use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{core::CheckContext, rules::run_checks};

/// Set to skip the "Finished in" timing line (used for stable test output).
pub const DISABLE_TIMING_ENV: &str = "TSGLOT_DISABLE_TIMING";

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let started = Instant::now();
    let args = &cmd.args;
    let ctx = CheckContext::new(Path::new("."), &args.common)?;

    let issues = run_checks(&ctx, &cmd.checks);

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files.len(),
        true,
        timing_enabled().then(|| started.elapsed()),
    ))
}

pub fn timing_enabled() -> bool {
    env::var_os(DISABLE_TIMING_ENV).is_none()
}
