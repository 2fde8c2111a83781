use std::{fs, path::Path, time::Instant};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::FmtCommand;
use super::{
    check::timing_enabled,
    helper::finish,
    {CommandResult, CommandSummary, FmtSummary},
};

use crate::{
    core::{CheckContext, TranslationFile, writer::write_ts},
    issues::Issue,
};

/// Re-serialize every translation file in lupdate layout.
///
/// Dry-run by default: only lists the files whose layout would change.
pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let started = Instant::now();
    let args = &cmd.args;
    let ctx = CheckContext::new(Path::new("."), &args.common)?;

    let formatted: Vec<(&TranslationFile, String, bool)> = ctx
        .translation_files()
        .par_iter()
        .map(|file| -> Result<_> {
            let original = fs::read_to_string(&file.file_path)
                .with_context(|| format!("Failed to read translation file: {}", file.file_path))?;
            let canonical = write_ts(file);
            let changed = canonical != original;
            Ok((file, canonical, changed))
        })
        .collect::<Result<_>>()?;

    let mut changed_files = Vec::new();
    for (file, canonical, changed) in formatted {
        if !changed {
            continue;
        }
        if args.apply {
            fs::write(&file.file_path, canonical)
                .with_context(|| format!("Failed to write translation file: {}", file.file_path))?;
        }
        changed_files.push(file.file_path.clone());
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed_files,
            is_apply: args.apply,
        }),
        issues,
        ctx.files.len(),
        true,
        timing_enabled().then(|| started.elapsed()),
    ))
}
