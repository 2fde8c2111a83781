use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::args::TrCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, TranslateSummary},
};

use crate::core::{
    catalog::{Catalog, translate_or_source},
    context::{merged_config, translations_root},
    loader::{load_catalog_file, resolve},
    placeholder::Arg,
};

/// Translate one source string.
///
/// With `--file` the catalog is read from that file. Otherwise the catalog
/// named by `--name` (or config `catalogName`) is resolved for `--locale`
/// under the translations root. When no file exists for the locale, the
/// source text itself is rendered, as the application would.
pub fn tr(cmd: TrCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = merged_config(Path::new("."), &args.common)?;
    let options = config.load_options();

    let catalog = match (&args.file, &args.locale) {
        (Some(file), _) => Some(load_catalog_file(file, &options)?),
        (None, Some(locale)) => {
            let Some(name) = args.name.as_ref().or(config.catalog_name.as_ref()) else {
                bail!("No catalog name: pass --name or set 'catalogName' in the config file");
            };
            let search_paths = vec![translations_root(Path::new("."), &config)];
            match resolve(name, locale, &search_paths) {
                Some(path) => Some(load_catalog_file(&path, &options)?),
                None => {
                    if args.common.verbose {
                        eprintln!(
                            "{} No translation file for '{}' in locale '{}', using source text",
                            "warning:".bold().yellow(),
                            name,
                            locale
                        );
                    }
                    None
                }
            }
        }
        (None, None) => bail!("No translation source: pass --file or --locale (or set LANG)"),
    };

    let arguments: Vec<Arg> = args.args.iter().map(|a| Arg::parse_lossy(a)).collect();
    let summary = translate(
        catalog.as_ref(),
        &args.context,
        &args.source,
        args.count,
        &arguments,
    );

    Ok(finish(
        CommandSummary::Translate(summary),
        Vec::new(),
        0,
        true,
        None,
    ))
}

fn translate(
    catalog: Option<&Catalog>,
    context: &str,
    source: &str,
    count: Option<i64>,
    args: &[Arg],
) -> TranslateSummary {
    let (text, translated) = translate_or_source(catalog, context, source, count, args);
    TranslateSummary { text, translated }
}
