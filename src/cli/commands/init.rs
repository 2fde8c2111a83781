use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{
    helper::finish,
    {CommandResult, CommandSummary, InitSummary},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.tsglotrc.json` into the current directory.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;

    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        0,
        true,
        None,
    ))
}
