use std::{
    borrow::BorrowMut,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod fmt;
mod init;
mod tr;

const BIN_NAME: &str = "tsglot";

/// Translation table shared with the unit tests.
pub const DANBOORU_ES: &str = include_str!("../fixtures/danbooru_gui-es.ts");

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with `translations/danbooru_gui-es.ts`.
    pub fn with_danbooru() -> Result<Self> {
        Self::with_file("translations/danbooru_gui-es.ts", DANBOORU_ES)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("TSGLOT_DISABLE_TIMING", "1"); // Disable timing for stable output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn fmt_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fmt");
        cmd
    }

    pub fn tr_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("tr");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Captured output of one CLI run.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run a command built either in place (`test.check_command().arg(..)`) or
/// bound to a local first.
pub fn run(mut cmd: impl BorrowMut<Command>) -> Result<RunOutput> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd
        .borrow_mut()
        .output()
        .context("Failed to run tsglot")?;
    Ok(RunOutput {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}
