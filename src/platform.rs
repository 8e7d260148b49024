//! Environment integration
//!
//! The two platform-facing capabilities the generator needs: obtaining an
//! input path from the user and presenting the finished artifact. Keeping
//! them here leaves the load/aggregate/render core free of platform
//! concerns.

use anyhow::{bail, Context, Result};
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Ask the user for the portfolio spreadsheet path on the console.
///
/// Used when no input path is given on the command line. The path must
/// name an existing file.
pub fn prompt_for_input_path() -> Result<PathBuf> {
    println!("Please enter the full path to the portfolio Excel file.");

    let mut editor = DefaultEditor::new().context("Failed to initialize console input")?;
    let line = editor.readline("Excel file path: ")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("No input file provided");
    }

    let path = PathBuf::from(trimmed);
    if !path.is_file() {
        bail!("Could not find file: {}", path.display());
    }

    Ok(path)
}

/// Open the generated dashboard in the platform's default viewer.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Dashboard file not found: {}", path.display()))?;

    let mut command = viewer_command(&absolute);
    debug!("Launching viewer: {:?}", command);

    let status = command
        .status()
        .with_context(|| format!("Failed to launch viewer for {}", absolute.display()))?;

    if !status.success() {
        bail!("Viewer exited with status {}", status);
    }

    Ok(())
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
