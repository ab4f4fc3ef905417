//! File writing with conflict policies.

use std::path::{Path, PathBuf};

use console::style;
use dialoguer::Confirm;
use eyre::{Context, Result};

use crate::logger;

/// How to handle an existing file at the target path.
///
/// `Prompt` is the default when the user selects neither `--force` nor
/// `--skip`: the writer asks before overwriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite unconditionally
    Force,
    /// Leave the existing file untouched
    Skip,
    /// Ask the user whether to overwrite
    #[default]
    Prompt,
}

/// Options governing one write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub mode: WriteMode,
    pub dry_run: bool,
}

/// Outcome of a write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    /// File was written to the given path
    Written(PathBuf),
    /// File was left untouched
    Skipped(PathBuf),
    /// Dry run: content was printed, nothing touched
    DryRun,
}

/// Write `content` to `filename` inside `output_dir` according to the
/// write options.
///
/// On dry run the content is printed and the filesystem is never touched.
/// Otherwise the output directory is created if absent and a relative
/// `output_dir` is joined against the current working directory.
pub fn write_file(
    output_dir: &Path,
    filename: &str,
    content: &str,
    options: &WriteOptions,
) -> Result<WriteStatus> {
    if options.dry_run {
        logger::info("Dry run:");
        logger::info(style(format!("File: {}", filename)).cyan());
        logger::info(content);
        return Ok(WriteStatus::DryRun);
    }

    let dir = absolute_dir(output_dir)?;
    std::fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(filename);
    if path.exists() && should_skip(&path, options.mode)? {
        logger::info(style(format!("Skipping generation for {}", path.display())).magenta());
        return Ok(WriteStatus::Skipped(path));
    }

    std::fs::write(&path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    logger::info(style(format!("File written to {}", path.display())).green());

    Ok(WriteStatus::Written(path))
}

fn absolute_dir(output_dir: &Path) -> Result<PathBuf> {
    if output_dir.is_absolute() {
        Ok(output_dir.to_path_buf())
    } else {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        Ok(cwd.join(output_dir))
    }
}

/// Decide whether an existing file should be left alone. Only called when
/// the target already exists; `Skip` never prompts.
fn should_skip(path: &Path, mode: WriteMode) -> Result<bool> {
    match mode {
        WriteMode::Force => Ok(false),
        WriteMode::Skip => Ok(true),
        WriteMode::Prompt => {
            let overwrite = Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", path.display()))
                .default(true)
                .interact()
                .wrap_err("Failed to read overwrite confirmation")?;
            Ok(!overwrite)
        }
    }
}
