use crate::{
    errors::{FileOperation, IoError},
    plan::Plan,
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error while scaffolding")]
    #[diagnostic(code(rangka::scaffold::io))]
    Io(#[from] IoError),
}

/// Outcome of one idempotent-apply step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Created,
    AlreadyExists,
}

/// Per-entry outcomes of one scaffolding run.
///
/// Paths are relative to the base directory, in the order they were
/// processed; the base directory itself is tracked separately.
#[derive(Debug)]
pub struct Report {
    pub base: EntryStatus,
    pub directories: Vec<(PathBuf, EntryStatus)>,
    pub files: Vec<(PathBuf, EntryStatus)>,
}

impl Report {
    pub fn created_directories(&self) -> usize {
        count_created(&self.directories)
    }

    pub fn created_files(&self) -> usize {
        count_created(&self.files)
    }
}

fn count_created(entries: &[(PathBuf, EntryStatus)]) -> usize {
    entries
        .iter()
        .filter(|(_, status)| *status == EntryStatus::Created)
        .count()
}

/// Applies the plan under `root`: the root itself first, then every
/// directory, then every file, in plan order.
///
/// Re-running over a partially or fully scaffolded tree only fills in the
/// missing entries; nothing already on disk is touched. The first I/O
/// failure aborts the remaining sequence, leaving prior entries in place
/// for the next run to pick up from.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if any directory or file creation fails due
/// to I/O issues.
pub fn apply(plan: &Plan, root: &Path) -> Result<Report, ScaffoldError> {
    let base = ensure_directory(root)?;
    announce(base, root);

    let mut directories = Vec::new();
    for entry in plan.directories() {
        let path = root.join(&entry.destination);

        let status = ensure_directory(&path)?;
        announce(status, &entry.destination);

        directories.push((entry.destination.clone(), status));
    }

    let mut files = Vec::new();
    for entry in plan.files() {
        let path = root.join(&entry.destination);

        let status = ensure_file(&path, entry.content.unwrap_or_default())?;
        announce(status, &entry.destination);

        files.push((entry.destination.clone(), status));
    }

    Ok(Report {
        base,
        directories,
        files,
    })
}

/// Creates all directories in the specified path if they do not exist.
///
/// Pre-existing directories are left untouched and reported as such.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if directory creation fails due to I/O issues.
fn ensure_directory(path: &Path) -> Result<EntryStatus, ScaffoldError> {
    if path.exists() {
        log::debug!("directory already present: {}", path.display());

        return Ok(EntryStatus::AlreadyExists);
    }

    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(EntryStatus::Created)
}

/// Writes a file with the provided contents to the specified path, unless
/// the file already exists.
///
/// An existing file is never opened for writing, so custom edits survive
/// re-runs.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if writing to the file fails due to I/O issues.
fn ensure_file(path: &Path, contents: &str) -> Result<EntryStatus, ScaffoldError> {
    if path.exists() {
        log::debug!("file already present: {}", path.display());

        return Ok(EntryStatus::AlreadyExists);
    }

    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    Ok(EntryStatus::Created)
}

fn announce(status: EntryStatus, path: &Path) {
    let msg = match status {
        EntryStatus::Created => format!("{} {}", "create".green(), path.display()),
        EntryStatus::AlreadyExists => format!("{} {}", "exists".yellow(), path.display()),
    };

    println!("{}", &msg);
}
