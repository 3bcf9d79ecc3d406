//! Reading and writing `plan.json` on disk.
//!
//! This is the only module besides the [`crate::planner`] that touches the
//! file system. Writes go through a temporary file in the target directory
//! followed by a rename, so an interrupted save never leaves a truncated
//! document behind.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::debug;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::{
    error::{PlanError, Result},
    models::Plan,
};

/// Reads and parses a document without validating it.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| PlanError::file_system(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads a plan through the load-time hook.
///
/// # Errors
///
/// * `PlanError::FileSystem` - When the file cannot be read
/// * `PlanError::Serialization` - When the file is not valid JSON
/// * `PlanError::Structural` / `PlanError::Validation` - When the document
///   is not a valid plan
pub fn read_plan(path: &Path) -> Result<Plan> {
    debug!("Reading plan from {}", path.display());
    Plan::from_value(read_document(path)?)
}

/// Writes a plan through the save-time hook: derived fields are recomputed
/// and `meta.updated_at` is set to `now`. Output is pretty-printed with a
/// trailing newline.
pub fn write_plan(path: &Path, plan: &Plan, now: Timestamp) -> Result<()> {
    let document = plan.to_document(now)?;
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    atomic_write(path, text.as_bytes())?;
    debug!("Wrote plan to {}", path.display());
    Ok(())
}

/// Atomically replaces `path` with `data`, creating parent directories.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| PlanError::file_system(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PlanError::file_system(dir, e))?;
    tmp.write_all(data)
        .map_err(|e| PlanError::file_system(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| PlanError::file_system(path, e.error))?;
    Ok(())
}

/// Path of backup number `n` of `file_name` inside `dir`.
pub fn backup_path(dir: &Path, file_name: &str, n: usize) -> PathBuf {
    dir.join(format!("{file_name}.{n}"))
}

/// Shifts `<file_name>.N` to `<file_name>.N+1` for every existing backup,
/// deleting whatever would end up past `max_backups`. Slot `1` is free
/// afterwards.
pub fn rotate_backups(dir: &Path, file_name: &str, max_backups: usize) -> Result<()> {
    if max_backups == 0 {
        return Ok(());
    }

    let oldest = backup_path(dir, file_name, max_backups);
    if oldest.exists() {
        fs::remove_file(&oldest).map_err(|e| PlanError::file_system(&oldest, e))?;
    }

    for n in (1..max_backups).rev() {
        let from = backup_path(dir, file_name, n);
        if from.exists() {
            let to = backup_path(dir, file_name, n + 1);
            fs::rename(&from, &to).map_err(|e| PlanError::file_system(&from, e))?;
        }
    }
    Ok(())
}

/// Copies the current plan file into `dir` as backup number `1` after
/// rotating older backups. Returns the backup's path, or `None` when
/// backups are disabled.
pub fn backup_plan(path: &Path, dir: &Path, max_backups: usize) -> Result<Option<PathBuf>> {
    if max_backups == 0 {
        return Ok(None);
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("plan.json");

    fs::create_dir_all(dir).map_err(|e| PlanError::file_system(dir, e))?;
    rotate_backups(dir, file_name, max_backups)?;

    let target = backup_path(dir, file_name, 1);
    fs::copy(path, &target).map_err(|e| PlanError::file_system(path, e))?;
    debug!("Backed up {} to {}", path.display(), target.display());
    Ok(Some(target))
}
