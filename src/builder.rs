//! Build pipeline orchestration: prepare the output folder, run the copy
//! engine, and strip known development artifacts afterwards.

use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::copier::copy_tree;
use crate::error::BuildError;

/// Ensure the output directory exists. Idempotent: creates the directory
/// tree if absent, otherwise leaves it alone. One line is printed either
/// way so a build log shows which case occurred.
pub fn ensure_output_dir(path: &Path) -> Result<(), BuildError> {
    if path.is_dir() {
        println!("Build folder {} already present", path.display());
        return Ok(());
    }

    println!("Build folder {} does not exist, creating it", path.display());
    fs::create_dir_all(path).map_err(|e| BuildError::CreateDirFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Delete a single file if present; a missing file is a no-op.
/// Used to strip development-only artifacts from the destination after
/// a copy.
pub fn remove_if_exists(path: &Path) -> Result<(), BuildError> {
    if path.is_file() {
        fs::remove_file(path)?;
        log::debug!("removed dev artifact: {}", path.display());
    }
    Ok(())
}

/// Run one packaging pass: prepare the output folder, then copy every
/// listed path from the entry root. Returns the number of files copied.
pub fn run_build(config: &BuildConfig) -> Result<u64, BuildError> {
    ensure_output_dir(&config.output)?;
    copy_tree(&config.entry, &config.output, &config.files, &config.exclude)
}
