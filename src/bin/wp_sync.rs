//! Standalone directory-sync variant of the packager.
//!
//! Copies a fixed set of top-level plugin entries from a source directory
//! into a destination, skipping subtrees the fingerprint comparison deems
//! unchanged, then deletes the known test scaffolding file from the
//! destination.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use wp_plugin_build::builder::{ensure_output_dir, remove_if_exists};
use wp_plugin_build::copier::sync_entry;
use wp_plugin_build::error::BuildError;

/// Top-level plugin files synced on every run
const SYNC_FILES: &[&str] = &[
    "index.php",
    "uninstall.php",
    "readme.txt",
    "aruba-hispeed-cache.php",
];

/// Top-level plugin directories synced on every run
const SYNC_DIRS: &[&str] = &["app", "languages"];

/// Test scaffolding removed from the destination after the sync
const DEV_ARTIFACT: &[&str] = &["app", "src", "Admin", "AdminClassTest.php"];

/// Local directory-sync tool for WordPress plugin builds
#[derive(Parser, Debug)]
#[command(name = "wp-sync")]
#[command(version)]
#[command(about = "Syncs a plugin source tree into a local build folder")]
struct Cli {
    /// Source directory
    dir: Option<PathBuf>,

    /// Destination directory
    dest: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let (Some(dir), Some(dest)) = (cli.dir, cli.dest) else {
        println!("Usage: wp-sync <DIR> <DEST>");
        return ExitCode::SUCCESS;
    };

    match run(&dir, &dest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<BuildError>()
                .map(BuildError::exit_code)
                .unwrap_or(10);
            ExitCode::from(code)
        }
    }
}

fn run(dir: &Path, dest: &Path) -> Result<()> {
    ensure_output_dir(dest)?;

    let mut copied = 0u64;
    for entry in SYNC_FILES.iter().chain(SYNC_DIRS.iter()) {
        copied += sync_entry(&dir.join(entry), &dest.join(entry))?;
    }

    let artifact = DEV_ARTIFACT
        .iter()
        .fold(dest.to_path_buf(), |p, part| p.join(part));
    remove_if_exists(&artifact)?;

    println!("Synced {} file(s) into {}", copied, dest.display());

    Ok(())
}
