//! CLI arguments and manifest resolution for the plugin packager.
//!
//! The manifest is the project's `composer.json`; build parameters live
//! in its `wp-build-config` section. Resolution decodes that section into
//! a typed [`BuildConfig`], with one named error (and one exit code) per
//! missing required field.

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::exclude::ExclusionSet;

/// Manifest file name, looked up in the working directory
pub const MANIFEST_FILE: &str = "composer.json";

/// Manifest section holding the build parameters
pub const BUILD_SECTION: &str = "wp-build-config";

/// Build-time packaging tool for WordPress plugins
#[derive(Parser, Debug)]
#[command(name = "wp-build")]
#[command(version)]
#[command(about = "Packages a WordPress plugin into a distributable build folder")]
pub struct Cli {
    /// Output directory, overriding the manifest's `output` value
    pub output: Option<PathBuf>,
}

/// Raw `wp-build-config` section as it appears in the manifest.
/// Every field is optional here; presence is enforced in [`resolve`].
#[derive(Debug, Deserialize)]
struct BuildSection {
    entry: Option<String>,
    output: Option<String>,
    files: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

/// Validated build parameters, immutable for the duration of one run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source root files are copied from
    pub entry: PathBuf,
    /// Destination root the package is assembled in
    pub output: PathBuf,
    /// Relative paths to copy, in manifest order
    pub files: Vec<String>,
    /// Suffix patterns to skip
    pub exclude: ExclusionSet,
}

/// Load and validate the build config from `manifest_path`, applying the
/// CLI output override if one was given.
///
/// An `entry` of `"/"` is replaced by the process's current working
/// directory. A manifest that fails to parse is a hard error rather than
/// a warning, so a broken manifest can never half-run a build.
pub fn resolve(
    manifest_path: &Path,
    output_override: Option<PathBuf>,
) -> Result<BuildConfig, BuildError> {
    if !manifest_path.exists() {
        return Err(BuildError::ManifestMissing {
            path: manifest_path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(manifest_path)?;
    let manifest: Value =
        serde_json::from_str(&raw).map_err(|e| BuildError::ManifestParse {
            path: manifest_path.to_path_buf(),
            source: e,
        })?;

    if manifest.is_null() {
        return Err(BuildError::ManifestNull {
            path: manifest_path.to_path_buf(),
        });
    }

    let section = manifest
        .get(BUILD_SECTION)
        .ok_or_else(|| BuildError::SectionMissing {
            path: manifest_path.to_path_buf(),
            section: BUILD_SECTION,
        })?;

    let section: BuildSection =
        serde_json::from_value(section.clone()).map_err(|e| BuildError::ManifestParse {
            path: manifest_path.to_path_buf(),
            source: e,
        })?;

    let entry = section.entry.ok_or(BuildError::EntryMissing)?;
    let entry = if entry == "/" {
        env::current_dir()?
    } else {
        PathBuf::from(entry)
    };

    let output = match output_override {
        Some(path) => path,
        None => section
            .output
            .map(PathBuf::from)
            .ok_or(BuildError::OutputMissing)?,
    };

    let files = section.files.ok_or(BuildError::FilesMissing)?;
    let exclude = ExclusionSet::new(section.exclude.unwrap_or_default());

    log::debug!(
        "resolved build config: entry={}, output={}, {} file(s)",
        entry.display(),
        output.display(),
        files.len()
    );

    Ok(BuildConfig {
        entry,
        output,
        files,
        exclude,
    })
}
