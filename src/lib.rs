//! # WP Plugin Build
//!
//! Build-time packaging tool for WordPress plugins.
//!
//! Reads the `wp-build-config` section of a project's `composer.json`,
//! prepares the output folder, and copies the declared files and
//! directories into a distributable package layout, honoring suffix-based
//! exclusion rules along the way.
//!
//! ## Features
//!
//! - Typed manifest decoding with a distinct exit code per failure
//! - Recursive copying with exclusion filtering at every level
//! - XOR-folded directory fingerprints for change detection
//! - Standalone sync variant with post-copy cleanup of dev artifacts
//!
//! ## Usage
//!
//! ```ignore
//! use wp_plugin_build::builder::run_build;
//! use wp_plugin_build::config;
//!
//! let cfg = config::resolve(Path::new("composer.json"), None)?;
//! let copied = run_build(&cfg)?;
//! ```

/// Build pipeline orchestration
pub mod builder;

/// CLI arguments and manifest resolution
pub mod config;

/// Recursive copy engine with exclusion filtering
pub mod copier;

/// Error types for packaging operations
pub mod error;

/// Suffix-based exclusion matching
pub mod exclude;

/// Directory fingerprints for change detection
pub mod fingerprint;
