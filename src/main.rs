use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use wp_plugin_build::builder::run_build;
use wp_plugin_build::config::{self, Cli, MANIFEST_FILE};
use wp_plugin_build::error::BuildError;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            // Configuration and filesystem failures each keep their own
            // code; anything else falls back to the generic IO code.
            let code = e
                .downcast_ref::<BuildError>()
                .map(BuildError::exit_code)
                .unwrap_or(10);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = config::resolve(Path::new(MANIFEST_FILE), cli.output)?;
    let copied = run_build(&config)?;

    println!(
        "Packaged {} file(s) into {}",
        copied,
        config.output.display()
    );

    Ok(())
}
