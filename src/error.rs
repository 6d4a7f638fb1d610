use std::path::PathBuf;
use thiserror::Error;

/// Build error types
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    #[error("manifest {path} parsed to null")]
    ManifestNull { path: PathBuf },

    #[error("manifest {path} has no '{section}' section")]
    SectionMissing { path: PathBuf, section: &'static str },

    #[error("build config has no 'entry' key")]
    EntryMissing,

    #[error("build config has no 'files' list")]
    FilesMissing,

    #[error("failed to parse manifest {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("build config has no 'output' path and none was given on the command line")]
    OutputMissing,

    #[error("no space left on device for {path}")]
    DiskFull { path: PathBuf },

    #[error("failed to create directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {src} to {dst}")]
    CopyFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Process exit code for this error. Each configuration failure keeps
    /// its own code so callers can script against them.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::ManifestMissing { .. } => 1,
            BuildError::ManifestNull { .. } => 2,
            BuildError::SectionMissing { .. } => 3,
            BuildError::EntryMissing => 4,
            BuildError::FilesMissing => 5,
            BuildError::ManifestParse { .. } => 6,
            BuildError::OutputMissing => 7,
            BuildError::DiskFull { .. }
            | BuildError::CreateDirFailed { .. }
            | BuildError::CopyFailed { .. }
            | BuildError::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_config_condition() {
        let errors = [
            BuildError::ManifestMissing {
                path: PathBuf::from("composer.json"),
            },
            BuildError::ManifestNull {
                path: PathBuf::from("composer.json"),
            },
            BuildError::SectionMissing {
                path: PathBuf::from("composer.json"),
                section: "wp-build-config",
            },
            BuildError::EntryMissing,
            BuildError::FilesMissing,
            BuildError::OutputMissing,
        ];

        let mut codes: Vec<u8> = errors.iter().map(BuildError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_io_errors_share_one_code() {
        let io = BuildError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "read failed",
        ));
        let disk = BuildError::DiskFull {
            path: PathBuf::from("/dev/full"),
        };
        assert_eq!(io.exit_code(), disk.exit_code());
    }
}
