use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("project name '{name}' would leave the template placeholder '{placeholder}' behind")]
    NameContainsPlaceholder { name: String, placeholder: String },

    #[error("unknown template '{name}' (available: {available})")]
    UnknownTemplate { name: String, available: String },

    #[error("failed to read template at {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("destination {path} already exists")]
    DestinationExists { path: PathBuf },

    #[error("failed to write {path}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to substitute placeholder in {path}")]
    Substitution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{command}`")]
    InstallSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}")]
    InstallFailed { command: String, status: ExitStatus },
}

impl ScaffoldError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DestinationWrite { path: path.into(), source }
    }

    pub(crate) fn substitution(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Substitution { path: path.into(), source }
    }
}
