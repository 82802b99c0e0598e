//! CLI-level errors (wraps scene errors)

use thiserror::Error;

use crate::errors::SceneError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Scene(#[from] SceneError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Scene(e) => match e {
                SceneError::FileNotFound(_) | SceneError::PathResolution { .. } => {
                    crate::exitcode::NOINPUT
                }
                SceneError::Io(_) => crate::exitcode::IOERR,
                SceneError::InvalidFormat { .. }
                | SceneError::UnsupportedVersion { .. }
                | SceneError::EmptyModel(_)
                | SceneError::MultipleRoots(_)
                | SceneError::UnknownFormat(_) => crate::exitcode::DATAERR,
                SceneError::Config { .. } => crate::exitcode::CONFIG,
                SceneError::InternalError(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
