//! Error types for file-level processing

use std::fmt;
use std::io;
use std::path::PathBuf;
use svgcomp_transform::TransformError;

/// Errors raised while processing files. Each one is reported for a single
/// file (or for the invocation when directories are missing) and never
/// aborts the rest of a batch.
#[derive(Debug)]
pub enum DriverError {
    /// Single-file mode was started without a path
    InputNotSpecified,
    /// Single-file input does not exist
    InputNotFound(PathBuf),
    InputDirNotFound(PathBuf),
    OutputDirNotSpecified,
    OutputDirNotFound(PathBuf),
    /// The destination file already exists and is left untouched
    OutputExists(PathBuf),
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Transform {
        path: PathBuf,
        source: TransformError,
    },
    Config(config::ConfigError),
}

impl DriverError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DriverError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InputNotSpecified => write!(f, "input file not specified."),
            DriverError::InputNotFound(_) => write!(f, "input file not found."),
            DriverError::InputDirNotFound(path) => {
                write!(f, "input directory not found: {}", path.display())
            }
            DriverError::OutputDirNotSpecified => write!(f, "output directory not specified."),
            DriverError::OutputDirNotFound(path) => {
                write!(f, "output directory not found: {}", path.display())
            }
            DriverError::OutputExists(path) => {
                write!(f, "file already exists: {}", path.display())
            }
            DriverError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            DriverError::Transform { source, .. } => write!(f, "{}", source),
            DriverError::Config(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io { source, .. } => Some(source),
            DriverError::Transform { source, .. } => Some(source),
            DriverError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for DriverError {
    fn from(err: config::ConfigError) -> Self {
        DriverError::Config(err)
    }
}
