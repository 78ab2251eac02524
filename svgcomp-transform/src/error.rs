//! Error types for the transformation pipeline

use std::fmt;

/// Errors that abort the transformation of a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The source text has no `<svg>...</svg>` element
    NoSvgRoot,
    /// The root `<svg` opening tag could not be located when injecting props
    RootTagNotFound,
    /// A component name could not be derived (empty or non UTF-8 file stem)
    InvalidComponentName(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NoSvgRoot => write!(f, "no valid svg root element found"),
            TransformError::RootTagNotFound => {
                write!(f, "could not locate the root svg opening tag to inject props")
            }
            TransformError::InvalidComponentName(source) => {
                write!(f, "cannot derive a component name from '{}'", source)
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Result alias used by every stage
pub type TransformResult<T> = Result<T, TransformError>;
