//! Error types for the md-to-mdx library
//!
//! Every fallible operation in the crate returns [`ConvertError`]. The variants
//! fall into four broad kinds (see [`ErrorKind`]): argument syntax, path
//! resolution, I/O and front matter decoding.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Command-line tokens could not be parsed
    #[error("{message}")]
    InvalidArguments { message: String },

    /// A `source:target` adapter mapping is malformed
    #[error("Invalid adapter mapping \"{value}\". {reason}")]
    InvalidAdapterMapping { value: String, reason: String },

    /// The input path does not exist or cannot be inspected
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A single-file conversion was asked for a file without the `.md` extension
    #[error("Input file must have .md extension: {path}")]
    InvalidInput { path: PathBuf },

    /// The input path is neither a regular file nor a directory
    #[error("Unsupported path type: {path}")]
    UnsupportedPathType { path: PathBuf },

    /// Front matter parsing errors
    #[error("Invalid front matter in {path}: {reason}")]
    InvalidFrontMatter { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Error traversing directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Metadata serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Create a new invalid arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a new invalid adapter mapping error
    pub fn invalid_adapter_mapping(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAdapterMapping {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a new invalid input error
    pub fn invalid_input(path: impl Into<PathBuf>) -> Self {
        Self::InvalidInput { path: path.into() }
    }

    /// Create a new unsupported path type error
    pub fn unsupported_path_type(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedPathType { path: path.into() }
    }

    /// Create a new invalid front matter error
    pub fn invalid_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Get the broad category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments { .. } | Self::InvalidAdapterMapping { .. } => {
                ErrorKind::Arguments
            }
            Self::PathNotFound { .. }
            | Self::InvalidInput { .. }
            | Self::UnsupportedPathType { .. } => ErrorKind::Path,
            Self::Read { .. } | Self::Write { .. } | Self::Walk(_) => ErrorKind::Io,
            Self::InvalidFrontMatter { .. } | Self::Json(_) => ErrorKind::FrontMatter,
        }
    }
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command-line input; nothing was converted
    Arguments,
    /// The input path cannot be converted as requested
    Path,
    /// Reading, writing or traversing the filesystem failed
    Io,
    /// The front matter block could not be turned into metadata
    FrontMatter,
}
