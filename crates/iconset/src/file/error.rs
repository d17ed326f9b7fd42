//! Error types for file operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for file operations.
#[derive(Debug)]
pub struct FileError {
    /// The kind of error that occurred.
    kind: FileErrorKind,
    /// The path involved in the error.
    path: PathBuf,
    /// The underlying source error, if any.
    source: Option<io::Error>,
}

/// What went wrong with a file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// The source or config file is missing.
    NotFound,
    /// The output directory or a file in it is not writable.
    PermissionDenied,
    /// A directory sits where an output file should go.
    IsDirectory,
    /// The disk filled up mid-run.
    NoSpace,
    /// The contents were rejected, e.g. a malformed config file.
    InvalidData,
    /// Anything else reported by the OS.
    Other,
}

impl FileErrorKind {
    fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied
            }
            io::ErrorKind::IsADirectory => Self::IsDirectory,
            io::ErrorKind::StorageFull => Self::NoSpace,
            io::ErrorKind::InvalidData => Self::InvalidData,
            _ => Self::Other,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::NotFound => "no such file",
            Self::PermissionDenied => "not permitted",
            Self::IsDirectory => "path is a directory",
            Self::NoSpace => "disk full",
            Self::InvalidData => "unreadable contents",
            Self::Other => "I/O failure",
        }
    }
}

impl FileError {
    /// Creates a file error from an I/O error and path.
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileErrorKind::from_io(err.kind()),
            path: path.into(),
            source: Some(err),
        }
    }

    /// Creates an "invalid data" error for a file whose contents were rejected.
    pub fn invalid_data(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            kind: FileErrorKind::InvalidData,
            path: path.into(),
            source: Some(io::Error::new(
                io::ErrorKind::InvalidData,
                message.to_string(),
            )),
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> FileErrorKind {
        self.kind
    }

    /// Returns the path involved in the error.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.as_ref()
    }

    /// Returns true if this error indicates the file was not found.
    pub fn is_not_found(&self) -> bool {
        self.kind == FileErrorKind::NotFound
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.path.display())?;
        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }
        Ok(())
    }
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|err| err as _)
    }
}

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;
