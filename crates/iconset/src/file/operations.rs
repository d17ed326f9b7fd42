//! Convenience functions for the file operations a generation run needs.
//!
//! Every function attaches the offending path to its error.

use std::fs;
use std::path::Path;

use super::error::{FileError, FileResult};

/// Reads the entire contents of a file as bytes.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_bytes(path: impl AsRef<Path>) -> FileResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| FileError::from_io(e, path))
}

/// Reads the entire contents of a file as a string.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> FileResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FileError::from_io(e, path))
}

/// Writes bytes to a file, creating it if it doesn't exist.
///
/// If the file already exists, its contents are replaced.
pub fn write_bytes(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref()).map_err(|e| FileError::from_io(e, path))
}

/// Writes a string to a file, creating it if it doesn't exist.
///
/// If the file already exists, its contents are replaced.
pub fn write_text(path: impl AsRef<Path>, contents: impl AsRef<str>) -> FileResult<()> {
    write_bytes(path, contents.as_ref().as_bytes())
}

/// Copies a file, returning the number of bytes copied.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FileResult<u64> {
    let from = from.as_ref();
    let to = to.as_ref();
    fs::copy(from, to).map_err(|e| FileError::from_io(e, to))
}

/// Creates a directory and all of its missing parents.
///
/// Succeeds if the directory already exists.
pub fn create_dir_all(path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| FileError::from_io(e, path))
}

/// Returns true if `path` exists and is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_bytes(&path, [0u8, 1, 2]).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), vec![0, 1, 2]);
        assert!(is_file(&path));
    }

    #[test]
    fn test_write_text_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "first").unwrap();
        write_text(&path, "second").unwrap();
        assert_eq!(read_text(&path).unwrap(), "second");
    }

    #[test]
    fn test_create_dir_all_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_copy_file() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("from.svg");
        let to = dir.path().join("to.svg");

        write_text(&from, "<svg/>").unwrap();
        assert_eq!(copy_file(&from, &to).unwrap(), 6);
        assert_eq!(read_text(&to).unwrap(), "<svg/>");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_bytes(dir.path().join("nope")).unwrap_err();
        assert!(err.is_not_found());
    }
}
