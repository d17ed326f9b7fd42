//! File-system access for a generation run.
//!
//! Thin wrappers over `std::fs` that attach the path to every error, so a
//! failed write reports which artifact it was writing.

mod error;
mod operations;

pub use error::{FileError, FileErrorKind, FileResult};
pub use operations::{copy_file, create_dir_all, is_file, read_bytes, read_text, write_bytes, write_text};
