//! File access for the two phases of a rewrite
//!
//! The input is always read completely before the output is touched, so an
//! input failure never creates or truncates the output file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::core::error::RewriteError;

/// Read the whole input file as strict UTF-8 text.
pub fn read_input(path: &Path) -> Result<String, RewriteError> {
    let bytes = fs::read(path).map_err(|source| RewriteError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| RewriteError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) the output file and wrap it in a buffered writer.
pub fn open_output(path: &Path) -> Result<BufWriter<File>, RewriteError> {
    let file = File::create(path).map_err(|source| RewriteError::OutputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
