use std::fs;
use std::path::{Path, PathBuf};

use crate::GeneratedFile;
use crate::error::WriteError;

/// Write `text` to `output_root/relative_path`, creating missing directories.
///
/// Existing files are overwritten. Returns the full path written.
pub fn write_file(
    text: &str,
    relative_path: &str,
    output_root: &Path,
) -> Result<PathBuf, WriteError> {
    let path = output_root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, text).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(path)
}

/// Write generated files in order, stopping at the first failure.
pub fn write_files(
    files: &[GeneratedFile],
    output_root: &Path,
) -> Result<Vec<PathBuf>, WriteError> {
    files
        .iter()
        .map(|file| write_file(&file.content, &file.path, output_root))
        .collect()
}
