//! File system utilities.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path`, creating missing parent directories.
///
/// The content goes to a temp file next to the target first and is then
/// renamed into place, so an interrupted write never leaves a truncated
/// file behind.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the temp file
/// cannot be written or renamed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
