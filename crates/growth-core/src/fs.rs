//! Filesystem helpers for atomic file replacement.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Build a hidden temp path next to `destination`, unique per process and call.
pub fn temp_path_for(destination: &Path) -> io::Result<PathBuf> {
    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    let name = destination
        .file_name()
        .map(|value| value.to_string_lossy().to_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Destination has no file name: {}", destination.display()),
            )
        })?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("System time error: {}", e)))?
        .as_nanos();
    Ok(parent.join(format!(".{}.{}.{}.tmp", name, std::process::id(), nanos)))
}

/// Move `temp_path` over `destination`.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination
/// already exists. In that case the destination is removed and the rename is
/// retried once. If the rename still fails, the temp file is removed.
pub fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Create `temp_path` (which must not exist), write `contents`, and sync it.
///
/// The data is on disk before this returns, so a later rename can never
/// publish an empty or partial file.
pub fn write_synced(temp_path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Write `contents` to `destination` through a synced temp file and an
/// atomic rename.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(destination)?;
    if let Err(err) = write_synced(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    replace_file(&temp_path, destination)
}
