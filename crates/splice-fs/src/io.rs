//! Whole-file reads and atomic writes

use crate::{Error, Result, TargetPath};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read the full text of the target.
pub fn read_text(path: &TargetPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "read target");
    Ok(content)
}

/// Replace the file's content in one step.
///
/// Symlinks are followed: the file they point at is rewritten and the link
/// stays a link. The bytes go to a temp file next to that resolved file
/// under an exclusive lock, are synced, take over the existing file's
/// permissions, and are then renamed over it. Readers see either the old
/// content or the new content, never a truncated file.
pub fn write_atomic(path: &TargetPath, content: &[u8]) -> Result<()> {
    let native_path = resolve_target(&path.to_native())?;

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file_name = native_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "target".to_string());
    let temp_path =
        native_path.with_file_name(format!(".{}.{}.splice.tmp", file_name, std::process::id()));

    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let staged = fill_temp(temp_file, &temp_path, &native_path, content)
        .and_then(|()| {
            fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
        });
    if let Err(e) = staged {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::info!(path = %path, bytes = content.len(), "wrote target");
    Ok(())
}

/// Write text content atomically.
pub fn write_text(path: &TargetPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// The file a write should land on: symlinks resolved when the target
/// exists, the path as given when it does not.
fn resolve_target(native_path: &Path) -> Result<PathBuf> {
    match dunce::canonicalize(native_path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(native_path.to_path_buf()),
        Err(e) => Err(Error::io(native_path, e)),
    }
}

fn fill_temp(mut temp_file: File, temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;

    match fs::metadata(target) {
        Ok(existing) => fs::set_permissions(temp_path, existing.permissions())
            .map_err(|e| Error::io(temp_path, e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(target, e)),
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}
