//! File status helpers used when decoding file to file.
//!
//! The decoded output inherits the modification time of its source block,
//! set through the `filetime` crate so the same code path covers every
//! platform.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filetime::FileTime;

/// Sets the access time to now and the modification time to `mtime` on a
/// regular file.
///
/// Returns `Err` with [`io::ErrorKind::InvalidInput`] if `path` is not a
/// regular file.
pub fn set_file_mtime(path: &Path, mtime: SystemTime) -> io::Result<()> {
    if !is_reg_file(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "set_file_mtime: not a regular file",
        ));
    }
    let atime = FileTime::from_system_time(SystemTime::now());
    filetime::set_file_times(path, atime, FileTime::from_system_time(mtime))
}

/// Copies the modification time of `src` onto `dst`.  Both must be
/// regular files.
pub fn copy_file_mtime(src: &Path, dst: &Path) -> io::Result<()> {
    let mtime = fs::metadata(src)?.modified()?;
    set_file_mtime(dst, mtime)
}

/// Returns `true` if `path` refers to a regular file.
///
/// Returns `false` for directories, special files, and paths that do not
/// exist.
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if `path` refers to a directory.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
