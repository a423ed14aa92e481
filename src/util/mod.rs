//! Filesystem utilities shared by the I/O layer.
//!
//! - [`file_status`] — regular-file / directory checks and modification-time
//!   propagation

pub mod file_status;

pub use file_status::{copy_file_mtime, is_directory, is_reg_file, set_file_mtime};

/// Returns `name` with `suffix` removed, or `None` when `name` does not end
/// with `suffix` or nothing would remain.
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    name.strip_suffix(suffix).filter(|stem| !stem.is_empty())
}
