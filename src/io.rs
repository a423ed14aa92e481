//! File I/O around the block decoder.
//!
//! The command-line front end goes through this module; library users that
//! already hold the compressed bytes call [`crate::block`] directly.

pub mod decompress_dispatch;
pub mod file_io;
pub mod prefs;

pub use prefs::Prefs;

// ── Special I/O sentinels ─────────────────────────────────────────────────────
pub use file_io::{NULL_OUTPUT, NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Decompression ─────────────────────────────────────────────────────────────
/// Decode one raw block file.
pub use decompress_dispatch::{decode_buffer, decompress_filename, DecompressStats};
