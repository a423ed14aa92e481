//! Safe decoder for the LZ4 block format.
//!
//! [`decode`] and its variants turn one raw block (no frame header) into
//! its original bytes, returning [`DecompressError::Corrupt`] for malformed
//! input instead of panicking.  The [`io`] and [`cli`] modules back the
//! `lz4-block` command-line tool.

pub mod config;
pub mod block;
pub mod cli;
pub mod io;
pub mod util;

// ── Version constants ────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    VERSION_NUMBER
}

/// Returns the library version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::cursor::Step;
pub use block::decompress_api::{decode, decode_with_limit, decompress, decompress_safe};
pub use block::decompress_core::DecompressError;
pub use block::types::LZ4_DISTANCE_MAX;
