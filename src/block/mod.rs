//! LZ4 block decompression.
//!
//! This module contains the block-format decoder: a byte cursor over the
//! compressed input, an append-only output builder with the match copy
//! engine, and the decode loop that drives them.

pub mod cursor;
pub mod decompress_api;
pub mod decompress_core;
pub mod output;
pub mod types;

// Re-export the most important public API items at the module level.
pub use decompress_api::{decode, decode_with_limit, decompress, decompress_safe};
pub use decompress_core::DecompressError;
pub use types::LZ4_DISTANCE_MAX;
