//! LZ4 block decompression core.
//!
//! [`decompress_block`] is the token-driven decode loop.  Each iteration
//! handles one sequence:
//!
//! 1. control byte (literal-length nibble, match-length nibble)
//! 2. optional literal-length continuation
//! 3. literal bytes
//! 4. 16-bit little-endian offset
//! 5. optional match-length continuation
//! 6. match copy
//!
//! The block may end cleanly before step 1 or before step 4.  Every other
//! shortage of input, and every back-reference that does not point into
//! already-produced output, returns [`DecompressError::Corrupt`].  Malformed
//! input must never panic.

use core::fmt;

use super::cursor::{ByteCursor, Step};
use super::output::OutputBuilder;
use super::types::{split_token, ML_MASK, RUN_MASK};
use crate::debugoutput;

/// Errors returned by LZ4 block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed data is malformed or truncated, references output
    /// that does not exist, or would grow past the permitted output size.
    Corrupt,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::Corrupt => f.write_str("corrupt input"),
        }
    }
}

impl std::error::Error for DecompressError {}

/// Decodes every sequence of `src` into `out`.
///
/// On success `out` holds the complete decoded block.  On error its
/// contents are unspecified and should be discarded.
pub fn decompress_block(src: &[u8], out: &mut OutputBuilder) -> Result<(), DecompressError> {
    let mut ip = ByteCursor::new(src);

    loop {
        let token = match ip.next_token() {
            Step::Continue(token) => token,
            Step::EndOfStream => return Ok(()),
        };
        let (mut lit_length, mut match_field) = split_token(token);

        // ── Literals ─────────────────────────────────────────────────────────
        if lit_length == RUN_MASK as usize {
            let extra = ip.read_extra_length()?;
            lit_length = lit_length
                .checked_add(extra)
                .ok_or(DecompressError::Corrupt)?;
        }
        out.push_literals(ip.take(lit_length)?)?;

        // ── Offset ───────────────────────────────────────────────────────────
        // Input ending right after the literals is the last sequence.
        let offset = match ip.read_offset()? {
            Step::Continue(offset) => offset as usize,
            Step::EndOfStream => return Ok(()),
        };

        // ── Match ────────────────────────────────────────────────────────────
        if match_field == ML_MASK as usize {
            let extra = ip.read_extra_length()?;
            match_field = match_field
                .checked_add(extra)
                .ok_or(DecompressError::Corrupt)?;
        }
        out.copy_match(offset, match_field).map_err(|e| {
            debugoutput!(
                "lz4-block: match failed at input byte {} (output {} bytes)\n",
                ip.position(),
                out.len()
            );
            e
        })?;
    }
}
