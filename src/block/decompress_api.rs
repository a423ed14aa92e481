//! Public LZ4 block decompression API.
//!
//!   - Growable output: [`decode`], [`decompress`], [`decode_with_limit`]
//!   - Fixed caller buffer: [`decompress_safe`]
//!
//! All entry points run the same loop ([`decompress_block`]) and differ
//! only in how the output buffer is provided and bounded.  None of them keep
//! state between calls.

use super::decompress_core::{decompress_block, DecompressError};
use super::output::OutputBuilder;

/// Initial output capacity when the caller gives no hint.  The compressed
/// size is a lower bound for most real blocks.
#[inline]
fn default_capacity(src: &[u8]) -> usize {
    src.len()
}

fn hinted_buffer(dest_hint: Option<Vec<u8>>, src: &[u8]) -> Vec<u8> {
    dest_hint.unwrap_or_else(|| Vec::with_capacity(default_capacity(src)))
}

/// Decompresses one LZ4 block.
///
/// `dest_hint` only pre-sizes the output: its allocation is reused and its
/// contents are discarded.  Without it, a buffer with `src.len()` bytes of
/// capacity is allocated and grown as needed.
///
/// Returns the decoded bytes, or `Err(DecompressError::Corrupt)` for any
/// malformed input.
pub fn decode(dest_hint: Option<Vec<u8>>, src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = OutputBuilder::new(hinted_buffer(dest_hint, src));
    decompress_block(src, &mut out)?;
    Ok(out.into_inner())
}

/// Decompresses one LZ4 block into a freshly allocated buffer.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    decode(None, src)
}

/// Like [`decode`], but a block that would produce more than `max_output`
/// bytes is rejected as corrupt before the excess is written.
pub fn decode_with_limit(
    dest_hint: Option<Vec<u8>>,
    src: &[u8],
    max_output: usize,
) -> Result<Vec<u8>, DecompressError> {
    let buf = dest_hint
        .unwrap_or_else(|| Vec::with_capacity(default_capacity(src).min(max_output)));
    let mut out = OutputBuilder::with_limit(buf, max_output);
    decompress_block(src, &mut out)?;
    Ok(out.into_inner())
}

/// Decompresses one LZ4 block into `dst`.
///
/// Returns the number of bytes written.  A block whose output does not fit
/// in `dst` is reported as `Err(DecompressError::Corrupt)` and leaves `dst`
/// unchanged.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let capacity = dst.len().min(default_capacity(src).max(1));
    let mut out = OutputBuilder::with_limit(Vec::with_capacity(capacity), dst.len());
    decompress_block(src, &mut out)?;
    let decoded = out.as_slice();
    dst[..decoded.len()].copy_from_slice(decoded);
    Ok(decoded.len())
}
