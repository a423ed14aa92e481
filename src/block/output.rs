//! Append-only output buffer and the match copy engine.
//!
//! The write position is always `buf.len()`: there is no slack at the end
//! and no holes, so every byte below the write position is final output
//! that a later back-reference may read.
//!
//! Match copies come in two modes.  When the source range lies entirely
//! below the write position it is copied in one go.  When it reaches the
//! write position (the match distance is shorter than the match), bytes are
//! copied one at a time in increasing order so each freshly written byte
//! becomes the source of a later one; this is how LZ4 encodes runs.

use super::decompress_core::DecompressError;
use super::types::{DEC_TABLE, MINMATCH};
use crate::debugoutput;

/// Growable destination for decoded bytes.
#[derive(Debug)]
pub struct OutputBuilder {
    buf: Vec<u8>,
    limit: usize,
}

impl OutputBuilder {
    /// Reuses `buf`'s allocation; its previous contents are discarded.
    pub fn new(mut buf: Vec<u8>) -> Self {
        buf.clear();
        Self {
            buf,
            limit: usize::MAX,
        }
    }

    /// Like [`OutputBuilder::new`], refusing to grow past `limit` bytes.
    pub fn with_limit(buf: Vec<u8>, limit: usize) -> Self {
        let mut out = Self::new(buf);
        out.limit = limit;
        out
    }

    /// Number of bytes produced so far (the write position).
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Checks that `additional` more bytes stay within the limit and reserves
    /// room for them.
    fn grow(&mut self, additional: usize) -> Result<(), DecompressError> {
        let end = self
            .buf
            .len()
            .checked_add(additional)
            .ok_or(DecompressError::Corrupt)?;
        if end > self.limit {
            debugoutput!(
                "lz4-block: output would reach {} bytes, limit is {}\n",
                end,
                self.limit
            );
            return Err(DecompressError::Corrupt);
        }
        self.buf.reserve(additional);
        Ok(())
    }

    /// Appends a literal run.
    pub fn push_literals(&mut self, literals: &[u8]) -> Result<(), DecompressError> {
        self.grow(literals.len())?;
        self.buf.extend_from_slice(literals);
        Ok(())
    }

    /// Copies `length` bytes starting at absolute index `reference` to the
    /// end of the output and returns the advanced reference.
    ///
    /// Callers guarantee `reference < self.len()`.
    fn copy_from(&mut self, reference: usize, length: usize) -> Result<usize, DecompressError> {
        debug_assert!(reference < self.buf.len());
        self.grow(length)?;
        let end = reference + length;
        if end < self.buf.len() {
            self.buf.extend_from_within(reference..end);
        } else {
            for i in reference..end {
                let b = self.buf[i];
                self.buf.push(b);
            }
        }
        Ok(end)
    }

    /// Emits the first `MINMATCH` bytes of a match whose distance is below
    /// `MINMATCH`, replicating the short pattern byte by byte.  Returns the
    /// reference to continue the match from.
    fn overlap_fixup(&mut self, reference: usize, distance: usize) -> Result<usize, DecompressError> {
        self.grow(MINMATCH)?;
        for i in 0..MINMATCH {
            let b = self.buf[reference + i];
            self.buf.push(b);
        }
        Ok(reference + MINMATCH - DEC_TABLE[distance])
    }

    /// Resolves a back-reference `offset` bytes behind the write position
    /// and appends the match.
    ///
    /// `match_field` is the token's match-length nibble plus any
    /// continuation bytes, without the implicit `MINMATCH` bias.  An offset
    /// of zero, or one that reaches before the start of the output, is
    /// corruption.
    pub fn copy_match(&mut self, offset: usize, match_field: usize) -> Result<(), DecompressError> {
        let dst_pos = self.buf.len();
        if offset == 0 || offset > dst_pos {
            debugoutput!(
                "lz4-block: offset {} invalid with {} bytes of output\n",
                offset,
                dst_pos
            );
            return Err(DecompressError::Corrupt);
        }
        let mut reference = dst_pos - offset;
        let distance = dst_pos - reference;

        let length = if distance < MINMATCH {
            reference = self.overlap_fixup(reference, distance)?;
            match_field
        } else {
            match_field
                .checked_add(MINMATCH)
                .ok_or(DecompressError::Corrupt)?
        };

        if length > 0 {
            self.copy_from(reference, length)?;
        }
        Ok(())
    }
}
