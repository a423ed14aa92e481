//! Sequential, bounds-checked reader over a compressed LZ4 block.
//!
//! Running out of input means different things depending on where it
//! happens.  At a control-byte boundary, or where an offset would follow a
//! final literal run, it is the normal end of the block; anywhere else the
//! block is truncated.  The two "may end here" reads return [`Step`] so the
//! decode loop sees that distinction in the type instead of in an error
//! value.

use super::decompress_core::DecompressError;
use super::types::{LENGTH_CONTINUE, OFFSET_BYTES};
use crate::debugoutput;

/// Outcome of a read that is allowed to hit the clean end of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// A value was read; decoding continues.
    Continue(T),
    /// The input was exhausted exactly at this read.
    EndOfStream,
}

/// Read cursor over the compressed input.  `pos <= src.len()` always holds.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads one byte, or `None` at end of input.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        let b = *self.src.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Reads the control byte that opens a sequence.
    #[inline]
    pub fn next_token(&mut self) -> Step<u8> {
        match self.read_byte() {
            Some(token) => Step::Continue(token),
            None => Step::EndOfStream,
        }
    }

    /// Reads the 2-byte little-endian back-reference offset.
    ///
    /// No bytes left is the clean end of the block.  Exactly one byte left
    /// is a truncated offset.
    pub fn read_offset(&mut self) -> Result<Step<u16>, DecompressError> {
        match self.remaining() {
            0 => Ok(Step::EndOfStream),
            n if n < OFFSET_BYTES => {
                debugoutput!("lz4-block: truncated offset at input byte {}\n", self.pos);
                Err(DecompressError::Corrupt)
            }
            _ => {
                let lo = self.src[self.pos];
                let hi = self.src[self.pos + 1];
                self.pos += OFFSET_BYTES;
                Ok(Step::Continue(u16::from_le_bytes([lo, hi])))
            }
        }
    }

    /// Decodes a length-continuation run: every 255 byte adds 255 and keeps
    /// reading, the first byte below 255 is added and ends the run.
    ///
    /// Input ending inside the run, or a total that does not fit in `usize`,
    /// is corruption.
    pub fn read_extra_length(&mut self) -> Result<usize, DecompressError> {
        let mut length: usize = 0;
        loop {
            let Some(b) = self.read_byte() else {
                debugoutput!("lz4-block: input ends inside a length continuation\n");
                return Err(DecompressError::Corrupt);
            };
            length = length
                .checked_add(b as usize)
                .ok_or(DecompressError::Corrupt)?;
            if b != LENGTH_CONTINUE {
                return Ok(length);
            }
        }
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecompressError> {
        if len > self.remaining() {
            debugoutput!(
                "lz4-block: need {} literal bytes at input byte {}, only {} left\n",
                len,
                self.pos,
                self.remaining()
            );
            return Err(DecompressError::Corrupt);
        }
        let bytes = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
