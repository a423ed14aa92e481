//! LZ4 block-format constants.
//!
//! Token layout and the minimum match length come straight from the block
//! format: the high nibble of every control byte is the literal-length
//! field, the low nibble the match-length field, and a nibble value of 15
//! means "more length bytes follow".

/// Minimum match length encoded in an LZ4 block.  Every stored match-length
/// field is biased by this amount.
pub const MINMATCH: usize = 4;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

/// Value of a length-continuation byte that adds 255 and keeps going.
pub const LENGTH_CONTINUE: u8 = 255;

/// Size of the little-endian back-reference offset that follows literals.
pub const OFFSET_BYTES: usize = 2;

/// Maximum back-reference distance representable by the 16-bit offset.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

/// Reference-pointer correction applied after the 4-byte overlap fix-up,
/// indexed by match distance (only distances 1..=3 take that path).
///
/// After replicating 4 bytes, the match source advances by
/// `MINMATCH - DEC_TABLE[distance]` instead of `MINMATCH`, which keeps the
/// remaining distance a multiple of the pattern period.
pub const DEC_TABLE: [usize; MINMATCH] = [0, 3, 2, 3];

/// Splits a control byte into its (literal-length, match-length) nibbles.
#[inline]
pub fn split_token(token: u8) -> (usize, usize) {
    let literal = (token >> ML_BITS) as usize;
    let matched = (token as u32 & ML_MASK) as usize;
    (literal, matched)
}
