// Integration tests for src/block/decompress_api.rs — public entry points
//
// Coverage:
//   - decode: hint reuse, default allocation, corrupt input
//   - decompress: convenience wrapper
//   - decode_with_limit: boundary at the limit, zero limit
//   - decompress_safe: exact fit, larger buffer, too-small buffer
//   - DecompressError: traits and Display

use lz4_block::{decode, decode_with_limit, decompress, decompress_safe, DecompressError};

// token 0x10 (ll=1), literal 'A'
const BLOCK_A: &[u8] = &[0x10, b'A'];

// "Hello" then match(off 5, len 4) → "HelloHell"
const BLOCK_HELLO_HELL: &[u8] = &[0x50, b'H', b'e', b'l', b'l', b'o', 0x05, 0x00];

// ─────────────────────────────────────────────────────────────────────────────
// DecompressError — trait properties
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_error_copy_eq() {
    let e = DecompressError::Corrupt;
    let e2 = e;
    assert_eq!(e, e2);
}

#[test]
fn decompress_error_is_std_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(DecompressError::Corrupt);
    assert_eq!(boxed.to_string(), "corrupt input");
    assert_eq!(format!("{:?}", DecompressError::Corrupt), "Corrupt");
}

// ─────────────────────────────────────────────────────────────────────────────
// decode / decompress
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_without_hint() {
    assert_eq!(decode(None, BLOCK_HELLO_HELL), Ok(b"HelloHell".to_vec()));
}

#[test]
fn decode_with_small_hint_grows() {
    let out = decode(Some(Vec::with_capacity(1)), BLOCK_HELLO_HELL).unwrap();
    assert_eq!(out, b"HelloHell");
}

#[test]
fn decode_hint_contents_are_replaced() {
    let hint = vec![0xAAu8; 32];
    assert_eq!(decode(Some(hint), BLOCK_A), Ok(vec![b'A']));
}

#[test]
fn decode_empty_input() {
    assert_eq!(decode(None, &[]), Ok(Vec::new()));
}

#[test]
fn decode_corrupt_input() {
    assert_eq!(decode(None, &[0x50, b'H']), Err(DecompressError::Corrupt));
}

#[test]
fn decompress_matches_decode() {
    assert_eq!(decompress(BLOCK_HELLO_HELL), decode(None, BLOCK_HELLO_HELL));
}

// ─────────────────────────────────────────────────────────────────────────────
// decode_with_limit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn limit_equal_to_output_succeeds() {
    assert_eq!(decode_with_limit(None, BLOCK_HELLO_HELL, 9), Ok(b"HelloHell".to_vec()));
}

#[test]
fn limit_one_below_output_fails() {
    assert_eq!(
        decode_with_limit(None, BLOCK_HELLO_HELL, 8),
        Err(DecompressError::Corrupt)
    );
}

#[test]
fn zero_limit_accepts_only_empty_output() {
    assert_eq!(decode_with_limit(None, &[], 0), Ok(Vec::new()));
    assert_eq!(decode_with_limit(None, &[0x00], 0), Ok(Vec::new()));
    assert_eq!(decode_with_limit(None, BLOCK_A, 0), Err(DecompressError::Corrupt));
}

#[test]
fn limit_stops_decompression_bomb() {
    // One literal followed by a match claiming ~2.5 MB of output.
    let mut src = vec![0x1F, b'z', 0x01, 0x00];
    src.extend(std::iter::repeat(255u8).take(10_000));
    src.push(0);
    assert_eq!(decode_with_limit(None, &src, 1 << 20), Err(DecompressError::Corrupt));
    assert_eq!(decode(None, &src).map(|v| v.len()), Ok(1 + 4 + 15 + 255 * 10_000));
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_safe
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_safe_exact_fit() {
    let mut dst = [0u8; 9];
    assert_eq!(decompress_safe(BLOCK_HELLO_HELL, &mut dst), Ok(9));
    assert_eq!(&dst, b"HelloHell");
}

#[test]
fn decompress_safe_larger_buffer_leaves_tail() {
    let mut dst = [0xEEu8; 16];
    assert_eq!(decompress_safe(BLOCK_A, &mut dst), Ok(1));
    assert_eq!(dst[0], b'A');
    assert!(dst[1..].iter().all(|&b| b == 0xEE));
}

#[test]
fn decompress_safe_too_small() {
    let mut dst = [0u8; 8];
    assert_eq!(
        decompress_safe(BLOCK_HELLO_HELL, &mut dst),
        Err(DecompressError::Corrupt)
    );
}

#[test]
fn decompress_safe_empty_dst_empty_block() {
    let mut dst: [u8; 0] = [];
    assert_eq!(decompress_safe(&[0x00], &mut dst), Ok(0));
}
