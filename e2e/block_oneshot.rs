//! E2E Test Suite 01: Block one-shot decoding
//!
//! Decodes blocks produced by the test-side writer in `support.rs` through
//! every public entry point and checks the original bytes come back:
//! - decode / decompress
//! - decode_with_limit
//! - decompress_safe
//!
//! Plus the long-distance and maximum-offset cases a real encoder emits.

use lz4_block::{decode, decode_with_limit, decompress, decompress_safe, DecompressError, LZ4_DISTANCE_MAX};

include!("support.rs");
use lz4_writer::{encode, encode_with_cuts, push_sequence};

fn lorem(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    ];
    let mut out = Vec::with_capacity(len);
    let mut seed: u32 = 12345;
    while out.len() < len {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        out.extend_from_slice(WORDS[(seed >> 16) as usize % WORDS.len()].as_bytes());
        out.push(b' ');
    }
    out.truncate(len);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: typical text
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_typical_text() {
    let original = lorem(20_000);
    let compressed = encode(&original);
    assert!(compressed.len() < original.len(), "text should compress");

    let decoded = decompress(&compressed).expect("decode should succeed");
    assert_eq!(decoded, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: incompressible data (one literal-only sequence)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_incompressible_data() {
    let original: Vec<u8> = (0u32..5000).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    let mut compressed = Vec::new();
    push_sequence(&mut compressed, &original, None);
    assert_eq!(decode(None, &compressed), Ok(original));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: long runs (offset 1) and short periods
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_runs_and_short_periods() {
    let mut original = vec![0u8; 10_000];
    original.extend(b"ab".iter().cycle().take(3_001));
    original.extend(b"xyz".iter().cycle().take(2_000));
    let compressed = encode(&original);
    assert!(compressed.len() < 200, "runs should compress well: {}", compressed.len());
    assert_eq!(decompress(&compressed).unwrap(), original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: maximum offset
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_max_offset() {
    let head = lorem(LZ4_DISTANCE_MAX);
    let mut compressed = Vec::new();
    push_sequence(&mut compressed, &head, Some((LZ4_DISTANCE_MAX as u16, 64)));
    push_sequence(&mut compressed, b"end", None);

    let decoded = decompress(&compressed).unwrap();
    assert_eq!(decoded.len(), LZ4_DISTANCE_MAX + 64 + 3);
    assert_eq!(&decoded[LZ4_DISTANCE_MAX..LZ4_DISTANCE_MAX + 64], &head[..64]);
    assert_eq!(&decoded[decoded.len() - 3..], b"end");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: every public entry point agrees
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_entry_points_agree() {
    let original = lorem(4096);
    let compressed = encode(&original);

    let a = decode(None, &compressed).unwrap();
    let b = decode(Some(Vec::with_capacity(original.len())), &compressed).unwrap();
    let c = decode_with_limit(None, &compressed, original.len()).unwrap();
    let mut d = vec![0u8; original.len()];
    let n = decompress_safe(&compressed, &mut d).unwrap();

    assert_eq!(a, original);
    assert_eq!(b, original);
    assert_eq!(c, original);
    assert_eq!(n, original.len());
    assert_eq!(d, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: hint buffer reuse across blocks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_hint_buffer_reused_between_blocks() {
    let first = lorem(3000);
    let second = lorem(1000);
    let out = decode(None, &encode(&first)).unwrap();
    let capacity = out.capacity();
    let out = decode(Some(out), &encode(&second)).unwrap();
    assert_eq!(out, second);
    assert!(out.capacity() >= capacity.min(second.len()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: truncation of a real block
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_truncated_block_never_returns_wrong_data() {
    let original = lorem(2000);
    let (compressed, cuts) = encode_with_cuts(&original, 512);
    for cut in 0..compressed.len() {
        match decompress(&compressed[..cut]) {
            Ok(out) => {
                assert!(cuts.0.contains(&cut), "cut {cut} decoded without error");
                assert!(original.starts_with(&out));
            }
            Err(e) => assert_eq!(e, DecompressError::Corrupt),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: decompress_safe with a too-small destination
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_safe_dst_too_small() {
    let original = lorem(1000);
    let compressed = encode(&original);
    let mut dst = vec![0u8; original.len() - 1];
    assert_eq!(decompress_safe(&compressed, &mut dst), Err(DecompressError::Corrupt));
}
