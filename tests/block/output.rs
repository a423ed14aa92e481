// Integration tests for src/block/output.rs — output builder and copy engine
//
// Coverage:
//   - literal appends, capacity reuse
//   - bulk copy for disjoint ranges, forward byte copy for overlapping ones
//   - 4-byte overlap fix-up for distances 1..=3
//   - offset validation and output limit

use lz4_block::block::output::OutputBuilder;
use lz4_block::DecompressError;

fn with_prefix(prefix: &[u8]) -> OutputBuilder {
    let mut out = OutputBuilder::new(Vec::new());
    out.push_literals(prefix).unwrap();
    out
}

#[test]
fn literals_append_in_order() {
    let mut out = OutputBuilder::new(Vec::new());
    out.push_literals(b"ab").unwrap();
    out.push_literals(b"").unwrap();
    out.push_literals(b"cd").unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out.as_slice(), b"abcd");
}

#[test]
fn distance_two_alternates() {
    let mut out = with_prefix(b"xy");
    out.copy_match(2, 3).unwrap();
    assert_eq!(out.as_slice(), b"xyxyxyxyx");
}

#[test]
fn distance_three_repeats_triplet() {
    let mut out = with_prefix(b"123");
    out.copy_match(3, 5).unwrap();
    assert_eq!(out.as_slice(), b"123123123123");
}

#[test]
fn distance_equal_to_match_length() {
    // Source ends exactly at the write position.
    let mut out = with_prefix(b"wxyz");
    out.copy_match(4, 0).unwrap();
    assert_eq!(out.as_slice(), b"wxyzwxyz");
}

#[test]
fn far_reference_inside_longer_output() {
    let prefix: Vec<u8> = (0u8..100).collect();
    let mut out = with_prefix(&prefix);
    out.copy_match(100, 6).unwrap();
    assert_eq!(&out.as_slice()[100..], &prefix[..10]);
}

#[test]
fn offset_equal_to_output_length_is_valid() {
    let mut out = with_prefix(b"abcdefgh");
    assert!(out.copy_match(8, 0).is_ok());
    assert_eq!(&out.as_slice()[8..], b"abcd");
}

#[test]
fn offset_beyond_output_is_corrupt() {
    let mut out = with_prefix(b"abc");
    assert_eq!(out.copy_match(4, 0), Err(DecompressError::Corrupt));
    assert_eq!(out.copy_match(65_535, 0), Err(DecompressError::Corrupt));
}

#[test]
fn limit_allows_exact_fill() {
    let mut out = OutputBuilder::with_limit(Vec::new(), 8);
    out.push_literals(b"abcd").unwrap();
    out.copy_match(4, 0).unwrap();
    assert_eq!(out.len(), 8);
    assert_eq!(out.push_literals(b"!"), Err(DecompressError::Corrupt));
}
