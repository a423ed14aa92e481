// Integration tests for src/block/decompress_core.rs — the decode loop
//
// Coverage:
//   - clean termination at a control byte and right after a literal run
//   - literal-length and match-length continuations
//   - short-distance fix-up (offset 1..=3) and the +4 match bias
//   - every truncation inside a sequence is Corrupt, never a panic
//   - invalid offsets (zero, before the start of output)

use lz4_block::block::decompress_core::{decompress_block, DecompressError};
use lz4_block::block::output::OutputBuilder;

include!("../../e2e/support.rs");
use lz4_writer::{encode_with_cuts, push_sequence};

fn run(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = OutputBuilder::new(Vec::new());
    decompress_block(src, &mut out)?;
    Ok(out.into_inner())
}

// ─────────────────────────────────────────────────────────────────────────────
// Clean termination
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(run(&[]), Ok(vec![]));
}

#[test]
fn literal_only_block() {
    assert_eq!(run(&[0x40, b'a', b'b', b'c', b'd']), Ok(b"abcd".to_vec()));
}

#[test]
fn fourteen_literals_without_continuation() {
    let mut src = vec![0xE0];
    src.extend_from_slice(b"fourteen bytes");
    assert_eq!(run(&src), Ok(b"fourteen bytes".to_vec()));
}

#[test]
fn block_may_end_after_a_match() {
    let src = [0x40, b'a', b'b', b'c', b'd', 0x04, 0x00];
    assert_eq!(run(&src), Ok(b"abcdabcd".to_vec()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Continuations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_continuation_255_then_10() {
    // 15 + 255 + 10 = 280 literal bytes.
    let literals: Vec<u8> = (0..280u32).map(|i| (i % 251) as u8).collect();
    let mut src = vec![0xF0, 255, 10];
    src.extend_from_slice(&literals);
    assert_eq!(run(&src), Ok(literals.clone()));

    // One literal short.
    src.pop();
    assert_eq!(run(&src), Err(DecompressError::Corrupt));
}

#[test]
fn literal_continuation_of_exactly_fifteen() {
    let literals = [7u8; 15];
    let mut src = vec![0xF0, 0];
    src.extend_from_slice(&literals);
    assert_eq!(run(&src), Ok(literals.to_vec()));
}

#[test]
fn match_continuation_on_far_reference() {
    // "abcdefgh" + match(off 8, 4 + 15 + 300) = 8 + 319 bytes.
    let mut src = vec![0x8F];
    src.extend_from_slice(b"abcdefgh");
    src.extend_from_slice(&[0x08, 0x00, 255, 45]);
    let out = run(&src).unwrap();
    assert_eq!(out.len(), 8 + 319);
    for (i, b) in out.iter().enumerate() {
        assert_eq!(*b, b"abcdefgh"[i % 8]);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copy regimes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn offset_one_match_field_three_repeats_seven_times() {
    let src = [0x43, b'X', b'X', b'X', b'X', 0x01, 0x00];
    let out = run(&src).unwrap();
    assert_eq!(out, vec![b'X'; 4 + 7]);
}

#[test]
fn far_offset_match_field_two_copies_six() {
    let src = [0x82, b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', 0x06, 0x00];
    let out = run(&src).unwrap();
    assert_eq!(out, b"ABCDEFGHCDEFGH".to_vec());
}

#[test]
fn overlapping_period_five() {
    // Distance 5 < match length 9: forward byte copy extends the pattern.
    let src = [0x55, b'1', b'2', b'3', b'4', b'5', 0x05, 0x00];
    assert_eq!(run(&src), Ok(b"12345123451234".to_vec()));
}

#[test]
fn consecutive_sequences_reference_each_other() {
    let mut src = Vec::new();
    push_sequence(&mut src, b"hello ", Some((6, 6)));
    push_sequence(&mut src, b"world", Some((11, 5)));
    push_sequence(&mut src, b"!", None);
    assert_eq!(run(&src), Ok(b"hello hello worldhello!".to_vec()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Corruption
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_offset_is_corrupt() {
    let src = [0x40, b'a', b'b', b'c', b'd', 0x00, 0x00];
    assert_eq!(run(&src), Err(DecompressError::Corrupt));
}

#[test]
fn offset_past_start_is_corrupt() {
    let src = [0x40, b'a', b'b', b'c', b'd', 0x05, 0x00];
    assert_eq!(run(&src), Err(DecompressError::Corrupt));
}

#[test]
fn truncated_offset_is_corrupt() {
    let src = [0x40, b'a', b'b', b'c', b'd', 0x04];
    assert_eq!(run(&src), Err(DecompressError::Corrupt));
}

#[test]
fn truncation_inside_any_sequence_is_corrupt() {
    let data = b"The quick brown fox jumps over the lazy dog. \
                 The quick brown fox jumps over the lazy dog again and again. \
                 aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa \
                 ababababababababababababababababababab xyzxyzxyzxyzxyzxyzxyzxyz";
    let (encoded, cuts) = encode_with_cuts(data, 1024);
    assert_eq!(run(&encoded), Ok(data.to_vec()));

    for cut in 0..encoded.len() {
        let result = run(&encoded[..cut]);
        if cuts.0.contains(&cut) {
            let out = result.unwrap_or_else(|e| panic!("clean cut {cut} failed: {e}"));
            assert!(data.starts_with(&out), "cut {cut} produced a wrong prefix");
        } else {
            assert_eq!(result, Err(DecompressError::Corrupt), "cut {cut}");
        }
    }
}

#[test]
fn arbitrary_bytes_never_panic() {
    // Deterministic pseudo-random inputs (xorshift).
    let mut state: u32 = 0x9E37_79B9;
    for len in 0..200usize {
        let input: Vec<u8> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        let _ = run(&input);
    }
}

#[test]
fn decoding_is_deterministic() {
    let data: Vec<u8> = b"deterministic output ".iter().cycle().take(2000).copied().collect();
    let (encoded, _) = encode_with_cuts(&data, 256);
    let first = run(&encoded).unwrap();
    let second = run(&encoded).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, data);
}
