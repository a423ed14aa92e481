// Integration tests for src/block/cursor.rs — byte cursor and length reader
//
// Coverage:
//   - next_token / read_offset report Step::EndOfStream only on an empty tail
//   - read_extra_length handles long 255 runs and rejects truncation
//   - take borrows exactly the requested bytes

use lz4_block::block::cursor::{ByteCursor, Step};
use lz4_block::DecompressError;

#[test]
fn position_and_remaining_track_reads() {
    let data = [0x10, 0x20, 0x30, 0x40];
    let mut c = ByteCursor::new(&data);
    assert_eq!(c.remaining(), 4);
    assert_eq!(c.next_token(), Step::Continue(0x10));
    assert_eq!(c.read_offset(), Ok(Step::Continue(0x3020)));
    assert_eq!(c.position(), 3);
    assert_eq!(c.remaining(), 1);
}

#[test]
fn long_continuation_run() {
    // 1000 = 3 * 255 + 235
    let mut data = vec![255u8; 3];
    data.push(235);
    let mut c = ByteCursor::new(&data);
    assert_eq!(c.read_extra_length(), Ok(1000));
    assert!(c.is_empty());
}

#[test]
fn continuation_ending_on_255_is_corrupt() {
    let data = vec![255u8; 10];
    let mut c = ByteCursor::new(&data);
    assert_eq!(c.read_extra_length(), Err(DecompressError::Corrupt));
}

#[test]
fn take_zero_bytes_at_end() {
    let mut c = ByteCursor::new(&[]);
    assert_eq!(c.take(0), Ok(&[][..]));
    assert_eq!(c.next_token(), Step::EndOfStream);
    assert_eq!(c.read_offset(), Ok(Step::EndOfStream));
}

#[test]
fn take_returns_borrowed_slice() {
    let data = b"literal bytes";
    let mut c = ByteCursor::new(data);
    let s = c.take(7).unwrap();
    assert_eq!(s, b"literal");
    assert_eq!(c.position(), 7);
}
