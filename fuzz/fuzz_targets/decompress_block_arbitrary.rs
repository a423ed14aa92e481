#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the block decoder.
    // Err results are expected and fine; what we verify is no panics.

    // Growable output, capped so tiny inputs claiming huge output don't OOM.
    let limit = (data.len().saturating_mul(255)).min(1 << 24);
    let limited = lz4_block::decode_with_limit(None, data, limit);

    // Fixed destination buffers of a few sizes.
    for size in [0usize, 4096, data.len()] {
        let mut dst = vec![0u8; size];
        if let Ok(n) = lz4_block::decompress_safe(data, &mut dst) {
            // Whatever fits must agree with the growable decoder.
            if let Ok(ref full) = limited {
                assert_eq!(&dst[..n], &full[..]);
            }
        }
    }
});
