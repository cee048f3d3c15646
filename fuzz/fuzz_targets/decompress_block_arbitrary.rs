#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::block::{decompress, decompress_fast};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through both managed decode profiles.
    // Err results are expected and fine; what we verify is no panics or UB,
    // and that the two profiles agree on every outcome.

    for capacity in [0usize, 4096, data.len(), (data.len().saturating_mul(255)).min(1 << 20)] {
        let mut a = vec![0u8; capacity];
        let mut b = vec![0u8; capacity];
        let ra = decompress::decompress(data, &mut a);
        let rb = decompress_fast::decompress(data, &mut b);
        match (ra, rb) {
            (Ok(na), Ok(nb)) => {
                assert_eq!(na, nb);
                assert_eq!(a[..na], b[..nb]);
            }
            (Err(_), Err(_)) => {}
            (ra, rb) => panic!("profiles disagree: {ra:?} vs {rb:?}"),
        }
    }
});
