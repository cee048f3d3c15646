#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::block::{compress, decompress_known_size, max_compressed_len};

fuzz_target!(|data: &[u8]| {
    // Compress into a bound-sized buffer; the bound guarantees success for
    // any input the codec accepts at all.
    let mut compressed = vec![0u8; max_compressed_len(data.len())];
    let n = compress(data, &mut compressed).expect("compression within bound failed");

    // Decompress back, supplying the exact original length.
    let mut recovered = vec![0u8; data.len()];
    let m = decompress_known_size(&compressed[..n], &mut recovered)
        .expect("decompression of a validly-compressed block failed");

    assert_eq!(m, data.len());
    assert_eq!(
        recovered, data,
        "block round-trip mismatch: {} compressed bytes back to {} (expected {})",
        n,
        m,
        data.len()
    );
});
