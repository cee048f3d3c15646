//! The two managed (pure Rust) backends.
//!
//! Both share the encoder — compression has no unchecked profile worth
//! shipping — and differ only in which decode path they bind.

use crate::backend::BlockCodec;
use crate::block::{compress, decompress, decompress_fast, format};
use crate::error::Lz4Error;

/// Backend backed by the per-access-checked decoder.
pub struct CheckedBackend;

/// Backend backed by the per-sequence-checked fast decoder.
pub struct FastBackend;

impl BlockCodec for CheckedBackend {
    fn name(&self) -> &'static str {
        "checked"
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        format::compress_bound(input_len)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        compress::compress(src, dst)
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        decompress::decompress(src, dst)
    }

    fn decompress_known_size(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        decompress::decompress_known_size(src, dst)
    }
}

impl BlockCodec for FastBackend {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        format::compress_bound(input_len)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        compress::compress(src, dst)
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        decompress_fast::decompress(src, dst)
    }

    fn decompress_known_size(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        decompress_fast::decompress_known_size(src, dst)
    }
}
