//! LZ4 block compression and decompression.
//!
//! The block format engine: format model, encoder, and the two managed
//! decoder profiles.  The foreign-delegating variant lives in
//! `backend::native`.

pub mod compress;
pub mod decompress;
pub mod decompress_fast;
pub mod format;

// Re-export the most important public API items at the module level.
pub use compress::{compress, max_compressed_len};
pub use decompress::{decompress, decompress_known_size};
pub use format::{compress_bound, MAX_DISTANCE, MAX_INPUT_SIZE, MIN_MATCH};
