//! LZ4 block-format codec with selectable safety backends.
//!
//! This crate compresses and decompresses single raw LZ4 blocks — no frame
//! headers, no checksums, no block framing — over caller-supplied buffers.
//! Three interchangeable backends honor one contract:
//!
//! - **checked**: every source read and destination write is validated
//!   before it happens;
//! - **fast**: bounds are established once per sequence, copies then run
//!   unchecked within the validated regions;
//! - **native** (feature `native`): the reference C implementation via
//!   `lz4-sys`.
//!
//! Whichever backend a caller picks, decoding never reads before the start
//! of the input, never follows a back-reference before the start of the
//! output, and never writes past the declared destination capacity —
//! corrupted or adversarial input comes back as a typed [`Lz4Error`], never
//! as memory corruption or a panic.
//!
//! ```
//! use lz4_block::backend::{fastest_instance, safe_instance};
//!
//! let codec = fastest_instance();
//! let input = b"an example payload, an example payload";
//! let mut compressed = vec![0u8; codec.max_compressed_len(input.len())];
//! let n = codec.compress(input, &mut compressed).unwrap();
//!
//! let mut out = vec![0u8; input.len()];
//! let m = safe_instance()
//!     .decompress_known_size(&compressed[..n], &mut out)
//!     .unwrap();
//! assert_eq!(&out[..m], input);
//! ```

pub mod backend;
pub mod block;
pub mod error;

pub use backend::{
    fastest_instance, fastest_managed_instance, native_instance, safe_instance,
    unchecked_instance, BlockCodec,
};
pub use block::{compress, compress_bound, decompress, decompress_known_size, max_compressed_len};
pub use error::Lz4Error;
