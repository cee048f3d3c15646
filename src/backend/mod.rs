//! Backend selection: one codec contract, several interchangeable
//! implementations.
//!
//! Every backend honors the exact same external contract (§ the crate-level
//! safety property): identical wire format, identical error taxonomy, and no
//! access outside the caller's declared buffers no matter how corrupted the
//! input is.  Callers obtain a handle from one of the accessors below and
//! stay oblivious to which profile backs it.
//!
//! Selection is lazy, happens at most once per process, and is immutable
//! afterwards; concurrent first calls may race on the probe but converge on
//! the same answer.

use std::sync::OnceLock;

use crate::error::Lz4Error;

pub mod managed;
#[cfg(feature = "native")]
pub mod native;

pub use managed::{CheckedBackend, FastBackend};

/// The shared contract of every backend variant.
///
/// One handle carries both capabilities (encode and decode); all methods are
/// `&self` and the implementations hold no mutable state, so a handle is
/// freely shared across threads.
pub trait BlockCodec: Send + Sync {
    /// Short identifier for diagnostics ("checked", "fast", "native").
    fn name(&self) -> &'static str;

    /// Worst-case destination size for `input_len` input bytes.
    fn max_compressed_len(&self, input_len: usize) -> usize;

    /// Compress `src` into `dst`; returns bytes written.
    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error>;

    /// Decompress into `dst` treated as a capacity; returns bytes written.
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error>;

    /// Decompress a block whose decompressed size is known to be exactly
    /// `dst.len()`.
    fn decompress_known_size(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error>;
}

static CHECKED: CheckedBackend = CheckedBackend;
static FAST: FastBackend = FastBackend;

/// The fully bounds-checked backend.  Always available.
pub fn safe_instance() -> &'static dyn BlockCodec {
    &CHECKED
}

/// The performance-oriented managed backend (per-sequence bounds checks).
/// Always available.
pub fn unchecked_instance() -> &'static dyn BlockCodec {
    &FAST
}

/// The foreign-compiled backend (liblz4 via the `native` feature).
///
/// The probe runs once per process and never panics; environments where the
/// native implementation cannot be used get `Err(BackendUnavailable)`.
pub fn native_instance() -> Result<&'static dyn BlockCodec, Lz4Error> {
    #[cfg(feature = "native")]
    {
        static NATIVE: OnceLock<Option<native::NativeBackend>> = OnceLock::new();
        if let Some(backend) = NATIVE.get_or_init(native::NativeBackend::probe) {
            return Ok(backend);
        }
    }
    Err(Lz4Error::BackendUnavailable)
}

/// The fastest available backend: native when usable, else the fast managed
/// profile, else checked.
pub fn fastest_instance() -> &'static dyn BlockCodec {
    static FASTEST: OnceLock<&'static dyn BlockCodec> = OnceLock::new();
    *FASTEST.get_or_init(|| native_instance().unwrap_or_else(|_| fastest_managed_instance()))
}

/// The fastest backend that never delegates to foreign code.
pub fn fastest_managed_instance() -> &'static dyn BlockCodec {
    unchecked_instance()
}
