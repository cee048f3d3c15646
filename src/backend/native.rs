//! Foreign-compiled backend: the reference C implementation behind a narrow
//! call boundary.
//!
//! This is the only genuinely unchecked variant in the crate; the wrapper
//! here is the single place responsible for re-establishing the safety
//! contract — translating the C API's sentinel return values into the shared
//! [`Lz4Error`] taxonomy and never letting an error escape as anything else.
//!
//! `LZ4_decompress_safe` validates offsets and lengths internally before
//! writing, so hostile input is rejected with a negative return rather than
//! an out-of-bounds access.

use std::os::raw::c_int;

use crate::backend::BlockCodec;
use crate::error::Lz4Error;

/// Backend handle delegating to liblz4.
pub struct NativeBackend;

impl NativeBackend {
    /// One-shot availability probe.
    ///
    /// With static linking the symbols are guaranteed present; the version
    /// check guards against an unusably old library being substituted at
    /// link time.  Must never panic — a failed probe degrades the factory
    /// to the managed backends.
    pub fn probe() -> Option<NativeBackend> {
        // SAFETY: LZ4_versionNumber takes no arguments and only reads a
        // compile-time constant on the C side.
        let version = unsafe { lz4_sys::LZ4_versionNumber() };
        if version >= 10_000 {
            Some(NativeBackend)
        } else {
            None
        }
    }
}

/// Clamp a buffer length to the C API's `int` domain.
#[inline]
fn as_c_len(len: usize) -> Result<c_int, Lz4Error> {
    c_int::try_from(len).map_err(|_| Lz4Error::InputTooLarge)
}

impl BlockCodec for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        crate::block::format::compress_bound(input_len)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        let src_len = as_c_len(src.len())?;
        // Destination capacity saturates: anything past the int domain is
        // unreachable through a valid block anyway.
        let dst_len = dst.len().min(c_int::MAX as usize) as c_int;
        // SAFETY: pointers and lengths describe exactly the two slices; the
        // C function never writes more than `dst_len` bytes.
        let written = unsafe {
            lz4_sys::LZ4_compress_default(
                src.as_ptr().cast(),
                dst.as_mut_ptr().cast(),
                src_len,
                dst_len,
            )
        };
        if written > 0 {
            Ok(written as usize)
        } else {
            // 0 is the C API's only failure signal for compression; with a
            // validated source length it means the destination ran out.
            Err(Lz4Error::DestinationTooSmall)
        }
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        let src_len = as_c_len(src.len())?;
        let dst_len = dst.len().min(c_int::MAX as usize) as c_int;
        // SAFETY: same slice-to-pointer translation as `compress`;
        // LZ4_decompress_safe bounds every access against the two lengths.
        let written = unsafe {
            lz4_sys::LZ4_decompress_safe(
                src.as_ptr().cast(),
                dst.as_mut_ptr().cast(),
                src_len,
                dst_len,
            )
        };
        if written >= 0 {
            Ok(written as usize)
        } else {
            // The C API folds truncation, bad offsets, and capacity overflow
            // into one negative sentinel.
            Err(Lz4Error::MalformedInput)
        }
    }

    fn decompress_known_size(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
        let written = self.decompress(src, dst)?;
        if written != dst.len() {
            return Err(Lz4Error::MalformedInput);
        }
        Ok(written)
    }
}
