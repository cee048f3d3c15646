//! Fast-profile LZ4 block decompression.
//!
//! Same wire semantics and error taxonomy as [`crate::block::decompress`],
//! but bounds are established once per sequence instead of once per access:
//! each literal run and each match is validated against the declared source
//! and destination regions up front, after which the copies run on raw
//! pointers with no per-byte checks.
//!
//! The external contract is identical to the checked profile: no input,
//! however corrupted, writes a single byte past the caller's buffer or past
//! the logical end of the decoded output.  There is deliberately no
//! wildcopy-style overshoot here — every copy is exact — so callers never
//! need slack capacity.

use core::ptr;

use crate::block::format::{read_ext_length, read_le16, MIN_MATCH, ML_MASK};
use crate::error::Lz4Error;

/// Fast-profile variant of [`crate::block::decompress`].
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    decode(src, dst, false)
}

/// Fast-profile variant of [`crate::block::decompress_known_size`].
pub fn decompress_known_size(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    decode(src, dst, true)
}

fn decode(src: &[u8], dst: &mut [u8], exact: bool) -> Result<usize, Lz4Error> {
    let src_len = src.len();
    let dst_len = dst.len();
    let s: *const u8 = src.as_ptr();
    let d: *mut u8 = dst.as_mut_ptr();

    let mut ip: usize = 0;
    let mut op: usize = 0;

    if src_len == 0 {
        return Err(Lz4Error::SourceExhausted);
    }

    loop {
        debug_assert!(ip < src_len);
        // SAFETY: ip < src_len on every iteration — established before entry
        // (src_len > 0), by the end-of-run break after the literals, and by
        // the exhaustion check after each match.
        let token = unsafe { *s.add(ip) };
        ip += 1;

        let mut literal_len = (token >> 4) as usize;
        if literal_len == ML_MASK {
            literal_len = literal_len
                .checked_add(read_ext_length(src, &mut ip)?)
                .ok_or(Lz4Error::MalformedInput)?;
        }

        // Single bounds check for the whole literal run.  `ip <= src_len`
        // and `op <= dst_len` hold as loop invariants, so the subtractions
        // cannot wrap.
        if literal_len > src_len - ip {
            return Err(Lz4Error::SourceExhausted);
        }
        if literal_len > dst_len - op {
            return Err(Lz4Error::DestinationTooSmall);
        }
        // SAFETY: both `ip + literal_len <= src_len` and
        // `op + literal_len <= dst_len` were just verified; src and dst are
        // distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(s.add(ip), d.add(op), literal_len);
        }
        ip += literal_len;
        op += literal_len;

        if ip == src_len {
            break;
        }

        if src_len - ip < 2 {
            return Err(Lz4Error::SourceExhausted);
        }
        let offset = read_le16(src, ip) as usize;
        ip += 2;
        if offset == 0 || offset > op {
            return Err(Lz4Error::MalformedInput);
        }

        let mut match_len = (token as usize) & ML_MASK;
        if match_len == ML_MASK {
            match_len = match_len
                .checked_add(read_ext_length(src, &mut ip)?)
                .ok_or(Lz4Error::MalformedInput)?;
        }
        match_len += MIN_MATCH;

        // Single bounds check for the whole match.
        if match_len > dst_len - op {
            return Err(Lz4Error::DestinationTooSmall);
        }
        // SAFETY: `1 <= offset <= op` (back-reference lands inside already
        // written output) and `op + match_len <= dst_len` were verified
        // above — the contract `copy_match` requires.
        unsafe {
            copy_match(d, op, offset, match_len);
        }
        op += match_len;

        // A well-formed block never ends in a match; a source exhausted here
        // is truncated.  This also re-establishes `ip < src_len` for the
        // token read at the top of the loop.
        if ip >= src_len {
            return Err(Lz4Error::SourceExhausted);
        }
    }

    if exact && op != dst_len {
        return Err(Lz4Error::MalformedInput);
    }
    Ok(op)
}

/// Expand a back-reference of `len` bytes ending the already-written region
/// at `op`, reading from `op - offset`.
///
/// When `offset < len` the regions overlap and the match replicates the
/// `offset`-byte pattern immediately behind the write frontier; the copy is
/// performed in chunks of at most `offset` bytes so each individual
/// `copy_nonoverlapping` is disjoint.
///
/// # Safety
/// - `1 <= offset <= op`;
/// - `op + len` does not exceed the allocation behind `d`.
#[inline(always)]
unsafe fn copy_match(d: *mut u8, op: usize, offset: usize, len: usize) {
    let dst = d.add(op);
    let src = d.add(op - offset) as *const u8;

    if offset >= len {
        // Disjoint regions: one straight copy.
        ptr::copy_nonoverlapping(src, dst, len);
        return;
    }
    if offset == 1 {
        // Run of a single repeated byte.
        ptr::write_bytes(dst, *src, len);
        return;
    }

    // Repeating pattern of period `offset`: stamp the pattern forward in
    // period-sized chunks.  Each chunk source lies entirely behind `dst`,
    // so the pairs never overlap.
    let mut written = 0;
    while written < len {
        let n = offset.min(len - written);
        ptr::copy_nonoverlapping(src, dst.add(written), n);
        written += n;
    }
}
