//! Checked LZ4 block decompression.
//!
//! # Security boundary
//!
//! This is the fully bounds-checked decode path: every read from the source
//! and every write to the destination is validated against the declared
//! region before the access happens.  Malformed, truncated, or adversarial
//! input must come back as a typed [`Lz4Error`] — never a panic, never a
//! write outside `dst`.
//!
//! The whole module is safe Rust; the compiler-enforced slice bounds are the
//! second line of defence behind the explicit checks.

use crate::block::format::{read_ext_length, read_le16, MIN_MATCH, ML_MASK};
use crate::error::Lz4Error;

/// Decompress a full LZ4 block into `dst`, which is treated as a capacity.
///
/// Returns the number of bytes written.  Bytes of `dst` beyond the returned
/// count are never touched.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    decode(src, dst, false)
}

/// Decompress a block whose exact decompressed size is already known.
///
/// `dst.len()` must equal that size; a block that decodes to anything else
/// is reported as malformed.  This is the entry point exercised hardest by
/// the corruption tests, since a hostile block can claim any size it likes.
pub fn decompress_known_size(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    decode(src, dst, true)
}

/// Shared decode loop for both entry points.
///
/// `exact` selects known-size mode: the block must fill `dst` exactly.
fn decode(src: &[u8], dst: &mut [u8], exact: bool) -> Result<usize, Lz4Error> {
    let mut ip: usize = 0; // source cursor
    let mut op: usize = 0; // destination cursor

    if src.is_empty() {
        // A block always contains at least one token.
        return Err(Lz4Error::SourceExhausted);
    }

    loop {
        // 1. Token.
        let token = *src.get(ip).ok_or(Lz4Error::SourceExhausted)?;
        ip += 1;

        // 2. Literal length, with extension when the nibble saturates.
        let mut literal_len = (token >> 4) as usize;
        if literal_len == ML_MASK {
            literal_len = literal_len
                .checked_add(read_ext_length(src, &mut ip)?)
                .ok_or(Lz4Error::MalformedInput)?;
        }

        // 3. Literal run.
        let lit_src_end = ip
            .checked_add(literal_len)
            .ok_or(Lz4Error::MalformedInput)?;
        if lit_src_end > src.len() {
            return Err(Lz4Error::SourceExhausted);
        }
        let lit_dst_end = op
            .checked_add(literal_len)
            .ok_or(Lz4Error::DestinationTooSmall)?;
        if lit_dst_end > dst.len() {
            return Err(Lz4Error::DestinationTooSmall);
        }
        dst[op..lit_dst_end].copy_from_slice(&src[ip..lit_src_end]);
        ip = lit_src_end;
        op = lit_dst_end;

        // 4. A literal run that exhausts the source is the final sequence.
        if ip == src.len() {
            break;
        }

        // 5. Match offset: 2 bytes little-endian, 1..=65535, and never
        //    before the start of the output produced so far.
        if ip + 2 > src.len() {
            return Err(Lz4Error::SourceExhausted);
        }
        let offset = read_le16(src, ip) as usize;
        ip += 2;
        if offset == 0 || offset > op {
            return Err(Lz4Error::MalformedInput);
        }

        // 6. Match length, plus the fixed minimum-match bias.
        let mut match_len = (token as usize) & ML_MASK;
        if match_len == ML_MASK {
            match_len = match_len
                .checked_add(read_ext_length(src, &mut ip)?)
                .ok_or(Lz4Error::MalformedInput)?;
        }
        match_len += MIN_MATCH;

        let match_end = op
            .checked_add(match_len)
            .ok_or(Lz4Error::DestinationTooSmall)?;
        if match_end > dst.len() {
            return Err(Lz4Error::DestinationTooSmall);
        }

        // 7. Forward, position-by-position copy.  When offset < match_len
        //    the regions overlap and the match replicates its own output
        //    (offset 1 produces a run of one repeated byte), so a bulk
        //    memmove would be wrong here.
        let mut from = op - offset;
        while op < match_end {
            dst[op] = dst[from];
            op += 1;
            from += 1;
        }
    }

    if exact && op != dst.len() {
        // Known-size mode: the block claimed a different size than it holds.
        return Err(Lz4Error::MalformedInput);
    }
    Ok(op)
}
