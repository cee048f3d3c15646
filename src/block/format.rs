//! LZ4 block format model: constants, token layout, and length-extension
//! helpers shared by the encoder and both managed decoders.
//!
//! The wire format is one or more *sequences*:
//!
//! ```text
//! token | [literal length extension] | literals | offset(LE16) | [match length extension]
//! ```
//!
//! The token packs a literal-length nibble (high) and a match-length nibble
//! (low).  A nibble of 15 continues in extension bytes, each adding 0–255,
//! terminated by the first byte below 255.  The effective match length is the
//! decoded value plus [`MIN_MATCH`].  The final sequence of a block carries
//! literals only.
//!
//! See doc/lz4_Block_format.md in the reference distribution for the
//! authoritative description.

use crate::error::Lz4Error;

/// Minimum match length encoded in an LZ4 block; the bias added to every
/// decoded match-length value.
pub const MIN_MATCH: usize = 4;

/// Number of bits in the match-length nibble.
pub const ML_BITS: u32 = 4;
/// Mask for the match-length nibble (also its saturation value, 15).
pub const ML_MASK: usize = (1 << ML_BITS) - 1;
/// Mask for the literal-length nibble (also its saturation value, 15).
pub const RUN_MASK: usize = (1 << (8 - ML_BITS)) - 1;

/// Extension bytes equal to this value continue the length; anything lower
/// terminates it.
pub const EXT_CONTINUE: u8 = 255;

/// Maximum back-reference distance representable in the 2-byte offset field.
/// Offset 0 is always invalid.
pub const MAX_DISTANCE: usize = 65_535;

/// The last bytes of a block are always literals.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const LAST_LITERALS: usize = 5;

/// No match may begin within this many bytes of the end of the input.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const MF_LIMIT: usize = 12;

/// Minimum input length that may produce any match at all.
pub const MIN_LENGTH: usize = MF_LIMIT + 1;

/// Maximum input size a single block can represent (0x7E000000 bytes).
pub const MAX_INPUT_SIZE: usize = 0x7E00_0000;

// Hash-table sizing, LZ4_MEMORY_USAGE = 14 → 16 KiB of u32 slots.
pub(crate) const MEMORY_USAGE: u32 = 14;
pub(crate) const HASH_LOG: u32 = MEMORY_USAGE - 2;
pub(crate) const HASH_SIZE: usize = 1 << HASH_LOG;

/// Higher → faster on incompressible data at the cost of ratio.
pub(crate) const SKIP_TRIGGER: u32 = 6;

/// Worst-case compressed size for `input_size` bytes of input.
///
/// Returns 0 when `input_size` exceeds [`MAX_INPUT_SIZE`] (such an input is
/// not representable as a single block).
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    if input_size > MAX_INPUT_SIZE {
        0
    } else {
        input_size + input_size / 255 + 16
    }
}

/// Read a little-endian `u16` at `pos`.  Caller has verified `pos + 2` is in
/// bounds; slice indexing still backstops it.
#[inline(always)]
pub(crate) fn read_le16(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

/// Read a little-endian `u32` at `pos` (encoder match probe).
#[inline(always)]
pub(crate) fn read_le32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// 4-byte Knuth multiplicative hash, keeping the top [`HASH_LOG`] bits.
#[inline(always)]
pub(crate) fn hash_sequence(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761) >> (32 - HASH_LOG)) as usize
}

/// Decode a length extension starting at `*pos`: sum extension bytes until
/// the first one below [`EXT_CONTINUE`], advancing `*pos` past them.
///
/// Fails with `SourceExhausted` when the stream ends before a terminating
/// byte, and `MalformedInput` when the accumulated length overflows `usize`
/// (an adversarial stream of 0xFF bytes).
#[inline]
pub(crate) fn read_ext_length(src: &[u8], pos: &mut usize) -> Result<usize, Lz4Error> {
    let mut total: usize = 0;
    loop {
        let byte = *src.get(*pos).ok_or(Lz4Error::SourceExhausted)?;
        *pos += 1;
        total = total
            .checked_add(byte as usize)
            .ok_or(Lz4Error::MalformedInput)?;
        if byte != EXT_CONTINUE {
            return Ok(total);
        }
    }
}
