//! LZ4 block compression.
//!
//! Greedy single-pass encoder: a hash table maps each 4-byte sample to its
//! most recent position; at every step the current position is probed
//! against the table, a hit within the 64 KiB offset window is extended
//! backward into the pending literal run and forward as far as bytes keep
//! matching, and the pending literals plus the match are emitted as one
//! sequence.  Positions that find no match accumulate as literals.
//!
//! Most-recent-wins table updates double as the offset tie-break: when the
//! same 4-byte sample occurs repeatedly, the closest (smallest-offset)
//! occurrence is the one probed.
//!
//! Parsing restrictions of the block format are honored so the output is
//! decodable by any conforming decoder, including liblz4: the last
//! [`LAST_LITERALS`] bytes are always literals and no match begins within
//! [`MF_LIMIT`] bytes of the end.

use crate::block::format::{
    compress_bound, hash_sequence, read_le32, HASH_SIZE, LAST_LITERALS, MAX_DISTANCE,
    MAX_INPUT_SIZE, MF_LIMIT, MIN_LENGTH, MIN_MATCH, ML_MASK, RUN_MASK, SKIP_TRIGGER,
};
use crate::error::Lz4Error;

/// Worst-case destination size for `input_len` bytes of input.
///
/// Compressing into a buffer of at least this size cannot fail with
/// [`Lz4Error::DestinationTooSmall`].
#[inline]
pub fn max_compressed_len(input_len: usize) -> usize {
    compress_bound(input_len)
}

/// Compress `src` into `dst` as a single LZ4 block.
///
/// Returns the number of bytes written.  `dst` is a capacity; sizing it with
/// [`max_compressed_len`] always suffices, smaller buffers fail cleanly with
/// [`Lz4Error::DestinationTooSmall`].  The empty input encodes as the single
/// token byte `0x00`.
pub fn compress(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    if src.len() > MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }

    let mut op: usize = 0;

    // Inputs too short to hold any match are a single literal sequence.
    if src.len() < MIN_LENGTH {
        emit_last_literals(src, dst, &mut op)?;
        return Ok(op);
    }

    // Transient working memory, discarded at return.  Slot value 0 doubles
    // as "empty": a false hit on position 0 is filtered by the byte compare.
    let mut table = vec![0u32; HASH_SIZE];

    let mflimit = src.len() - MF_LIMIT; // last legal match start
    let match_limit = src.len() - LAST_LITERALS; // last byte a match may cover

    let mut anchor: usize = 0; // start of the pending literal run
    let mut ip: usize = 1;
    table[hash_sequence(read_le32(src, 0))] = 0;

    'outer: loop {
        // ── Find the next match ─────────────────────────────────────────────
        let mut search_nb: u32 = 1 << SKIP_TRIGGER;
        let mut forward_ip = ip;
        let candidate: usize;
        loop {
            ip = forward_ip;
            let step = (search_nb >> SKIP_TRIGGER) as usize;
            search_nb += 1;
            forward_ip = ip + step;
            if forward_ip > mflimit {
                break 'outer;
            }

            let h = hash_sequence(read_le32(src, ip));
            let cand = table[h] as usize;
            table[h] = ip as u32;

            if cand + MAX_DISTANCE >= ip && read_le32(src, cand) == read_le32(src, ip) {
                candidate = cand;
                break;
            }
        }

        // ── Extend backward into the pending literals ───────────────────────
        let mut match_pos = candidate;
        while ip > anchor && match_pos > 0 && src[ip - 1] == src[match_pos - 1] {
            ip -= 1;
            match_pos -= 1;
        }

        // ── Extend forward ──────────────────────────────────────────────────
        let match_len =
            MIN_MATCH + common_length(src, ip + MIN_MATCH, match_pos + MIN_MATCH, match_limit);

        emit_sequence(src, anchor, ip, ip - match_pos, match_len, dst, &mut op)?;
        ip += match_len;
        anchor = ip;

        if ip > mflimit {
            break;
        }

        // Refresh the table with a position inside the match so the next
        // search can reach back into it.
        table[hash_sequence(read_le32(src, ip - 2))] = (ip - 2) as u32;
    }

    // ── Flush the tail as a literal-only sequence ────────────────────────────
    emit_last_literals(&src[anchor..], dst, &mut op)?;
    Ok(op)
}

/// Count bytes equal between `pos` and `match_pos` onward, stopping at
/// `limit` (exclusive bound on `pos`).
#[inline]
fn common_length(src: &[u8], mut pos: usize, mut match_pos: usize, limit: usize) -> usize {
    let start = pos;

    // Word-at-a-time while at least 8 bytes remain.
    while pos + 8 <= limit {
        let a = u64::from_le_bytes(src[pos..pos + 8].try_into().unwrap());
        let b = u64::from_le_bytes(src[match_pos..match_pos + 8].try_into().unwrap());
        let diff = a ^ b;
        if diff != 0 {
            return pos - start + (diff.trailing_zeros() >> 3) as usize;
        }
        pos += 8;
        match_pos += 8;
    }
    while pos < limit && src[pos] == src[match_pos] {
        pos += 1;
        match_pos += 1;
    }
    pos - start
}

/// Append `byte` to `dst`, failing instead of writing past capacity.
#[inline(always)]
fn put(dst: &mut [u8], op: &mut usize, byte: u8) -> Result<(), Lz4Error> {
    if *op >= dst.len() {
        return Err(Lz4Error::DestinationTooSmall);
    }
    dst[*op] = byte;
    *op += 1;
    Ok(())
}

/// Append the extension bytes for `len` (the remainder beyond a saturated
/// nibble): 255-valued continuation bytes, then a terminating byte < 255.
#[inline]
fn put_ext_length(dst: &mut [u8], op: &mut usize, mut len: usize) -> Result<(), Lz4Error> {
    while len >= 255 {
        put(dst, op, 255)?;
        len -= 255;
    }
    put(dst, op, len as u8)
}

/// Emit one full sequence: pending literals `src[anchor..ip]`, then a match
/// of `match_len` bytes at back-reference distance `offset`.
fn emit_sequence(
    src: &[u8],
    anchor: usize,
    ip: usize,
    offset: usize,
    match_len: usize,
    dst: &mut [u8],
    op: &mut usize,
) -> Result<(), Lz4Error> {
    debug_assert!((1..=MAX_DISTANCE).contains(&offset));
    debug_assert!(match_len >= MIN_MATCH);

    let literal_len = ip - anchor;
    let ml_code = match_len - MIN_MATCH;

    let token = ((literal_len.min(RUN_MASK) as u8) << 4) | ml_code.min(ML_MASK) as u8;
    put(dst, op, token)?;

    if literal_len >= RUN_MASK {
        put_ext_length(dst, op, literal_len - RUN_MASK)?;
    }
    let lit_end = *op + literal_len;
    if lit_end > dst.len() {
        return Err(Lz4Error::DestinationTooSmall);
    }
    dst[*op..lit_end].copy_from_slice(&src[anchor..ip]);
    *op = lit_end;

    put(dst, op, (offset & 0xff) as u8)?;
    put(dst, op, (offset >> 8) as u8)?;

    if ml_code >= ML_MASK {
        put_ext_length(dst, op, ml_code - ML_MASK)?;
    }
    Ok(())
}

/// Emit the final, match-less sequence holding `literals`.
fn emit_last_literals(literals: &[u8], dst: &mut [u8], op: &mut usize) -> Result<(), Lz4Error> {
    let literal_len = literals.len();
    let token = (literal_len.min(RUN_MASK) as u8) << 4;
    put(dst, op, token)?;
    if literal_len >= RUN_MASK {
        put_ext_length(dst, op, literal_len - RUN_MASK)?;
    }
    let lit_end = *op + literal_len;
    if lit_end > dst.len() {
        return Err(Lz4Error::DestinationTooSmall);
    }
    dst[*op..lit_end].copy_from_slice(literals);
    *op = lit_end;
    Ok(())
}
