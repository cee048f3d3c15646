//! Unified error type for block compression, decompression, and backend
//! selection.
//!
//! Every backend — checked, fast, native — reports failures through this one
//! enum so callers can swap backends without touching their error handling.
//! All variants are local, recoverable conditions; no code path in this crate
//! panics on hostile input.

use thiserror::Error;

/// Errors returned by the LZ4 block codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The compressed stream is structurally invalid: a zero offset, a
    /// back-reference pointing before the start of the output produced so
    /// far, or a block that does not decode to the size it claims.
    #[error("malformed compressed input")]
    MalformedInput,

    /// Encoding or decoding would have to write past the caller-declared
    /// destination capacity.  Detected before any out-of-bounds write.
    #[error("destination buffer too small")]
    DestinationTooSmall,

    /// The source ended in the middle of a token, length extension, literal
    /// run, or offset field.  A read-side sibling of `MalformedInput`, kept
    /// distinct so read and write violations can be diagnosed separately.
    #[error("source exhausted mid-sequence")]
    SourceExhausted,

    /// The uncompressed input exceeds the maximum size a single LZ4 block
    /// can represent (`MAX_INPUT_SIZE`, 0x7E000000 bytes).
    #[error("input exceeds maximum block size")]
    InputTooLarge,

    /// The requested backend cannot be used in this environment (the native
    /// backend when the `native` feature is disabled or its probe failed).
    /// Recoverable: select a managed backend instead.
    #[error("requested backend is not available")]
    BackendUnavailable,
}
