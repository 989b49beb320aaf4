//! Error taxonomy: argument errors, usage errors, and internal invariant
//! violations, rendered as one `thiserror` enum grouped by those
//! categories in its doc comments.

use thiserror::Error;

/// Errors a [`crate::Sponge`] or the hex codec can report.
///
/// Every variant is synchronous and reported at the call site; none of
/// them leave the originating context or buffer mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// ArgumentError: `squeeze_into`'s target buffer is too short for the
    /// requested `offset + length`.
    #[error("squeeze_into target has length {target_len}, but offset {offset} + length {length} was requested")]
    BufferTooSmall {
        target_len: usize,
        offset: usize,
        length: usize,
    },

    /// ArgumentError: a hex string (in strict mode) contained a
    /// non-hex-digit character, or (in either mode) an odd number of hex
    /// digits remained after stripping.
    #[error("invalid hex input: {0}")]
    InvalidHex(&'static str),

    /// UsageError: `update` was called on a context that has already
    /// produced output.
    #[error("update called after finalization")]
    AlreadyFinalized,

    /// InternalError: an invariant that is supposed to always hold was
    /// found violated. Should be unreachable; guarded by `debug_assert!`
    /// at the point of violation, surfaced here instead of panicking so a
    /// caller sees a typed error rather than an abort.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
