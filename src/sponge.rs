//! The absorb/pad/squeeze sponge state machine: `Sponge<RATE>` wraps a
//! Keccak-p[1600, 12] state with the rate/separation-byte/buffer/cursor
//! bookkeeping a sponge context needs, exposing both a streaming `update`
//! and a `squeeze`/`squeeze_into` that can be called repeatedly to form a
//! continuous output stream.
//!
//! Buffering discipline in `update` follows the classic sponge-absorb
//! shape (fill the pending partial block first, then consume whole
//! rate-sized blocks straight out of the caller's slice, then stash any
//! new remainder) but keeps the pending bytes in an explicit buffer field
//! rather than writing straight into the state, so the buffer length
//! invariant stays visible as a plain field rather than being derived.

use crate::error::Error;
use crate::hex;
use crate::lanes::{read_state_bytes, xor_block, xor_byte};
use crate::permute::{keccak_p1600_12, LANES};

/// An absorb/pad/squeeze sponge context over Keccak-p[1600, 12], with a
/// compile-time rate `RATE` (in bytes) and a runtime separation byte.
///
/// `RATE` must be in `(0, 200)`; the two public aliases [`crate::TurboShake128`]
/// and [`crate::TurboShake256`] fix it to 168 and 136 respectively.
#[derive(Clone)]
pub struct Sponge<const RATE: usize> {
    state: [u64; LANES],
    sep: u8,
    buf: [u8; RATE],
    buf_len: usize,
    finalized: bool,
    /// Next unread byte position within the current output block.
    /// Consulted only after finalization; `RATE` means "next read
    /// requires a fresh permutation".
    cursor: usize,
}

impl<const RATE: usize> Sponge<RATE> {
    /// Creates a fresh, unfinalized context with the given domain
    /// separation byte.
    pub(crate) fn new(sep: u8) -> Self {
        debug_assert!(RATE > 0 && RATE < LANES * 8, "rate must be in (0, 200)");
        Sponge {
            state: [0u64; LANES],
            sep,
            buf: [0u8; RATE],
            buf_len: 0,
            finalized: false,
            cursor: 0,
        }
    }

    /// Absorbs `chunk` into the pending message. Multiple calls are
    /// indistinguishable from a single call on the concatenation of their
    /// arguments; an empty chunk is a no-op. Returns `self` so calls can
    /// be chained.
    ///
    /// Fails with [`Error::AlreadyFinalized`] if this context has already
    /// produced output.
    pub fn update(&mut self, chunk: &[u8]) -> Result<&mut Self, Error> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        debug_assert!(self.buf_len < RATE);

        let mut rest = chunk;

        if self.buf_len > 0 {
            let take = (RATE - self.buf_len).min(rest.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&rest[..take]);
            rest = &rest[take..];
            if self.buf_len + take == RATE {
                xor_block(&mut self.state, &self.buf);
                keccak_p1600_12(&mut self.state);
                self.buf_len = 0;
            } else {
                self.buf_len += take;
                debug_assert!(rest.is_empty());
                return Ok(self);
            }
        }

        while rest.len() >= RATE {
            xor_block(&mut self.state, &rest[..RATE]);
            keccak_p1600_12(&mut self.state);
            rest = &rest[RATE..];
        }

        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
        Ok(self)
    }

    /// Transitions to the squeezing phase, if not already finalized.
    /// Idempotent.
    fn finalize(&mut self) {
        if self.finalized {
            return;
        }

        self.buf[self.buf_len] = self.sep;
        self.buf_len += 1;
        xor_block(&mut self.state, &self.buf[..self.buf_len]);
        xor_byte(&mut self.state, RATE - 1, 0x80);
        keccak_p1600_12(&mut self.state);

        self.buf = [0u8; RATE];
        self.buf_len = 0;
        self.finalized = true;
        self.cursor = 0;
    }

    /// Allocates and returns `length` squeezed bytes.
    pub fn squeeze(&mut self, length: usize) -> Vec<u8> {
        let mut out = vec![0u8; length];
        self.squeeze_into(&mut out, 0, length)
            .expect("a freshly allocated buffer of exactly `length` bytes always fits");
        out
    }

    /// Writes `length` squeezed bytes into `target[offset..offset + length]`.
    ///
    /// Multiple calls form a continuous output stream:
    /// `squeeze_into` for `a` bytes then `b` bytes yields the same bytes
    /// as one call for `a + b`. Finalizes on first call if not already
    /// finalized.
    pub fn squeeze_into(
        &mut self,
        target: &mut [u8],
        offset: usize,
        length: usize,
    ) -> Result<(), Error> {
        if offset + length > target.len() {
            return Err(Error::BufferTooSmall {
                target_len: target.len(),
                offset,
                length,
            });
        }
        if self.cursor > RATE {
            return Err(Error::Internal("squeeze cursor exceeded rate"));
        }
        if !self.finalized {
            self.finalize();
        }

        let mut produced = 0;
        while produced < length {
            if self.cursor == RATE {
                keccak_p1600_12(&mut self.state);
                self.cursor = 0;
            }
            let chunk = (RATE - self.cursor).min(length - produced);
            read_state_bytes(&self.state, self.cursor, target, offset + produced, chunk);
            self.cursor += chunk;
            produced += chunk;
        }
        Ok(())
    }

    /// Squeezes `length` bytes and hex-encodes them (uppercase, no
    /// separators).
    pub fn squeeze_hex(&mut self, length: usize) -> String {
        hex::encode(&self.squeeze(length))
    }
}
