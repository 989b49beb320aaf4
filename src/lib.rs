//! TurboSHAKE128 and TurboSHAKE256: extendable output functions (XOFs)
//! built on the 12-round Keccak-p[1600] permutation, as defined by the
//! Keccak team.
//!
//! A XOF absorbs a message together with a caller-chosen domain
//! separation byte, then produces a deterministic output stream of
//! arbitrary requested length. This crate exposes both one-shot
//! (`turboshake128`/`turboshake256`) and incremental streaming
//! ([`Sponge::update`]/[`Sponge::squeeze`]) APIs.
//!
//! Keyed modes, tree hashing (KangarooTwelve), side-channel hardening,
//! and parallel lane processing are out of scope; see the crate's design
//! notes for the reasoning.
#![forbid(unsafe_code)]

mod error;
mod hex;
mod lanes;
mod permute;
mod sponge;

pub use error::Error;
pub use sponge::Sponge;

/// Rate, in bytes, of TurboSHAKE128 (128-bit security target).
pub const RATE_128: usize = 168;
/// Rate, in bytes, of TurboSHAKE256 (256-bit security target).
pub const RATE_256: usize = 136;

/// The conventional default separation byte for plain TurboSHAKE, as used
/// by all of the published seed vectors that don't specify a
/// domain-separated use.
pub const DEFAULT_SEPARATION_BYTE: u8 = 0x1F;

/// An incremental TurboSHAKE128 context. See [`Sponge`] for the streaming
/// API.
pub type TurboShake128 = Sponge<RATE_128>;
/// An incremental TurboSHAKE256 context. See [`Sponge`] for the streaming
/// API.
pub type TurboShake256 = Sponge<RATE_256>;

/// Creates a new incremental TurboSHAKE128 context with separation byte `d`.
pub fn create_turbo_shake128(d: u8) -> TurboShake128 {
    Sponge::new(d)
}

/// Creates a new incremental TurboSHAKE256 context with separation byte `d`.
pub fn create_turbo_shake256(d: u8) -> TurboShake256 {
    Sponge::new(d)
}

/// One-shot TurboSHAKE128: absorbs all of `message`, then squeezes
/// `length` bytes.
pub fn turboshake128(message: &[u8], d: u8, length: usize) -> Vec<u8> {
    let mut ctx = create_turbo_shake128(d);
    ctx.update(message).expect("a fresh context is never finalized");
    ctx.squeeze(length)
}

/// One-shot TurboSHAKE256: absorbs all of `message`, then squeezes
/// `length` bytes.
pub fn turboshake256(message: &[u8], d: u8, length: usize) -> Vec<u8> {
    let mut ctx = create_turbo_shake256(d);
    ctx.update(message).expect("a fresh context is never finalized");
    ctx.squeeze(length)
}

/// [`turboshake128`], hex-encoded (uppercase, no separators).
pub fn turboshake128_hex(message: &[u8], d: u8, length: usize) -> String {
    hex::encode(&turboshake128(message, d, length))
}

/// [`turboshake256`], hex-encoded (uppercase, no separators).
pub fn turboshake256_hex(message: &[u8], d: u8, length: usize) -> String {
    hex::encode(&turboshake256(message, d, length))
}

/// Permissive hex decode: strips non-hex characters, case-insensitive.
/// See [`hex::decode`] for the full contract.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode(s)
}

/// Strict hex decode: rejects any non-hex-digit character or odd length.
/// See [`hex::decode_strict`] for the full contract.
pub fn hex_to_bytes_strict(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode_strict(s)
}

/// Uppercase hex encode, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
