//! Public-key boot image decryption for the Atari Lynx.
//!
//! The console verifies its boot loader with a fixed 408-bit RSA modulus
//! and public exponent 3. This crate reproduces that pipeline bit for bit:
//! a Montgomery modular-exponentiation engine over fixed-width big-endian
//! byte operands, the ROM's double-and-add cubing shortcut, and the chunked
//! decoding protocol that unpacks a signed 410-byte image into the
//! plaintext loader.
//!
//! Two entry points cover the whole surface: [`mod_exp`] for generic
//! fixed-width modular exponentiation and [`lynx_decrypt`] for full-image
//! decryption. The published key material and a known-good image pair live
//! in [`keys`]; [`hex`] handles the operand text format used by the
//! `lynxdec` harness.
//!
//! Nothing here is constant-time, deliberately: the point is fidelity to
//! the legacy hardware, quirks included.

pub mod bignum;
mod cube;
pub mod hex;
pub mod keys;
mod loader;
mod montgomery;

pub use bignum::{Bignum, OPERAND_LEN};
pub use loader::{lynx_decrypt, DecodeStatus, IMAGE_LEN};
pub use montgomery::mod_exp;
