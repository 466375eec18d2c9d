//! Reference AES-256 implementation used by the OFB stream layer and CLI.
//!
//! This crate intentionally mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-256.
//! - Single-block encryption.
//! - Public types and validation errors shared across the workspace.
//!
//! Only the forward cipher exists here; the workspace's OFB mode never needs
//! the inverse. The implementation aims for clarity and testability rather
//! than constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, expand_key};
pub use crate::error::CipherError;
pub use crate::key::{Aes256Key, RoundKeys, KEY_LEN};
