//! Key types for AES-256.

use crate::block::Block;
use crate::error::CipherError;

/// AES-256 key size in bytes.
pub const KEY_LEN: usize = 32;

/// AES-256 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes256Key(pub [u8; KEY_LEN]);

impl Aes256Key {
    /// Wraps a key slice, rejecting any length other than 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength { got: bytes.len() })?;
        Ok(Self(key))
    }
}

impl From<[u8; KEY_LEN]> for Aes256Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-256: the 60-word schedule materialized as
/// 15 16-byte round-key blocks (initial AddRoundKey plus 14 rounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 15]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_enforces_key_length() {
        assert!(Aes256Key::from_slice(&[0u8; 32]).is_ok());
        assert_eq!(
            Aes256Key::from_slice(&[0u8; 31]),
            Err(CipherError::InvalidKeyLength { got: 31 })
        );
        assert_eq!(
            Aes256Key::from_slice(&[0u8; 33]),
            Err(CipherError::InvalidKeyLength { got: 33 })
        );
    }
}
