//! Output Feedback (OFB) mode over the workspace's AES-256 core.
//!
//! OFB turns the block cipher into a synchronous stream cipher: the cipher
//! repeatedly encrypts its own previous output, starting from the IV, and the
//! resulting keystream is XORed into the data. Because only the keystream
//! ever passes through the block cipher, encryption and decryption are the
//! same operation and the output always has the length of the input.
//!
//! This crate does not authenticate ciphertexts; integrity protection is a
//! caller concern.
//!
//! # Example
//! ```
//! use aesofb_stream::stream_transform;
//!
//! let key = [0x42u8; 32];
//! let iv = [0x24u8; 16];
//! let message = b"attack at dawn";
//!
//! let ciphertext = stream_transform(&key, &iv, message).unwrap();
//! let recovered = stream_transform(&key, &iv, &ciphertext).unwrap();
//! assert_eq!(recovered, message);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use aes_core::{encrypt_block, expand_key, Aes256Key, Block, CipherError, RoundKeys, BLOCK_LEN};

/// OFB keystream generator.
///
/// Holds the expanded round keys and the feedback register. The register
/// starts as the IV and is replaced by each full 16-byte keystream block in
/// turn; a cursor tracks how much of the current block has been consumed, so
/// callers may stream data through in chunks of any size without changing
/// the keystream.
pub struct Ofb {
    round_keys: RoundKeys,
    /// The IV before the first refill, afterwards the latest keystream block.
    block: Block,
    /// Consumed bytes of `block`; `BLOCK_LEN` forces a refill.
    pos: usize,
}

impl Ofb {
    /// Creates a generator from a typed key and IV.
    pub fn new(key: &Aes256Key, iv: &Block) -> Self {
        Self::with_round_keys(expand_key(key), iv)
    }

    /// Creates a generator from an already expanded key schedule.
    ///
    /// The schedule is read-only, so one expansion can serve any number of
    /// independent streams under the same key.
    pub fn with_round_keys(round_keys: RoundKeys, iv: &Block) -> Self {
        Self {
            round_keys,
            block: *iv,
            pos: BLOCK_LEN,
        }
    }

    /// Creates a generator from raw slices, validating both lengths.
    pub fn from_slices(key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        let key = Aes256Key::from_slice(key)?;
        let iv: Block = iv
            .try_into()
            .map_err(|_| CipherError::InvalidIvLength { got: iv.len() })?;
        Ok(Self::new(&key, &iv))
    }

    /// XORs the next `data.len()` keystream bytes into `data` in place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        // Drain the unconsumed tail of the current keystream block first.
        let take = (BLOCK_LEN - self.pos).min(data.len());
        for (d, k) in data[..take].iter_mut().zip(&self.block[self.pos..]) {
            *d ^= *k;
        }
        self.pos += take;

        for chunk in data[take..].chunks_mut(BLOCK_LEN) {
            // Feedback takes the whole keystream block, even when the chunk
            // consumes only a prefix of it.
            self.block = encrypt_block(&self.block, &self.round_keys);
            for (d, k) in chunk.iter_mut().zip(self.block.iter()) {
                *d ^= *k;
            }
            self.pos = chunk.len();
        }
    }
}

/// Encrypts or decrypts `data` under AES-256-OFB in one call.
///
/// The operation is its own inverse: applying it twice with the same key and
/// IV returns the original bytes. The output length always equals
/// `data.len()`, including the empty case. Fails with
/// [`CipherError::InvalidKeyLength`] or [`CipherError::InvalidIvLength`]
/// before touching any data.
pub fn stream_transform(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CipherError> {
    let mut ofb = Ofb::from_slices(key, iv)?;
    let mut out = data.to_vec();
    ofb.apply_keystream(&mut out);
    Ok(out)
}
