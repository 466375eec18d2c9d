//! AES-256 key schedule and single-block encryption.
//!
//! Only the forward cipher is provided: the OFB construction layered on top
//! of this crate generates keystream with block *encryption* for both
//! directions, so the inverse cipher is never needed.

use crate::block::Block;
use crate::key::{Aes256Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

/// Round constants: 0x01 repeatedly doubled in GF(2^8), applied to the top
/// byte of the schedule word. AES-256 consumes the first seven.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Number of 32-bit words in an AES-256 key.
const NK: usize = 8;

/// Number of rounds for AES-256.
const ROUNDS: usize = 14;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 256-bit key into 15 round keys.
///
/// The schedule is 60 big-endian words: the first eight are the key itself;
/// word `i` is `w[i-8] ^ temp`, where `temp` is `w[i-1]` passed through the
/// schedule core every eighth word and through SubWord alone at the half-way
/// offset (`i % 8 == 4`, the extra substitution specific to 256-bit keys).
pub fn expand_key(key: &Aes256Key) -> RoundKeys {
    let mut w = [0u32; 4 * (ROUNDS + 1)];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in NK..w.len() {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / NK) - 1]) << 24);
        } else if i % NK == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - NK] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round skips MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}
