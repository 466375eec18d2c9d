//! Block representation helpers.

use crate::error::CipherError;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes, column-major: byte `i` sits in row `i % 4`,
/// column `i / 4` of the state grid.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Converts a slice into a [`Block`], rejecting any length other than 16.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, CipherError> {
    let block: Block = bytes
        .try_into()
        .map_err(|_| CipherError::InvalidBlockLength { got: bytes.len() })?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let mut block: Block = *b"sixteen byte blk";
        let mask: Block = [0x5a; 16];
        let original = block;
        xor_in_place(&mut block, &mask);
        assert_ne!(block, original);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }

    #[test]
    fn from_slice_accepts_exactly_sixteen_bytes() {
        assert_eq!(block_from_slice(&[0u8; 16]), Ok([0u8; 16]));
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(CipherError::InvalidBlockLength { got: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(CipherError::InvalidBlockLength { got: 17 })
        );
    }
}
