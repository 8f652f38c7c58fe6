use crate::Block;
use block_cipher::{generic_array::typenum::U16, BlockCipher};

/// Whether a transform enciphers or deciphers.
///
/// Every block cipher invocation inside a transform runs in this direction,
/// except for the derivation of the mask table, which always encrypts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Encipher plaintext into ciphertext.
    Encrypt,
    /// Decipher ciphertext into plaintext.
    Decrypt,
}

impl Direction {
    /// Returns the direction that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }

    pub(crate) fn apply<C>(self, cipher: &C, block: &mut Block)
    where
        C: BlockCipher<BlockSize = U16>,
    {
        match self {
            Direction::Encrypt => cipher.encrypt_block(block),
            Direction::Decrypt => cipher.decrypt_block(block),
        }
    }
}
