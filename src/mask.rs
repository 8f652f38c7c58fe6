use crate::{
    gf::{mul_by_two, mul_by_two_in_place},
    Block, MAX_BLOCKS,
};
use block_cipher::{generic_array::typenum::U16, BlockCipher};

/// Per-block masks L_1..L_m, where L_1 is twice the encryption of the zero
/// block and each following entry doubles the previous one.
///
/// Entries never depend on the message or tweak, so a table built for
/// `MAX_BLOCKS` blocks is valid for every shorter message under the same key.
pub struct MaskTable {
    masks: [Block; MAX_BLOCKS],
    len: usize,
}

impl MaskTable {
    pub fn new<C>(cipher: &C, len: usize) -> Self
    where
        C: BlockCipher<BlockSize = U16>,
    {
        // The seed is an encryption regardless of direction. Deciphering
        // must strip exactly the masks that enciphering applied.
        let mut seed = Block::default();
        cipher.encrypt_block(&mut seed);
        let table = Self::from_seed(&seed, len);
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(seed.as_mut_slice());
        table
    }

    pub fn from_seed(seed: &Block, len: usize) -> Self {
        assert!(len <= MAX_BLOCKS, "mask table longer than {}", MAX_BLOCKS);

        let mut masks = [Block::default(); MAX_BLOCKS];
        let mut mask = mul_by_two(seed);
        for entry in masks[..len].iter_mut() {
            *entry = mask;
            mul_by_two_in_place(&mut mask);
        }
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(mask.as_mut_slice());

        Self { masks, len }
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.masks[..self.len]
    }
}

#[cfg(feature = "zeroize")]
impl Drop for MaskTable {
    fn drop(&mut self) {
        for mask in self.masks.iter_mut() {
            zeroize::Zeroize::zeroize(mask.as_mut_slice());
        }
    }
}
