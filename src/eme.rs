use core::fmt;

use crate::{
    direction::Direction,
    gf::{mul_by_two_in_place, xor_slice},
    mask::MaskTable,
    Block, Error, BLOCK_SIZE, MAX_BLOCKS,
};
use block_cipher::{
    generic_array::{typenum::U16, GenericArray},
    BlockCipher,
};

/// Enciphers or deciphers `buf` in place as a single wide block under
/// `tweak`.
///
/// The length of `buf` must be a positive multiple of [`BLOCK_SIZE`] of at
/// most [`MAX_BLOCKS`] blocks. The mask table is derived on every call; use
/// [`Eme`] to derive it once per key instead.
///
/// # Errors
///
/// Returns [`Error::InvalidBlockCount`] if the length of `buf` is invalid, in
/// which case `buf` is left untouched and the cipher is never invoked.
///
/// # Examples
///
/// ```rust
/// # use aes::Aes128;
/// # use block_cipher::{generic_array::GenericArray, NewBlockCipher};
/// use eme_transform::{transform, Direction, Error};
///
/// let cipher = Aes128::new(GenericArray::from_slice(&[0; 16]));
/// let tweak = [0; 16];
///
/// let mut sector = [0x55_u8; 64];
/// transform(&cipher, &tweak, &mut sector, Direction::Encrypt).unwrap();
/// transform(&cipher, &tweak, &mut sector, Direction::Decrypt).unwrap();
/// assert_eq!(sector, [0x55; 64]);
///
/// // Only whole blocks can be enciphered
/// assert_eq!(
///     transform(&cipher, &tweak, &mut [0_u8; 20], Direction::Encrypt),
///     Err(Error::InvalidBlockCount)
/// );
/// ```
pub fn transform<C>(
    cipher: &C,
    tweak: &[u8; BLOCK_SIZE],
    buf: &mut [u8],
    direction: Direction,
) -> Result<(), Error>
where
    C: BlockCipher<BlockSize = U16>,
{
    let m = block_count(buf.len())?;
    let masks = MaskTable::new(cipher, m);
    eme(
        cipher,
        masks.as_slice(),
        GenericArray::from_slice(tweak),
        buf,
        direction,
    );
    Ok(())
}

/// An EME instance bound to one block cipher key.
///
/// The mask table depends only on the key, so it is computed once when the
/// instance is created and shared by every message of every length. The
/// instance is never mutated afterwards and can be used from several threads
/// at once if the cipher can.
pub struct Eme<'a, C> {
    cipher: &'a C,
    masks: MaskTable,
}

impl<'a, C> Eme<'a, C>
where
    C: BlockCipher<BlockSize = U16>,
{
    /// Creates an [`Eme`] instance for a given block cipher.
    pub fn new(cipher: &'a C) -> Self {
        Self {
            cipher,
            masks: MaskTable::new(cipher, MAX_BLOCKS),
        }
    }

    /// Encrypts the given plaintext in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockCount`] if `x` is not between 1 and
    /// [`MAX_BLOCKS`] whole blocks.
    pub fn encrypt(&self, tweak: &[u8; BLOCK_SIZE], x: &mut [u8]) -> Result<(), Error> {
        self.transform(tweak, x, Direction::Encrypt)
    }

    /// Decrypts the given ciphertext in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockCount`] if `x` is not between 1 and
    /// [`MAX_BLOCKS`] whole blocks.
    pub fn decrypt(&self, tweak: &[u8; BLOCK_SIZE], x: &mut [u8]) -> Result<(), Error> {
        self.transform(tweak, x, Direction::Decrypt)
    }

    /// Encrypts or decrypts in place according to `direction`. The output is
    /// identical to that of the free function [`transform`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockCount`] if `x` is not between 1 and
    /// [`MAX_BLOCKS`] whole blocks.
    pub fn transform(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        x: &mut [u8],
        direction: Direction,
    ) -> Result<(), Error> {
        let m = block_count(x.len())?;
        eme(
            self.cipher,
            &self.masks.as_slice()[..m],
            GenericArray::from_slice(tweak),
            x,
            direction,
        );
        Ok(())
    }
}

impl<'a, C> fmt::Debug for Eme<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Eme { .. }")
    }
}

fn block_count(len: usize) -> Result<usize, Error> {
    let m = len / BLOCK_SIZE;
    if len % BLOCK_SIZE != 0 || m == 0 || m > MAX_BLOCKS {
        return Err(Error::InvalidBlockCount);
    }
    Ok(m)
}

fn blocks(buf: &mut [u8]) -> impl Iterator<Item = &mut Block> + '_ {
    buf.chunks_exact_mut(BLOCK_SIZE)
        .map(|chunk| GenericArray::from_mut_slice(chunk))
}

/// ECB pass, mixing pass, ECB pass. Both directions share this code path and
/// differ only in which block cipher primitive is invoked.
fn eme<C>(cipher: &C, masks: &[Block], tweak: &Block, buf: &mut [u8], direction: Direction)
where
    C: BlockCipher<BlockSize = U16>,
{
    assert_eq!(
        masks.len() * BLOCK_SIZE,
        buf.len(),
        "mask table does not cover the input"
    );

    // PPP_j = E(P_j xor L_j)
    for (block, mask) in blocks(buf).zip(masks) {
        xor_slice(block, mask);
        direction.apply(cipher, block);
    }

    // MP = T xor PPP_1 xor ... xor PPP_m
    let mut mp = *tweak;
    for block in blocks(buf) {
        xor_slice(&mut mp, block);
    }

    // MC = E(MP)
    let mut mc = mp;
    direction.apply(cipher, &mut mc);

    // M = MP xor MC, doubled once more for each block after the first, and
    // CCC_j = M * 2^(j-1) xor PPP_j. The first block absorbs the sum of the
    // others so that every block depends on every other block.
    let mut mix = mp;
    xor_slice(&mut mix, &mc);
    let mut first = mc;
    xor_slice(&mut first, tweak);
    for block in blocks(buf).skip(1) {
        mul_by_two_in_place(&mut mix);
        xor_slice(block, &mix);
        xor_slice(&mut first, block);
    }
    buf[..BLOCK_SIZE].copy_from_slice(&first);

    // C_j = E(CCC_j) xor L_j
    for (block, mask) in blocks(buf).zip(masks) {
        direction.apply(cipher, block);
        xor_slice(block, mask);
    }

    #[cfg(feature = "zeroize")]
    for temp in [&mut mp, &mut mc, &mut mix, &mut first].iter_mut() {
        zeroize::Zeroize::zeroize(temp.as_mut_slice());
    }
}
