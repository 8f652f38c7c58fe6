//! Rust implementation of EME (ECB-Mix-ECB), the wide-block tweakable
//! enciphering mode described by Halevi and Rogaway in
//! [A Parallelizable Enciphering Mode](https://eprint.iacr.org/2003/147.pdf).
//!
//! EME turns a 16-byte block cipher into a cipher over messages of 1 to
//! [`MAX_BLOCKS`] blocks. The whole message is enciphered as one unit:
//! changing any bit of the plaintext or the tweak changes every block of the
//! ciphertext. A typical use is encrypting disk sectors in place with the
//! sector number as the tweak.
//!
//! # Example
//!
//! ```rust
//! # use aes::Aes256;
//! # use block_cipher::{generic_array::GenericArray, NewBlockCipher};
//! # use eme_transform::Eme;
//! #
//! const KEY: [u8; 32] = [0; 32];
//!
//! let cipher = Aes256::new(GenericArray::from_slice(&KEY));
//! let eme = Eme::new(&cipher);
//!
//! let mut tweak = [0; 16];
//! tweak[..8].copy_from_slice(&42_u64.to_le_bytes());
//!
//! let mut sector = [0xAB_u8; 512];
//! eme.encrypt(&tweak, &mut sector).unwrap();
//! assert!(sector.chunks(16).all(|block| block != &[0xAB; 16][..]));
//! eme.decrypt(&tweak, &mut sector).unwrap();
//! assert_eq!(&sector[..], &[0xAB; 512][..]);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]

mod direction;
mod eme;
mod error;
mod gf;
mod mask;

pub use crate::{
    direction::Direction,
    eme::{transform, Eme},
    error::Error,
};

use block_cipher::generic_array::{typenum::U16, GenericArray};

/// Size in bytes of a block of the underlying cipher, and of the tweak.
pub const BLOCK_SIZE: usize = 16;

/// Maximum number of blocks in a message, one less than eight times the
/// block size.
pub const MAX_BLOCKS: usize = 8 * BLOCK_SIZE - 1;

/// A single cipher block.
pub type Block = GenericArray<u8, U16>;
