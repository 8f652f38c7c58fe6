use core::fmt;

use block_cipher::InvalidKeyLength;

/// Errors related to EME encryption.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Input is empty, is not a whole number of blocks, or is longer than
    /// [`MAX_BLOCKS`](crate::MAX_BLOCKS) blocks.
    InvalidBlockCount,
    /// The underlying block cipher rejected its key.
    InvalidKeyLength,
}

impl From<InvalidKeyLength> for Error {
    fn from(_: InvalidKeyLength) -> Self {
        Error::InvalidKeyLength
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBlockCount => write!(
                f,
                "EME operates on 1-{} blocks of {} bytes",
                crate::MAX_BLOCKS,
                crate::BLOCK_SIZE
            ),
            Error::InvalidKeyLength => f.write_str("invalid block cipher key length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
