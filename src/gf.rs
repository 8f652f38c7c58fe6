use crate::Block;

/// Reduction constant for x^128 + x^7 + x^2 + x + 1.
const REDUCTION: u8 = 0x87;

/// Multiply by 2 (the field generator) in GF(2^128).
///
/// The block is a little-endian 128-bit value: each byte's top bit carries
/// into the bottom bit of the next byte, and the top bit of the last byte
/// wraps around as the reduction constant in the first byte.
pub fn mul_by_two(input: &Block) -> Block {
    let mut out = Block::default();
    let mut carry = 0;
    for (lhs, &rhs) in out.iter_mut().zip(input.iter()) {
        *lhs = (rhs << 1) | carry;
        carry = rhs >> 7;
    }
    if carry != 0 {
        out[0] ^= REDUCTION;
    }
    out
}

pub fn mul_by_two_in_place(block: &mut Block) {
    *block = mul_by_two(block);
}

pub fn xor_slice(dst: &mut [u8], src: &[u8]) {
    assert_eq!(
        dst.len(),
        src.len(),
        "destination and source slices have different lengths"
    );
    for (lhs, &rhs) in dst.iter_mut().zip(src.iter()) {
        *lhs ^= rhs;
    }
}
