//! Bit-level operations on register words
//!
//! Bit 0 is the least significant bit of the register.

/// Highest valid bit index in a register
pub const MAX_BIT_INDEX: u8 = 15;

/// Extract single bit from u16 value
#[inline]
pub fn extract_bit_u16(value: u16, bit_index: u8) -> bool {
    debug_assert!(bit_index <= MAX_BIT_INDEX, "Bit index out of range: {}", bit_index);
    (value & (1 << bit_index)) != 0
}

/// Return `value` with a single bit set or cleared
#[inline]
pub fn with_bit_u16(value: u16, bit_index: u8, bit: bool) -> u16 {
    debug_assert!(bit_index <= MAX_BIT_INDEX, "Bit index out of range: {}", bit_index);
    if bit {
        value | (1 << bit_index)
    } else {
        value & !(1 << bit_index)
    }
}

/// Low byte of a register
#[inline]
pub fn low_byte(value: u16) -> u8 {
    (value & 0x00FF) as u8
}
