/// Return the bit value for `value` at bit position `bit`
pub fn bv(value: u16, bit: u8) -> u16 {
    (value >> bit) & 1
}

/// Low byte of a little-endian word
pub fn lo(word: u16) -> u8 {
    (word & 0x00FF) as u8
}

/// High byte of a little-endian word
pub fn hi(word: u16) -> u8 {
    (word >> 8) as u8
}

/// Compose a word from its low and high bytes
pub fn word(lo: u8, hi: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}
