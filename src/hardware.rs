//! MOS 6502 / C64 hardware constants

/// Full 16-bit address space
pub const MEMORY_SIZE: usize = 0x10000;

/// Default reset vector location
pub const RESET_VECTOR: u16 = 0xFFFC;

pub const BYTE_MAX: u16 = 0xFF;

/// Widest value the accumulator and index registers can hold
pub const REGISTER_MAX: u32 = 0xFFFF;

pub const PAGE_SIZE: u16 = 0x100;
