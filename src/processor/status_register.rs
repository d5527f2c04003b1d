use std::convert::From;
use std::fmt;

use bitflags::bitflags;

use crate::utils;

bitflags! {
    /// Processor status flags, laid out as in the status byte (NV-BDIZC)
    #[derive(Default)]
    pub struct StatusFlags: u8 {
        const NEGATIVE = 1 << 7;
        const OVERFLOW = 1 << 6;
        // reserved bit, never written by the implemented instructions
        const EXPANSION = 1 << 5;
        const BREAK = 1 << 4;
        const DECIMAL = 1 << 3;
        const INTERRUPT_DISABLE = 1 << 2;
        const ZERO = 1 << 1;
        const CARRY = 1 << 0;
    }
}

/// Status register made of eight independent flags, all cleared on
/// construction.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct StatusRegister {
    flags: StatusFlags,
}

impl StatusRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: StatusFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn set(&mut self, flag: StatusFlags) {
        self.flags.insert(flag);
    }

    pub fn clear(&mut self, flag: StatusFlags) {
        self.flags.remove(flag);
    }

    pub fn set_value(&mut self, flag: StatusFlags, condition: bool) {
        self.flags.set(flag, condition);
    }

    /// Update Zero and Negative from a loaded value. Other flags are left
    /// untouched.
    pub fn set_from_value(&mut self, value: u16) {
        self.set_value(StatusFlags::ZERO, value == 0);
        self.set_value(StatusFlags::NEGATIVE, utils::bv(value, 7) == 1);
    }

    /// Status byte, negative on bit 7 down to carry on bit 0
    pub fn compose(&self) -> u8 {
        self.flags.bits()
    }
}

impl From<u8> for StatusRegister {
    fn from(value: u8) -> Self {
        Self {
            flags: StatusFlags::from_bits_truncate(value),
        }
    }
}

impl From<StatusRegister> for u8 {
    fn from(value: StatusRegister) -> Self {
        value.compose()
    }
}

impl fmt::Debug for StatusRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusRegister({:08b})", self.compose())
    }
}
