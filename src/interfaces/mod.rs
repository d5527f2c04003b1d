use crate::errors::EmulatorError;
use crate::utils;

/// Byte addressable memory as seen by the CPU.
///
/// Words are stored little-endian: low byte at `address`, high byte at
/// `address + 1`.
pub trait Memory {
    /// Read a byte from the specified `address`
    fn read_byte(&self, address: u16) -> Result<u8, EmulatorError>;

    /// Write a byte of `data` to the specified `address`. Values wider than
    /// a byte are rejected and memory is left untouched.
    fn write_byte(&mut self, address: u16, data: u16) -> Result<(), EmulatorError>;

    /// Memory size in bytes
    fn size(&self) -> usize;

    /// Read a little-endian word starting at `address`
    fn read_word(&self, address: u16) -> Result<u16, EmulatorError> {
        let high_address = self.word_high_address(address)?;
        let lo = self.read_byte(address)?;
        let hi = self.read_byte(high_address)?;
        Ok(utils::word(lo, hi))
    }

    /// Write `data` as a little-endian word starting at `address`
    fn write_word(&mut self, address: u16, data: u16) -> Result<(), EmulatorError> {
        let high_address = self.word_high_address(address)?;
        self.write_byte(address, utils::lo(data).into())?;
        self.write_byte(high_address, utils::hi(data).into())
    }

    /// Address of the high byte of a word at `address`. Fails when it falls
    /// outside memory.
    fn word_high_address(&self, address: u16) -> Result<u16, EmulatorError> {
        let high_address = address as usize + 1;
        self.check_bounds(high_address)?;
        Ok(high_address as u16)
    }

    fn check_bounds(&self, address: usize) -> Result<(), EmulatorError> {
        if address >= self.size() {
            return Err(EmulatorError::MemoryAccessError {
                address,
                memory_size: self.size(),
            });
        }
        Ok(())
    }
}
