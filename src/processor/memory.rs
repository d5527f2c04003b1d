use crate::errors::EmulatorError;
use crate::hardware::{BYTE_MAX, MEMORY_SIZE};
use crate::interfaces::Memory;

/// Flat RAM covering (part of) the address space.
pub struct Ram {
    memory: Vec<u8>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Self::with_initial_value(size, 0)
    }

    /// Create a RAM with every cell set to `value`.
    ///
    /// The address space is 16 bits wide, so `size` is capped to 64 kB.
    pub fn with_initial_value(size: usize, value: u8) -> Self {
        Self {
            memory: vec![value; size.min(MEMORY_SIZE)],
        }
    }

    /// Load `contents` array starting on `address`.
    pub fn load(&mut self, address: u16, contents: &[u8]) -> Result<(), EmulatorError> {
        let end = address as usize + contents.len();
        if end > self.memory.len() {
            return Err(EmulatorError::MemoryAccessError {
                address: end - 1,
                memory_size: self.memory.len(),
            });
        }
        self.memory[address as usize..end].copy_from_slice(contents);
        Ok(())
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}

impl Memory for Ram {
    fn read_byte(&self, address: u16) -> Result<u8, EmulatorError> {
        self.check_bounds(address as usize)?;
        Ok(self.memory[address as usize])
    }

    fn write_byte(&mut self, address: u16, data: u16) -> Result<(), EmulatorError> {
        if data > BYTE_MAX {
            return Err(EmulatorError::ValueOverflow {
                target: "memory cell",
                value: data.into(),
                max: BYTE_MAX.into(),
            });
        }
        self.check_bounds(address as usize)?;
        self.memory[address as usize] = data as u8;
        Ok(())
    }

    fn size(&self) -> usize {
        self.memory.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ram_is_zeroed() {
        let ram = Ram::default();
        assert_eq!(ram.size(), MEMORY_SIZE);
        assert!(ram.memory.iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_initial_value() {
        let ram = Ram::with_initial_value(0x800, 0xA9);
        assert_eq!(ram.size(), 0x800);
        assert_eq!(ram.read_byte(0).unwrap(), 0xA9);
        assert_eq!(ram.read_byte(0x7FF).unwrap(), 0xA9);
    }

    #[test]
    fn test_size_is_capped_to_address_space() {
        let ram = Ram::with_initial_value(MEMORY_SIZE * 2, 0xEA);
        assert_eq!(ram.size(), MEMORY_SIZE);
        assert_eq!(ram.read_byte(0xFFFF).unwrap(), 0xEA);
    }

    #[test]
    fn test_read_write_every_byte_value() {
        let mut ram = Ram::default();
        for value in 0..=0xFFu16 {
            ram.write_byte(0x4000, value).unwrap();
            assert_eq!(ram.read_byte(0x4000).unwrap(), value as u8);
        }
    }

    #[test]
    fn test_write_too_large_value() {
        let mut ram = Ram::default();
        ram.write_byte(0x4000, 0x42).unwrap();

        let error = ram.write_byte(0x4000, 0x100).unwrap_err();
        assert_eq!(
            error,
            EmulatorError::ValueOverflow {
                target: "memory cell",
                value: 0x100,
                max: 0xFF
            }
        );
        assert_eq!(ram.read_byte(0x4000).unwrap(), 0x42);
    }

    #[test]
    fn test_byte_access_out_of_bounds() {
        let mut ram = Ram::new(0x800);
        assert!(matches!(
            ram.read_byte(0x800),
            Err(EmulatorError::MemoryAccessError {
                address: 0x800,
                memory_size: 0x800
            })
        ));
        assert!(ram.write_byte(0x800, 0x42).is_err());
    }

    #[test]
    fn test_word_is_stored_little_endian() {
        let mut ram = Ram::default();
        ram.write_word(0x1000, 0x1234).unwrap();

        assert_eq!(ram.read_byte(0x1000).unwrap(), 0x34);
        assert_eq!(ram.read_byte(0x1001).unwrap(), 0x12);
        assert_eq!(ram.read_word(0x1000).unwrap(), 0x1234);
    }

    #[test]
    fn test_read_word_from_bytes() {
        let mut ram = Ram::default();
        ram.write_byte(0x1000, 0x34).unwrap();
        ram.write_byte(0x1001, 0x12).unwrap();

        assert_eq!(ram.read_word(0x1000).unwrap(), 0x1234);
    }

    #[test]
    fn test_word_round_trip_at_edges() {
        let mut ram = Ram::default();
        for (address, value) in [(0x0000, 0xBEEF), (0x00FF, 0x0180), (0xFFFE, 0xFFFF)] {
            ram.write_word(address, value).unwrap();
            assert_eq!(ram.read_word(address).unwrap(), value);
        }
    }

    #[test]
    fn test_word_access_at_last_address() {
        let mut ram = Ram::default();
        ram.write_byte(0xFFFF, 0x42).unwrap();

        assert!(matches!(
            ram.write_word(0xFFFF, 0x1234),
            Err(EmulatorError::MemoryAccessError {
                address: 0x10000,
                ..
            })
        ));
        assert!(ram.read_word(0xFFFF).is_err());

        // failed write leaves the low byte alone
        assert_eq!(ram.read_byte(0xFFFF).unwrap(), 0x42);
    }

    #[test]
    fn test_load_program() {
        let mut ram = Ram::new(0x10);
        ram.load(0x0C, &[0xA9, 0x42, 0xEA, 0xEA]).unwrap();
        assert_eq!(ram.read_word(0x0C).unwrap(), 0x42A9);
        assert_eq!(ram.read_byte(0x0F).unwrap(), 0xEA);

        assert!(ram.load(0x0E, &[0xEA, 0xEA, 0xEA]).is_err());
    }
}
