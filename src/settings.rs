use crate::hardware::{MEMORY_SIZE, RESET_VECTOR};
use crate::types::Cycles;

/// Emulator configuration options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmulatorSettings {
    /// Size in bytes of the RAM attached to the CPU, capped to 64 kB
    pub memory_size: usize,

    /// Value every RAM cell holds at power on
    pub initial_memory_value: u8,

    /// Address the program counter points to after a reset
    pub reset_vector: u16,

    /// Cycle budget for a run
    pub max_cycles: Cycles,
}

pub const DEFAULT_MAX_CYCLES: Cycles = 65000;

/// `LDA #$A9` repeated through the whole memory
const BENCHMARK_MEMORY_VALUE: u8 = 0xA9;

impl EmulatorSettings {
    /// Memory filled with immediate loads executed from address 0. Used to
    /// measure raw dispatch throughput.
    pub fn benchmark() -> Self {
        Self {
            initial_memory_value: BENCHMARK_MEMORY_VALUE,
            reset_vector: 0,
            ..Default::default()
        }
    }
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            memory_size: MEMORY_SIZE,
            initial_memory_value: 0,
            reset_vector: RESET_VECTOR,
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }
}
