//! Emulator errors
//!
//! All errors the emulator can produce

use thiserror::Error;

/// Emulator error type
///
/// Memory and register faults are encapsulated inside this error type. An
/// unrecognized opcode is not an error, the CPU halts and reports it instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmulatorError {
    #[error(
        "Address out of bounds, index is ${address:0>4X} but memory size is ${memory_size:0>4X}"
    )]
    MemoryAccessError { address: usize, memory_size: usize },

    #[error("Value ${value:X} doesn't fit in {target}, maximum is ${max:X}")]
    ValueOverflow {
        target: &'static str,
        value: u32,
        max: u32,
    },
}
