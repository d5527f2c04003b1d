//! Commodore 64 emulator, built around a cycle counting MOS 6502 core

mod c64;
mod errors;
mod hardware;
mod interfaces;
mod metrics;
mod processor;
mod settings;
mod types;
mod utils;

pub use c64::C64;
pub use errors::EmulatorError;
pub use hardware::{MEMORY_SIZE, RESET_VECTOR};
pub use interfaces::Memory;
pub use metrics::Metrics;
pub use processor::cpu::Cpu;
pub use processor::memory::Ram;
pub use processor::status_register::{StatusFlags, StatusRegister};
pub use settings::EmulatorSettings;
pub use types::{Cycles, Opcode, SharedMemory, SharedRam};
