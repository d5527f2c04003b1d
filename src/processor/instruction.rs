use std::fmt;

use crate::processor::internal_cpu::InternalCpu;
use crate::types::Opcode;

#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: Opcode,
    pub name: &'static str,
    pub instruction: InstructionKind,
    pub addressing_mode: AddressingMode,
}

#[derive(Clone, Copy)]
pub enum InstructionKind {
    SingleByte(fn(&mut InternalCpu)),
    InternalExecOnMemoryData(fn(&mut InternalCpu, u16)),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,   // Implied Addressing
    Immediate, // Immediate Addressing
    Absolute,  // Absolute Addressing
    ZeroPage,  // Zero Page Addressing
    AbsoluteX, // Absolute Indexed Addressing (X)
    AbsoluteY, // Absolute Indexed Addressing (Y)
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ${:0>2X} ({:?})",
            self.name, self.opcode, self.addressing_mode
        )
    }
}
