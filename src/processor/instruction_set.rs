use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::processor::instruction::{AddressingMode, Instruction, InstructionKind};
use crate::processor::internal_cpu::InternalCpu;
use crate::types::Opcode;

use AddressingMode::*;
use InstructionKind::*;

/// Opcode table shared by every CPU. Built on first use and never mutated.
pub static INSTRUCTION_SET: Lazy<InstructionSet> = Lazy::new(InstructionSet::new);

pub struct InstructionSet {
    instruction_set: HashMap<Opcode, Instruction>,
}

impl InstructionSet {
    #[rustfmt::skip]
    pub fn new() -> Self {
        let instructions = [
            // Transfer instructions
            Instruction {
                name: "LDA",
                opcode: 0xA9,
                instruction: InternalExecOnMemoryData(lda),
                addressing_mode: Immediate,
            },
            Instruction {
                name: "LDA",
                opcode: 0xA5,
                instruction: InternalExecOnMemoryData(lda),
                addressing_mode: ZeroPage,
            },
            Instruction {
                name: "LDA",
                opcode: 0xAD,
                instruction: InternalExecOnMemoryData(lda),
                addressing_mode: Absolute,
            },
            Instruction {
                name: "LDA",
                opcode: 0xBD,
                instruction: InternalExecOnMemoryData(lda),
                addressing_mode: AbsoluteX,
            },
            Instruction {
                name: "LDA",
                opcode: 0xB9,
                instruction: InternalExecOnMemoryData(lda),
                addressing_mode: AbsoluteY,
            },

            // Other
            Instruction {
                name: "NOP",
                opcode: 0xEA,
                instruction: SingleByte(nop),
                addressing_mode: Implied,
            },
        ];

        let instruction_set = instructions
            .into_iter()
            .map(|instruction| (instruction.opcode, instruction))
            .collect();

        Self { instruction_set }
    }

    pub fn lookup(&self, opcode: Opcode) -> Option<Instruction> {
        self.instruction_set.get(&opcode).copied()
    }
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self::new()
    }
}

// Instruction Set
// ---------------

// Transfer instructions

/// LDA - Load Accumulator with Memory
///
/// Operation:
/// M -> A
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn lda(cpu: &mut InternalCpu, operand: u16) {
    cpu.load_accumulator(operand);
}

// Other

/// NOP - No Operation
///
/// Operation:
/// ---
///
/// Status Register
/// N Z C I D V
/// - - - - - -
pub fn nop(_: &mut InternalCpu) {}
