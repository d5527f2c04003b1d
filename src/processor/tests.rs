#![allow(non_snake_case)]

use crate::processor::instruction::{AddressingMode, InstructionKind};
use crate::processor::instruction_set;
use crate::processor::instruction_set::INSTRUCTION_SET;
use crate::processor::internal_cpu::*;
use crate::processor::status_register::*;

#[test]
fn test_load_instruction_LDA() {
    let mut cpu = InternalCpu::default();

    instruction_set::lda(&mut cpu, 0);
    assert_eq!(cpu.acc, 0);
    assert!(cpu.sr.get(StatusFlags::ZERO));
    assert!(!cpu.sr.get(StatusFlags::NEGATIVE));

    instruction_set::lda(&mut cpu, 0x95);
    assert_eq!(cpu.acc, 0x95);
    assert!(!cpu.sr.get(StatusFlags::ZERO));
    assert!(cpu.sr.get(StatusFlags::NEGATIVE));

    instruction_set::lda(&mut cpu, 0x1234);
    assert_eq!(cpu.acc, 0x1234);
    assert!(!cpu.sr.get(StatusFlags::ZERO));
    assert!(!cpu.sr.get(StatusFlags::NEGATIVE));
}

#[test]
fn test_other_instruction_NOP() {
    let mut cpu = InternalCpu {
        acc: 0x42,
        x_reg: 0x01,
        y_reg: 0x02,
        pc: 0x0600,
        sr: StatusRegister::from(0b1000_0001),
    };

    instruction_set::nop(&mut cpu);

    assert_eq!(cpu.acc, 0x42);
    assert_eq!(cpu.x_reg, 0x01);
    assert_eq!(cpu.y_reg, 0x02);
    assert_eq!(cpu.pc, 0x0600);
    assert_eq!(cpu.sr.compose(), 0b1000_0001);
}

#[test]
fn test_instruction_set_lookup() {
    let expected = [
        (0xEA, "NOP", AddressingMode::Implied),
        (0xA9, "LDA", AddressingMode::Immediate),
        (0xAD, "LDA", AddressingMode::Absolute),
        (0xBD, "LDA", AddressingMode::AbsoluteX),
        (0xB9, "LDA", AddressingMode::AbsoluteY),
        (0xA5, "LDA", AddressingMode::ZeroPage),
    ];

    for (opcode, name, addressing_mode) in expected {
        let instruction = INSTRUCTION_SET.lookup(opcode).unwrap();
        assert_eq!(instruction.opcode, opcode);
        assert_eq!(instruction.name, name);
        assert_eq!(instruction.addressing_mode, addressing_mode);
    }
}

#[test]
fn test_instruction_set_unknown_opcodes() {
    let known = [0xEA, 0xA9, 0xAD, 0xBD, 0xB9, 0xA5];
    for opcode in 0..=0xFFu8 {
        assert_eq!(
            INSTRUCTION_SET.lookup(opcode).is_some(),
            known.contains(&opcode),
            "opcode ${opcode:0>2X}"
        );
    }
}

#[test]
fn test_instruction_kind_matches_mnemonic() {
    for opcode in [0xA9, 0xAD, 0xBD, 0xB9, 0xA5] {
        let instruction = INSTRUCTION_SET.lookup(opcode).unwrap();
        assert!(matches!(
            instruction.instruction,
            InstructionKind::InternalExecOnMemoryData(_)
        ));
    }

    let nop = INSTRUCTION_SET.lookup(0xEA).unwrap();
    assert!(matches!(nop.instruction, InstructionKind::SingleByte(_)));
}
