
use log::{debug, trace, warn};

use crate::errors::EmulatorError;
use crate::hardware::{MEMORY_SIZE, PAGE_SIZE, REGISTER_MAX, RESET_VECTOR};
use crate::processor::instruction::{AddressingMode, Instruction, InstructionKind};
use crate::processor::instruction_set::INSTRUCTION_SET;
use crate::processor::internal_cpu::InternalCpu;
use crate::processor::status_register::StatusRegister;
use crate::types::{Cycles, Opcode, SharedMemory};

use AddressingMode::*;
use InstructionKind::*;

/// MOS 6502 processor emulator.
///
/// The CPU is bound to a shared `Memory` for its whole life and counts every
/// clock cycle it spends: one per fetched byte, one per memory operand
/// resolution and one more when an indexed access crosses a page.
///
/// Only a subset of the instruction set is implemented. Executing any other
/// opcode halts the CPU.
pub struct Cpu {
    internal: InternalCpu,
    memory: SharedMemory,
    reset_vector: u16,
    cycles: Cycles,
    halted_on: Option<Opcode>,
    // set once the program counter runs past $FFFF, cleared by reset
    pc_overflowed: bool,
}

impl Cpu {
    /// Create a new CPU connected to `memory`. `reset_vector` is where the
    /// program counter points after a reset.
    pub fn new(memory: SharedMemory, reset_vector: u16) -> Self {
        Self {
            internal: InternalCpu::default(),
            memory,
            reset_vector,
            cycles: 0,
            halted_on: None,
            pc_overflowed: false,
        }
    }

    pub fn with_default_reset_vector(memory: SharedMemory) -> Self {
        Self::new(memory, RESET_VECTOR)
    }

    /// Point the program counter to the reset vector. Registers, flags and
    /// the cycle counter are kept.
    pub fn reset(&mut self) {
        self.internal.pc = self.reset_vector;
        self.pc_overflowed = false;
        debug!("CPU reset, PC set to ${:0>4X}", self.internal.pc);
    }

    /// Fetch and execute instructions until `max_cycles` cycles have been
    /// completed or an unrecognized opcode is found.
    ///
    /// The budget is checked before each instruction, so the last
    /// instruction may overshoot it. Return the total number of cycles
    /// completed by this CPU.
    pub fn execute(&mut self, max_cycles: Cycles) -> Result<Cycles, EmulatorError> {
        self.halted_on = None;
        let start = self.cycles;

        while self.cycles < max_cycles {
            if self.step()?.is_some() {
                break;
            }
        }

        debug!(
            "CPU executed {} cycles ({} total)",
            self.cycles - start,
            self.cycles
        );
        Ok(self.cycles)
    }

    /// Fetch and execute a single instruction.
    ///
    /// Return the opcode if it is not recognized. In that case nothing is
    /// executed, the fetch cycle is given back and the CPU is halted.
    pub fn step(&mut self) -> Result<Option<Opcode>, EmulatorError> {
        self.halted_on = None;
        let pc = self.internal.pc;
        let opcode = self.fetch_byte()?;

        match INSTRUCTION_SET.lookup(opcode) {
            Some(instruction) => {
                trace!("${pc:0>4X}: {instruction:?}");
                self.exec(instruction)?;
                Ok(None)
            }
            None => {
                warn!("Unrecognized opcode: ${opcode:0>2X} at ${pc:0>4X}");
                self.discard_fetch();
                self.halted_on = Some(opcode);
                Ok(Some(opcode))
            }
        }
    }

    /// Program counter. After running past $FFFF it reads as the wrapped
    /// value, but any further fetch fails until the next reset.
    pub fn pc(&self) -> u16 {
        self.internal.pc
    }

    pub fn accumulator(&self) -> u16 {
        self.internal.acc
    }

    /// Load `value` into the accumulator, updating Negative and Zero flags
    pub fn set_accumulator(&mut self, value: u32) -> Result<(), EmulatorError> {
        let value = Self::register_value("accumulator", value)?;
        self.internal.load_accumulator(value);
        Ok(())
    }

    pub fn x_register(&self) -> u16 {
        self.internal.x_reg
    }

    pub fn set_x_register(&mut self, value: u32) -> Result<(), EmulatorError> {
        self.internal.x_reg = Self::register_value("X register", value)?;
        Ok(())
    }

    pub fn y_register(&self) -> u16 {
        self.internal.y_reg
    }

    pub fn set_y_register(&mut self, value: u32) -> Result<(), EmulatorError> {
        self.internal.y_reg = Self::register_value("Y register", value)?;
        Ok(())
    }

    pub fn status(&self) -> &StatusRegister {
        &self.internal.sr
    }

    pub fn status_mut(&mut self) -> &mut StatusRegister {
        &mut self.internal.sr
    }

    pub fn cycles_completed(&self) -> Cycles {
        self.cycles
    }

    /// Opcode that halted the last `execute` call, if any
    pub fn halted_on(&self) -> Option<Opcode> {
        self.halted_on
    }

    fn register_value(target: &'static str, value: u32) -> Result<u16, EmulatorError> {
        u16::try_from(value).map_err(|_| EmulatorError::ValueOverflow {
            target,
            value,
            max: REGISTER_MAX,
        })
    }

    // Cycle accounting

    fn cycle(&mut self, count: Cycles) {
        self.cycles += count;
    }

    // The opcode fetch of an unrecognized instruction doesn't count
    fn discard_fetch(&mut self) {
        self.cycles -= 1;
    }

    // Memory access

    fn memory_read_byte(&self, address: u16) -> Result<u8, EmulatorError> {
        self.memory.borrow().read_byte(address)
    }

    fn memory_read_word(&self, address: u16) -> Result<u16, EmulatorError> {
        self.memory.borrow().read_word(address)
    }

    fn fetch_address(&self) -> Result<u16, EmulatorError> {
        if self.pc_overflowed {
            return Err(EmulatorError::MemoryAccessError {
                address: MEMORY_SIZE + self.internal.pc as usize,
                memory_size: self.memory.borrow().size(),
            });
        }
        Ok(self.internal.pc)
    }

    fn advance_pc(&mut self, count: u16) {
        let (pc, overflowed) = self.internal.pc.overflowing_add(count);
        self.internal.pc = pc;
        self.pc_overflowed |= overflowed;
    }

    fn fetch_byte(&mut self) -> Result<u8, EmulatorError> {
        let data = self.memory_read_byte(self.fetch_address()?)?;
        self.advance_pc(1);
        self.cycle(1);
        Ok(data)
    }

    fn fetch_word(&mut self) -> Result<u16, EmulatorError> {
        let data = self.memory_read_word(self.fetch_address()?)?;
        self.advance_pc(2);
        self.cycle(2);
        Ok(data)
    }

    fn read_word_at(&mut self, address: u16) -> Result<u16, EmulatorError> {
        let data = self.memory_read_word(address)?;
        self.cycle(1);
        Ok(data)
    }

    fn read_word_indexed(&mut self, base: u16, offset: u16) -> Result<u16, EmulatorError> {
        // Carrying out of the low byte costs an extra cycle. The boundary is
        // strictly above $100: an exact $100 low byte sum is not penalized.
        if (base & 0x00FF) as u32 + offset as u32 > PAGE_SIZE as u32 {
            self.cycle(1);
        }

        let address = base
            .checked_add(offset)
            .ok_or_else(|| EmulatorError::MemoryAccessError {
                address: base as usize + offset as usize,
                memory_size: self.memory.borrow().size(),
            })?;
        self.read_word_at(address)
    }

    // Execution

    fn exec(&mut self, instruction: Instruction) -> Result<(), EmulatorError> {
        match instruction.instruction {
            SingleByte(fun) => {
                self.load(instruction.addressing_mode)?;
                fun(&mut self.internal);
            }
            InternalExecOnMemoryData(fun) => {
                let data = self.load(instruction.addressing_mode)?;
                fun(&mut self.internal, data);
            }
        }
        Ok(())
    }

    /// Resolve the operand of the current instruction, consuming its bytes
    /// and cycles.
    fn load(&mut self, addr_mode: AddressingMode) -> Result<u16, EmulatorError> {
        let data = match addr_mode {
            Implied => {
                // no operand, one internal cycle
                self.cycle(1);
                0
            }
            Immediate => self.fetch_byte()?.into(),
            ZeroPage => {
                let address = self.fetch_byte()?.into();
                self.read_word_at(address)?
            }
            Absolute => {
                let address = self.fetch_word()?;
                self.read_word_at(address)?
            }
            AbsoluteX => {
                let base = self.fetch_word()?;
                self.read_word_indexed(base, self.internal.x_reg)?
            }
            AbsoluteY => {
                let base = self.fetch_word()?;
                self.read_word_indexed(base, self.internal.y_reg)?
            }
        };
        Ok(data)
    }
}
