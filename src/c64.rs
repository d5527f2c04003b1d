//! Commodore 64 abstraction.
//!
//! Wires a MOS 6502 CPU to its RAM following an `EmulatorSettings`
//! configuration. Create a `C64`, optionally poke a program into its memory
//! and `run` it for the configured cycle budget.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::errors::EmulatorError;
use crate::metrics::{Collector, Metrics};
use crate::processor::cpu::Cpu;
use crate::processor::memory::Ram;
use crate::settings::EmulatorSettings;
use crate::types::SharedRam;

pub struct C64 {
    settings: EmulatorSettings,
    cpu: Cpu,
    memory: SharedRam,
}

impl C64 {
    pub fn new(settings: EmulatorSettings) -> Self {
        let memory = Rc::new(RefCell::new(Ram::with_initial_value(
            settings.memory_size,
            settings.initial_memory_value,
        )));

        let memory_ptr = Rc::clone(&memory);
        let mut cpu = Cpu::new(memory_ptr, settings.reset_vector);
        cpu.reset();

        Self {
            settings,
            cpu,
            memory,
        }
    }

    /// Execute the CPU for the configured cycle budget and measure it
    pub fn run(&mut self) -> Result<Metrics, EmulatorError> {
        info!(
            "C64 running {} cycles from ${:0>4X}",
            self.settings.max_cycles,
            self.cpu.pc()
        );

        let mut collector = Collector::new();
        let cycles = self.cpu.execute(self.settings.max_cycles)?;
        let metrics = collector.collect(cycles);

        if let Some(opcode) = self.cpu.halted_on() {
            warn!("C64 halted on opcode ${opcode:0>2X} after {cycles} cycles");
        }

        Ok(metrics)
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn memory(&self) -> SharedRam {
        Rc::clone(&self.memory)
    }

    pub fn settings(&self) -> &EmulatorSettings {
        &self.settings
    }
}

impl Default for C64 {
    fn default() -> Self {
        Self::new(EmulatorSettings::default())
    }
}
