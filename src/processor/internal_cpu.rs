use crate::processor::status_register::StatusRegister;

/// Register file of the processor.
///
/// Accumulator and index registers are 16 bits wide: absolute loads move a
/// whole word into the accumulator.
#[derive(Clone, Debug, Default)]
pub struct InternalCpu {
    pub acc: u16,   // Accumulator
    pub x_reg: u16, // X register
    pub y_reg: u16, // Y register
    pub pc: u16,    // Program Counter
    pub sr: StatusRegister,
}

impl InternalCpu {
    /// Store `value` in the accumulator and update Negative and Zero from it
    pub fn load_accumulator(&mut self, value: u16) {
        self.acc = value;
        self.sr.set_from_value(self.acc);
    }
}
