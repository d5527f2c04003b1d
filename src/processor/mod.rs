pub mod cpu;
pub mod memory;
pub mod status_register;

#[cfg(test)]
mod tests;

mod instruction;
mod instruction_set;
mod internal_cpu;
