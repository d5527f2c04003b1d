use std::cell::RefCell;
use std::rc::Rc;

use crate::interfaces::Memory;
use crate::processor::memory::Ram;

pub type Opcode = u8;
pub type Cycles = u64;

pub type SharedMemory = Rc<RefCell<dyn Memory>>;
pub type SharedRam = Rc<RefCell<Ram>>;
