//! Core traits and types shared between CPU cores and their hosts.
//!
//! A host owns the memory map (`Bus`) and drives CPUs through `Cpu`.
//! CPUs never own the bus; they borrow it for each call.

mod bus;
mod cpu;
mod observable;

pub use bus::{Bus, PHYSICAL_SPACE, SimpleBus};
pub use cpu::{Cpu, LineState};
pub use observable::{Observable, Value};
