//! 65xx-family CPU interpreter.
//!
//! One core covers the whole family, selected by [`Variant`]:
//!
//! - **6502** - NMOS, including the undocumented opcodes
//! - **2A03** - 6502 without decimal mode
//! - **65SC02** - CMOS core, new instructions and addressing modes
//! - **65C02** - 65SC02 plus the Rockwell bit instructions
//! - **65CE02** - Z register, base page, 16-bit stack, word operations
//! - **4510** - 65CE02 plus the MAP memory manager (1 MB physical space)
//!
//! Each variant has an immutable 256-entry dispatch table built at compile
//! time. The CPU borrows a [`Bus`](emu_core::Bus) for every call; on the
//! 4510 every access goes through the MMU first.
//!
//! ```
//! use emu_core::{Cpu, SimpleBus};
//! use mos_65xx::{M65xx, Variant};
//!
//! let mut bus = SimpleBus::new();
//! bus.load(0xFFFC, &[0x00, 0x02]);
//! bus.load(0x0200, &[0xA9, 0x05, 0x85, 0x10]); // LDA #$05 / STA $10
//!
//! let mut cpu = M65xx::new(Variant::Nmos6502);
//! cpu.reset(&mut bus);
//! let used = cpu.execute(&mut bus, 5);
//! assert_eq!(used, 5);
//! assert_eq!(bus.peek(0x10), 0x05);
//! ```

mod addressing;
mod alu;
mod config;
mod cpu;
mod debug;
mod disasm;
mod error;
mod execute;
pub mod flags;
mod interrupt;
mod mmu;
mod registers;
mod state;
mod table;
mod variant;

pub use config::Config;
pub use cpu::{Context, M65xx, RESET_VECTOR};
pub use debug::{MAX_STACK_SLOT, Register};
pub use disasm::disassemble;
pub use error::Error;
pub use flags::Status;
pub use interrupt::{INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR};
pub use mmu::{Mmu, PHYSICAL_MASK};
pub use registers::Registers;
pub use state::{FieldValue, StateField};
pub use table::{Entry, Mode, Op, Table};
pub use variant::{DecimalMode, Variant};
