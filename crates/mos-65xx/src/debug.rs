//! Debugger register access.
//!
//! Registers are addressed by numeric id so a front end can drive them from
//! a table. Negative ids are special: `-1` is the PC of the instruction in
//! flight and `-2 - n` is the n-th 16-bit word up the stack, which lets a
//! debugger walk return addresses without executing anything.

use emu_core::{Bus, Observable, Value};

use crate::flags::U;
use crate::{Error, M65xx, Mmu, Status};

/// Highest stack slot reachable through a register id.
pub const MAX_STACK_SLOT: u16 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// PC at the start of the current instruction.
    PrevPc,
    /// The 16-bit word at `SP + 2n`.
    StackContents(u16),
    Pc,
    Sp,
    P,
    A,
    X,
    Y,
    Z,
    B,
    Ea,
    Zp,
    NmiState,
    IrqState,
    MemLow,
    MemHigh,
    /// Derived bank base of one MMU region.
    Mem(u8),
}

impl Register {
    #[must_use]
    pub const fn name(self) -> &'static str {
        const MEM: [&str; 8] = ["MEM0", "MEM1", "MEM2", "MEM3", "MEM4", "MEM5", "MEM6", "MEM7"];
        match self {
            Register::PrevPc => "PPC",
            Register::StackContents(_) => "SP+",
            Register::Pc => "PC",
            Register::Sp => "SP",
            Register::P => "P",
            Register::A => "A",
            Register::X => "X",
            Register::Y => "Y",
            Register::Z => "Z",
            Register::B => "B",
            Register::Ea => "EA",
            Register::Zp => "ZP",
            Register::NmiState => "NMI",
            Register::IrqState => "IRQ",
            Register::MemLow => "LOW",
            Register::MemHigh => "HIGH",
            Register::Mem(region) => MEM[(region & 7) as usize],
        }
    }
}

impl TryFrom<i32> for Register {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        let register = match id {
            -1 => Register::PrevPc,
            1 => Register::Pc,
            2 => Register::Sp,
            3 => Register::P,
            4 => Register::A,
            5 => Register::X,
            6 => Register::Y,
            7 => Register::Z,
            8 => Register::B,
            9 => Register::Ea,
            10 => Register::Zp,
            11 => Register::NmiState,
            12 => Register::IrqState,
            13 => Register::MemLow,
            14 => Register::MemHigh,
            15..=22 => Register::Mem((id - 15) as u8),
            _ if id <= -2 && -2 - id <= i32::from(MAX_STACK_SLOT) => {
                Register::StackContents((-2 - id) as u16)
            }
            _ => return Err(Error::UnknownRegister(id)),
        };
        Ok(register)
    }
}

impl From<Register> for i32 {
    fn from(register: Register) -> Self {
        match register {
            Register::PrevPc => -1,
            Register::StackContents(n) => -2 - i32::from(n),
            Register::Pc => 1,
            Register::Sp => 2,
            Register::P => 3,
            Register::A => 4,
            Register::X => 5,
            Register::Y => 6,
            Register::Z => 7,
            Register::B => 8,
            Register::Ea => 9,
            Register::Zp => 10,
            Register::NmiState => 11,
            Register::IrqState => 12,
            Register::MemLow => 13,
            Register::MemHigh => 14,
            Register::Mem(region) => 15 + i32::from(region & 7),
        }
    }
}

impl M65xx {
    fn check_register(&self, register: Register) -> Result<(), Error> {
        let present = match register {
            Register::Z | Register::B => self.variant.has_extended_registers(),
            Register::MemLow | Register::MemHigh | Register::Mem(_) => self.variant.has_mmu(),
            _ => true,
        };
        if present {
            Ok(())
        } else {
            Err(Error::UnsupportedRegister {
                register: register.name(),
                variant: self.variant,
            })
        }
    }

    fn stack_slot(&self, slot: u16) -> u16 {
        self.regs.sp.wrapping_add(slot.wrapping_mul(2))
    }

    /// Read a register. Stack slots are read through the bus (and the MMU).
    pub fn get_register(&self, bus: &mut impl Bus, register: Register) -> Result<u32, Error> {
        self.check_register(register)?;
        let value = match register {
            Register::PrevPc => u32::from(self.regs.ppc),
            Register::StackContents(slot) => u32::from(self.read_word(bus, self.stack_slot(slot))),
            Register::Pc => u32::from(self.regs.pc),
            Register::Sp => u32::from(self.regs.sp),
            Register::P => u32::from(self.regs.p.0),
            Register::A => u32::from(self.regs.a),
            Register::X => u32::from(self.regs.x),
            Register::Y => u32::from(self.regs.y),
            Register::Z => u32::from(self.regs.z),
            Register::B => u32::from(self.regs.b),
            Register::Ea => u32::from(self.regs.ea),
            Register::Zp => u32::from(self.regs.zp),
            Register::NmiState => u32::from(self.nmi_state),
            Register::IrqState => u32::from(self.irq_state),
            Register::MemLow => u32::from(self.mmu.low()),
            Register::MemHigh => u32::from(self.mmu.high()),
            Register::Mem(region) => self.mmu.bank_base(usize::from(region)),
        };
        Ok(value)
    }

    /// Write a register. Values are truncated to the register's width.
    /// Writing a selector recomputes the bank bases; the bases themselves
    /// are read-only.
    pub fn set_register(
        &mut self,
        bus: &mut impl Bus,
        register: Register,
        value: u32,
    ) -> Result<(), Error> {
        self.check_register(register)?;
        let extended = self.variant.has_extended_registers();
        match register {
            Register::PrevPc => self.regs.ppc = value as u16,
            Register::StackContents(slot) => {
                self.write_word(bus, self.stack_slot(slot), value as u16);
            }
            Register::Pc => self.regs.pc = value as u16,
            Register::Sp if extended => self.regs.sp = value as u16,
            Register::Sp => self.regs.set_s(value as u8),
            Register::P if extended => self.regs.p = Status(value as u8),
            Register::P => self.regs.p = Status(value as u8 | U),
            Register::A => self.regs.a = value as u8,
            Register::X => self.regs.x = value as u8,
            Register::Y => self.regs.y = value as u8,
            Register::Z => self.regs.z = value as u8,
            Register::B => self.regs.b = value as u8,
            Register::Ea => self.regs.ea = value as u16,
            Register::Zp => self.regs.zp = value as u16,
            Register::NmiState => self.nmi_state = value != 0,
            Register::IrqState => self.irq_state = value != 0,
            Register::MemLow => self.mmu = Mmu::from_selectors(value as u16, self.mmu.high()),
            Register::MemHigh => self.mmu = Mmu::from_selectors(self.mmu.low(), value as u16),
            Register::Mem(_) => return Err(Error::ReadOnlyRegister(register.name())),
        }
        Ok(())
    }
}

const QUERY_PATHS: &[&str] = &[
    "cpu.variant",
    "cpu.pc",
    "cpu.ppc",
    "cpu.sp",
    "cpu.p",
    "cpu.flags",
    "cpu.a",
    "cpu.x",
    "cpu.y",
    "cpu.z",
    "cpu.b",
    "cpu.ea",
    "cpu.zp",
    "cpu.pending_irq",
    "cpu.after_cli",
    "cpu.nmi",
    "cpu.irq",
    "cpu.icount",
    "mmu.low",
    "mmu.high",
];

impl Observable for M65xx {
    fn query(&self, path: &str) -> Option<Value> {
        let value = match path {
            "cpu.variant" => Value::Text(self.variant.to_string()),
            "cpu.pc" => self.regs.pc.into(),
            "cpu.ppc" => self.regs.ppc.into(),
            "cpu.sp" => self.regs.sp.into(),
            "cpu.p" => self.regs.p.0.into(),
            "cpu.flags" => Value::Text(self.regs.p.to_string()),
            "cpu.a" => self.regs.a.into(),
            "cpu.x" => self.regs.x.into(),
            "cpu.y" => self.regs.y.into(),
            "cpu.z" if self.variant.has_extended_registers() => self.regs.z.into(),
            "cpu.b" if self.variant.has_extended_registers() => self.regs.b.into(),
            "cpu.ea" => self.regs.ea.into(),
            "cpu.zp" => self.regs.zp.into(),
            "cpu.pending_irq" => self.pending_irq.into(),
            "cpu.after_cli" => self.after_cli.into(),
            "cpu.nmi" => self.nmi_state.into(),
            "cpu.irq" => self.irq_state.into(),
            "cpu.icount" => self.icount.into(),
            "mmu.low" if self.variant.has_mmu() => self.mmu.low().into(),
            "mmu.high" if self.variant.has_mmu() => self.mmu.high().into(),
            _ => {
                let region = path.strip_prefix("mmu.mem")?.parse::<usize>().ok()?;
                if !self.variant.has_mmu() || region > 7 {
                    return None;
                }
                self.mmu.bank_base(region).into()
            }
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}
