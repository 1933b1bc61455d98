//! The CPU: state, reset and the execution loop.

use std::fmt;

use emu_core::{Bus, Cpu, LineState};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::flags::{B, D, E, I, U, Z};
use crate::table::Table;
use crate::{Config, Mmu, Registers, Status, Variant};

/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Everything that makes up one chip's state.
///
/// A plain value: hosts running several CPUs on one core swap contexts in
/// and out with [`M65xx::context`] and [`M65xx::set_context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub variant: Variant,
    pub regs: Registers,
    /// An IRQ should be considered at the next instruction boundary.
    pub pending_irq: bool,
    /// The last instruction cleared I; hold the IRQ off for one boundary.
    pub after_cli: bool,
    pub nmi_state: bool,
    pub irq_state: bool,
    pub so_state: bool,
    pub mmu: Mmu,
    /// Remaining cycles. Negative between calls when the last instruction
    /// overshot the budget or an NMI was taken.
    pub icount: i32,
}

impl Context {
    /// Power-on state for `variant`, before the reset vector is read.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut regs = Registers {
            sp: 0x01FF,
            ..Registers::default()
        };
        regs.p = reset_status(variant, regs.p);
        Self {
            variant,
            regs,
            pending_irq: false,
            after_cli: false,
            nmi_state: false,
            irq_state: false,
            so_state: false,
            mmu: Mmu::default(),
            icount: 0,
        }
    }
}

fn reset_status(variant: Variant, old: Status) -> Status {
    match variant {
        // D is left alone by the NMOS reset sequence
        Variant::Nmos6502 | Variant::Ricoh2A03 => Status(U | I | Z | B | (old.0 & D)),
        Variant::Gte65SC02 | Variant::Wdc65C02 => Status(U | I | Z | B),
        Variant::Csg65CE02 | Variant::Csg4510 => Status(E | B | I | Z),
    }
}

/// A 65xx-family CPU.
pub struct M65xx {
    pub(crate) variant: Variant,
    pub(crate) regs: Registers,
    pub(crate) pending_irq: bool,
    pub(crate) after_cli: bool,
    pub(crate) nmi_state: bool,
    pub(crate) irq_state: bool,
    pub(crate) so_state: bool,
    pub(crate) mmu: Mmu,
    pub(crate) icount: i32,

    /// Bound from `variant`, never persisted.
    table: &'static Table,
    irq_callback: Option<Box<dyn FnMut(i32) -> i32>>,
    instance: u32,
}

impl M65xx {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut cpu = Self {
            variant,
            regs: Registers::default(),
            pending_irq: false,
            after_cli: false,
            nmi_state: false,
            irq_state: false,
            so_state: false,
            mmu: Mmu::default(),
            icount: 0,
            table: variant.table(),
            irq_callback: None,
            instance: 0,
        };
        cpu.set_context(Context::new(variant));
        cpu
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut cpu = Self::new(config.variant);
        cpu.instance = config.instance;
        cpu
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Instance number used to tag save-state fields.
    #[must_use]
    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn set_instance(&mut self, instance: u32) {
        self.instance = instance;
    }

    #[must_use]
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    #[must_use]
    pub fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    #[must_use]
    pub fn pending_irq(&self) -> bool {
        self.pending_irq
    }

    #[must_use]
    pub fn after_cli(&self) -> bool {
        self.after_cli
    }

    /// Cycle counter left by the last call (zero or negative between calls).
    #[must_use]
    pub fn icount(&self) -> i32 {
        self.icount
    }

    /// Snapshot the whole chip state.
    #[must_use]
    pub fn context(&self) -> Context {
        Context {
            variant: self.variant,
            regs: self.regs,
            pending_irq: self.pending_irq,
            after_cli: self.after_cli,
            nmi_state: self.nmi_state,
            irq_state: self.irq_state,
            so_state: self.so_state,
            mmu: self.mmu,
            icount: self.icount,
        }
    }

    /// Restore a snapshot. The dispatch table follows the context's variant.
    pub fn set_context(&mut self, context: Context) {
        self.variant = context.variant;
        self.regs = context.regs;
        self.pending_irq = context.pending_irq;
        self.after_cli = context.after_cli;
        self.nmi_state = context.nmi_state;
        self.irq_state = context.irq_state;
        self.so_state = context.so_state;
        self.mmu = context.mmu;
        self.icount = context.icount;
        self.table = context.variant.table();
    }

    /// Install the IRQ acknowledge callback. It is called with line 0 each
    /// time an IRQ is actually serviced.
    pub fn set_irq_callback(&mut self, callback: impl FnMut(i32) -> i32 + 'static) {
        self.irq_callback = Some(Box::new(callback));
    }

    pub fn clear_irq_callback(&mut self) {
        self.irq_callback = None;
    }

    pub(crate) fn acknowledge_irq(&mut self) {
        if let Some(callback) = self.irq_callback.as_mut() {
            callback(0);
        }
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// One instruction boundary to the next, including any IRQ taken on
    /// either side. Returns cycles spent; does not touch `icount`.
    fn iteration(&mut self, bus: &mut impl Bus) -> i32 {
        let mut cycles = 0;
        self.regs.ppc = self.regs.pc;

        if self.pending_irq {
            cycles += self.take_irq(bus);
        }

        let opcode = self.fetch_opcode(bus);
        let entry = self.table[opcode as usize];
        trace!(
            "{:04X}  {:02X}  {:<4} A={:02X} X={:02X} Y={:02X} Z={:02X} B={:02X} SP={:04X} P={}",
            self.regs.ppc,
            opcode,
            entry.op.mnemonic(),
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.z,
            self.regs.b,
            self.regs.sp,
            self.regs.p,
        );
        cycles += self.dispatch(bus, entry);

        if self.after_cli {
            self.after_cli = false;
            if self.irq_state {
                self.pending_irq = true;
            }
        } else if self.pending_irq {
            cycles += self.take_irq(bus);
        }

        cycles
    }
}

impl fmt::Debug for M65xx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("M65xx")
            .field("variant", &self.variant)
            .field("instance", &self.instance)
            .field("regs", &self.regs)
            .field("pending_irq", &self.pending_irq)
            .field("after_cli", &self.after_cli)
            .field("nmi_state", &self.nmi_state)
            .field("irq_state", &self.irq_state)
            .field("mmu", &self.mmu)
            .field("icount", &self.icount)
            .finish_non_exhaustive()
    }
}

impl Cpu for M65xx {
    fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.iteration(bus) as u32
    }

    fn execute<B: Bus>(&mut self, bus: &mut B, cycles: i32) -> i32 {
        // Cycles owed from the last call (overshoot, or an NMI taken in
        // between) come off this budget.
        let debt = self.icount.min(0);
        self.icount = cycles + debt;
        if debt < 0 && self.icount <= 0 {
            return 0;
        }

        let start = self.icount;
        loop {
            self.icount -= self.iteration(bus);
            if self.icount <= 0 {
                break;
            }
        }
        start - self.icount
    }

    fn reset<B: Bus>(&mut self, bus: &mut B) {
        if self.variant.has_mmu() {
            self.mmu = Mmu::default();
        }
        self.regs.pc = self.read_word(bus, RESET_VECTOR);
        self.regs.ppc = self.regs.pc;
        self.regs.sp = 0x01FF;
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.p = reset_status(self.variant, self.regs.p);
        if self.variant.has_extended_registers() {
            self.regs.z = 0;
            self.regs.b = 0;
        }
        self.pending_irq = false;
        self.after_cli = false;
        debug!(
            "{} reset: PC={:04X} P={}",
            self.variant, self.regs.pc, self.regs.p
        );
    }

    fn set_irq_line(&mut self, state: LineState) {
        self.irq_state = state.is_asserted();
        if self.irq_state {
            self.pending_irq = true;
        }
    }

    fn set_nmi_line<B: Bus>(&mut self, bus: &mut B, state: LineState) {
        self.nmi_edge(bus, state);
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::SimpleBus;

    #[test]
    fn reset_loads_vector_and_fixes_status() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFC, &[0x00, 0xC0]);
        for variant in [Variant::Nmos6502, Variant::Wdc65C02] {
            let mut cpu = M65xx::new(variant);
            cpu.regs.a = 0x55;
            cpu.reset(&mut bus);
            assert_eq!(cpu.pc(), 0xC000);
            assert_eq!(cpu.regs.sp, 0x01FF);
            assert_eq!(cpu.regs.a, 0);
            assert!(cpu.regs.p.is_set(I));
            assert!(cpu.regs.p.is_set(U));
        }
    }

    #[test]
    fn nmos_reset_keeps_decimal_flag() {
        let mut bus = SimpleBus::new();
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.p.set(D);
        cpu.reset(&mut bus);
        assert!(cpu.regs.p.is_set(D));

        let mut cpu = M65xx::new(Variant::Gte65SC02);
        cpu.regs.p.set(D);
        cpu.reset(&mut bus);
        assert!(!cpu.regs.p.is_set(D));
    }

    #[test]
    fn ce02_reset_sets_e_and_clears_extended_registers() {
        let mut bus = SimpleBus::new();
        let mut cpu = M65xx::new(Variant::Csg65CE02);
        cpu.regs.z = 9;
        cpu.regs.b = 9;
        cpu.reset(&mut bus);
        assert_eq!(cpu.regs.p, Status(E | B | I | Z));
        assert_eq!((cpu.regs.z, cpu.regs.b), (0, 0));
    }

    #[test]
    fn context_swap_rebinds_table() {
        let mut cpu = M65xx::new(Variant::Nmos6502);
        let ctx = Context::new(Variant::Csg4510);
        cpu.set_context(ctx);
        assert_eq!(cpu.variant(), Variant::Csg4510);
        assert!(std::ptr::eq(cpu.table, Variant::Csg4510.table()));
        assert_eq!(cpu.context(), ctx);
    }

    #[test]
    fn debug_output_names_variant() {
        let cpu = M65xx::new(Variant::Wdc65C02);
        assert!(format!("{cpu:?}").contains("Wdc65C02"));
    }
}
