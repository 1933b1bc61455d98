//! Interrupt controller: IRQ, NMI and the set-overflow input.
//!
//! IRQ is level sensitive but only sampled at instruction boundaries, via
//! `pending_irq`. NMI is edge triggered and is taken immediately when the
//! line goes from clear to asserted.

use emu_core::{Bus, LineState};
use log::debug;

use crate::M65xx;
use crate::flags::{D, I, V};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for taking an IRQ or NMI.
pub const INTERRUPT_CYCLES: i32 = 7;

impl M65xx {
    /// Push PC and status, mask IRQs and jump through `vector`. D is
    /// cleared when `clear_decimal` is set.
    pub(crate) fn enter_interrupt(
        &mut self,
        bus: &mut impl Bus,
        vector: u16,
        status: u8,
        clear_decimal: bool,
    ) {
        self.push_word(bus, self.regs.pc);
        self.push(bus, status);
        self.regs.p.set(I);
        if clear_decimal {
            self.regs.p.clear(D);
        }
        self.regs.pc = self.read_word(bus, vector);
    }

    /// Consider a pending IRQ. `pending_irq` is consumed whether or not the
    /// interrupt is serviced. Returns cycles spent.
    pub(crate) fn take_irq(&mut self, bus: &mut impl Bus) -> i32 {
        self.pending_irq = false;
        if self.regs.p.is_set(I) {
            debug!("IRQ masked at {:04X}, dropped", self.regs.pc);
            return 0;
        }

        let status = self.regs.p.to_byte_irq();
        self.enter_interrupt(bus, IRQ_VECTOR, status, true);
        debug!("IRQ taken, vector {:04X}", self.regs.pc);
        self.acknowledge_irq();
        INTERRUPT_CYCLES
    }

    /// Drive the NMI line. The vector is taken on the rising edge only and
    /// its cycles are charged against the next `execute` call.
    pub(crate) fn nmi_edge(&mut self, bus: &mut impl Bus, state: LineState) {
        let asserted = state.is_asserted();
        if self.nmi_state == asserted {
            return;
        }
        self.nmi_state = asserted;
        if !asserted {
            return;
        }

        let status = self.regs.p.to_byte_irq();
        self.enter_interrupt(bus, NMI_VECTOR, status, true);
        self.icount -= INTERRUPT_CYCLES;
        debug!("NMI taken, vector {:04X}", self.regs.pc);
    }

    /// Drive the set-overflow input. V is set when the line is released.
    pub fn set_so_line(&mut self, state: LineState) {
        let asserted = state.is_asserted();
        if self.so_state && !asserted {
            self.regs.p.set(V);
        }
        self.so_state = asserted;
    }
}
