//! CPU core trait.

use crate::Bus;

/// Level of an interrupt input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// Line released.
    #[default]
    Clear,
    /// Line held active.
    Assert,
}

impl LineState {
    #[must_use]
    pub const fn is_asserted(self) -> bool {
        matches!(self, Self::Assert)
    }
}

impl From<bool> for LineState {
    fn from(asserted: bool) -> Self {
        if asserted { Self::Assert } else { Self::Clear }
    }
}

/// A CPU that executes whole instructions against a cycle budget.
///
/// The bus is passed in, not owned, so it can be shared with other
/// components and so several CPU instances can run against one host.
pub trait Cpu {
    /// Execute one instruction (including any interrupt taken at the
    /// boundary). Returns cycles consumed.
    fn step<B: Bus>(&mut self, bus: &mut B) -> u32;

    /// Run until at least `cycles` cycles have been spent. The last
    /// instruction always completes, so the result may exceed the budget.
    fn execute<B: Bus>(&mut self, bus: &mut B, cycles: i32) -> i32;

    /// Reset the CPU and load the program counter from the reset vector.
    fn reset<B: Bus>(&mut self, bus: &mut B);

    /// Drive the maskable interrupt line.
    fn set_irq_line(&mut self, state: LineState);

    /// Drive the non-maskable interrupt line. Edge triggered: the vector is
    /// taken immediately on a Clear to Assert transition.
    fn set_nmi_line<B: Bus>(&mut self, bus: &mut B, state: LineState);

    /// Get the current program counter.
    fn pc(&self) -> u16;
}
