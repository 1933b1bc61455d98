//! Processor status register (P).
//!
//! Bit layout, high to low: `N V E B D I Z C`. On NMOS and plain CMOS parts
//! bit 5 is unused and always reads as 1. The 65CE02 and 4510 reuse it as
//! `E`, which confines the stack to one page when set.

use serde::{Deserialize, Serialize};

/// Carry flag - set if operation resulted in carry/no borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable - when set, IRQ interrupts are ignored.
pub const I: u8 = 0x04;

/// Decimal mode - enables BCD arithmetic for ADC/SBC.
pub const D: u8 = 0x08;

/// Break flag. Pushed set by BRK/PHP, clear by IRQ/NMI.
pub const B: u8 = 0x10;

/// Unused bit on 6502/65C02 - always reads as 1.
pub const U: u8 = 0x20;

/// Stack-extend flag on 65CE02/4510 (same bit as `U`).
pub const E: u8 = U;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if result has bit 7 set.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(pub u8);

impl Status {
    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Update N and Z from an 8-bit result.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }

    /// Update N and Z from a 16-bit result (word ops).
    pub fn update_nz16(&mut self, value: u16) {
        self.set_if(N, value & 0x8000 != 0);
        self.set_if(Z, value == 0);
    }

    /// Value pushed by BRK and PHP.
    #[must_use]
    pub const fn to_byte_brk(self) -> u8 {
        self.0 | B
    }

    /// Value pushed when an IRQ or NMI is taken.
    #[must_use]
    pub const fn to_byte_irq(self) -> u8 {
        self.0 & !B
    }

    /// Status after PLP/RTI pulls `value`.
    ///
    /// B always reads back as set. With `keep_e` the current E bit survives
    /// the pull (65CE02 stack mode is only changed by CLE/SEE); otherwise
    /// bit 5 is forced on.
    #[must_use]
    pub const fn pulled(self, value: u8, keep_e: bool) -> Self {
        if keep_e {
            Self((value & !E) | (self.0 & E) | B)
        } else {
            Self(value | U | B)
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [(u8, char); 8] = [
            (N, 'N'),
            (V, 'V'),
            (E, 'E'),
            (B, 'B'),
            (D, 'D'),
            (I, 'I'),
            (Z, 'Z'),
            (C, 'C'),
        ];
        for (flag, name) in NAMES {
            let c = if self.is_set(flag) { name } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulled_keeps_e_on_extended_parts() {
        let p = Status(E | I);
        assert_eq!(p.pulled(0x00, true).0, E | B);
        assert_eq!(Status(I).pulled(E | C, true).0, B | C);
    }

    #[test]
    fn pulled_forces_unused_bit_on_plain_parts() {
        assert_eq!(Status(0).pulled(0x00, false).0, U | B);
    }

    #[test]
    fn display_lists_set_flags() {
        assert_eq!(Status(N | Z | C).to_string(), "N.....ZC");
    }
}
