//! Arithmetic and logic on the register file.
//!
//! Every operation here is pure register arithmetic: the caller fetches the
//! operand and writes any memory result back.

use crate::flags::{C, D, N, V, Z};
use crate::{DecimalMode, Registers};

impl Registers {
    fn carry(&self) -> u8 {
        u8::from(self.p.is_set(C))
    }

    // =========================================================================
    // Add / subtract
    // =========================================================================

    /// ADC - Add with Carry. Returns true if the decimal path ran.
    pub fn adc(&mut self, value: u8, decimal: DecimalMode) -> bool {
        match decimal {
            DecimalMode::Nmos if self.p.is_set(D) => self.adc_nmos_decimal(value),
            DecimalMode::Cmos if self.p.is_set(D) => self.adc_cmos_decimal(value),
            _ => {
                self.adc_binary(value);
                return false;
            }
        }
        true
    }

    /// SBC - Subtract with Carry (borrow). Returns true if the decimal path ran.
    pub fn sbc(&mut self, value: u8, decimal: DecimalMode) -> bool {
        match decimal {
            DecimalMode::Nmos if self.p.is_set(D) => self.sbc_nmos_decimal(value),
            DecimalMode::Cmos if self.p.is_set(D) => self.sbc_cmos_decimal(value),
            _ => {
                self.sbc_binary(value);
                return false;
            }
        }
        true
    }

    fn adc_binary(&mut self, value: u8) {
        let result = u16::from(self.a) + u16::from(value) + u16::from(self.carry());
        let result8 = result as u8;

        self.p.set_if(C, result > 0xFF);
        self.p
            .set_if(V, (self.a ^ result8) & (value ^ result8) & 0x80 != 0);
        self.p.update_nz(result8);
        self.a = result8;
    }

    fn sbc_binary(&mut self, value: u8) {
        let borrow = u16::from(1 - self.carry());
        let result = u16::from(self.a)
            .wrapping_sub(u16::from(value))
            .wrapping_sub(borrow);
        let result8 = result as u8;

        self.p.set_if(C, result < 0x100);
        self.p
            .set_if(V, (self.a ^ value) & (self.a ^ result8) & 0x80 != 0);
        self.p.update_nz(result8);
        self.a = result8;
    }

    fn adc_nmos_decimal(&mut self, value: u8) {
        let a = u16::from(self.a);
        let v = u16::from(value);
        let c = u16::from(self.carry());

        let mut low = (a & 0x0F) + (v & 0x0F) + c;
        if low > 9 {
            low += 6;
        }
        let mut high = (a >> 4) + (v >> 4) + u16::from(low > 0x0F);

        // Z from the binary sum, N and V from the half-adjusted high nibble
        self.p.set_if(Z, (a + v + c) as u8 == 0);
        self.p.set_if(N, high & 0x08 != 0);
        self.p.set_if(V, !(a ^ v) & (a ^ (high << 4)) & 0x80 != 0);

        if high > 9 {
            high += 6;
        }
        self.p.set_if(C, high > 0x0F);
        self.a = ((high << 4) | (low & 0x0F)) as u8;
    }

    fn sbc_nmos_decimal(&mut self, value: u8) {
        let a = i16::from(self.a);
        let v = i16::from(value);
        let borrow = i16::from(1 - self.carry());

        let mut low = (a & 0x0F) - (v & 0x0F) - borrow;
        if low < 0 {
            low = ((low - 6) & 0x0F) - 0x10;
        }
        let mut high = (a >> 4) - (v >> 4) + if low < 0 { -1 } else { 0 };
        if high < 0 {
            high = (high - 6) & 0x0F;
        }

        // All flags from the binary difference
        let binary = a - v - borrow;
        self.p.set_if(C, binary >= 0);
        self.p.set_if(Z, binary as u8 == 0);
        self.p.set_if(N, binary & 0x80 != 0);
        self.p.set_if(V, (a ^ v) & (a ^ binary) & 0x80 != 0);

        self.a = ((high << 4) | (low & 0x0F)) as u8;
    }

    fn adc_cmos_decimal(&mut self, value: u8) {
        let a = u16::from(self.a);
        let v = u16::from(value);

        let mut low = (a & 0x0F) + (v & 0x0F) + u16::from(self.carry());
        if low > 9 {
            low += 6;
        }
        let mut high = (a >> 4) + (v >> 4) + u16::from(low > 0x0F);
        self.p.set_if(V, !(a ^ v) & (a ^ (high << 4)) & 0x80 != 0);
        if high > 9 {
            high += 6;
        }
        self.p.set_if(C, high > 0x0F);
        self.a = ((high << 4) | (low & 0x0F)) as u8;
        self.p.update_nz(self.a);
    }

    fn sbc_cmos_decimal(&mut self, value: u8) {
        let a = i16::from(self.a);
        let v = i16::from(value);
        let borrow = i16::from(1 - self.carry());

        let diff = a - v - borrow;
        let mut low = (a & 0x0F) - (v & 0x0F) - borrow;
        if low < 0 {
            low -= 6;
        }
        let mut high = (a >> 4) - (v >> 4) - i16::from(low < 0);
        if high < 0 {
            high -= 6;
        }
        self.p.set_if(C, diff >= 0);
        self.p.set_if(V, (a ^ v) & (a ^ diff) & 0x80 != 0);
        self.a = ((high << 4) | (low & 0x0F)) as u8;
        self.p.update_nz(self.a);
    }

    // =========================================================================
    // Logic, compare, shifts
    // =========================================================================

    pub fn and(&mut self, value: u8) {
        self.a &= value;
        self.p.update_nz(self.a);
    }

    pub fn ora(&mut self, value: u8) {
        self.a |= value;
        self.p.update_nz(self.a);
    }

    pub fn eor(&mut self, value: u8) {
        self.a ^= value;
        self.p.update_nz(self.a);
    }

    /// CMP/CPX/CPY/CPZ.
    pub fn compare(&mut self, register: u8, value: u8) {
        self.p.set_if(C, register >= value);
        self.p.update_nz(register.wrapping_sub(value));
    }

    /// BIT. The immediate form only touches Z.
    pub fn bit(&mut self, value: u8, immediate: bool) {
        self.p.set_if(Z, self.a & value == 0);
        if !immediate {
            self.p.set_if(N, value & 0x80 != 0);
            self.p.set_if(V, value & 0x40 != 0);
        }
    }

    pub fn asl(&mut self, value: u8) -> u8 {
        self.p.set_if(C, value & 0x80 != 0);
        let result = value << 1;
        self.p.update_nz(result);
        result
    }

    pub fn lsr(&mut self, value: u8) -> u8 {
        self.p.set_if(C, value & 0x01 != 0);
        let result = value >> 1;
        self.p.update_nz(result);
        result
    }

    pub fn rol(&mut self, value: u8) -> u8 {
        let carry_in = self.carry();
        self.p.set_if(C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.p.update_nz(result);
        result
    }

    pub fn ror(&mut self, value: u8) -> u8 {
        let carry_in = self.carry() << 7;
        self.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.p.update_nz(result);
        result
    }

    /// ASR - arithmetic shift right (bit 7 kept).
    pub fn asr(&mut self, value: u8) -> u8 {
        self.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | (value & 0x80);
        self.p.update_nz(result);
        result
    }

    pub fn inc(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.p.update_nz(result);
        result
    }

    pub fn dec(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.p.update_nz(result);
        result
    }

    /// NEG - two's complement of A.
    pub fn neg(&mut self) {
        self.a = self.a.wrapping_neg();
        self.p.update_nz(self.a);
    }

    /// TSB. Z from `A & m` before the write.
    pub fn tsb(&mut self, value: u8) -> u8 {
        self.p.set_if(Z, self.a & value == 0);
        value | self.a
    }

    /// TRB. Z from `A & m` before the write.
    pub fn trb(&mut self, value: u8) -> u8 {
        self.p.set_if(Z, self.a & value == 0);
        value & !self.a
    }

    // =========================================================================
    // 16-bit word ops
    // =========================================================================

    pub fn inw(&mut self, value: u16) -> u16 {
        let result = value.wrapping_add(1);
        self.p.update_nz16(result);
        result
    }

    pub fn dew(&mut self, value: u16) -> u16 {
        let result = value.wrapping_sub(1);
        self.p.update_nz16(result);
        result
    }

    pub fn asw(&mut self, value: u16) -> u16 {
        self.p.set_if(C, value & 0x8000 != 0);
        let result = value << 1;
        self.p.update_nz16(result);
        result
    }

    pub fn row(&mut self, value: u16) -> u16 {
        let carry_in = u16::from(self.carry());
        self.p.set_if(C, value & 0x8000 != 0);
        let result = (value << 1) | carry_in;
        self.p.update_nz16(result);
        result
    }

    // =========================================================================
    // NMOS undocumented
    // =========================================================================

    /// ANC - AND, then C mirrors N.
    pub fn anc(&mut self, value: u8) {
        self.and(value);
        self.p.set_if(C, self.a & 0x80 != 0);
    }

    /// ALR - AND, then LSR A.
    pub fn alr(&mut self, value: u8) {
        self.a &= value;
        self.a = self.lsr(self.a);
    }

    /// ARR - AND, then ROR A with its own flag rules (and a decimal quirk).
    pub fn arr(&mut self, value: u8, decimal: DecimalMode) {
        let and = self.a & value;
        let result = (and >> 1) | (self.carry() << 7);

        if decimal == DecimalMode::Nmos && self.p.is_set(D) {
            self.p.set_if(N, self.p.is_set(C));
            self.p.set_if(Z, result == 0);
            self.p.set_if(V, (result ^ and) & 0x40 != 0);

            let mut fixed = result;
            if (and & 0x0F) + (and & 0x01) > 5 {
                fixed = (fixed & 0xF0) | (fixed.wrapping_add(6) & 0x0F);
            }
            let high_fix = u16::from(and) + u16::from(and & 0x10) >= 0x60;
            if high_fix {
                fixed = fixed.wrapping_add(0x60);
            }
            self.p.set_if(C, high_fix);
            self.a = fixed;
        } else {
            self.p.update_nz(result);
            self.p.set_if(C, result & 0x40 != 0);
            self.p
                .set_if(V, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
            self.a = result;
        }
    }

    /// SBX - X = (A & X) - value, compare-style flags.
    pub fn sbx(&mut self, value: u8) {
        let and = self.a & self.x;
        self.p.set_if(C, and >= value);
        self.x = and.wrapping_sub(value);
        self.p.update_nz(self.x);
    }

    /// LAS - A, X and S all get `value & S`.
    pub fn las(&mut self, value: u8) {
        let result = value & self.s();
        self.a = result;
        self.x = result;
        self.set_s(result);
        self.p.update_nz(result);
    }

    /// ANE - `(A | $EE) & X & value`.
    pub fn ane(&mut self, value: u8) {
        self.a = (self.a | 0xEE) & self.x & value;
        self.p.update_nz(self.a);
    }

    /// LXA - `(A | $EE) & value` into A and X.
    pub fn lxa(&mut self, value: u8) {
        self.a = (self.a | 0xEE) & value;
        self.x = self.a;
        self.p.update_nz(self.a);
    }
}
