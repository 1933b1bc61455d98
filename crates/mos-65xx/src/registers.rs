//! The register file.

use serde::{Deserialize, Serialize};

use crate::Status;
use crate::flags::E;

/// 65xx register set.
///
/// A superset covering every variant. `z` and `b` only change on the
/// 65CE02/4510; elsewhere they stay zero, so base-page addressing
/// (`b:zp`) degenerates to plain zero page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    /// Program counter.
    pub pc: u16,
    /// Program counter at the start of the current instruction.
    pub ppc: u16,
    /// Stack pointer. The high byte is the stack page; it stays `$01`
    /// unless the 65CE02 `TYS` instruction or extended mode moves it.
    pub sp: u16,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Z index register (65CE02/4510).
    pub z: u8,
    /// Base page register (65CE02/4510).
    pub b: u8,
    /// Processor status flags.
    pub p: Status,
    /// Effective address of the last memory operand.
    pub ea: u16,
    /// Base-page pointer of the last indirect operand.
    pub zp: u16,
}

impl Registers {
    /// Low byte of the stack pointer (the 6502 `S` register).
    #[must_use]
    pub const fn s(&self) -> u8 {
        self.sp as u8
    }

    pub fn set_s(&mut self, value: u8) {
        self.sp = (self.sp & 0xFF00) | u16::from(value);
    }

    /// Stack page (high byte of the stack pointer).
    #[must_use]
    pub const fn stack_page(&self) -> u8 {
        (self.sp >> 8) as u8
    }

    pub fn set_stack_page(&mut self, value: u8) {
        self.sp = (u16::from(value) << 8) | (self.sp & 0x00FF);
    }

    /// Adjust the stack pointer by `delta`, honouring the E flag: confined
    /// to the current page when set, a full 16-bit counter when clear.
    pub fn adjust_sp(&mut self, delta: i16) {
        if self.p.is_set(E) {
            let low = self.s().wrapping_add_signed(delta as i8);
            self.set_s(low);
        } else {
            self.sp = self.sp.wrapping_add_signed(delta);
        }
    }

    /// Address for the next push; moves the stack pointer down.
    pub fn push_address(&mut self) -> u16 {
        let addr = self.sp;
        self.adjust_sp(-1);
        addr
    }

    /// Address for the next pull; moves the stack pointer up first.
    pub fn pull_address(&mut self) -> u16 {
        self.adjust_sp(1);
        self.sp
    }

    /// Base-page address for an 8-bit operand.
    #[must_use]
    pub const fn base_page(&self, offset: u8) -> u16 {
        ((self.b as u16) << 8) | offset as u16
    }
}
