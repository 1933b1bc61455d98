//! Table-driven disassembler.

use emu_core::Bus;

use crate::table::Mode;
use crate::{M65xx, Variant};

/// Disassemble the instruction at the start of `bytes`, which was fetched
/// from `pc`. Returns the text and the instruction length.
///
/// If `bytes` is too short for the instruction, the opcode is shown as a
/// raw `$XX` byte of length 1. Empty input gives an empty string.
#[must_use]
pub fn disassemble(variant: Variant, pc: u16, bytes: &[u8]) -> (String, u16) {
    let Some(&opcode) = bytes.first() else {
        return (String::new(), 0);
    };
    let entry = variant.table()[opcode as usize];
    let len = entry.len();
    if bytes.len() < usize::from(len) {
        return (format!("${opcode:02X}"), 1);
    }

    let byte = bytes.get(1).copied().unwrap_or_default();
    let word = u16::from_le_bytes([byte, bytes.get(2).copied().unwrap_or_default()]);
    let next = pc.wrapping_add(len);
    let mnemonic = entry.op.mnemonic();

    let operand = match entry.mode {
        Mode::Imp => String::new(),
        Mode::Acc => "A".to_string(),
        Mode::Imm => format!("#${byte:02X}"),
        Mode::Imw => format!("#${word:04X}"),
        Mode::Zpg => format!("${byte:02X}"),
        Mode::Zpx => format!("${byte:02X},X"),
        Mode::Zpy => format!("${byte:02X},Y"),
        Mode::Abs => format!("${word:04X}"),
        Mode::Abx => format!("${word:04X},X"),
        Mode::Aby => format!("${word:04X},Y"),
        Mode::Ind => format!("(${word:04X})"),
        Mode::Iax => format!("(${word:04X},X)"),
        Mode::Izx => format!("(${byte:02X},X)"),
        Mode::Izy => format!("(${byte:02X}),Y"),
        Mode::Izp => format!("(${byte:02X})"),
        Mode::Izz => format!("(${byte:02X}),Z"),
        Mode::Isy => format!("(${byte:02X},SP),Y"),
        Mode::Rel => {
            let target = next.wrapping_add_signed(i16::from(byte as i8));
            format!("${target:04X}")
        }
        Mode::Rlw => {
            let target = next.wrapping_sub(1).wrapping_add(word);
            format!("${target:04X}")
        }
        Mode::Zrl => {
            let offset = bytes.get(2).copied().unwrap_or_default() as i8;
            let target = next.wrapping_add_signed(i16::from(offset));
            format!("${byte:02X},${target:04X}")
        }
    };

    let text = if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{mnemonic} {operand}")
    };
    (text, len)
}

impl M65xx {
    /// Disassemble the instruction at logical address `pc`, reading through
    /// the bus (and the MMU on the 4510).
    pub fn disassemble(&self, bus: &mut impl Bus, pc: u16) -> (String, u16) {
        let bytes: Vec<u8> = (0..4)
            .map(|offset| self.read(bus, pc.wrapping_add(offset)))
            .collect();
        disassemble(self.variant, pc, &bytes)
    }
}
