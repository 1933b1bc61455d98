//! Opcode dispatch tables.
//!
//! Each variant gets an immutable 256-entry table mapping an opcode byte to
//! `(operation, addressing mode, base cycles)`. The tables are built at
//! compile time by patching the one before:
//!
//! ```text
//! 6502 (+ 2A03) -> 65SC02 -> 65C02 -> 65CE02 -> 4510
//! ```
//!
//! Base cycles exclude the variable penalties (page cross on indexed reads,
//! branch taken, decimal mode on the 65C02), which are added at run time.

/// Addressing modes across the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No operand.
    Imp,
    /// Operates on A.
    Acc,
    /// `#$nn`
    Imm,
    /// `#$nnnn` (PHW)
    Imw,
    /// `$nn` (base page on the 65CE02)
    Zpg,
    /// `$nn,X`
    Zpx,
    /// `$nn,Y`
    Zpy,
    /// `$nnnn`
    Abs,
    /// `$nnnn,X`
    Abx,
    /// `$nnnn,Y`
    Aby,
    /// `($nnnn)` (JMP, JSR)
    Ind,
    /// `($nnnn,X)` (JMP, JSR)
    Iax,
    /// `($nn,X)`
    Izx,
    /// `($nn),Y`
    Izy,
    /// `($nn)` (65C02)
    Izp,
    /// `($nn),Z` (65CE02)
    Izz,
    /// `($nn,SP),Y` (65CE02)
    Isy,
    /// 8-bit branch offset.
    Rel,
    /// 16-bit branch offset (65CE02).
    Rlw,
    /// `$nn,$rr` (BBR/BBS)
    Zrl,
}

impl Mode {
    /// Operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            Mode::Imp | Mode::Acc => 0,
            Mode::Imm
            | Mode::Zpg
            | Mode::Zpx
            | Mode::Zpy
            | Mode::Izx
            | Mode::Izy
            | Mode::Izp
            | Mode::Izz
            | Mode::Isy
            | Mode::Rel => 1,
            Mode::Imw
            | Mode::Abs
            | Mode::Abx
            | Mode::Aby
            | Mode::Ind
            | Mode::Iax
            | Mode::Rlw
            | Mode::Zrl => 2,
        }
    }
}

/// Operations across the family, including the stable and unstable NMOS
/// undocumented opcodes.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,

    // NMOS undocumented
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Sbx, Las, Sha,
    Shx, Shy, Tas, Ane, Lxa, Jam,

    // 65SC02 / 65C02
    Bra, Phx, Phy, Plx, Ply, Stz, Trb, Tsb,
    Rmb(u8), Smb(u8), Bbr(u8), Bbs(u8),

    // 65CE02
    Cle, See, Tsy, Tys, Taz, Tza, Tab, Tba, Inz, Dez, Ldz, Cpz, Phz, Plz,
    Neg, Asr, Asw, Row, Inw, Dew, Phw, Bsr, Rtn, Aug,

    // 4510
    Map,
}

impl Op {
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        const RMB: [&str; 8] = ["RMB0", "RMB1", "RMB2", "RMB3", "RMB4", "RMB5", "RMB6", "RMB7"];
        const SMB: [&str; 8] = ["SMB0", "SMB1", "SMB2", "SMB3", "SMB4", "SMB5", "SMB6", "SMB7"];
        const BBR: [&str; 8] = ["BBR0", "BBR1", "BBR2", "BBR3", "BBR4", "BBR5", "BBR6", "BBR7"];
        const BBS: [&str; 8] = ["BBS0", "BBS1", "BBS2", "BBS3", "BBS4", "BBS5", "BBS6", "BBS7"];
        match self {
            Op::Adc => "ADC",
            Op::And => "AND",
            Op::Asl => "ASL",
            Op::Bcc => "BCC",
            Op::Bcs => "BCS",
            Op::Beq => "BEQ",
            Op::Bit => "BIT",
            Op::Bmi => "BMI",
            Op::Bne => "BNE",
            Op::Bpl => "BPL",
            Op::Brk => "BRK",
            Op::Bvc => "BVC",
            Op::Bvs => "BVS",
            Op::Clc => "CLC",
            Op::Cld => "CLD",
            Op::Cli => "CLI",
            Op::Clv => "CLV",
            Op::Cmp => "CMP",
            Op::Cpx => "CPX",
            Op::Cpy => "CPY",
            Op::Dec => "DEC",
            Op::Dex => "DEX",
            Op::Dey => "DEY",
            Op::Eor => "EOR",
            Op::Inc => "INC",
            Op::Inx => "INX",
            Op::Iny => "INY",
            Op::Jmp => "JMP",
            Op::Jsr => "JSR",
            Op::Lda => "LDA",
            Op::Ldx => "LDX",
            Op::Ldy => "LDY",
            Op::Lsr => "LSR",
            Op::Nop => "NOP",
            Op::Ora => "ORA",
            Op::Pha => "PHA",
            Op::Php => "PHP",
            Op::Pla => "PLA",
            Op::Plp => "PLP",
            Op::Rol => "ROL",
            Op::Ror => "ROR",
            Op::Rti => "RTI",
            Op::Rts => "RTS",
            Op::Sbc => "SBC",
            Op::Sec => "SEC",
            Op::Sed => "SED",
            Op::Sei => "SEI",
            Op::Sta => "STA",
            Op::Stx => "STX",
            Op::Sty => "STY",
            Op::Tax => "TAX",
            Op::Tay => "TAY",
            Op::Tsx => "TSX",
            Op::Txa => "TXA",
            Op::Txs => "TXS",
            Op::Tya => "TYA",
            Op::Slo => "SLO",
            Op::Rla => "RLA",
            Op::Sre => "SRE",
            Op::Rra => "RRA",
            Op::Sax => "SAX",
            Op::Lax => "LAX",
            Op::Dcp => "DCP",
            Op::Isc => "ISC",
            Op::Anc => "ANC",
            Op::Alr => "ALR",
            Op::Arr => "ARR",
            Op::Sbx => "SBX",
            Op::Las => "LAS",
            Op::Sha => "SHA",
            Op::Shx => "SHX",
            Op::Shy => "SHY",
            Op::Tas => "TAS",
            Op::Ane => "ANE",
            Op::Lxa => "LXA",
            Op::Jam => "JAM",
            Op::Bra => "BRA",
            Op::Phx => "PHX",
            Op::Phy => "PHY",
            Op::Plx => "PLX",
            Op::Ply => "PLY",
            Op::Stz => "STZ",
            Op::Trb => "TRB",
            Op::Tsb => "TSB",
            Op::Rmb(bit) => RMB[(bit & 7) as usize],
            Op::Smb(bit) => SMB[(bit & 7) as usize],
            Op::Bbr(bit) => BBR[(bit & 7) as usize],
            Op::Bbs(bit) => BBS[(bit & 7) as usize],
            Op::Cle => "CLE",
            Op::See => "SEE",
            Op::Tsy => "TSY",
            Op::Tys => "TYS",
            Op::Taz => "TAZ",
            Op::Tza => "TZA",
            Op::Tab => "TAB",
            Op::Tba => "TBA",
            Op::Inz => "INZ",
            Op::Dez => "DEZ",
            Op::Ldz => "LDZ",
            Op::Cpz => "CPZ",
            Op::Phz => "PHZ",
            Op::Plz => "PLZ",
            Op::Neg => "NEG",
            Op::Asr => "ASR",
            Op::Asw => "ASW",
            Op::Row => "ROW",
            Op::Inw => "INW",
            Op::Dew => "DEW",
            Op::Phw => "PHW",
            Op::Bsr => "BSR",
            Op::Rtn => "RTN",
            Op::Aug => "AUG",
            Op::Map => "MAP",
        }
    }

    /// Operations that only read their operand pay the indexed page-cross
    /// penalty. Stores and read-modify-write always take the long path and
    /// have it folded into their base cycles.
    #[must_use]
    pub const fn pays_page_penalty(self) -> bool {
        matches!(
            self,
            Op::Adc
                | Op::And
                | Op::Bit
                | Op::Cmp
                | Op::Eor
                | Op::Lda
                | Op::Ldx
                | Op::Ldy
                | Op::Ldz
                | Op::Nop
                | Op::Ora
                | Op::Sbc
                | Op::Lax
                | Op::Las
        )
    }
}

/// One opcode's decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub op: Op,
    pub mode: Mode,
    pub cycles: u8,
}

impl Entry {
    /// Instruction length in bytes, opcode included.
    #[must_use]
    pub const fn len(self) -> u16 {
        match self.op {
            // AUG swallows three operand bytes without using them.
            Op::Aug => 4,
            _ => 1 + self.mode.operand_len(),
        }
    }
}

pub type Table = [Entry; 256];

const fn e(op: Op, mode: Mode, cycles: u8) -> Entry {
    Entry { op, mode, cycles }
}

const fn patch(mut table: Table, patches: &[(u8, Entry)]) -> Table {
    let mut i = 0;
    while i < patches.len() {
        let (opcode, entry) = patches[i];
        table[opcode as usize] = entry;
        i += 1;
    }
    table
}

use Mode::{
    Abs, Abx, Aby, Acc, Iax, Imm, Imp, Imw, Ind, Isy, Izp, Izx, Izy, Izz, Rel, Rlw, Zpg, Zpx,
    Zpy, Zrl,
};
use Op::{
    Adc, Alr, Anc, And, Ane, Arr, Asl, Asr, Asw, Aug, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Bra, Brk,
    Bsr, Bvc, Bvs, Cle, Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Cpz, Dcp, Dec, Dew, Dex, Dey, Dez, Eor,
    Inc, Inw, Inx, Iny, Inz, Isc, Jam, Jmp, Jsr, Las, Lax, Lda, Ldx, Ldy, Ldz, Lsr, Lxa, Map, Neg,
    Nop, Ora, Pha, Phw, Php, Phx, Phy, Phz, Pla, Plp, Plx, Ply, Plz, Rla, Rol, Ror, Row, Rra, Rti,
    Rtn, Rts, Sax, Sbc, Sbx, Sec, Sed, See, Sei, Sha, Shx, Shy, Slo, Sre, Sta, Stx, Sty, Stz, Tab,
    Tas, Tax, Tay, Taz, Tba, Trb, Tsb, Tsx, Tsy, Txa, Txs, Tya, Tys, Tza,
};

// =============================================================================
// NMOS 6502
// =============================================================================

#[rustfmt::skip]
const NMOS: Table = [
    // 0x00
    e(Brk, Imp, 7), e(Ora, Izx, 6), e(Jam, Imp, 2), e(Slo, Izx, 8),
    e(Nop, Zpg, 3), e(Ora, Zpg, 3), e(Asl, Zpg, 5), e(Slo, Zpg, 5),
    e(Php, Imp, 3), e(Ora, Imm, 2), e(Asl, Acc, 2), e(Anc, Imm, 2),
    e(Nop, Abs, 4), e(Ora, Abs, 4), e(Asl, Abs, 6), e(Slo, Abs, 6),
    // 0x10
    e(Bpl, Rel, 2), e(Ora, Izy, 5), e(Jam, Imp, 2), e(Slo, Izy, 8),
    e(Nop, Zpx, 4), e(Ora, Zpx, 4), e(Asl, Zpx, 6), e(Slo, Zpx, 6),
    e(Clc, Imp, 2), e(Ora, Aby, 4), e(Nop, Imp, 2), e(Slo, Aby, 7),
    e(Nop, Abx, 4), e(Ora, Abx, 4), e(Asl, Abx, 7), e(Slo, Abx, 7),
    // 0x20
    e(Jsr, Abs, 6), e(And, Izx, 6), e(Jam, Imp, 2), e(Rla, Izx, 8),
    e(Bit, Zpg, 3), e(And, Zpg, 3), e(Rol, Zpg, 5), e(Rla, Zpg, 5),
    e(Plp, Imp, 4), e(And, Imm, 2), e(Rol, Acc, 2), e(Anc, Imm, 2),
    e(Bit, Abs, 4), e(And, Abs, 4), e(Rol, Abs, 6), e(Rla, Abs, 6),
    // 0x30
    e(Bmi, Rel, 2), e(And, Izy, 5), e(Jam, Imp, 2), e(Rla, Izy, 8),
    e(Nop, Zpx, 4), e(And, Zpx, 4), e(Rol, Zpx, 6), e(Rla, Zpx, 6),
    e(Sec, Imp, 2), e(And, Aby, 4), e(Nop, Imp, 2), e(Rla, Aby, 7),
    e(Nop, Abx, 4), e(And, Abx, 4), e(Rol, Abx, 7), e(Rla, Abx, 7),
    // 0x40
    e(Rti, Imp, 6), e(Eor, Izx, 6), e(Jam, Imp, 2), e(Sre, Izx, 8),
    e(Nop, Zpg, 3), e(Eor, Zpg, 3), e(Lsr, Zpg, 5), e(Sre, Zpg, 5),
    e(Pha, Imp, 3), e(Eor, Imm, 2), e(Lsr, Acc, 2), e(Alr, Imm, 2),
    e(Jmp, Abs, 3), e(Eor, Abs, 4), e(Lsr, Abs, 6), e(Sre, Abs, 6),
    // 0x50
    e(Bvc, Rel, 2), e(Eor, Izy, 5), e(Jam, Imp, 2), e(Sre, Izy, 8),
    e(Nop, Zpx, 4), e(Eor, Zpx, 4), e(Lsr, Zpx, 6), e(Sre, Zpx, 6),
    e(Cli, Imp, 2), e(Eor, Aby, 4), e(Nop, Imp, 2), e(Sre, Aby, 7),
    e(Nop, Abx, 4), e(Eor, Abx, 4), e(Lsr, Abx, 7), e(Sre, Abx, 7),
    // 0x60
    e(Rts, Imp, 6), e(Adc, Izx, 6), e(Jam, Imp, 2), e(Rra, Izx, 8),
    e(Nop, Zpg, 3), e(Adc, Zpg, 3), e(Ror, Zpg, 5), e(Rra, Zpg, 5),
    e(Pla, Imp, 4), e(Adc, Imm, 2), e(Ror, Acc, 2), e(Arr, Imm, 2),
    e(Jmp, Ind, 5), e(Adc, Abs, 4), e(Ror, Abs, 6), e(Rra, Abs, 6),
    // 0x70
    e(Bvs, Rel, 2), e(Adc, Izy, 5), e(Jam, Imp, 2), e(Rra, Izy, 8),
    e(Nop, Zpx, 4), e(Adc, Zpx, 4), e(Ror, Zpx, 6), e(Rra, Zpx, 6),
    e(Sei, Imp, 2), e(Adc, Aby, 4), e(Nop, Imp, 2), e(Rra, Aby, 7),
    e(Nop, Abx, 4), e(Adc, Abx, 4), e(Ror, Abx, 7), e(Rra, Abx, 7),
    // 0x80
    e(Nop, Imm, 2), e(Sta, Izx, 6), e(Nop, Imm, 2), e(Sax, Izx, 6),
    e(Sty, Zpg, 3), e(Sta, Zpg, 3), e(Stx, Zpg, 3), e(Sax, Zpg, 3),
    e(Dey, Imp, 2), e(Nop, Imm, 2), e(Txa, Imp, 2), e(Ane, Imm, 2),
    e(Sty, Abs, 4), e(Sta, Abs, 4), e(Stx, Abs, 4), e(Sax, Abs, 4),
    // 0x90
    e(Bcc, Rel, 2), e(Sta, Izy, 6), e(Jam, Imp, 2), e(Sha, Izy, 6),
    e(Sty, Zpx, 4), e(Sta, Zpx, 4), e(Stx, Zpy, 4), e(Sax, Zpy, 4),
    e(Tya, Imp, 2), e(Sta, Aby, 5), e(Txs, Imp, 2), e(Tas, Aby, 5),
    e(Shy, Abx, 5), e(Sta, Abx, 5), e(Shx, Aby, 5), e(Sha, Aby, 5),
    // 0xA0
    e(Ldy, Imm, 2), e(Lda, Izx, 6), e(Ldx, Imm, 2), e(Lax, Izx, 6),
    e(Ldy, Zpg, 3), e(Lda, Zpg, 3), e(Ldx, Zpg, 3), e(Lax, Zpg, 3),
    e(Tay, Imp, 2), e(Lda, Imm, 2), e(Tax, Imp, 2), e(Lxa, Imm, 2),
    e(Ldy, Abs, 4), e(Lda, Abs, 4), e(Ldx, Abs, 4), e(Lax, Abs, 4),
    // 0xB0
    e(Bcs, Rel, 2), e(Lda, Izy, 5), e(Jam, Imp, 2), e(Lax, Izy, 5),
    e(Ldy, Zpx, 4), e(Lda, Zpx, 4), e(Ldx, Zpy, 4), e(Lax, Zpy, 4),
    e(Clv, Imp, 2), e(Lda, Aby, 4), e(Tsx, Imp, 2), e(Las, Aby, 4),
    e(Ldy, Abx, 4), e(Lda, Abx, 4), e(Ldx, Aby, 4), e(Lax, Aby, 4),
    // 0xC0
    e(Cpy, Imm, 2), e(Cmp, Izx, 6), e(Nop, Imm, 2), e(Dcp, Izx, 8),
    e(Cpy, Zpg, 3), e(Cmp, Zpg, 3), e(Dec, Zpg, 5), e(Dcp, Zpg, 5),
    e(Iny, Imp, 2), e(Cmp, Imm, 2), e(Dex, Imp, 2), e(Sbx, Imm, 2),
    e(Cpy, Abs, 4), e(Cmp, Abs, 4), e(Dec, Abs, 6), e(Dcp, Abs, 6),
    // 0xD0
    e(Bne, Rel, 2), e(Cmp, Izy, 5), e(Jam, Imp, 2), e(Dcp, Izy, 8),
    e(Nop, Zpx, 4), e(Cmp, Zpx, 4), e(Dec, Zpx, 6), e(Dcp, Zpx, 6),
    e(Cld, Imp, 2), e(Cmp, Aby, 4), e(Nop, Imp, 2), e(Dcp, Aby, 7),
    e(Nop, Abx, 4), e(Cmp, Abx, 4), e(Dec, Abx, 7), e(Dcp, Abx, 7),
    // 0xE0
    e(Cpx, Imm, 2), e(Sbc, Izx, 6), e(Nop, Imm, 2), e(Isc, Izx, 8),
    e(Cpx, Zpg, 3), e(Sbc, Zpg, 3), e(Inc, Zpg, 5), e(Isc, Zpg, 5),
    e(Inx, Imp, 2), e(Sbc, Imm, 2), e(Nop, Imp, 2), e(Sbc, Imm, 2),
    e(Cpx, Abs, 4), e(Sbc, Abs, 4), e(Inc, Abs, 6), e(Isc, Abs, 6),
    // 0xF0
    e(Beq, Rel, 2), e(Sbc, Izy, 5), e(Jam, Imp, 2), e(Isc, Izy, 8),
    e(Nop, Zpx, 4), e(Sbc, Zpx, 4), e(Inc, Zpx, 6), e(Isc, Zpx, 6),
    e(Sed, Imp, 2), e(Sbc, Aby, 4), e(Nop, Imp, 2), e(Isc, Aby, 7),
    e(Nop, Abx, 4), e(Sbc, Abx, 4), e(Inc, Abx, 7), e(Isc, Abx, 7),
];

// =============================================================================
// 65SC02: CMOS core. Every undocumented NMOS opcode becomes a NOP of known
// length, and the new CMOS instructions fill some of the holes.
// =============================================================================

const CMOS_OPS: &[(u8, Entry)] = &[
    (0x02, e(Nop, Imm, 2)),
    (0x22, e(Nop, Imm, 2)),
    (0x42, e(Nop, Imm, 2)),
    (0x62, e(Nop, Imm, 2)),
    (0x82, e(Nop, Imm, 2)),
    (0xC2, e(Nop, Imm, 2)),
    (0xE2, e(Nop, Imm, 2)),
    (0x12, e(Ora, Izp, 5)),
    (0x32, e(And, Izp, 5)),
    (0x52, e(Eor, Izp, 5)),
    (0x72, e(Adc, Izp, 5)),
    (0x92, e(Sta, Izp, 5)),
    (0xB2, e(Lda, Izp, 5)),
    (0xD2, e(Cmp, Izp, 5)),
    (0xF2, e(Sbc, Izp, 5)),
    (0x04, e(Tsb, Zpg, 5)),
    (0x0C, e(Tsb, Abs, 6)),
    (0x14, e(Trb, Zpg, 5)),
    (0x1C, e(Trb, Abs, 6)),
    (0x1A, e(Inc, Acc, 2)),
    (0x3A, e(Dec, Acc, 2)),
    (0x34, e(Bit, Zpx, 4)),
    (0x3C, e(Bit, Abx, 4)),
    (0x89, e(Bit, Imm, 2)),
    (0x5A, e(Phy, Imp, 3)),
    (0x7A, e(Ply, Imp, 4)),
    (0xDA, e(Phx, Imp, 3)),
    (0xFA, e(Plx, Imp, 4)),
    (0x64, e(Stz, Zpg, 3)),
    (0x74, e(Stz, Zpx, 4)),
    (0x9C, e(Stz, Abs, 4)),
    (0x9E, e(Stz, Abx, 5)),
    (0x6C, e(Jmp, Ind, 6)),
    (0x7C, e(Jmp, Iax, 6)),
    (0x80, e(Bra, Rel, 2)),
    (0x44, e(Nop, Zpg, 3)),
    (0x54, e(Nop, Zpx, 4)),
    (0xD4, e(Nop, Zpx, 4)),
    (0xF4, e(Nop, Zpx, 4)),
    (0x5C, e(Nop, Abs, 8)),
    (0xDC, e(Nop, Abs, 4)),
    (0xFC, e(Nop, Abs, 4)),
];

/// Columns 3, 7, B and F are single-cycle NOPs on the CMOS core.
const fn cmos(base: Table) -> Table {
    let mut table = base;
    let mut row = 0;
    while row < 16 {
        let high = row << 4;
        table[high | 0x03] = e(Nop, Imp, 1);
        table[high | 0x07] = e(Nop, Imp, 1);
        table[high | 0x0B] = e(Nop, Imp, 1);
        table[high | 0x0F] = e(Nop, Imp, 1);
        row += 1;
    }
    patch(table, CMOS_OPS)
}

/// Rockwell bit instructions: RMBn/SMBn in column 7, BBRn/BBSn in column F.
const fn rockwell(base: Table) -> Table {
    let mut table = base;
    let mut bit = 0;
    while bit < 8 {
        let row = (bit as usize) << 4;
        table[row | 0x07] = e(Op::Rmb(bit), Zpg, 5);
        table[row | 0x87] = e(Op::Smb(bit), Zpg, 5);
        table[row | 0x0F] = e(Op::Bbr(bit), Zrl, 5);
        table[row | 0x8F] = e(Op::Bbs(bit), Zrl, 5);
        bit += 1;
    }
    table
}

// =============================================================================
// 65CE02
// =============================================================================

const CE02_OPS: &[(u8, Entry)] = &[
    // Column 2
    (0x02, e(Cle, Imp, 2)),
    (0x12, e(Ora, Izz, 5)),
    (0x22, e(Jsr, Ind, 5)),
    (0x32, e(And, Izz, 5)),
    (0x42, e(Neg, Acc, 2)),
    (0x52, e(Eor, Izz, 5)),
    (0x62, e(Rtn, Imm, 7)),
    (0x72, e(Adc, Izz, 5)),
    (0x82, e(Sta, Isy, 6)),
    (0x92, e(Sta, Izz, 5)),
    (0xB2, e(Lda, Izz, 5)),
    (0xC2, e(Cpz, Imm, 2)),
    (0xD2, e(Cmp, Izz, 5)),
    (0xE2, e(Lda, Isy, 6)),
    (0xF2, e(Sbc, Izz, 5)),
    // Column 3
    (0x03, e(See, Imp, 2)),
    (0x13, e(Bpl, Rlw, 3)),
    (0x23, e(Jsr, Iax, 6)),
    (0x33, e(Bmi, Rlw, 3)),
    (0x43, e(Asr, Acc, 2)),
    (0x53, e(Bvc, Rlw, 3)),
    (0x63, e(Bsr, Rlw, 5)),
    (0x73, e(Bvs, Rlw, 3)),
    (0x83, e(Bra, Rlw, 3)),
    (0x93, e(Bcc, Rlw, 3)),
    (0xA3, e(Ldz, Imm, 2)),
    (0xB3, e(Bcs, Rlw, 3)),
    (0xC3, e(Dew, Zpg, 7)),
    (0xD3, e(Bne, Rlw, 3)),
    (0xE3, e(Inw, Zpg, 7)),
    (0xF3, e(Beq, Rlw, 3)),
    // Column 4
    (0x44, e(Asr, Zpg, 5)),
    (0x54, e(Asr, Zpx, 6)),
    (0xD4, e(Cpz, Zpg, 3)),
    (0xF4, e(Phw, Imw, 5)),
    // Column B
    (0x0B, e(Tsy, Imp, 2)),
    (0x1B, e(Inz, Imp, 2)),
    (0x2B, e(Tys, Imp, 2)),
    (0x3B, e(Dez, Imp, 2)),
    (0x4B, e(Taz, Imp, 2)),
    (0x5B, e(Tab, Imp, 2)),
    (0x6B, e(Tza, Imp, 2)),
    (0x7B, e(Tba, Imp, 2)),
    (0x8B, e(Sty, Abx, 5)),
    (0x9B, e(Stx, Aby, 5)),
    (0xAB, e(Ldz, Abs, 4)),
    (0xBB, e(Ldz, Abx, 4)),
    (0xCB, e(Asw, Abs, 7)),
    (0xDB, e(Phz, Imp, 3)),
    (0xEB, e(Row, Abs, 7)),
    (0xFB, e(Plz, Imp, 4)),
    // Column C
    (0x5C, e(Aug, Imp, 4)),
    (0xDC, e(Cpz, Abs, 4)),
    (0xFC, e(Phw, Abs, 7)),
    // STZ stores the Z register. Z is zero out of reset, so 65C02 code
    // that never touches Z sees the old behaviour.
    (0x64, e(Stz, Zpg, 3)),
    (0x74, e(Stz, Zpx, 4)),
    (0x9C, e(Stz, Abs, 4)),
    (0x9E, e(Stz, Abx, 5)),
];

const TABLE_SC02: Table = cmos(NMOS);
const TABLE_C02: Table = rockwell(TABLE_SC02);
const TABLE_CE02: Table = patch(TABLE_C02, CE02_OPS);

/// 6502 and 2A03.
pub static TABLE_6502: Table = NMOS;
pub static TABLE_65SC02: Table = TABLE_SC02;
pub static TABLE_65C02: Table = TABLE_C02;
pub static TABLE_65CE02: Table = TABLE_CE02;
pub static TABLE_4510: Table = patch(TABLE_CE02, &[(0x5C, e(Map, Imp, 3))]);
