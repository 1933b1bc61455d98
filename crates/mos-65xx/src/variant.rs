//! CPU variants and their feature differences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::table::{self, Table};

/// How ADC/SBC treat the D flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalMode {
    /// D flag ignored (2A03).
    Disabled,
    /// NMOS: N, V and Z come from the binary intermediate.
    Nmos,
    /// CMOS: N and Z come from the BCD result.
    Cmos,
}

/// A member of the 65xx family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// MOS 6502 (NMOS, with undocumented opcodes).
    #[serde(rename = "6502")]
    Nmos6502,
    /// Ricoh 2A03: 6502 without decimal mode.
    #[serde(rename = "2a03")]
    Ricoh2A03,
    /// GTE 65SC02: CMOS core without the Rockwell bit instructions.
    #[serde(rename = "65sc02")]
    Gte65SC02,
    /// 65C02 with RMB/SMB/BBR/BBS.
    #[serde(rename = "65c02")]
    Wdc65C02,
    /// CSG 65CE02: Z register, base page, 16-bit stack, word ops.
    #[serde(rename = "65ce02")]
    Csg65CE02,
    /// CSG 4510: 65CE02 core with the MAP memory manager.
    #[serde(rename = "4510")]
    Csg4510,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Nmos6502,
        Variant::Ricoh2A03,
        Variant::Gte65SC02,
        Variant::Wdc65C02,
        Variant::Csg65CE02,
        Variant::Csg4510,
    ];

    /// Component name used in save states.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Nmos6502 => "m6502",
            Variant::Ricoh2A03 => "n2a03",
            Variant::Gte65SC02 => "m65sc02",
            Variant::Wdc65C02 => "m65c02",
            Variant::Csg65CE02 => "m65ce02",
            Variant::Csg4510 => "m4510",
        }
    }

    /// CMOS parts clear D when taking BRK/IRQ/NMI and fix the JMP (ind) bug.
    #[must_use]
    pub const fn is_cmos(self) -> bool {
        !matches!(self, Variant::Nmos6502 | Variant::Ricoh2A03)
    }

    #[must_use]
    pub const fn decimal_mode(self) -> DecimalMode {
        match self {
            Variant::Ricoh2A03 => DecimalMode::Disabled,
            Variant::Nmos6502 => DecimalMode::Nmos,
            _ => DecimalMode::Cmos,
        }
    }

    /// Decimal ADC/SBC costs one extra cycle.
    #[must_use]
    pub const fn decimal_penalty(self) -> bool {
        matches!(self, Variant::Gte65SC02 | Variant::Wdc65C02)
    }

    /// Z and B registers, E flag, 16-bit stack pointer.
    #[must_use]
    pub const fn has_extended_registers(self) -> bool {
        matches!(self, Variant::Csg65CE02 | Variant::Csg4510)
    }

    /// Every memory access goes through the MAP translator.
    #[must_use]
    pub const fn has_mmu(self) -> bool {
        matches!(self, Variant::Csg4510)
    }

    /// The dispatch table for this variant.
    #[must_use]
    pub fn table(self) -> &'static Table {
        match self {
            Variant::Nmos6502 | Variant::Ricoh2A03 => &table::TABLE_6502,
            Variant::Gte65SC02 => &table::TABLE_65SC02,
            Variant::Wdc65C02 => &table::TABLE_65C02,
            Variant::Csg65CE02 => &table::TABLE_65CE02,
            Variant::Csg4510 => &table::TABLE_4510,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Variant::Nmos6502 => "6502",
            Variant::Ricoh2A03 => "2A03",
            Variant::Gte65SC02 => "65SC02",
            Variant::Wdc65C02 => "65C02",
            Variant::Csg65CE02 => "65CE02",
            Variant::Csg4510 => "4510",
        };
        f.write_str(label)
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix('m').unwrap_or(&lower);
        match name {
            "6502" | "6510" => Ok(Variant::Nmos6502),
            "2a03" | "n2a03" => Ok(Variant::Ricoh2A03),
            "65sc02" => Ok(Variant::Gte65SC02),
            "65c02" => Ok(Variant::Wdc65C02),
            "65ce02" => Ok(Variant::Csg65CE02),
            "4510" => Ok(Variant::Csg4510),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}
