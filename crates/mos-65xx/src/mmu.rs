//! 4510 memory manager.
//!
//! The 64K logical space is split into eight 8K regions. Each region either
//! passes straight through or is offset into the 1M physical space. The
//! offsets are not registers of their own: they are decoded from the two
//! selector words loaded by `MAP`.
//!
//! Selector layout (`low` covers regions 0-3, `high` regions 4-7):
//!
//! ```text
//! bit 15 14 13 12 | 11 ........ 0
//!     r3 r2 r1 r0 | offset >> 8
//! ```

use serde::{Deserialize, Serialize};

/// Physical address mask (20 bits).
pub const PHYSICAL_MASK: u32 = 0xF_FFFF;

/// Selector words after reset. Region 7 ($E000-$FFFF) maps to $2E000 so the
/// vectors come from the kernal image.
const RESET_LOW: u16 = 0x0000;
const RESET_HIGH: u16 = 0x8200;

/// The serialized form: only the selectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Selectors {
    low: u16,
    high: u16,
}

/// MAP state: two selector words plus the bank bases decoded from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Selectors", into = "Selectors")]
pub struct Mmu {
    low: u16,
    high: u16,
    mem: [u32; 8],
}

impl Default for Mmu {
    fn default() -> Self {
        Self::from_selectors(RESET_LOW, RESET_HIGH)
    }
}

impl From<Selectors> for Mmu {
    fn from(s: Selectors) -> Self {
        Self::from_selectors(s.low, s.high)
    }
}

impl From<Mmu> for Selectors {
    fn from(mmu: Mmu) -> Self {
        Self {
            low: mmu.low,
            high: mmu.high,
        }
    }
}

impl Mmu {
    /// Build the MMU state for a pair of selector words.
    #[must_use]
    pub fn from_selectors(low: u16, high: u16) -> Self {
        let mut mem = [0; 8];
        for (region, base) in mem.iter_mut().enumerate() {
            let selector = if region < 4 { low } else { high };
            let enable = 0x1000 << (region & 3);
            if selector & enable != 0 {
                *base = u32::from(selector & 0x0FFF) << 8;
            }
        }
        Self { low, high, mem }
    }

    #[must_use]
    pub const fn low(&self) -> u16 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> u16 {
        self.high
    }

    /// Offset added to addresses in `region` (0-7).
    #[must_use]
    pub const fn bank_base(&self, region: usize) -> u32 {
        self.mem[region & 7]
    }

    /// All eight bank bases.
    #[must_use]
    pub const fn banks(&self) -> [u32; 8] {
        self.mem
    }

    /// Translate a logical address to a physical one.
    #[must_use]
    pub const fn translate(&self, address: u16) -> u32 {
        (self.mem[(address >> 13) as usize] + address as u32) & PHYSICAL_MASK
    }

    /// The MAP instruction.
    ///
    /// Loads `A|X<<8` and `Y|Z<<8` as the new selectors and returns the
    /// previous selectors split back into `(a, x, y, z)`. The exchange means
    /// a second MAP with the returned values restores the old mapping.
    pub fn map(&mut self, a: u8, x: u8, y: u8, z: u8) -> (u8, u8, u8, u8) {
        let old = (self.low, self.high);
        *self = Self::from_selectors(
            u16::from_le_bytes([a, x]),
            u16::from_le_bytes([y, z]),
        );
        let [old_a, old_x] = old.0.to_le_bytes();
        let [old_y, old_z] = old.1.to_le_bytes();
        (old_a, old_x, old_y, old_z)
    }
}
