//! Memory bus interface.

/// Size of the largest physical address space a core can drive (20 bits,
/// the 4510's banked space).
pub const PHYSICAL_SPACE: usize = 1 << 20;

/// Memory bus interface.
///
/// CPUs access memory and peripherals through this trait. The bus handles
/// address decoding and routing to the appropriate device. Addresses are
/// physical: 16-bit for plain 65xx parts, 20-bit for cores with an MMU.
///
/// Instruction fetches go through separate hooks so hosts can instrument
/// them (debuggers, opcode caches, bank-switch tracking). Both default to a
/// plain data read.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u32) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u32, value: u8);

    /// Read an opcode byte.
    fn read_opcode(&mut self, address: u32) -> u8 {
        self.read(address)
    }

    /// Read an instruction operand byte.
    fn read_opcode_operand(&mut self, address: u32) -> u8 {
        self.read(address)
    }
}

/// Flat RAM covering the whole 20-bit physical space.
///
/// Used by tests and tools. Addresses above the space wrap.
#[derive(Clone)]
pub struct SimpleBus {
    ram: Box<[u8]>,
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: vec![0; PHYSICAL_SPACE].into_boxed_slice(),
        }
    }

    /// Copy `data` into memory starting at `address`, wrapping at the top.
    pub fn load(&mut self, address: u32, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            let addr = (address as usize + offset) & (PHYSICAL_SPACE - 1);
            self.ram[addr] = byte;
        }
    }

    /// Read memory without going through the bus.
    #[must_use]
    pub fn peek(&self, address: u32) -> u8 {
        self.ram[address as usize & (PHYSICAL_SPACE - 1)]
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u32) -> u8 {
        self.peek(address)
    }

    fn write(&mut self, address: u32, value: u8) {
        self.ram[address as usize & (PHYSICAL_SPACE - 1)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_top_of_space() {
        let mut bus = SimpleBus::new();
        bus.load(0xF_FFFF, &[0x11, 0x22]);
        assert_eq!(bus.peek(0xF_FFFF), 0x11);
        assert_eq!(bus.peek(0x0_0000), 0x22);
    }

    #[test]
    fn opcode_hooks_default_to_read() {
        let mut bus = SimpleBus::new();
        bus.write(0x1234, 0xEA);
        assert_eq!(bus.read_opcode(0x1234), 0xEA);
        assert_eq!(bus.read_opcode_operand(0x1234), 0xEA);
    }
}
