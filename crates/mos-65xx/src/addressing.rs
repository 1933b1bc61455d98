//! Memory access and addressing modes.
//!
//! All memory traffic funnels through `read`/`write` here so the 4510 can
//! translate every access (opcode fetch, operands, data, stack, vectors)
//! through its MMU. Logical addresses are 16-bit and wrap; base-page
//! pointers wrap within their page.

use emu_core::Bus;

use crate::M65xx;
use crate::table::Mode;

impl M65xx {
    /// Logical to physical address.
    pub(crate) fn physical(&self, address: u16) -> u32 {
        if self.variant.has_mmu() {
            self.mmu.translate(address)
        } else {
            u32::from(address)
        }
    }

    pub(crate) fn read(&self, bus: &mut impl Bus, address: u16) -> u8 {
        bus.read(self.physical(address))
    }

    pub(crate) fn write(&self, bus: &mut impl Bus, address: u16, value: u8) {
        bus.write(self.physical(address), value);
    }

    /// Fetch the opcode at PC and increment PC.
    pub(crate) fn fetch_opcode(&mut self, bus: &mut impl Bus) -> u8 {
        let value = bus.read_opcode(self.physical(self.regs.pc));
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch the next operand byte at PC and increment PC.
    pub(crate) fn fetch(&mut self, bus: &mut impl Bus) -> u8 {
        let value = bus.read_opcode_operand(self.physical(self.regs.pc));
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit operand (little-endian).
    pub(crate) fn fetch_word(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.fetch(bus);
        let high = self.fetch(bus);
        u16::from_le_bytes([low, high])
    }

    /// Read a 16-bit word from memory (little-endian).
    pub(crate) fn read_word(&self, bus: &mut impl Bus, address: u16) -> u16 {
        let low = self.read(bus, address);
        let high = self.read(bus, address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    pub(crate) fn write_word(&self, bus: &mut impl Bus, address: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(bus, address, low);
        self.write(bus, address.wrapping_add(1), high);
    }

    /// Read a word whose high byte wraps within the page of `address`.
    /// Used for base-page pointers and the NMOS `JMP ($xxFF)` bug.
    pub(crate) fn read_word_in_page(&self, bus: &mut impl Bus, address: u16) -> u16 {
        let low = self.read(bus, address);
        let high_addr = (address & 0xFF00) | (address.wrapping_add(1) & 0x00FF);
        let high = self.read(bus, high_addr);
        u16::from_le_bytes([low, high])
    }

    /// Read a pointer from the base page.
    fn read_pointer(&mut self, bus: &mut impl Bus, offset: u8) -> u16 {
        self.regs.zp = self.regs.base_page(offset);
        self.read_word_in_page(bus, self.regs.zp)
    }

    // =========================================================================
    // Stack
    // =========================================================================

    pub(crate) fn push(&mut self, bus: &mut impl Bus, value: u8) {
        let address = self.regs.push_address();
        self.write(bus, address, value);
    }

    pub(crate) fn pull(&mut self, bus: &mut impl Bus) -> u8 {
        let address = self.regs.pull_address();
        self.read(bus, address)
    }

    /// Push a 16-bit word (high byte first).
    pub(crate) fn push_word(&mut self, bus: &mut impl Bus, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(bus, high);
        self.push(bus, low);
    }

    /// Pull a 16-bit word (low byte first).
    pub(crate) fn pull_word(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.pull(bus);
        let high = self.pull(bus);
        u16::from_le_bytes([low, high])
    }

    // =========================================================================
    // Effective address
    // =========================================================================

    /// Resolve the operand address for `mode`, consuming operand bytes.
    ///
    /// Returns `(address, page_crossed)`; the crossing flag is only ever set
    /// for the indexed modes that can pay a penalty cycle. Immediate modes
    /// resolve to the operand bytes themselves. Also latches `ea`.
    pub(crate) fn effective_address(&mut self, bus: &mut impl Bus, mode: Mode) -> (u16, bool) {
        let (address, crossed) = match mode {
            Mode::Imm => {
                let address = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                (address, false)
            }
            Mode::Imw => {
                let address = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(2);
                (address, false)
            }
            Mode::Zpg => {
                let offset = self.fetch(bus);
                (self.regs.base_page(offset), false)
            }
            Mode::Zpx => {
                let offset = self.fetch(bus).wrapping_add(self.regs.x);
                (self.regs.base_page(offset), false)
            }
            Mode::Zpy => {
                let offset = self.fetch(bus).wrapping_add(self.regs.y);
                (self.regs.base_page(offset), false)
            }
            Mode::Abs => (self.fetch_word(bus), false),
            Mode::Abx => {
                let base = self.fetch_word(bus);
                indexed(base, self.regs.x)
            }
            Mode::Aby => {
                let base = self.fetch_word(bus);
                indexed(base, self.regs.y)
            }
            Mode::Ind => {
                // Only the pointer; JMP/JSR dereference it themselves
                // because of the NMOS page-wrap bug.
                (self.fetch_word(bus), false)
            }
            Mode::Iax => {
                let base = self.fetch_word(bus);
                (base.wrapping_add(u16::from(self.regs.x)), false)
            }
            Mode::Izx => {
                let offset = self.fetch(bus).wrapping_add(self.regs.x);
                (self.read_pointer(bus, offset), false)
            }
            Mode::Izy => {
                let offset = self.fetch(bus);
                let base = self.read_pointer(bus, offset);
                indexed(base, self.regs.y)
            }
            Mode::Izp => {
                let offset = self.fetch(bus);
                (self.read_pointer(bus, offset), false)
            }
            Mode::Izz => {
                let offset = self.fetch(bus);
                let base = self.read_pointer(bus, offset);
                indexed(base, self.regs.z)
            }
            Mode::Isy => {
                // ($nn,SP),Y: the pointer lives in the stack page, not the
                // base page.
                let offset = self.fetch(bus).wrapping_add(self.regs.s());
                self.regs.zp = u16::from_le_bytes([offset, self.regs.stack_page()]);
                let base = self.read_word_in_page(bus, self.regs.zp);
                (base.wrapping_add(u16::from(self.regs.y)), false)
            }
            Mode::Imp | Mode::Acc | Mode::Rel | Mode::Rlw | Mode::Zrl => (self.regs.pc, false),
        };
        self.regs.ea = address;
        (address, crossed)
    }
}

fn indexed(base: u16, index: u8) -> (u16, bool) {
    let address = base.wrapping_add(u16::from(index));
    (address, (base & 0xFF00) != (address & 0xFF00))
}
