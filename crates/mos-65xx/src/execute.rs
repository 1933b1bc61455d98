//! Instruction semantics.
//!
//! `dispatch` runs one decoded table entry. The addressing mode decides how
//! the operand is found; the operation decides what happens to it. Returns
//! the cycles spent, base cycles from the table plus any penalties.

use emu_core::Bus;
use log::{debug, trace};

use crate::flags::{C, D, E, I, N, V, Z};
use crate::interrupt::IRQ_VECTOR;
use crate::table::{Entry, Mode, Op};
use crate::{M65xx, Registers};

impl M65xx {
    pub(crate) fn dispatch(&mut self, bus: &mut impl Bus, entry: Entry) -> i32 {
        let mode = entry.mode;
        let mut cycles = i32::from(entry.cycles);
        let decimal = self.variant.decimal_mode();

        match entry.op {
            // =================================================================
            // Load / store
            // =================================================================
            Op::Lda => {
                self.regs.a = self.load(bus, entry, &mut cycles);
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Ldx => {
                self.regs.x = self.load(bus, entry, &mut cycles);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Ldy => {
                self.regs.y = self.load(bus, entry, &mut cycles);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Ldz => {
                self.regs.z = self.load(bus, entry, &mut cycles);
                self.regs.p.update_nz(self.regs.z);
            }
            Op::Sta => self.store(bus, mode, self.regs.a),
            Op::Stx => self.store(bus, mode, self.regs.x),
            Op::Sty => self.store(bus, mode, self.regs.y),
            // The 65C02 has no Z register; its STZ always stores zero.
            Op::Stz => {
                let value = if self.variant.has_extended_registers() {
                    self.regs.z
                } else {
                    0
                };
                self.store(bus, mode, value);
            }

            // =================================================================
            // Arithmetic and logic
            // =================================================================
            Op::Adc => {
                let value = self.load(bus, entry, &mut cycles);
                if self.regs.adc(value, decimal) && self.variant.decimal_penalty() {
                    cycles += 1;
                }
            }
            Op::Sbc => {
                let value = self.load(bus, entry, &mut cycles);
                if self.regs.sbc(value, decimal) && self.variant.decimal_penalty() {
                    cycles += 1;
                }
            }
            Op::And => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.and(value);
            }
            Op::Ora => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.ora(value);
            }
            Op::Eor => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.eor(value);
            }
            Op::Cmp => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.compare(self.regs.a, value);
            }
            Op::Cpx => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.compare(self.regs.x, value);
            }
            Op::Cpy => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.compare(self.regs.y, value);
            }
            Op::Cpz => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.compare(self.regs.z, value);
            }
            Op::Bit => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.bit(value, mode == Mode::Imm);
            }
            Op::Neg => self.regs.neg(),

            // =================================================================
            // Read-modify-write
            // =================================================================
            Op::Asl => {
                self.modify(bus, mode, Registers::asl);
            }
            Op::Lsr => {
                self.modify(bus, mode, Registers::lsr);
            }
            Op::Rol => {
                self.modify(bus, mode, Registers::rol);
            }
            Op::Ror => {
                self.modify(bus, mode, Registers::ror);
            }
            Op::Asr => {
                self.modify(bus, mode, Registers::asr);
            }
            Op::Inc => {
                self.modify(bus, mode, Registers::inc);
            }
            Op::Dec => {
                self.modify(bus, mode, Registers::dec);
            }
            Op::Tsb => {
                self.modify(bus, mode, Registers::tsb);
            }
            Op::Trb => {
                self.modify(bus, mode, Registers::trb);
            }
            Op::Rmb(bit) => {
                self.modify(bus, mode, move |_, value| value & !(1 << bit));
            }
            Op::Smb(bit) => {
                self.modify(bus, mode, move |_, value| value | (1 << bit));
            }

            // =================================================================
            // 16-bit word ops
            // =================================================================
            Op::Inw | Op::Dew => {
                let (address, _) = self.effective_address(bus, mode);
                let value = self.read_word_in_page(bus, address);
                let result = if entry.op == Op::Inw {
                    self.regs.inw(value)
                } else {
                    self.regs.dew(value)
                };
                let [low, high] = result.to_le_bytes();
                self.write(bus, address, low);
                self.write(bus, (address & 0xFF00) | (address.wrapping_add(1) & 0x00FF), high);
            }
            Op::Asw | Op::Row => {
                let (address, _) = self.effective_address(bus, mode);
                let value = self.read_word(bus, address);
                let result = if entry.op == Op::Asw {
                    self.regs.asw(value)
                } else {
                    self.regs.row(value)
                };
                self.write_word(bus, address, result);
            }

            // =================================================================
            // Register transfers and counters
            // =================================================================
            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tsx => {
                self.regs.x = self.regs.s();
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Txs => self.regs.set_s(self.regs.x),
            Op::Taz => {
                self.regs.z = self.regs.a;
                self.regs.p.update_nz(self.regs.z);
            }
            Op::Tza => {
                self.regs.a = self.regs.z;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tab => self.regs.b = self.regs.a,
            Op::Tba => {
                self.regs.a = self.regs.b;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tsy => {
                self.regs.y = self.regs.stack_page();
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Tys => self.regs.set_stack_page(self.regs.y),
            Op::Inx => {
                self.regs.x = self.regs.inc(self.regs.x);
            }
            Op::Iny => {
                self.regs.y = self.regs.inc(self.regs.y);
            }
            Op::Inz => {
                self.regs.z = self.regs.inc(self.regs.z);
            }
            Op::Dex => {
                self.regs.x = self.regs.dec(self.regs.x);
            }
            Op::Dey => {
                self.regs.y = self.regs.dec(self.regs.y);
            }
            Op::Dez => {
                self.regs.z = self.regs.dec(self.regs.z);
            }

            // =================================================================
            // Stack
            // =================================================================
            Op::Pha => self.push(bus, self.regs.a),
            Op::Phx => self.push(bus, self.regs.x),
            Op::Phy => self.push(bus, self.regs.y),
            Op::Phz => self.push(bus, self.regs.z),
            Op::Php => self.push(bus, self.regs.p.to_byte_brk()),
            Op::Pla => {
                self.regs.a = self.pull(bus);
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Plx => {
                self.regs.x = self.pull(bus);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Ply => {
                self.regs.y = self.pull(bus);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Plz => {
                self.regs.z = self.pull(bus);
                self.regs.p.update_nz(self.regs.z);
            }
            Op::Plp => {
                let was_masked = self.regs.p.is_set(I);
                let value = self.pull(bus);
                self.pull_status(value);
                if was_masked && !self.regs.p.is_set(I) && self.irq_state {
                    self.after_cli = true;
                }
            }
            Op::Phw => {
                let value = if mode == Mode::Imw {
                    self.regs.ea = self.regs.pc;
                    self.fetch_word(bus)
                } else {
                    let (address, _) = self.effective_address(bus, mode);
                    self.read_word(bus, address)
                };
                self.push_word(bus, value);
            }

            // =================================================================
            // Flags
            // =================================================================
            Op::Clc => self.regs.p.clear(C),
            Op::Sec => self.regs.p.set(C),
            Op::Cld => self.regs.p.clear(D),
            Op::Sed => self.regs.p.set(D),
            Op::Clv => self.regs.p.clear(V),
            Op::Sei => self.regs.p.set(I),
            Op::Cli => {
                if self.regs.p.is_set(I) && self.irq_state {
                    self.after_cli = true;
                }
                self.regs.p.clear(I);
            }
            Op::Cle => self.regs.p.clear(E),
            Op::See => self.regs.p.set(E),

            // =================================================================
            // Jumps, calls, returns
            // =================================================================
            Op::Jmp => self.regs.pc = self.jump_target(bus, mode),
            Op::Jsr => {
                let target = self.jump_target(bus, mode);
                self.push_word(bus, self.regs.pc.wrapping_sub(1));
                self.regs.pc = target;
            }
            Op::Bsr => {
                let offset = self.fetch_word(bus);
                let return_address = self.regs.pc.wrapping_sub(1);
                self.push_word(bus, return_address);
                self.regs.pc = return_address.wrapping_add(offset);
            }
            Op::Rts => self.regs.pc = self.pull_word(bus).wrapping_add(1),
            Op::Rtn => {
                let bytes = self.fetch(bus);
                self.regs.pc = self.pull_word(bus);
                self.regs.adjust_sp(i16::from(bytes));
                self.regs.pc = self.regs.pc.wrapping_add(1);
            }
            Op::Rti => {
                let value = self.pull(bus);
                self.pull_status(value);
                self.regs.pc = self.pull_word(bus);
                if self.irq_state && !self.regs.p.is_set(I) {
                    self.after_cli = true;
                }
            }
            Op::Brk => {
                self.regs.pc = self.regs.pc.wrapping_add(1);
                // Only CMOS parts clear D on BRK
                let status = self.regs.p.to_byte_brk();
                self.enter_interrupt(bus, IRQ_VECTOR, status, self.variant.is_cmos());
            }

            // =================================================================
            // Branches
            // =================================================================
            Op::Bpl => cycles += self.branch(bus, mode, !self.regs.p.is_set(N)),
            Op::Bmi => cycles += self.branch(bus, mode, self.regs.p.is_set(N)),
            Op::Bvc => cycles += self.branch(bus, mode, !self.regs.p.is_set(V)),
            Op::Bvs => cycles += self.branch(bus, mode, self.regs.p.is_set(V)),
            Op::Bcc => cycles += self.branch(bus, mode, !self.regs.p.is_set(C)),
            Op::Bcs => cycles += self.branch(bus, mode, self.regs.p.is_set(C)),
            Op::Bne => cycles += self.branch(bus, mode, !self.regs.p.is_set(Z)),
            Op::Beq => cycles += self.branch(bus, mode, self.regs.p.is_set(Z)),
            Op::Bra => cycles += self.branch(bus, mode, true),
            Op::Bbr(bit) | Op::Bbs(bit) => {
                let zp = self.fetch(bus);
                let address = self.regs.base_page(zp);
                self.regs.ea = address;
                let set = self.read(bus, address) & (1 << bit) != 0;
                let wanted = matches!(entry.op, Op::Bbs(_));
                cycles += self.branch(bus, Mode::Rel, set == wanted);
            }

            // =================================================================
            // NMOS undocumented
            // =================================================================
            Op::Slo => {
                let value = self.modify(bus, mode, Registers::asl);
                self.regs.ora(value);
            }
            Op::Rla => {
                let value = self.modify(bus, mode, Registers::rol);
                self.regs.and(value);
            }
            Op::Sre => {
                let value = self.modify(bus, mode, Registers::lsr);
                self.regs.eor(value);
            }
            Op::Rra => {
                let value = self.modify(bus, mode, Registers::ror);
                self.regs.adc(value, decimal);
            }
            Op::Dcp => {
                let value = self.modify(bus, mode, |_, value| value.wrapping_sub(1));
                self.regs.compare(self.regs.a, value);
            }
            Op::Isc => {
                let value = self.modify(bus, mode, |_, value| value.wrapping_add(1));
                self.regs.sbc(value, decimal);
            }
            Op::Sax => self.store(bus, mode, self.regs.a & self.regs.x),
            Op::Lax => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.a = value;
                self.regs.x = value;
                self.regs.p.update_nz(value);
            }
            Op::Anc => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.anc(value);
            }
            Op::Alr => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.alr(value);
            }
            Op::Arr => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.arr(value, decimal);
            }
            Op::Sbx => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.sbx(value);
            }
            Op::Las => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.las(value);
            }
            Op::Ane => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.ane(value);
            }
            Op::Lxa => {
                let value = self.load(bus, entry, &mut cycles);
                self.regs.lxa(value);
            }
            Op::Sha => self.store_high_and(bus, mode, self.regs.a & self.regs.x),
            Op::Shx => self.store_high_and(bus, mode, self.regs.x),
            Op::Shy => self.store_high_and(bus, mode, self.regs.y),
            Op::Tas => {
                self.regs.set_s(self.regs.a & self.regs.x);
                self.store_high_and(bus, mode, self.regs.s());
            }
            Op::Jam => {
                // Stuck: refetch the same opcode forever.
                self.regs.pc = self.regs.pc.wrapping_sub(1);
                trace!("JAM at {:04X}", self.regs.pc);
            }

            // =================================================================
            // Misc
            // =================================================================
            Op::Nop => {
                if mode != Mode::Imp {
                    self.load(bus, entry, &mut cycles);
                }
            }
            Op::Aug => {
                self.regs.pc = self.regs.pc.wrapping_add(3);
            }
            Op::Map => {
                let (a, x, y, z) = self.mmu.map(self.regs.a, self.regs.x, self.regs.y, self.regs.z);
                self.regs.a = a;
                self.regs.x = x;
                self.regs.y = y;
                self.regs.z = z;
                debug!(
                    "MAP low={:04X} high={:04X} banks={:05X?}",
                    self.mmu.low(),
                    self.mmu.high(),
                    self.mmu.banks()
                );
            }
        }

        cycles
    }

    /// Fetch a read operand. Charges the page-cross penalty where due.
    fn load(&mut self, bus: &mut impl Bus, entry: Entry, cycles: &mut i32) -> u8 {
        match entry.mode {
            Mode::Acc => self.regs.a,
            Mode::Imm => {
                self.regs.ea = self.regs.pc;
                self.fetch(bus)
            }
            mode => {
                let (address, crossed) = self.effective_address(bus, mode);
                if crossed && entry.op.pays_page_penalty() {
                    *cycles += 1;
                }
                self.read(bus, address)
            }
        }
    }

    fn store(&mut self, bus: &mut impl Bus, mode: Mode, value: u8) {
        let (address, _) = self.effective_address(bus, mode);
        self.write(bus, address, value);
    }

    /// Read-modify-write on A or memory. Returns the value written.
    fn modify(
        &mut self,
        bus: &mut impl Bus,
        mode: Mode,
        op: impl FnOnce(&mut Registers, u8) -> u8,
    ) -> u8 {
        if mode == Mode::Acc {
            let a = self.regs.a;
            self.regs.a = op(&mut self.regs, a);
            return self.regs.a;
        }
        let (address, _) = self.effective_address(bus, mode);
        let value = self.read(bus, address);
        let result = op(&mut self.regs, value);
        self.write(bus, address, result);
        result
    }

    /// SHA/SHX/SHY/TAS: store `value & (H + 1)` where H is the high byte of
    /// the unindexed base address.
    fn store_high_and(&mut self, bus: &mut impl Bus, mode: Mode, value: u8) {
        let index = match mode {
            Mode::Abx => self.regs.x,
            _ => self.regs.y,
        };
        let (address, _) = self.effective_address(bus, mode);
        let base_high = (address.wrapping_sub(u16::from(index)) >> 8) as u8;
        self.write(bus, address, value & base_high.wrapping_add(1));
    }

    /// Status pulled by PLP or RTI.
    fn pull_status(&mut self, value: u8) {
        self.regs.p = self
            .regs
            .p
            .pulled(value, self.variant.has_extended_registers());
    }

    /// Destination of JMP/JSR.
    fn jump_target(&mut self, bus: &mut impl Bus, mode: Mode) -> u16 {
        let (pointer, _) = self.effective_address(bus, mode);
        match mode {
            Mode::Abs => pointer,
            // NMOS parts fetch the high byte from the start of the same
            // page when the pointer sits at $xxFF.
            Mode::Ind if !self.variant.is_cmos() => self.read_word_in_page(bus, pointer),
            _ => self.read_word(bus, pointer),
        }
    }

    /// Conditional branch. Returns the extra cycles: one when taken, one
    /// more when the target is on another page.
    fn branch(&mut self, bus: &mut impl Bus, mode: Mode, condition: bool) -> i32 {
        let target = if mode == Mode::Rlw {
            // Word offsets are relative to the last operand byte.
            let offset = self.fetch_word(bus);
            self.regs.pc.wrapping_sub(1).wrapping_add(offset)
        } else {
            let offset = self.fetch(bus) as i8;
            self.regs.pc.wrapping_add_signed(i16::from(offset))
        };
        if !condition {
            return 0;
        }
        let crossed = (self.regs.pc ^ target) & 0xFF00 != 0;
        self.regs.pc = target;
        1 + i32::from(crossed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use crate::table::Table;
    use emu_core::SimpleBus;

    fn run_one(variant: Variant, program: &[u8]) -> (M65xx, SimpleBus, i32) {
        let mut bus = SimpleBus::new();
        bus.load(0x0200, program);
        let mut cpu = M65xx::new(variant);
        cpu.regs.pc = 0x0200;
        let table: &Table = variant.table();
        let opcode = cpu.fetch_opcode(&mut bus);
        let cycles = cpu.dispatch(&mut bus, table[opcode as usize]);
        (cpu, bus, cycles)
    }

    #[test]
    fn lda_abs_x_page_cross_costs_a_cycle() {
        let mut bus = SimpleBus::new();
        bus.load(0x0200, &[0xBD, 0xF0, 0x12]);
        bus.load(0x1300, &[0x42]);
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.pc = 0x0200;
        cpu.regs.x = 0x10;
        let opcode = cpu.fetch_opcode(&mut bus);
        let cycles = cpu.dispatch(&mut bus, crate::table::TABLE_6502[opcode as usize]);
        assert_eq!(cpu.regs.a, 0x42);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn sta_abs_x_never_pays_penalty() {
        let mut bus = SimpleBus::new();
        bus.load(0x0200, &[0x9D, 0xF0, 0x12]);
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.pc = 0x0200;
        cpu.regs.x = 0x10;
        cpu.regs.a = 0x99;
        let opcode = cpu.fetch_opcode(&mut bus);
        assert_eq!(cpu.dispatch(&mut bus, crate::table::TABLE_6502[opcode as usize]), 5);
        assert_eq!(bus.peek(0x1300), 0x99);
    }

    #[test]
    fn jmp_indirect_page_bug_on_nmos_only() {
        let program = [0x6C, 0xFF, 0x30];
        let setup = |bus: &mut SimpleBus| {
            bus.load(0x30FF, &[0x80]);
            bus.load(0x3000, &[0x50]);
            bus.load(0x3100, &[0x40]);
        };

        let mut bus = SimpleBus::new();
        setup(&mut bus);
        bus.load(0x0200, &program);
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.pc = 0x0200;
        let opcode = cpu.fetch_opcode(&mut bus);
        assert_eq!(cpu.dispatch(&mut bus, crate::table::TABLE_6502[opcode as usize]), 5);
        assert_eq!(cpu.regs.pc, 0x5080);

        let mut bus = SimpleBus::new();
        setup(&mut bus);
        bus.load(0x0200, &program);
        let mut cpu = M65xx::new(Variant::Wdc65C02);
        cpu.regs.pc = 0x0200;
        let opcode = cpu.fetch_opcode(&mut bus);
        let cycles = cpu.dispatch(&mut bus, Variant::Wdc65C02.table()[opcode as usize]);
        assert_eq!(cycles, 6);
        assert_eq!(cpu.regs.pc, 0x4080);
    }

    #[test]
    fn stz_stores_zero_on_65c02() {
        let (_, bus, cycles) = run_one(Variant::Wdc65C02, &[0x64, 0x10]);
        assert_eq!(bus.peek(0x0010), 0);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn jam_refetches_itself() {
        let (cpu, _, _) = run_one(Variant::Nmos6502, &[0x02]);
        assert_eq!(cpu.regs.pc, 0x0200);
    }

    #[test]
    fn rmb_and_smb() {
        let mut bus = SimpleBus::new();
        bus.load(0x0200, &[0x37, 0x10, 0xC7, 0x10]);
        bus.load(0x0010, &[0x08]);
        let mut cpu = M65xx::new(Variant::Wdc65C02);
        cpu.regs.pc = 0x0200;
        let table = Variant::Wdc65C02.table();
        for _ in 0..2 {
            let opcode = cpu.fetch_opcode(&mut bus);
            cpu.dispatch(&mut bus, table[opcode as usize]);
        }
        assert_eq!(bus.peek(0x0010), 0x10);
    }

    #[test]
    fn bbs_branches_on_set_bit() {
        let mut bus = SimpleBus::new();
        // BBS1 $10,+4
        bus.load(0x0200, &[0x9F, 0x10, 0x04]);
        bus.load(0x0010, &[0x02]);
        let mut cpu = M65xx::new(Variant::Wdc65C02);
        cpu.regs.pc = 0x0200;
        let opcode = cpu.fetch_opcode(&mut bus);
        let cycles = cpu.dispatch(&mut bus, Variant::Wdc65C02.table()[opcode as usize]);
        assert_eq!(cpu.regs.pc, 0x0207);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn decimal_penalty_on_65c02_only() {
        for (variant, expected) in [
            (Variant::Nmos6502, 2),
            (Variant::Wdc65C02, 3),
            (Variant::Csg65CE02, 2),
        ] {
            let mut bus = SimpleBus::new();
            bus.load(0x0200, &[0x69, 0x01]);
            let mut cpu = M65xx::new(variant);
            cpu.regs.pc = 0x0200;
            cpu.regs.p.set(D);
            let opcode = cpu.fetch_opcode(&mut bus);
            let cycles = cpu.dispatch(&mut bus, variant.table()[opcode as usize]);
            assert_eq!(cycles, expected, "{variant}");
        }
    }

    #[test]
    fn undocumented_lax_and_sax() {
        let (cpu, _, _) = run_one(Variant::Nmos6502, &[0xAB, 0x00]);
        assert_eq!(cpu.regs.a, 0);

        let mut bus = SimpleBus::new();
        bus.load(0x0200, &[0xA7, 0x10, 0x87, 0x11]);
        bus.load(0x0010, &[0xF3]);
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.pc = 0x0200;
        for _ in 0..2 {
            let opcode = cpu.fetch_opcode(&mut bus);
            cpu.dispatch(&mut bus, crate::table::TABLE_6502[opcode as usize]);
        }
        assert_eq!((cpu.regs.a, cpu.regs.x), (0xF3, 0xF3));
        assert_eq!(bus.peek(0x0011), 0xF3);
    }

    #[test]
    fn shx_masks_with_base_high_plus_one() {
        let mut bus = SimpleBus::new();
        bus.load(0x0200, &[0x9E, 0x00, 0x20]);
        let mut cpu = M65xx::new(Variant::Nmos6502);
        cpu.regs.pc = 0x0200;
        cpu.regs.x = 0xFF;
        cpu.regs.y = 0x01;
        let opcode = cpu.fetch_opcode(&mut bus);
        cpu.dispatch(&mut bus, crate::table::TABLE_6502[opcode as usize]);
        assert_eq!(bus.peek(0x2001), 0x21);
    }
}
