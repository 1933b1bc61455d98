//! Cycle budgets: overshoot carries into the next call.

use emu_core::{Cpu, LineState, SimpleBus};
use mos_65xx::{M65xx, Variant};

/// LDA #$01 (2); STA $10 (3); INC $10 (5); JMP $0200 (3)
const LOOP: [u8; 9] = [0xA9, 0x01, 0x85, 0x10, 0xE6, 0x10, 0x4C, 0x00, 0x02];

fn boot(variant: Variant) -> (M65xx, SimpleBus) {
    let mut bus = SimpleBus::new();
    let vectors = [0x00, 0x90, 0x00, 0x02, 0x00, 0xA0];
    bus.load(0xFFFA, &vectors);
    // 4510 reset mapping puts the top 8K at $2E000
    bus.load(0x2_FFFA, &vectors);
    bus.load(0x9000, &[0xEA; 16]);
    bus.load(0x0200, &LOOP);
    let mut cpu = M65xx::new(variant);
    cpu.reset(&mut bus);
    (cpu, bus)
}

#[test]
fn split_budgets_match_a_single_call() {
    for variant in Variant::ALL {
        for split in [1, 2, 5, 13, 37, 50, 99] {
            let (mut whole, mut whole_bus) = boot(variant);
            let used_whole = whole.execute(&mut whole_bus, 100);

            let (mut parts, mut parts_bus) = boot(variant);
            let used_parts =
                parts.execute(&mut parts_bus, split) + parts.execute(&mut parts_bus, 100 - split);

            assert_eq!(used_parts, used_whole, "{variant} split at {split}");
            assert_eq!(parts.context(), whole.context(), "{variant} split at {split}");
            assert_eq!(parts_bus.peek(0x10), whole_bus.peek(0x10));
        }
    }
}

#[test]
fn overshoot_is_reported_and_carried() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502);

    // LDA # takes 2 of a 1-cycle budget
    assert_eq!(cpu.execute(&mut bus, 1), 2);
    assert_eq!(cpu.icount(), -1);

    // The next 1-cycle budget is already spent
    assert_eq!(cpu.execute(&mut bus, 1), 0);
    assert_eq!(cpu.pc(), 0x0202);

    // and the one after runs STA
    assert_eq!(cpu.execute(&mut bus, 1), 3);
    assert_eq!(cpu.pc(), 0x0204);
}

#[test]
fn full_loop_costs_thirteen_cycles() {
    let (mut cpu, mut bus) = boot(Variant::Wdc65C02);
    assert_eq!(cpu.execute(&mut bus, 13), 13);
    assert_eq!(cpu.pc(), 0x0200);
    assert_eq!(cpu.icount(), 0);
    assert_eq!(bus.peek(0x10), 0x02);
}

#[test]
fn nmi_cost_is_charged_to_next_call() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502);
    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.icount(), -7);

    // 10 - 7 leaves 3 cycles: two NOPs
    assert_eq!(cpu.execute(&mut bus, 10), 4);
    assert_eq!(cpu.pc(), 0x9002);
    assert_eq!(cpu.icount(), -1);
}

#[test]
fn nmi_cost_can_swallow_a_whole_call() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502);
    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.execute(&mut bus, 5), 0);
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn irq_entry_counts_against_budget() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502);
    bus.load(0xA000, &[0xEA]);
    cpu.registers_mut().p.clear(mos_65xx::flags::I);
    cpu.set_irq_line(LineState::Assert);

    assert_eq!(cpu.execute(&mut bus, 1), 9);
    assert_eq!(cpu.pc(), 0xA001);
}

#[test]
fn step_leaves_budget_alone() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502);
    cpu.execute(&mut bus, 1);
    let icount = cpu.icount();
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.icount(), icount);
}
