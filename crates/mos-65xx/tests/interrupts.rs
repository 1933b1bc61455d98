//! IRQ sampling, the CLI delay, NMI edges and the SO input.

use std::cell::RefCell;
use std::rc::Rc;

use emu_core::{Cpu, LineState, SimpleBus};
use mos_65xx::flags::{B, D, I, V};
use mos_65xx::{M65xx, Variant};

/// NMI -> $9000, reset -> $0200, IRQ -> $A000, with NOPs in both handlers.
fn boot(variant: Variant, program: &[u8]) -> (M65xx, SimpleBus) {
    let mut bus = SimpleBus::new();
    bus.load(0xFFFA, &[0x00, 0x90, 0x00, 0x02, 0x00, 0xA0]);
    bus.load(0x9000, &[0xEA]);
    bus.load(0xA000, &[0xEA]);
    bus.load(0x0200, program);
    let mut cpu = M65xx::new(variant);
    cpu.reset(&mut bus);
    (cpu, bus)
}

#[test]
fn irq_waits_one_instruction_after_cli() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0x58, 0xEA, 0xEA]); // CLI; NOP; NOP
    cpu.set_irq_line(LineState::Assert);

    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0x0201, "IRQ not taken straight after CLI");
    assert!(cpu.pending_irq());
    assert!(!cpu.registers().p.is_set(I));

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 7 + 2, "IRQ entry plus the first handler instruction");
    assert_eq!(cpu.pc(), 0xA001);
    assert_eq!(bus.peek(0x01FF), 0x02);
    assert_eq!(bus.peek(0x01FE), 0x01);
    assert_eq!(bus.peek(0x01FD) & B, 0, "IRQ pushes B clear");
    assert!(cpu.registers().p.is_set(I));
}

#[test]
fn masked_irq_is_dropped_until_cli() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xEA, 0xEA, 0x58, 0xEA]);
    cpu.set_irq_line(LineState::Assert);

    cpu.step(&mut bus);
    assert!(!cpu.pending_irq(), "masked IRQ consumes the pending flag");
    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0x0202);

    // CLI with the line still asserted brings it back
    cpu.step(&mut bus);
    assert!(cpu.pending_irq());
    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0xA001);
}

#[test]
fn unmasked_irq_taken_at_next_boundary() {
    let (mut cpu, mut bus) = boot(Variant::Wdc65C02, &[0xEA, 0xEA]);
    cpu.registers_mut().p.clear(I);
    cpu.registers_mut().p.set(D);
    cpu.set_irq_line(LineState::Assert);

    assert_eq!(cpu.step(&mut bus), 9);
    assert_eq!(cpu.pc(), 0xA001);
    assert!(!cpu.registers().p.is_set(D), "interrupt entry clears D");
}

#[test]
fn releasing_irq_does_not_clear_pending() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xEA]);
    cpu.registers_mut().p.clear(I);
    cpu.set_irq_line(LineState::Assert);
    cpu.set_irq_line(LineState::Clear);
    assert!(cpu.pending_irq());

    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0xA001);
}

#[test]
fn irq_callback_runs_only_when_serviced() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xEA, 0xEA, 0x58, 0xEA]);
    let lines = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&lines);
    cpu.set_irq_callback(move |line| {
        seen.borrow_mut().push(line);
        0
    });
    cpu.set_irq_line(LineState::Assert);

    cpu.step(&mut bus);
    assert!(lines.borrow().is_empty(), "masked IRQ is not acknowledged");

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(*lines.borrow(), vec![0]);

    cpu.clear_irq_callback();
    cpu.registers_mut().p.clear(I);
    cpu.set_irq_line(LineState::Assert);
    cpu.step(&mut bus);
    assert_eq!(lines.borrow().len(), 1);
}

#[test]
fn rti_with_line_held_retriggers() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xEA, 0xEA]);
    bus.load(0xA000, &[0x40]); // RTI
    cpu.registers_mut().p.clear(I);
    cpu.set_irq_line(LineState::Assert);

    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0x0200, "handler returned straight away");
    assert!(cpu.pending_irq(), "RTI re-arms the still-asserted line");
}

#[test]
fn nmi_is_edge_triggered() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xEA, 0xEA]);

    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(bus.peek(0x01FD) & B, 0);

    // Holding the line does nothing more
    cpu.step(&mut bus);
    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.pc(), 0x9001);
    assert_eq!(cpu.registers().s(), 0xFC);

    cpu.set_nmi_line(&mut bus, LineState::Clear);
    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.registers().s(), 0xF9);
}

#[test]
fn nmi_ignores_interrupt_mask() {
    let (mut cpu, mut bus) = boot(Variant::Csg65CE02, &[0xEA]);
    assert!(cpu.registers().p.is_set(I));
    cpu.set_nmi_line(&mut bus, LineState::Assert);
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn so_sets_overflow_when_released() {
    let (mut cpu, mut bus) = boot(Variant::Nmos6502, &[0xB8]); // CLV
    cpu.set_so_line(LineState::Assert);
    cpu.step(&mut bus);
    assert!(!cpu.registers().p.is_set(V));

    cpu.set_so_line(LineState::Clear);
    assert!(cpu.registers().p.is_set(V));

    cpu.set_so_line(LineState::Clear);
    cpu.registers_mut().p.clear(V);
    cpu.set_so_line(LineState::Clear);
    assert!(!cpu.registers().p.is_set(V), "only the release edge counts");
}
