//! 65CE02 extensions: Z and B registers, the 16-bit stack and word ops.

use emu_core::{Cpu, SimpleBus};
use mos_65xx::flags::{C, E, N, Z};
use mos_65xx::{M65xx, Variant};

fn setup(program: &[u8]) -> (M65xx, SimpleBus) {
    let mut bus = SimpleBus::new();
    bus.load(0x0200, program);
    let mut cpu = M65xx::new(Variant::Csg65CE02);
    cpu.registers_mut().pc = 0x0200;
    (cpu, bus)
}

fn run(cpu: &mut M65xx, bus: &mut SimpleBus, count: usize) -> u32 {
    (0..count).map(|_| cpu.step(bus)).sum()
}

#[test]
fn extended_stack_crosses_pages_after_cle() {
    // CLE, then 257 x PHA
    let mut program = vec![0x02];
    program.extend(std::iter::repeat_n(0x48, 257));
    let (mut cpu, mut bus) = setup(&program);
    cpu.registers_mut().a = 0xAA;

    run(&mut cpu, &mut bus, 258);

    assert!(!cpu.registers().p.is_set(E));
    assert_eq!(cpu.registers().sp, 0x00FE);
    assert_eq!(bus.peek(0x00FF), 0xAA, "last push lands below the stack page");
}

#[test]
fn compat_stack_wraps_in_page_after_see() {
    // SEE, then 257 x PHA
    let mut program = vec![0x03];
    program.extend(std::iter::repeat_n(0x48, 257));
    let (mut cpu, mut bus) = setup(&program);
    cpu.registers_mut().a = 0x55;

    run(&mut cpu, &mut bus, 258);

    assert!(cpu.registers().p.is_set(E));
    assert_eq!(cpu.registers().sp, 0x01FE);
    assert_eq!(bus.peek(0x00FF), 0x00, "nothing escapes page 1");
}

#[test]
fn plp_does_not_change_stack_mode() {
    // CLE; LDA #$20; PHA; PLP
    let (mut cpu, mut bus) = setup(&[0x02, 0xA9, 0x20, 0x48, 0x28]);
    run(&mut cpu, &mut bus, 4);
    assert!(!cpu.registers().p.is_set(E), "only CLE/SEE move E");
}

#[test]
fn word_branch_cycles_and_target() {
    // BRA +$0010, target relative to the last operand byte
    let (mut cpu, mut bus) = setup(&[0x83, 0x10, 0x00]);
    assert_eq!(run(&mut cpu, &mut bus, 1), 4);
    assert_eq!(cpu.pc(), 0x0212);

    // Crossing a page costs one more
    let (mut cpu, mut bus) = setup(&[0x83, 0x00, 0x01]);
    assert_eq!(run(&mut cpu, &mut bus, 1), 5);
    assert_eq!(cpu.pc(), 0x0302);

    // Not taken: BEQ with Z clear
    let (mut cpu, mut bus) = setup(&[0xF3, 0x00, 0x10]);
    cpu.registers_mut().p.clear(Z);
    assert_eq!(run(&mut cpu, &mut bus, 1), 3);
    assert_eq!(cpu.pc(), 0x0203);
}

#[test]
fn bsr_and_rtn_discard_arguments() {
    let program = [
        0xF4, 0xEF, 0xBE, // PHW #$BEEF
        0x63, 0xFB, 0x0F, // BSR $1200
        0xEA, // NOP
    ];
    let (mut cpu, mut bus) = setup(&program);
    bus.load(0x1200, &[0x62, 0x02]); // RTN #$02

    run(&mut cpu, &mut bus, 1);
    assert_eq!(bus.peek(0x01FF), 0xBE);
    assert_eq!(bus.peek(0x01FE), 0xEF);

    assert_eq!(run(&mut cpu, &mut bus, 1), 5);
    assert_eq!(cpu.pc(), 0x1200);
    assert_eq!(bus.peek(0x01FD), 0x02);
    assert_eq!(bus.peek(0x01FC), 0x05);

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc(), 0x0206);
    assert_eq!(cpu.registers().sp, 0x01FF, "RTN drops the pushed word");
}

#[test]
fn jsr_indirect_pushes_return_address() {
    let (mut cpu, mut bus) = setup(&[0x22, 0x00, 0x30]); // JSR ($3000)
    bus.load(0x3000, &[0x00, 0x40]);
    bus.load(0x4000, &[0x60]); // RTS

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc(), 0x4000);
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc(), 0x0203);
}

#[test]
fn inw_dew_on_base_page_word() {
    let (mut cpu, mut bus) = setup(&[0xE3, 0x10, 0xE3, 0x12, 0xC3, 0x10]);
    bus.load(0x0010, &[0xFF, 0x00, 0xFF, 0xFF]);

    run(&mut cpu, &mut bus, 1);
    assert_eq!((bus.peek(0x0010), bus.peek(0x0011)), (0x00, 0x01));
    assert!(!cpu.registers().p.is_set(Z));

    run(&mut cpu, &mut bus, 1);
    assert_eq!((bus.peek(0x0012), bus.peek(0x0013)), (0x00, 0x00));
    assert!(cpu.registers().p.is_set(Z), "Z reflects all 16 bits");

    run(&mut cpu, &mut bus, 1);
    assert_eq!((bus.peek(0x0010), bus.peek(0x0011)), (0xFF, 0x00));
}

#[test]
fn asw_and_row_shift_words() {
    // ASW $3000; ROW $3000
    let (mut cpu, mut bus) = setup(&[0xCB, 0x00, 0x30, 0xEB, 0x00, 0x30]);
    bus.load(0x3000, &[0x01, 0x80]);

    run(&mut cpu, &mut bus, 1);
    assert_eq!((bus.peek(0x3000), bus.peek(0x3001)), (0x02, 0x00));
    assert!(cpu.registers().p.is_set(C));

    run(&mut cpu, &mut bus, 1);
    assert_eq!((bus.peek(0x3000), bus.peek(0x3001)), (0x05, 0x00));
    assert!(!cpu.registers().p.is_set(C));
}

#[test]
fn phw_absolute_pushes_memory_word() {
    let (mut cpu, mut bus) = setup(&[0xFC, 0x00, 0x30]);
    bus.load(0x3000, &[0x34, 0x12]);
    run(&mut cpu, &mut bus, 1);
    assert_eq!(bus.peek(0x01FF), 0x12);
    assert_eq!(bus.peek(0x01FE), 0x34);
}

#[test]
fn tys_and_tsy_move_stack_page() {
    // LDY #$20; TYS; LDY #$00; TSY
    let (mut cpu, mut bus) = setup(&[0xA0, 0x20, 0x2B, 0xA0, 0x00, 0x0B]);
    run(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.registers().sp, 0x20FF);
    assert_eq!(cpu.registers().y, 0x20);
}

#[test]
fn stack_relative_indirect_indexed() {
    // LDA ($03,SP),Y
    let (mut cpu, mut bus) = setup(&[0xE2, 0x03]);
    cpu.registers_mut().sp = 0x01F0;
    cpu.registers_mut().y = 5;
    bus.load(0x01F3, &[0x00, 0x40]);
    bus.load(0x4005, &[0x77]);

    assert_eq!(run(&mut cpu, &mut bus, 1), 6);
    assert_eq!(cpu.registers().a, 0x77);
    assert_eq!(cpu.registers().ea, 0x4005);
}

#[test]
fn base_page_register_relocates_zero_page() {
    // LDA #$20; TAB; LDA $10
    let (mut cpu, mut bus) = setup(&[0xA9, 0x20, 0x5B, 0xA5, 0x10]);
    bus.load(0x2010, &[0x99]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.registers().b, 0x20);
    assert_eq!(cpu.registers().a, 0x99);
}

#[test]
fn z_register_ops() {
    let program = [
        0xA3, 0x55, // LDZ #$55
        0x64, 0x10, // STZ $10
        0x1B, // INZ
        0x4B, // TAZ
        0xC2, 0x00, // CPZ #$00
    ];
    let (mut cpu, mut bus) = setup(&program);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(bus.peek(0x0010), 0x55, "STZ stores the Z register");

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.registers().z, 0x56);

    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.registers().z, 0x00);
    assert!(cpu.registers().p.is_set(Z));
    assert!(cpu.registers().p.is_set(C));
}

#[test]
fn indirect_z_indexed() {
    // LDA ($20),Z
    let (mut cpu, mut bus) = setup(&[0xB2, 0x20]);
    cpu.registers_mut().z = 3;
    bus.load(0x0020, &[0x00, 0x40]);
    bus.load(0x4003, &[0x42]);
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.registers().a, 0x42);
}

#[test]
fn neg_and_asr() {
    // LDA #$01; NEG; ASR A
    let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0x42, 0x43]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.registers().a, 0xFF);
    assert!(cpu.registers().p.is_set(N));

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.registers().a, 0xFF, "ASR keeps the sign bit");
    assert!(cpu.registers().p.is_set(C));
}

#[test]
fn aug_is_a_four_byte_nop() {
    let (mut cpu, mut bus) = setup(&[0x5C, 0x11, 0x22, 0x33, 0xEA]);
    assert_eq!(run(&mut cpu, &mut bus, 1), 4);
    assert_eq!(cpu.pc(), 0x0204);
}
