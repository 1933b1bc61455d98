//! Run a raw binary on any 65xx variant until it traps.
//!
//! Meant for the functional test ROMs (Klaus Dormann's 6502/65C02 suites and
//! similar): load the image, start at a given address and stop when the
//! program jumps to itself. Landing on the success address passes.
//!
//! ```text
//! m65run --variant 65c02 --load 65C02_extended_opcodes_test.bin@0 \
//!        --start 0400 --success 24f1
//! ```

use std::fs;
use std::process;
use std::time::Instant;

use emu_core::{Cpu, SimpleBus};
use mos_65xx::{M65xx, Variant};

struct Options {
    variant: Variant,
    image: String,
    load_address: u32,
    start: Option<u16>,
    success: Option<u16>,
    max_cycles: u64,
}

const USAGE: &str = "usage: m65run [--variant NAME] --load FILE[@ADDR] [--start ADDR] \
                     [--success ADDR] [--max-cycles N]";

fn parse_hex(text: &str) -> Result<u32, String> {
    let digits = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|e| format!("bad address {text:?}: {e}"))
}

fn parse_address(text: &str) -> Result<u16, String> {
    let value = parse_hex(text)?;
    u16::try_from(value).map_err(|_| format!("address {text:?} is not 16-bit"))
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        variant: Variant::Nmos6502,
        image: String::new(),
        load_address: 0,
        start: None,
        success: None,
        max_cycles: 200_000_000,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--variant" => options.variant = value()?.parse().map_err(|e| format!("{e}"))?,
            "--load" => {
                let image = value()?;
                match image.split_once('@') {
                    Some((path, address)) => {
                        options.image = path.to_string();
                        options.load_address = parse_hex(address)?;
                    }
                    None => options.image = image,
                }
            }
            "--start" => options.start = Some(parse_address(&value()?)?),
            "--success" => options.success = Some(parse_address(&value()?)?),
            "--max-cycles" => {
                options.max_cycles = value()?
                    .parse()
                    .map_err(|e| format!("bad cycle count: {e}"))?;
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}\n{USAGE}")),
        }
    }

    if options.image.is_empty() {
        return Err(format!("no image given\n{USAGE}"));
    }
    Ok(options)
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let image = match fs::read(&options.image) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", options.image);
            process::exit(1);
        }
    };

    println!(
        "{}: {} ({} bytes) at ${:05X}",
        options.variant,
        options.image,
        image.len(),
        options.load_address
    );

    let mut bus = SimpleBus::new();
    bus.load(options.load_address, &image);

    let mut cpu = M65xx::new(options.variant);
    cpu.reset(&mut bus);
    if let Some(start) = options.start {
        cpu.registers_mut().pc = start;
    }

    let started = Instant::now();
    let mut total_cycles: u64 = 0;
    let mut instructions: u64 = 0;

    loop {
        let pc_before = cpu.pc();
        total_cycles += u64::from(cpu.step(&mut bus));
        instructions += 1;

        if cpu.pc() == pc_before {
            let regs = *cpu.registers();
            if Some(cpu.pc()) == options.success {
                let elapsed = started.elapsed();
                println!("SUCCESS at ${:04X}", cpu.pc());
                println!("  Instructions executed: {instructions}");
                println!("  Total cycles: {total_cycles}");
                println!("  Time elapsed: {elapsed:?}");
                process::exit(0);
            }

            println!("TRAP at ${:04X}", cpu.pc());
            println!(
                "  A=${:02X} X=${:02X} Y=${:02X} Z=${:02X} B=${:02X} SP=${:04X} P={}",
                regs.a, regs.x, regs.y, regs.z, regs.b, regs.sp, regs.p
            );
            let (text, _) = cpu.disassemble(&mut bus, cpu.pc());
            println!("  {:04X}  {text}", cpu.pc());
            println!("  Instructions executed: {instructions}");
            process::exit(1);
        }

        if total_cycles >= options.max_cycles {
            println!("Gave up after {total_cycles} cycles, PC=${:04X}", cpu.pc());
            process::exit(1);
        }
    }
}
