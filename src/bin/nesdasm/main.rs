use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use nesdasm::cpu_6502::disassembler::{write_listing_with, BranchStyle, ListingOptions};
use nesdasm::nes::cartridge::Cartridge;

#[derive(Parser)]
#[command(about = "NES ROM to 6502 assembly converter", long_about = None)]
struct Args {
    /// ROM filename to convert.
    filename: PathBuf,

    /// Directory to write binary/ and assembly/ into
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Only split the ROM into PRG/CHR binaries, skip disassembly
    #[arg(long)]
    split_only: bool,

    /// Prefix every line with its CPU address
    #[arg(short, long)]
    addresses: bool,

    /// Show raw instruction bytes
    #[arg(short, long)]
    bytes: bool,

    /// Address the PRG region is mapped at (hex)
    #[arg(long, default_value = "8000", value_parser = parse_hex16)]
    origin: u16,

    /// Relative branch operand rendering
    #[arg(long, default_value_t = BranchStyle::Binary, value_enum)]
    branches: BranchStyle,

    /// Print every line as it is disassembled
    #[arg(short, long)]
    verbose: bool,
}

fn parse_hex16(s: &str) -> Result<u16> {
    let s = s.trim_start_matches("0x").trim_start_matches('$');
    u16::from_str_radix(s, 16).with_context(|| format!("Invalid address '{}'", s))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Writing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let f = fs::read(&args.filename)
        .with_context(|| format!("Reading {}", args.filename.display()))?;
    let cartridge = Cartridge::load(&f)?;
    println!("Cartridge: {}", &cartridge);

    let bindir = args.out.join("binary");
    fs::create_dir_all(&bindir)?;
    write_file(&bindir.join("prg.bin"), &cartridge.prg)?;
    write_file(&bindir.join("chr.chr"), &cartridge.chr)?;

    if !args.split_only {
        let opts = ListingOptions {
            addresses: args.addresses,
            bytes: args.bytes,
            origin: args.origin,
            branches: args.branches,
        };

        let asmdir = args.out.join("assembly");
        fs::create_dir_all(&asmdir)?;
        let asmpath = asmdir.join("code.asm");
        let mut out = BufWriter::new(
            fs::File::create(&asmpath)
                .with_context(|| format!("Creating {}", asmpath.display()))?,
        );

        let count = write_listing_with(&cartridge.prg, &mut out, &opts, |ins, _| {
            if args.verbose {
                println!("{}", opts.trace_line(ins).green());
            }
        })?;
        out.flush()?;
        println!("{} instructions written to {}", count, asmpath.display());
    }

    println!("{}", "Converted ROM".green());
    Ok(())
}
