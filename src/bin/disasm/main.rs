use std::env;
use std::fs;

use anyhow::{bail, Result};
use colored::*;

use nesdasm::cpu_6502::disassembler::Disassembler;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        bail!("Syntax: {} <filename>", args[0]);
    }

    let f = fs::read(&args[1])?;
    for ins in Disassembler::new(&f) {
        match ins {
            Ok(ins) => println!("{:06X} {}", ins.offset, ins),
            Err(e) => {
                println!("{}", e.to_string().red());
                break;
            }
        }
    }
    Ok(())
}
