use std::io;

use hex_literal::hex;

use super::build_rom;
use crate::cpu_6502::disassembler::{disassemble, write_listing, Disassembler, ListingOptions};
use crate::cpu_6502::instruction::DecodeErr;
use crate::nes::cartridge::{Cartridge, PRG_UNIT};

const PRG_LEN: usize = PRG_UNIT;

#[test]
fn reset_routine() {
    let rom = build_rom(
        &hex!("78 D8 A2 FF 9A AD 02 20 10 FB A9 00 8D 00 20 4C 0F 80"),
        1,
        1,
    );
    let cart = Cartridge::load(&rom).unwrap();
    let lines = disassemble(&cart.prg).unwrap();

    assert_eq!(
        lines[..9],
        [
            "sei",
            "cld",
            "ldx #$00ff",
            "txs",
            "lda $2002",
            "bpl $11111011",
            "lda #$0000",
            "sta $2000",
            "jmp $800f",
        ]
    );
    // Remainder of the bank is NOP padding, one line per byte
    assert_eq!(lines.len(), 9 + (16384 - 18));
    assert!(lines[9..].iter().all(|l| l == "nop"));
}

#[test]
fn graphics_region_untouched() {
    let cart = Cartridge::load(&build_rom(&[], 1, 2)).unwrap();
    assert_eq!(cart.chr.len(), 16384);
    assert!(cart.chr.iter().all(|&b| b == 0x55));
    assert!(disassemble(&cart.prg).unwrap().iter().all(|l| l == "nop"));
}

#[test]
fn truncated_rom_fails_before_decoding() {
    let rom = build_rom(&hex!("A9 05"), 1, 0);
    let err = Cartridge::load(&rom[..rom.len() - 100]).err().unwrap();
    assert!(err.downcast_ref::<io::Error>().is_some());
}

#[test]
fn trailing_operand_cut_off() {
    // Last instruction of the bank is a JSR missing its high byte
    let mut program = vec![0xEA; PRG_LEN - 2];
    program.extend(hex!("20 00"));
    let cart = Cartridge::load(&build_rom(&program, 1, 0)).unwrap();

    let err = disassemble(&cart.prg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeErr>(),
        Some(DecodeErr::Truncated { offset, .. }) if *offset == PRG_LEN - 2
    ));

    let decoded = Disassembler::new(&cart.prg)
        .take_while(|i| i.is_ok())
        .count();
    assert_eq!(decoded, PRG_LEN - 2);
}

#[test]
fn listing_matches_lines() {
    let cart = Cartridge::load(&build_rom(&hex!("A9 05 4C 00 80"), 1, 0)).unwrap();
    let mut out = vec![];
    let n = write_listing(&cart.prg, &mut out, &ListingOptions::default()).unwrap();

    let lines = disassemble(&cart.prg).unwrap();
    assert_eq!(n, lines.len());
    assert_eq!(String::from_utf8(out).unwrap(), lines.join("\n") + "\n");
}
