pub mod conversion;

use crate::nes::cartridge::{CHR_UNIT, HDR_MAGIC, PRG_UNIT};

/// Builds a container image with the program placed at the start of the
/// PRG region and the rest padded with NOPs.
fn build_rom(program: &[u8], prg_units: u8, chr_units: u8) -> Vec<u8> {
    let prg_len = prg_units as usize * PRG_UNIT;
    assert!(program.len() <= prg_len);

    let mut rom = HDR_MAGIC.to_vec();
    rom.extend([prg_units, chr_units, 0, 0]);
    rom.extend([0; 8]);
    rom.extend_from_slice(program);
    rom.resize(16 + prg_len, 0xEA);
    rom.resize(16 + prg_len + chr_units as usize * CHR_UNIT, 0x55);
    rom
}
