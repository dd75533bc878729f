use std::fmt;
use std::io::Read;

use anyhow::{Context, Result};
use strum::Display;
use thiserror::Error;

pub const HDR_MAGIC: [u8; 4] = *b"NES\x1A";
pub const HDR_LEN: usize = 16;
const HDR_MAGIC_OFFSET: usize = 0;
const HDR_PRGSIZE_OFFSET: usize = 4;
const HDR_CHRSIZE_OFFSET: usize = 5;
const HDR_FLAGS6_OFFSET: usize = 6;
const HDR_FLAGS7_OFFSET: usize = 7;
const HDR_PADDING_OFFSET: usize = 8;

/// PRG ROM unit size
pub const PRG_UNIT: usize = 16 * 1024;
/// CHR ROM unit size
pub const CHR_UNIT: usize = 8 * 1024;

const FLAGS6_VERTICAL: u8 = 1 << 0;
const FLAGS6_BATTERY: u8 = 1 << 1;
const FLAGS6_TRAINER: u8 = 1 << 2;
const FLAGS6_FOURSCREEN: u8 = 1 << 3;
const FLAGS7_NES2_MASK: u8 = 0x0C;
const FLAGS7_NES2: u8 = 0x08;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CartridgeErr {
    #[error("not a recognized container (magic {0:02X?})")]
    BadMagic([u8; 4]),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// The fixed 16-byte container header
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Header {
    pub magic: [u8; 4],

    /// PRG ROM size in 16KB units
    pub prg_units: u8,

    /// CHR ROM size in 8KB units
    pub chr_units: u8,

    pub flags6: u8,
    pub flags7: u8,
    pub padding: [u8; 8],
}

impl Header {
    /// Parses and validates a raw header. The size fields are only
    /// trusted once the magic matches.
    pub fn parse(raw: &[u8; HDR_LEN]) -> Result<Self> {
        let mut magic = [0; 4];
        magic.copy_from_slice(&raw[HDR_MAGIC_OFFSET..HDR_PRGSIZE_OFFSET]);
        if magic != HDR_MAGIC {
            return Err(CartridgeErr::BadMagic(magic).into());
        }

        let mut padding = [0; 8];
        padding.copy_from_slice(&raw[HDR_PADDING_OFFSET..HDR_LEN]);

        Ok(Self {
            magic,
            prg_units: raw[HDR_PRGSIZE_OFFSET],
            chr_units: raw[HDR_CHRSIZE_OFFSET],
            flags6: raw[HDR_FLAGS6_OFFSET],
            flags7: raw[HDR_FLAGS7_OFFSET],
            padding,
        })
    }

    /// Size of the program region in bytes.
    pub fn prg_len(&self) -> usize {
        self.prg_units as usize * PRG_UNIT
    }

    /// Size of the graphics region in bytes.
    pub fn chr_len(&self) -> usize {
        self.chr_units as usize * CHR_UNIT
    }

    pub fn mirroring(&self) -> Mirroring {
        if self.flags6 & FLAGS6_FOURSCREEN != 0 {
            Mirroring::FourScreen
        } else if self.flags6 & FLAGS6_VERTICAL != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    pub fn has_battery(&self) -> bool {
        self.flags6 & FLAGS6_BATTERY != 0
    }

    pub fn has_trainer(&self) -> bool {
        self.flags6 & FLAGS6_TRAINER != 0
    }

    /// Mapper number, low nibble from flags 6 and high nibble from flags 7.
    pub fn mapper(&self) -> u8 {
        (self.flags6 >> 4) | (self.flags7 & 0xF0)
    }

    pub fn is_nes2(&self) -> bool {
        self.flags7 & FLAGS7_NES2_MASK == FLAGS7_NES2
    }
}

/// A cartridge image split into its program and graphics regions
pub struct Cartridge {
    pub header: Header,

    /// Program (PRG) region
    pub prg: Vec<u8>,

    /// Graphics (CHR) region
    pub chr: Vec<u8>,
}

impl Cartridge {
    /// Reads a cartridge from a stream positioned at the start of the
    /// header. Reads exactly the amount of bytes the header declares;
    /// anything following the graphics region is left unread.
    pub fn read_from(stream: &mut impl Read) -> Result<Self> {
        let mut raw = [0; HDR_LEN];
        stream.read_exact(&mut raw).context("Reading header")?;
        let header = Header::parse(&raw)?;

        let mut prg = vec![0; header.prg_len()];
        stream
            .read_exact(&mut prg)
            .with_context(|| format!("Reading PRG ROM ({} bytes)", prg.len()))?;
        let mut chr = vec![0; header.chr_len()];
        stream
            .read_exact(&mut chr)
            .with_context(|| format!("Reading CHR ROM ({} bytes)", chr.len()))?;

        Ok(Self { header, prg, chr })
    }

    /// Loads a cartridge from an in-memory image.
    pub fn load(rom: &[u8]) -> Result<Self> {
        Self::read_from(&mut &rom[..])
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PRG: {}KB, CHR: {}KB, mapper: {}, mirroring: {}, battery: {}, trainer: {}{}",
            self.prg.len() / 1024,
            self.chr.len() / 1024,
            self.header.mapper(),
            self.header.mirroring(),
            self.header.has_battery(),
            self.header.has_trainer(),
            if self.header.is_nes2() { " (NES 2.0)" } else { "" }
        )
    }
}
