use std::fmt;

use anyhow::Result;
use strum::{Display, EnumCount, EnumIter};
use thiserror::Error;

use super::instruction_table::INSTRUCTION_TABLE;

/// Instruction addressing mode
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter)]
pub enum AddressingMode {
    /// Accumulator
    /// 1 byte, $OP
    Accumulator,
    /// Absolute
    /// 3 bytes, $OP $LL $HH
    Absolute,
    /// Absolute,X
    /// 3 bytes, $OP $LL $HH
    AbsoluteX,
    /// Absolute,Y
    /// 3 bytes, $OP $LL $HH
    AbsoluteY,
    /// Immediate
    /// 2 bytes, $OP $BB
    Immediate,
    /// Implied
    /// 1 byte, $OP
    Implied,
    /// (Absolute)
    /// 3 bytes, $OP $LL $HH
    Indirect,
    /// (Zeropage,X)
    /// 2 bytes, $OP $LL
    IndirectX,
    /// (Zeropage),Y
    /// 2 bytes, $OP $LL
    IndirectY,
    /// Relative 8-bit
    /// 2 bytes, $OP $BB
    Relative,
    /// Zeropage
    /// 2 bytes, $OP $LL
    ZeroPage,
    /// Zeropage,X
    /// 2 bytes, $OP $LL
    ZeroPageX,
    /// Zeropage,Y
    /// 2 bytes, $OP $LL
    ZeroPageY,
}

impl AddressingMode {
    /// Total length of an instruction using this mode,
    /// including the opcode byte.
    pub const fn len(&self) -> usize {
        match self {
            Self::Accumulator | Self::Implied => 1,
            Self::Immediate
            | Self::Relative
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndirectX
            | Self::IndirectY => 2,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 3,
        }
    }
}

/// Instruction types
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum InstructionType {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
    /// Any opcode not part of the official instruction set
    #[strum(serialize = "xxx")]
    Illegal,
}

/// A definition in the instruction (op code) table
#[derive(Debug)]
pub struct InstructionDef {
    /// Addressing mode
    pub mode: AddressingMode,

    /// Instruction type
    pub instr_type: InstructionType,
}

impl InstructionDef {
    /// Length of the complete instruction, derived from the addressing mode.
    pub const fn len(&self) -> usize {
        self.mode.len()
    }

    pub fn is_illegal(&self) -> bool {
        self.instr_type == InstructionType::Illegal
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DecodeErr {
    #[error("End of instruction stream at offset {offset}")]
    EndOfStream { offset: usize },
    #[error("truncated instruction at offset {offset} (needs {needed} bytes, {available} left)")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// A decoded instruction.
#[derive(Debug, Copy, Clone)]
pub struct Instruction {
    /// Offset of the opcode byte in the decoded buffer.
    pub offset: usize,

    /// Raw opcode byte.
    pub opcode: u8,

    /// Reference to the definition.
    pub def: &'static InstructionDef,

    /// Operand, little-endian. 0 for single-byte instructions.
    pub operand: u16,

    /// Length of the full instruction.
    pub len: usize,
}

impl Instruction {
    /// Try to decode a single instruction starting at `offset`.
    ///
    /// Never reads past the end of `buf`; an instruction whose operand
    /// does not fit is reported as [`DecodeErr::Truncated`].
    pub fn decode(buf: &[u8], offset: usize) -> Result<Instruction> {
        let opcode = *buf.get(offset).ok_or(DecodeErr::EndOfStream { offset })?;
        let def = &INSTRUCTION_TABLE[opcode as usize];
        let len = def.len();

        let operand_bytes = buf
            .get(offset + 1..offset + len)
            .ok_or(DecodeErr::Truncated {
                offset,
                needed: len,
                available: buf.len() - offset,
            })?;
        let operand = operand_bytes
            .iter()
            .rev()
            .fold(0u16, |acc, &b| (acc << 8) | b as u16);

        Ok(Instruction {
            offset,
            opcode,
            def,
            operand,
            len,
        })
    }

    /// Offset of the instruction following this one.
    pub fn next_offset(&self) -> usize {
        self.offset + self.len
    }

    /// Raw instruction bytes.
    pub fn raw(&self) -> Vec<u8> {
        let [lo, hi] = self.operand.to_le_bytes();
        [self.opcode, lo, hi][..self.len].to_vec()
    }

    /// Resolves the destination of a relative branch, with the buffer
    /// mapped at `origin`. Returns None for any other addressing mode.
    /// The result wraps within the 16-bit address space.
    pub fn branch_target(&self, origin: u16) -> Option<u16> {
        if self.def.mode != AddressingMode::Relative {
            return None;
        }
        let displacement = self.operand as u8 as i8;
        Some(
            origin
                .wrapping_add(self.next_offset() as u16)
                .wrapping_add_signed(displacement as i16),
        )
    }

    /// Display adapter rendering relative branches as resolved
    /// addresses instead of raw displacements.
    pub fn resolved(&self, origin: u16) -> ResolvedInstruction<'_> {
        ResolvedInstruction {
            instr: self,
            origin,
        }
    }

    fn write_asm(&self, f: &mut fmt::Formatter, origin: Option<u16>) -> fmt::Result {
        let v = self.operand;

        write!(f, "{}", self.def.instr_type)?;
        match self.def.mode {
            AddressingMode::Accumulator => write!(f, " a"),
            AddressingMode::Implied => Ok(()),
            AddressingMode::Immediate => write!(f, " #${:04x}", v),
            AddressingMode::Absolute | AddressingMode::ZeroPage => write!(f, " ${:04x}", v),
            AddressingMode::AbsoluteX | AddressingMode::ZeroPageX => {
                write!(f, " ${:04x},x", v)
            }
            AddressingMode::AbsoluteY | AddressingMode::ZeroPageY => {
                write!(f, " ${:04x},y", v)
            }
            AddressingMode::Indirect => write!(f, "(${:04x})", v),
            AddressingMode::IndirectX => write!(f, " (${:04x},x)", v),
            AddressingMode::IndirectY => write!(f, " (${:04x}),y", v),
            AddressingMode::Relative => match origin.and_then(|o| self.branch_target(o)) {
                Some(target) => write!(f, " ${:04x}", target),
                None => write!(f, " ${:08b}", v),
            },
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_asm(f, None)
    }
}

pub struct ResolvedInstruction<'a> {
    instr: &'a Instruction,
    origin: u16,
}

impl fmt::Display for ResolvedInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.instr.write_asm(f, Some(self.origin))
    }
}
