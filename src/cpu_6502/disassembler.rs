use std::io::Write;

use anyhow::{Context, Result};
use itertools::Itertools;

use super::instruction::Instruction;

/// How relative branch operands are printed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, clap::ValueEnum)]
pub enum BranchStyle {
    /// Raw 8-bit displacement as a binary string
    #[default]
    Binary,
    /// Resolved destination address
    Target,
}

/// Formatting of a disassembly listing.
#[derive(Debug, Copy, Clone)]
pub struct ListingOptions {
    /// Prefix every line with its address (origin + offset)
    pub addresses: bool,

    /// Show the raw instruction bytes after the address
    pub bytes: bool,

    /// Address the buffer is mapped at. Addresses past $FFFF wrap
    /// around, as buffers over 64KB are not bank-mapped.
    pub origin: u16,

    /// Relative branch operand rendering
    pub branches: BranchStyle,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            addresses: false,
            bytes: false,
            origin: 0x8000,
            branches: BranchStyle::Binary,
        }
    }
}

impl ListingOptions {
    /// Renders a single instruction as one listing line.
    pub fn format(&self, ins: &Instruction) -> String {
        let mut line = String::new();
        if self.addresses {
            line.push_str(&format!(
                "{:04X} ",
                self.origin.wrapping_add(ins.offset as u16)
            ));
        }
        if self.bytes {
            line.push_str(&format!("{:<9}", format!("{:02X}", ins.raw().iter().format(" "))));
        }
        match self.branches {
            BranchStyle::Binary => line.push_str(&ins.to_string()),
            BranchStyle::Target => line.push_str(&ins.resolved(self.origin).to_string()),
        }
        line
    }

    /// Renders a line for console tracing, always prefixed with the
    /// address exactly once.
    pub fn trace_line(&self, ins: &Instruction) -> String {
        Self {
            addresses: true,
            ..*self
        }
        .format(ins)
    }
}

#[derive(Clone, Copy)]
enum State {
    Scanning(usize),
    Done,
    Failed,
}

/// Walks a buffer from offset 0, decoding one instruction at a time.
///
/// Every step starts where the previous instruction ended. The walk ends
/// when the buffer is exhausted, or after yielding the first decode error.
pub struct Disassembler<'a> {
    buf: &'a [u8],
    state: State,
}

impl<'a> Disassembler<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            state: State::Scanning(0),
        }
    }

    /// Offset of the next instruction to decode, if still scanning.
    pub fn offset(&self) -> Option<usize> {
        match self.state {
            State::Scanning(offset) => Some(offset),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Scanning(offset) = self.state else {
            return None;
        };
        if offset >= self.buf.len() {
            self.state = State::Done;
            return None;
        }

        match Instruction::decode(self.buf, offset) {
            Ok(ins) => {
                self.state = State::Scanning(ins.next_offset());
                Some(Ok(ins))
            }
            Err(e) => {
                self.state = State::Failed;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Disassembler<'_> {}

/// Disassembles a complete buffer into rendered lines.
pub fn disassemble(buf: &[u8]) -> Result<Vec<String>> {
    Disassembler::new(buf)
        .map(|ins| ins.map(|i| i.to_string()))
        .collect()
}

/// Streams the listing of `buf` into `out`, one instruction per line.
/// Returns the amount of instructions written.
pub fn write_listing(buf: &[u8], out: &mut impl Write, opts: &ListingOptions) -> Result<usize> {
    write_listing_with(buf, out, opts, |_, _| {})
}

/// Like [`write_listing`], calling `on_line` with every instruction and
/// its rendered line after it has been written.
pub fn write_listing_with(
    buf: &[u8],
    out: &mut impl Write,
    opts: &ListingOptions,
    mut on_line: impl FnMut(&Instruction, &str),
) -> Result<usize> {
    let mut count = 0;
    for ins in Disassembler::new(buf) {
        let ins = ins?;
        let line = opts.format(&ins);
        writeln!(out, "{}", line).context("Writing listing")?;
        on_line(&ins, &line);
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_6502::instruction::DecodeErr;
    use hex_literal::hex;

    #[test]
    fn walk_sequence() {
        let prog = hex!("A9 05 4C 00 80 EA 02 D0 FB");
        let lines = disassemble(&prog).unwrap();
        assert_eq!(
            lines,
            vec!["lda #$0005", "jmp $8000", "nop", "xxx", "bne $11111011"]
        );
    }

    #[test]
    fn walk_offsets_follow_length() {
        let prog = hex!("A9 05 4C 00 80 EA 0A B1 20");
        let mut d = Disassembler::new(&prog);
        let mut expected = 0;
        while let Some(ins) = d.next() {
            let ins = ins.unwrap();
            assert_eq!(ins.offset, expected);
            assert_eq!(ins.len, ins.def.mode.len());
            expected = ins.next_offset();
            if expected < prog.len() {
                assert_eq!(d.offset(), Some(expected));
            }
        }
        assert_eq!(expected, prog.len());
        assert_eq!(d.offset(), None);
    }

    #[test]
    fn single_nop_done() {
        let mut d = Disassembler::new(&[0xEA]);
        assert_eq!(d.next().unwrap().unwrap().to_string(), "nop");
        assert!(d.next().is_none());
        assert!(d.is_done());
    }

    #[test]
    fn truncated_fails() {
        let mut d = Disassembler::new(&[0x4C]);
        let err = d.next().unwrap().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecodeErr>(),
            Some(DecodeErr::Truncated { offset: 0, .. })
        ));
        assert!(d.has_failed());
        assert!(d.next().is_none());
    }

    #[test]
    fn truncated_after_valid() {
        let err = disassemble(&hex!("EA EA AD 00")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecodeErr>(),
            Some(DecodeErr::Truncated { offset: 2, .. })
        ));
    }

    #[test]
    fn empty_buffer() {
        let mut d = Disassembler::new(&[]);
        assert!(d.next().is_none());
        assert!(d.is_done());
        assert!(disassemble(&[]).unwrap().is_empty());
    }

    #[test]
    fn idempotent() {
        let prog = hex!("78 D8 A2 FF 9A AD 02 20 10 FB");
        assert_eq!(disassemble(&prog).unwrap(), disassemble(&prog).unwrap());
    }

    #[test]
    fn listing_plain() {
        let mut out = vec![];
        let n = write_listing(&hex!("A9 05 EA"), &mut out, &ListingOptions::default()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "lda #$0005\nnop\n");
    }

    #[test]
    fn listing_addresses_and_targets() {
        let opts = ListingOptions {
            addresses: true,
            bytes: true,
            origin: 0xC000,
            branches: BranchStyle::Target,
        };
        let mut out = vec![];
        write_listing(&hex!("AD 02 20 10 FB"), &mut out, &opts).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "C000 AD 02 20 lda $2002\nC003 10 FB    bpl $c000\n"
        );
    }

    #[test]
    fn listing_callback_sees_written_lines() {
        let prog = hex!("A9 05 D0 FB");
        let opts = ListingOptions {
            addresses: true,
            ..Default::default()
        };
        let mut out = vec![];
        let mut echoed = vec![];
        let n = write_listing_with(&prog, &mut out, &opts, |ins, line| {
            echoed.push((ins.offset, line.to_string()))
        })
        .unwrap();

        assert_eq!(n, 2);
        assert_eq!(
            echoed,
            vec![
                (0, "8000 lda #$0005".to_string()),
                (2, "8002 bne $11111011".to_string())
            ]
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "8000 lda #$0005\n8002 bne $11111011\n"
        );
    }

    #[test]
    fn trace_line_single_address() {
        let prog = hex!("A9 05 D0 FB");
        let ins = Disassembler::new(&prog)
            .map(|i| i.unwrap())
            .collect::<Vec<_>>();

        let plain = ListingOptions::default();
        assert_eq!(plain.trace_line(&ins[0]), "8000 lda #$0005");

        let with_addr = ListingOptions {
            addresses: true,
            ..Default::default()
        };
        assert_eq!(with_addr.trace_line(&ins[1]), "8002 bne $11111011");
        assert_eq!(with_addr.trace_line(&ins[1]), with_addr.format(&ins[1]));
    }

    #[test]
    fn addresses_wrap_past_64k() {
        let mut prog = vec![0xEA; 0x8001];
        prog.extend(hex!("A9 05"));
        let last = Disassembler::new(&prog).last().unwrap().unwrap();
        assert_eq!(last.offset, 0x8001);
        assert_eq!(ListingOptions::default().trace_line(&last), "0001 lda #$0005");
    }

    #[test]
    fn listing_stops_on_error() {
        let mut out = vec![];
        assert!(write_listing(&hex!("EA 20 00"), &mut out, &ListingOptions::default()).is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "nop\n");
    }
}
