use super::instruction::{AddressingMode, InstructionDef, InstructionType};

macro_rules! instr {
    ($typ:expr, $mode:expr) => {
        InstructionDef {
            instr_type: $typ,
            mode: $mode,
        }
    };
}

macro_rules! illegal {
    () => {
        instr!(InstructionType::Illegal, AddressingMode::Implied)
    };
}

pub static INSTRUCTION_TABLE: [InstructionDef; 256] = [
    // 0x00 - BRK, 1 byte
    instr!(InstructionType::BRK, AddressingMode::Implied),
    // 0x01 - ORA ($44,X), 2 bytes
    instr!(InstructionType::ORA, AddressingMode::IndirectX),
    // 0x02 - undefined
    illegal!(),
    // 0x03 - undefined
    illegal!(),
    // 0x04 - undefined
    illegal!(),
    // 0x05 - ORA $44, 2 bytes
    instr!(InstructionType::ORA, AddressingMode::ZeroPage),
    // 0x06 - ASL $44, 2 bytes
    instr!(InstructionType::ASL, AddressingMode::ZeroPage),
    // 0x07 - undefined
    illegal!(),
    // 0x08 - PHP, 1 byte
    instr!(InstructionType::PHP, AddressingMode::Implied),
    // 0x09 - ORA #$44, 2 bytes
    instr!(InstructionType::ORA, AddressingMode::Immediate),
    // 0x0A - ASL A, 1 byte
    instr!(InstructionType::ASL, AddressingMode::Accumulator),
    // 0x0B - undefined
    illegal!(),
    // 0x0C - undefined
    illegal!(),
    // 0x0D - ORA $4400, 3 bytes
    instr!(InstructionType::ORA, AddressingMode::Absolute),
    // 0x0E - ASL $4400, 3 bytes
    instr!(InstructionType::ASL, AddressingMode::Absolute),
    // 0x0F - undefined
    illegal!(),
    // 0x10 - BPL LABEL, 2 bytes
    instr!(InstructionType::BPL, AddressingMode::Relative),
    // 0x11 - ORA ($44),Y, 2 bytes
    instr!(InstructionType::ORA, AddressingMode::IndirectY),
    // 0x12 - undefined
    illegal!(),
    // 0x13 - undefined
    illegal!(),
    // 0x14 - undefined
    illegal!(),
    // 0x15 - ORA $44,X, 2 bytes
    instr!(InstructionType::ORA, AddressingMode::ZeroPageX),
    // 0x16 - ASL $44,X, 2 bytes
    instr!(InstructionType::ASL, AddressingMode::ZeroPageX),
    // 0x17 - undefined
    illegal!(),
    // 0x18 - CLC, 1 byte
    instr!(InstructionType::CLC, AddressingMode::Implied),
    // 0x19 - ORA $4400,Y, 3 bytes
    instr!(InstructionType::ORA, AddressingMode::AbsoluteY),
    // 0x1A - undefined
    illegal!(),
    // 0x1B - undefined
    illegal!(),
    // 0x1C - undefined
    illegal!(),
    // 0x1D - ORA $4400,X, 3 bytes
    instr!(InstructionType::ORA, AddressingMode::AbsoluteX),
    // 0x1E - ASL $4400,X, 3 bytes
    instr!(InstructionType::ASL, AddressingMode::AbsoluteX),
    // 0x1F - undefined
    illegal!(),
    // 0x20 - JSR $4400, 3 bytes
    instr!(InstructionType::JSR, AddressingMode::Absolute),
    // 0x21 - AND ($44,X), 2 bytes
    instr!(InstructionType::AND, AddressingMode::IndirectX),
    // 0x22 - undefined
    illegal!(),
    // 0x23 - undefined
    illegal!(),
    // 0x24 - BIT $44, 2 bytes
    instr!(InstructionType::BIT, AddressingMode::ZeroPage),
    // 0x25 - AND $44, 2 bytes
    instr!(InstructionType::AND, AddressingMode::ZeroPage),
    // 0x26 - ROL $44, 2 bytes
    instr!(InstructionType::ROL, AddressingMode::ZeroPage),
    // 0x27 - undefined
    illegal!(),
    // 0x28 - PLP, 1 byte
    instr!(InstructionType::PLP, AddressingMode::Implied),
    // 0x29 - AND #$44, 2 bytes
    instr!(InstructionType::AND, AddressingMode::Immediate),
    // 0x2A - ROL A, 1 byte
    instr!(InstructionType::ROL, AddressingMode::Accumulator),
    // 0x2B - undefined
    illegal!(),
    // 0x2C - BIT $4400, 3 bytes
    instr!(InstructionType::BIT, AddressingMode::Absolute),
    // 0x2D - AND $4400, 3 bytes
    instr!(InstructionType::AND, AddressingMode::Absolute),
    // 0x2E - ROL $4400, 3 bytes
    instr!(InstructionType::ROL, AddressingMode::Absolute),
    // 0x2F - undefined
    illegal!(),
    // 0x30 - BMI LABEL, 2 bytes
    instr!(InstructionType::BMI, AddressingMode::Relative),
    // 0x31 - AND ($44),Y, 2 bytes
    instr!(InstructionType::AND, AddressingMode::IndirectY),
    // 0x32 - undefined
    illegal!(),
    // 0x33 - undefined
    illegal!(),
    // 0x34 - undefined
    illegal!(),
    // 0x35 - AND $44,X, 2 bytes
    instr!(InstructionType::AND, AddressingMode::ZeroPageX),
    // 0x36 - ROL $44,X, 2 bytes
    instr!(InstructionType::ROL, AddressingMode::ZeroPageX),
    // 0x37 - undefined
    illegal!(),
    // 0x38 - SEC, 1 byte
    instr!(InstructionType::SEC, AddressingMode::Implied),
    // 0x39 - AND $4400,Y, 3 bytes
    instr!(InstructionType::AND, AddressingMode::AbsoluteY),
    // 0x3A - undefined
    illegal!(),
    // 0x3B - undefined
    illegal!(),
    // 0x3C - undefined
    illegal!(),
    // 0x3D - AND $4400,X, 3 bytes
    instr!(InstructionType::AND, AddressingMode::AbsoluteX),
    // 0x3E - ROL $4400,X, 3 bytes
    instr!(InstructionType::ROL, AddressingMode::AbsoluteX),
    // 0x3F - undefined
    illegal!(),
    // 0x40 - RTI, 1 byte
    instr!(InstructionType::RTI, AddressingMode::Implied),
    // 0x41 - EOR ($44,X), 2 bytes
    instr!(InstructionType::EOR, AddressingMode::IndirectX),
    // 0x42 - undefined
    illegal!(),
    // 0x43 - undefined
    illegal!(),
    // 0x44 - undefined
    illegal!(),
    // 0x45 - EOR $44, 2 bytes
    instr!(InstructionType::EOR, AddressingMode::ZeroPage),
    // 0x46 - LSR $44, 2 bytes
    instr!(InstructionType::LSR, AddressingMode::ZeroPage),
    // 0x47 - undefined
    illegal!(),
    // 0x48 - PHA, 1 byte
    instr!(InstructionType::PHA, AddressingMode::Implied),
    // 0x49 - EOR #$44, 2 bytes
    instr!(InstructionType::EOR, AddressingMode::Immediate),
    // 0x4A - LSR A, 1 byte
    instr!(InstructionType::LSR, AddressingMode::Accumulator),
    // 0x4B - undefined
    illegal!(),
    // 0x4C - JMP $4400, 3 bytes
    instr!(InstructionType::JMP, AddressingMode::Absolute),
    // 0x4D - EOR $4400, 3 bytes
    instr!(InstructionType::EOR, AddressingMode::Absolute),
    // 0x4E - LSR $4400, 3 bytes
    instr!(InstructionType::LSR, AddressingMode::Absolute),
    // 0x4F - undefined
    illegal!(),
    // 0x50 - BVC LABEL, 2 bytes
    instr!(InstructionType::BVC, AddressingMode::Relative),
    // 0x51 - EOR ($44),Y, 2 bytes
    instr!(InstructionType::EOR, AddressingMode::IndirectY),
    // 0x52 - undefined
    illegal!(),
    // 0x53 - undefined
    illegal!(),
    // 0x54 - undefined
    illegal!(),
    // 0x55 - EOR $44,X, 2 bytes
    instr!(InstructionType::EOR, AddressingMode::ZeroPageX),
    // 0x56 - LSR $44,X, 2 bytes
    instr!(InstructionType::LSR, AddressingMode::ZeroPageX),
    // 0x57 - undefined
    illegal!(),
    // 0x58 - CLI, 1 byte
    instr!(InstructionType::CLI, AddressingMode::Implied),
    // 0x59 - EOR $4400,Y, 3 bytes
    instr!(InstructionType::EOR, AddressingMode::AbsoluteY),
    // 0x5A - undefined
    illegal!(),
    // 0x5B - undefined
    illegal!(),
    // 0x5C - undefined
    illegal!(),
    // 0x5D - EOR $4400,X, 3 bytes
    instr!(InstructionType::EOR, AddressingMode::AbsoluteX),
    // 0x5E - LSR $4400,X, 3 bytes
    instr!(InstructionType::LSR, AddressingMode::AbsoluteX),
    // 0x5F - undefined
    illegal!(),
    // 0x60 - RTS, 1 byte
    instr!(InstructionType::RTS, AddressingMode::Implied),
    // 0x61 - ADC ($44,X), 2 bytes
    instr!(InstructionType::ADC, AddressingMode::IndirectX),
    // 0x62 - undefined
    illegal!(),
    // 0x63 - undefined
    illegal!(),
    // 0x64 - undefined
    illegal!(),
    // 0x65 - ADC $44, 2 bytes
    instr!(InstructionType::ADC, AddressingMode::ZeroPage),
    // 0x66 - ROR $44, 2 bytes
    instr!(InstructionType::ROR, AddressingMode::ZeroPage),
    // 0x67 - undefined
    illegal!(),
    // 0x68 - PLA, 1 byte
    instr!(InstructionType::PLA, AddressingMode::Implied),
    // 0x69 - ADC #$44, 2 bytes
    instr!(InstructionType::ADC, AddressingMode::Immediate),
    // 0x6A - ROR A, 1 byte
    instr!(InstructionType::ROR, AddressingMode::Accumulator),
    // 0x6B - undefined
    illegal!(),
    // 0x6C - JMP ($4400), 3 bytes
    instr!(InstructionType::JMP, AddressingMode::Indirect),
    // 0x6D - ADC $4400, 3 bytes
    instr!(InstructionType::ADC, AddressingMode::Absolute),
    // 0x6E - ROR $4400, 3 bytes
    instr!(InstructionType::ROR, AddressingMode::Absolute),
    // 0x6F - undefined
    illegal!(),
    // 0x70 - BVS LABEL, 2 bytes
    instr!(InstructionType::BVS, AddressingMode::Relative),
    // 0x71 - ADC ($44),Y, 2 bytes
    instr!(InstructionType::ADC, AddressingMode::IndirectY),
    // 0x72 - undefined
    illegal!(),
    // 0x73 - undefined
    illegal!(),
    // 0x74 - undefined
    illegal!(),
    // 0x75 - ADC $44,X, 2 bytes
    instr!(InstructionType::ADC, AddressingMode::ZeroPageX),
    // 0x76 - ROR $44,X, 2 bytes
    instr!(InstructionType::ROR, AddressingMode::ZeroPageX),
    // 0x77 - undefined
    illegal!(),
    // 0x78 - SEI, 1 byte
    instr!(InstructionType::SEI, AddressingMode::Implied),
    // 0x79 - ADC $4400,Y, 3 bytes
    instr!(InstructionType::ADC, AddressingMode::AbsoluteY),
    // 0x7A - undefined
    illegal!(),
    // 0x7B - undefined
    illegal!(),
    // 0x7C - undefined
    illegal!(),
    // 0x7D - ADC $4400,X, 3 bytes
    instr!(InstructionType::ADC, AddressingMode::AbsoluteX),
    // 0x7E - ROR $4400,X, 3 bytes
    instr!(InstructionType::ROR, AddressingMode::AbsoluteX),
    // 0x7F - undefined
    illegal!(),
    // 0x80 - undefined
    illegal!(),
    // 0x81 - STA ($44,X), 2 bytes
    instr!(InstructionType::STA, AddressingMode::IndirectX),
    // 0x82 - undefined
    illegal!(),
    // 0x83 - undefined
    illegal!(),
    // 0x84 - STY $44, 2 bytes
    instr!(InstructionType::STY, AddressingMode::ZeroPage),
    // 0x85 - STA $44, 2 bytes
    instr!(InstructionType::STA, AddressingMode::ZeroPage),
    // 0x86 - STX $44, 2 bytes
    instr!(InstructionType::STX, AddressingMode::ZeroPage),
    // 0x87 - undefined
    illegal!(),
    // 0x88 - DEY, 1 byte
    instr!(InstructionType::DEY, AddressingMode::Implied),
    // 0x89 - undefined
    illegal!(),
    // 0x8A - TXA, 1 byte
    instr!(InstructionType::TXA, AddressingMode::Implied),
    // 0x8B - undefined
    illegal!(),
    // 0x8C - STY $4400, 3 bytes
    instr!(InstructionType::STY, AddressingMode::Absolute),
    // 0x8D - STA $4400, 3 bytes
    instr!(InstructionType::STA, AddressingMode::Absolute),
    // 0x8E - STX $4400, 3 bytes
    instr!(InstructionType::STX, AddressingMode::Absolute),
    // 0x8F - undefined
    illegal!(),
    // 0x90 - BCC LABEL, 2 bytes
    instr!(InstructionType::BCC, AddressingMode::Relative),
    // 0x91 - STA ($44),Y, 2 bytes
    instr!(InstructionType::STA, AddressingMode::IndirectY),
    // 0x92 - undefined
    illegal!(),
    // 0x93 - undefined
    illegal!(),
    // 0x94 - STY $44,X, 2 bytes
    instr!(InstructionType::STY, AddressingMode::ZeroPageX),
    // 0x95 - STA $44,X, 2 bytes
    instr!(InstructionType::STA, AddressingMode::ZeroPageX),
    // 0x96 - STX $44,Y, 2 bytes
    instr!(InstructionType::STX, AddressingMode::ZeroPageY),
    // 0x97 - undefined
    illegal!(),
    // 0x98 - TYA, 1 byte
    instr!(InstructionType::TYA, AddressingMode::Implied),
    // 0x99 - STA $4400,Y, 3 bytes
    instr!(InstructionType::STA, AddressingMode::AbsoluteY),
    // 0x9A - TXS, 1 byte
    instr!(InstructionType::TXS, AddressingMode::Implied),
    // 0x9B - undefined
    illegal!(),
    // 0x9C - undefined
    illegal!(),
    // 0x9D - STA $4400,X, 3 bytes
    instr!(InstructionType::STA, AddressingMode::AbsoluteX),
    // 0x9E - undefined
    illegal!(),
    // 0x9F - undefined
    illegal!(),
    // 0xA0 - LDY #$44, 2 bytes
    instr!(InstructionType::LDY, AddressingMode::Immediate),
    // 0xA1 - LDA ($44,X), 2 bytes
    instr!(InstructionType::LDA, AddressingMode::IndirectX),
    // 0xA2 - LDX #$44, 2 bytes
    instr!(InstructionType::LDX, AddressingMode::Immediate),
    // 0xA3 - undefined
    illegal!(),
    // 0xA4 - LDY $44, 2 bytes
    instr!(InstructionType::LDY, AddressingMode::ZeroPage),
    // 0xA5 - LDA $44, 2 bytes
    instr!(InstructionType::LDA, AddressingMode::ZeroPage),
    // 0xA6 - LDX $44, 2 bytes
    instr!(InstructionType::LDX, AddressingMode::ZeroPage),
    // 0xA7 - undefined
    illegal!(),
    // 0xA8 - TAY, 1 byte
    instr!(InstructionType::TAY, AddressingMode::Implied),
    // 0xA9 - LDA #$44, 2 bytes
    instr!(InstructionType::LDA, AddressingMode::Immediate),
    // 0xAA - TAX, 1 byte
    instr!(InstructionType::TAX, AddressingMode::Implied),
    // 0xAB - undefined
    illegal!(),
    // 0xAC - LDY $4400, 3 bytes
    instr!(InstructionType::LDY, AddressingMode::Absolute),
    // 0xAD - LDA $4400, 3 bytes
    instr!(InstructionType::LDA, AddressingMode::Absolute),
    // 0xAE - LDX $4400, 3 bytes
    instr!(InstructionType::LDX, AddressingMode::Absolute),
    // 0xAF - undefined
    illegal!(),
    // 0xB0 - BCS LABEL, 2 bytes
    instr!(InstructionType::BCS, AddressingMode::Relative),
    // 0xB1 - LDA ($44),Y, 2 bytes
    instr!(InstructionType::LDA, AddressingMode::IndirectY),
    // 0xB2 - undefined
    illegal!(),
    // 0xB3 - undefined
    illegal!(),
    // 0xB4 - LDY $44,X, 2 bytes
    instr!(InstructionType::LDY, AddressingMode::ZeroPageX),
    // 0xB5 - LDA $44,X, 2 bytes
    instr!(InstructionType::LDA, AddressingMode::ZeroPageX),
    // 0xB6 - LDX $44,Y, 2 bytes
    instr!(InstructionType::LDX, AddressingMode::ZeroPageY),
    // 0xB7 - undefined
    illegal!(),
    // 0xB8 - CLV, 1 byte
    instr!(InstructionType::CLV, AddressingMode::Implied),
    // 0xB9 - LDA $4400,Y, 3 bytes
    instr!(InstructionType::LDA, AddressingMode::AbsoluteY),
    // 0xBA - TSX, 1 byte
    instr!(InstructionType::TSX, AddressingMode::Implied),
    // 0xBB - undefined
    illegal!(),
    // 0xBC - LDY $4400,X, 3 bytes
    instr!(InstructionType::LDY, AddressingMode::AbsoluteX),
    // 0xBD - LDA $4400,X, 3 bytes
    instr!(InstructionType::LDA, AddressingMode::AbsoluteX),
    // 0xBE - LDX $4400,Y, 3 bytes
    instr!(InstructionType::LDX, AddressingMode::AbsoluteY),
    // 0xBF - undefined
    illegal!(),
    // 0xC0 - CPY #$44, 2 bytes
    instr!(InstructionType::CPY, AddressingMode::Immediate),
    // 0xC1 - CMP ($44,X), 2 bytes
    instr!(InstructionType::CMP, AddressingMode::IndirectX),
    // 0xC2 - undefined
    illegal!(),
    // 0xC3 - undefined
    illegal!(),
    // 0xC4 - CPY $44, 2 bytes
    instr!(InstructionType::CPY, AddressingMode::ZeroPage),
    // 0xC5 - CMP $44, 2 bytes
    instr!(InstructionType::CMP, AddressingMode::ZeroPage),
    // 0xC6 - DEC $44, 2 bytes
    instr!(InstructionType::DEC, AddressingMode::ZeroPage),
    // 0xC7 - undefined
    illegal!(),
    // 0xC8 - INY, 1 byte
    instr!(InstructionType::INY, AddressingMode::Implied),
    // 0xC9 - CMP #$44, 2 bytes
    instr!(InstructionType::CMP, AddressingMode::Immediate),
    // 0xCA - DEX, 1 byte
    instr!(InstructionType::DEX, AddressingMode::Implied),
    // 0xCB - undefined
    illegal!(),
    // 0xCC - CPY $4400, 3 bytes
    instr!(InstructionType::CPY, AddressingMode::Absolute),
    // 0xCD - CMP $4400, 3 bytes
    instr!(InstructionType::CMP, AddressingMode::Absolute),
    // 0xCE - DEC $4400, 3 bytes
    instr!(InstructionType::DEC, AddressingMode::Absolute),
    // 0xCF - undefined
    illegal!(),
    // 0xD0 - BNE LABEL, 2 bytes
    instr!(InstructionType::BNE, AddressingMode::Relative),
    // 0xD1 - CMP ($44),Y, 2 bytes
    instr!(InstructionType::CMP, AddressingMode::IndirectY),
    // 0xD2 - undefined
    illegal!(),
    // 0xD3 - undefined
    illegal!(),
    // 0xD4 - undefined
    illegal!(),
    // 0xD5 - CMP $44,X, 2 bytes
    instr!(InstructionType::CMP, AddressingMode::ZeroPageX),
    // 0xD6 - DEC $44,X, 2 bytes
    instr!(InstructionType::DEC, AddressingMode::ZeroPageX),
    // 0xD7 - undefined
    illegal!(),
    // 0xD8 - CLD, 1 byte
    instr!(InstructionType::CLD, AddressingMode::Implied),
    // 0xD9 - CMP $4400,Y, 3 bytes
    instr!(InstructionType::CMP, AddressingMode::AbsoluteY),
    // 0xDA - undefined
    illegal!(),
    // 0xDB - undefined
    illegal!(),
    // 0xDC - undefined
    illegal!(),
    // 0xDD - CMP $4400,X, 3 bytes
    instr!(InstructionType::CMP, AddressingMode::AbsoluteX),
    // 0xDE - DEC $4400,X, 3 bytes
    instr!(InstructionType::DEC, AddressingMode::AbsoluteX),
    // 0xDF - undefined
    illegal!(),
    // 0xE0 - CPX #$44, 2 bytes
    instr!(InstructionType::CPX, AddressingMode::Immediate),
    // 0xE1 - SBC ($44,X), 2 bytes
    instr!(InstructionType::SBC, AddressingMode::IndirectX),
    // 0xE2 - undefined
    illegal!(),
    // 0xE3 - undefined
    illegal!(),
    // 0xE4 - CPX $44, 2 bytes
    instr!(InstructionType::CPX, AddressingMode::ZeroPage),
    // 0xE5 - SBC $44, 2 bytes
    instr!(InstructionType::SBC, AddressingMode::ZeroPage),
    // 0xE6 - INC $44, 2 bytes
    instr!(InstructionType::INC, AddressingMode::ZeroPage),
    // 0xE7 - undefined
    illegal!(),
    // 0xE8 - INX, 1 byte
    instr!(InstructionType::INX, AddressingMode::Implied),
    // 0xE9 - SBC #$44, 2 bytes
    instr!(InstructionType::SBC, AddressingMode::Immediate),
    // 0xEA - NOP, 1 byte
    instr!(InstructionType::NOP, AddressingMode::Implied),
    // 0xEB - undefined
    illegal!(),
    // 0xEC - CPX $4400, 3 bytes
    instr!(InstructionType::CPX, AddressingMode::Absolute),
    // 0xED - SBC $4400, 3 bytes
    instr!(InstructionType::SBC, AddressingMode::Absolute),
    // 0xEE - INC $4400, 3 bytes
    instr!(InstructionType::INC, AddressingMode::Absolute),
    // 0xEF - undefined
    illegal!(),
    // 0xF0 - BEQ LABEL, 2 bytes
    instr!(InstructionType::BEQ, AddressingMode::Relative),
    // 0xF1 - SBC ($44),Y, 2 bytes
    instr!(InstructionType::SBC, AddressingMode::IndirectY),
    // 0xF2 - undefined
    illegal!(),
    // 0xF3 - undefined
    illegal!(),
    // 0xF4 - undefined
    illegal!(),
    // 0xF5 - SBC $44,X, 2 bytes
    instr!(InstructionType::SBC, AddressingMode::ZeroPageX),
    // 0xF6 - INC $44,X, 2 bytes
    instr!(InstructionType::INC, AddressingMode::ZeroPageX),
    // 0xF7 - undefined
    illegal!(),
    // 0xF8 - SED, 1 byte
    instr!(InstructionType::SED, AddressingMode::Implied),
    // 0xF9 - SBC $4400,Y, 3 bytes
    instr!(InstructionType::SBC, AddressingMode::AbsoluteY),
    // 0xFA - undefined
    illegal!(),
    // 0xFB - undefined
    illegal!(),
    // 0xFC - undefined
    illegal!(),
    // 0xFD - SBC $4400,X, 3 bytes
    instr!(InstructionType::SBC, AddressingMode::AbsoluteX),
    // 0xFE - INC $4400,X, 3 bytes
    instr!(InstructionType::INC, AddressingMode::AbsoluteX),
    // 0xFF - undefined
    illegal!(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    #[test]
    fn official_opcode_count() {
        assert_eq!(
            INSTRUCTION_TABLE.iter().filter(|d| !d.is_illegal()).count(),
            151
        );
    }

    #[test]
    fn every_mnemonic_present() {
        let used = INSTRUCTION_TABLE
            .iter()
            .map(|d| d.instr_type)
            .unique()
            .collect_vec();
        for t in InstructionType::iter() {
            assert!(used.contains(&t), "{} missing from table", t);
        }
    }

    #[test]
    fn illegal_is_implied() {
        for def in INSTRUCTION_TABLE.iter().filter(|d| d.is_illegal()) {
            assert_eq!(def.mode, AddressingMode::Implied);
            assert_eq!(def.len(), 1);
        }
    }

    #[test]
    fn length_follows_mode() {
        for (op, def) in INSTRUCTION_TABLE.iter().enumerate() {
            assert_eq!(def.len(), def.mode.len(), "opcode {:02X}", op);
        }
    }

    #[test]
    fn spot_check() {
        let check = |op: usize, t: InstructionType, m: AddressingMode| {
            assert_eq!(INSTRUCTION_TABLE[op].instr_type, t, "opcode {:02X}", op);
            assert_eq!(INSTRUCTION_TABLE[op].mode, m, "opcode {:02X}", op);
        };
        check(0x00, InstructionType::BRK, AddressingMode::Implied);
        check(0x1D, InstructionType::ORA, AddressingMode::AbsoluteX);
        check(0x4C, InstructionType::JMP, AddressingMode::Absolute);
        check(0x6C, InstructionType::JMP, AddressingMode::Indirect);
        check(0x96, InstructionType::STX, AddressingMode::ZeroPageY);
        check(0xA9, InstructionType::LDA, AddressingMode::Immediate);
        check(0xBE, InstructionType::LDX, AddressingMode::AbsoluteY);
        check(0xEA, InstructionType::NOP, AddressingMode::Implied);
        check(0x02, InstructionType::Illegal, AddressingMode::Implied);
        check(0xFF, InstructionType::Illegal, AddressingMode::Implied);
    }
}
