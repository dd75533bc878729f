pub mod disassembler;
pub mod instruction;
pub mod instruction_table;
