pub mod cartridge;
