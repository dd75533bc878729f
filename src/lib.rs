pub mod cpu_6502;
pub mod nes;

#[cfg(test)]
pub mod test;
