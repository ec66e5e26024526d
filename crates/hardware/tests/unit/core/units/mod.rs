/// ALU result and flag derivation tests.
pub mod alu;
