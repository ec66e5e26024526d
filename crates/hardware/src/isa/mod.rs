//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the instruction model, the text decoder, and the disassembler for the
//! fixed opcode set: `MOV`, `MOVS`, `ADD`, `ADDS`, `SUB`, `SUBS`, `CMP`, `AND`, `ORR`,
//! `EOR`, `LDR`, `STR`, `B`, `BL`, `BX`.

/// Register conventions and names.
pub mod abi;

/// Assembly text decoder.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Opcodes, operand layouts, and the decoded instruction type.
pub mod instruction;

pub use decode::decode;
pub use instruction::{Instruction, InstructionClass, Opcode, Operand, Operands};
