//! Instruction Disassembler.
//!
//! Renders a decoded [`Instruction`] back into canonical assembly text for program
//! listings, trace lines of instructions built in code, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use armsim_core::isa::decode::decode;
//! use armsim_core::isa::disasm::disassemble;
//!
//! let inst = decode("ldr r5,[r0]").unwrap();
//! assert_eq!(disassemble(&inst), "LDR R5, [R0, #0]");
//! ```

use std::fmt;

use crate::isa::abi::REG_NAMES;
use crate::isa::instruction::{Instruction, Operand, Operands};

/// Disassembles an instruction into upper-case canonical text.
///
/// Immediates are printed in decimal; 32-bit immediates print unsigned, load/store and
/// branch offsets print signed.
pub fn disassemble(inst: &Instruction) -> String {
    let m = inst.op().mnemonic();
    match *inst.operands() {
        Operands::Move { rd, src } => format!("{m} {}, {}", reg(rd), operand(src)),
        Operands::Data { rd, rn, src } => {
            format!("{m} {}, {}, {}", reg(rd), reg(rn), operand(src))
        }
        Operands::Compare { rn, src } => format!("{m} {}, {}", reg(rn), operand(src)),
        Operands::Memory { rd, rn, offset } => {
            format!("{m} {}, [{}, #{offset}]", reg(rd), reg(rn))
        }
        Operands::Branch { offset } => format!("{m} #{offset}"),
        Operands::Exchange { rm } => format!("{m} {}", reg(rm)),
    }
}

fn operand(op: Operand) -> String {
    match op {
        Operand::Immediate(imm) => format!("#{imm}"),
        Operand::Register(idx) => reg(idx),
    }
}

/// Register name, including numbers past the end of the file.
fn reg(idx: usize) -> String {
    REG_NAMES
        .get(idx)
        .map_or_else(|| format!("R{idx}"), |name| (*name).to_string())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disassemble(self))
    }
}
