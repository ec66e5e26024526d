//! # Decoder Tests
//!
//! Case-insensitivity, separators, skipped lines, lenient defaults, and register
//! numbers past the end of the file.

use armsim_core::isa::decode::{decode, parse_number};
use armsim_core::isa::disasm::disassemble;
use armsim_core::isa::instruction::{Opcode, Operand, Operands};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn operands(line: &str) -> Operands {
    *decode(line).unwrap().operands()
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("; comment")]
#[case("   ;indented comment")]
#[case("NOP")]
#[case("MUL R0, R1, R2")]
#[case("#4")]
fn test_non_instructions_decode_to_none(#[case] line: &str) {
    assert!(decode(line).is_none());
}

#[rstest]
#[case("MOV R0, #4")]
#[case("mov r0, #4")]
#[case("Mov R0,#4")]
#[case("  MOV\tR0 ,  #4  ")]
#[case("MOV,R0,,#4")]
fn test_case_and_separators_are_insignificant(#[case] line: &str) {
    let inst = decode(line).unwrap();
    assert_eq!(inst.op(), Opcode::Mov);
    assert_eq!(
        *inst.operands(),
        Operands::Move {
            rd: 0,
            src: Operand::Immediate(4)
        }
    );
}

#[test]
fn test_source_text_is_trimmed_original() {
    let inst = decode("   add r1, r0, #2   ").unwrap();
    assert_eq!(inst.original_line(), "add r1, r0, #2");
    assert_eq!(inst.size(), 4);
}

#[rstest]
#[case("ADD R1, R0, #2", Operands::Data { rd: 1, rn: 0, src: Operand::Immediate(2) })]
#[case("SUBS R2, R1, R0", Operands::Data { rd: 2, rn: 1, src: Operand::Register(0) })]
#[case("EOR R15, R14, #0xFF", Operands::Data { rd: 15, rn: 14, src: Operand::Immediate(255) })]
#[case("CMP R0, #4", Operands::Compare { rn: 0, src: Operand::Immediate(4) })]
#[case("CMP R3, R4", Operands::Compare { rn: 3, src: Operand::Register(4) })]
#[case("MOVS R9, #-1", Operands::Move { rd: 9, src: Operand::Immediate(0xFFFF_FFFF) })]
#[case("BX R14", Operands::Exchange { rm: 14 })]
fn test_operand_layouts(#[case] line: &str, #[case] expected: Operands) {
    assert_eq!(operands(line), expected);
}

#[rstest]
#[case("LDR R5, [R0, #0]", 5, 0, 0)]
#[case("LDR R5, [R0]", 5, 0, 0)]
#[case("STR R1, [R2, #8]", 1, 2, 8)]
#[case("str r1,[r2,#-4]", 1, 2, -4)]
#[case("LDR R3, [ R4 , #0x10 ]", 3, 4, 16)]
#[case("LDR R3, [R4, #junk]", 3, 4, 0)]
fn test_memory_operands(#[case] line: &str, #[case] rd: usize, #[case] rn: usize, #[case] offset: i32) {
    assert_eq!(operands(line), Operands::Memory { rd, rn, offset });
}

#[rstest]
#[case("B #8", 8)]
#[case("B #-12", -12)]
#[case("BL #0", 0)]
#[case("B", 4)]
#[case("BL label", 4)]
fn test_branch_offsets(#[case] line: &str, #[case] offset: i32) {
    assert_eq!(operands(line), Operands::Branch { offset });
}

#[rstest]
#[case("MOV", Operands::Move { rd: 0, src: Operand::Register(0) })]
#[case("ADD R1", Operands::Data { rd: 1, rn: 0, src: Operand::Register(0) })]
#[case("MOV X3, #1", Operands::Move { rd: 0, src: Operand::Immediate(1) })]
#[case("MOV R1, #", Operands::Move { rd: 1, src: Operand::Immediate(0) })]
#[case("BX", Operands::Exchange { rm: 0 })]
fn test_missing_operands_use_lenient_defaults(#[case] line: &str, #[case] expected: Operands) {
    assert_eq!(operands(line), expected);
}

#[rstest]
#[case("MOV R16, #1", Operands::Move { rd: 16, src: Operand::Immediate(1) })]
#[case("ADD R1, R99, #1", Operands::Data { rd: 1, rn: 99, src: Operand::Immediate(1) })]
#[case("LDR R0, [R20, #0]", Operands::Memory { rd: 0, rn: 20, offset: 0 })]
#[case("BX R31", Operands::Exchange { rm: 31 })]
fn test_register_above_r15_is_kept(#[case] line: &str, #[case] expected: Operands) {
    assert_eq!(operands(line), expected);
}

#[test]
fn test_register_above_r15_disassembles_by_number() {
    let inst = decode("mov r16, #1").unwrap();
    assert_eq!(disassemble(&inst), "MOV R16, #1");
}

#[rstest]
#[case("#12", Some(12))]
#[case("12", Some(12))]
#[case("#-7", Some(-7))]
#[case("#+7", Some(7))]
#[case("#0x1F", Some(31))]
#[case("#0XfF", Some(255))]
#[case("#12;", Some(12))]
#[case("#", None)]
#[case("#X", None)]
fn test_parse_number(#[case] token: &str, #[case] expected: Option<i64>) {
    assert_eq!(parse_number(token), expected);
}
