//! # Program Tests

use armsim_core::isa::instruction::Opcode;
use armsim_core::sim::{Program, SAMPLE_PROGRAM};
use pretty_assertions::assert_eq;

#[test]
fn test_assemble_skips_non_instructions_and_numbers_lines() {
    let program = Program::assemble("; header\n\nMOV R0, #4\nNOP\n  add r1, r0, #2  \nMOV R16, #1");
    assert_eq!(program.len(), 2);
    let lines: Vec<(usize, &str)> = program
        .instructions()
        .iter()
        .map(|i| (i.line_number(), i.original_line()))
        .collect();
    assert_eq!(lines, [(3, "MOV R0, #4"), (5, "add r1, r0, #2")]);
}

#[test]
fn test_empty_text_is_empty_program() {
    let program = Program::assemble("");
    assert!(program.is_empty());
    assert!(program.is_complete());
    assert!(program.current().is_none());
}

#[test]
fn test_sample_program() {
    let program = Program::sample();
    assert_eq!(program.len(), SAMPLE_PROGRAM.lines().count());
    let ops: Vec<Opcode> = program.instructions().iter().map(|i| i.op()).collect();
    assert_eq!(
        ops,
        [
            Opcode::Mov,
            Opcode::Add,
            Opcode::Sub,
            Opcode::Cmp,
            Opcode::And,
            Opcode::Orr,
            Opcode::Str,
            Opcode::Ldr
        ]
    );
}

#[test]
fn test_cursor_movement() {
    let mut program = Program::sample();
    assert_eq!(program.cursor(), 0);
    program.advance();
    program.advance();
    assert_eq!(program.cursor(), 2);
    assert_eq!(program.cycle_count(), 2);
    assert_eq!(program.current().map(|i| i.op()), Some(Opcode::Sub));

    program.seek(7);
    assert!(!program.is_complete());
    program.finish();
    assert!(program.is_complete());
    assert_eq!(program.cycle_count(), 2);

    program.rewind();
    assert_eq!((program.cursor(), program.cycle_count()), (0, 0));
}

#[test]
fn test_index_for_pc() {
    let program = Program::sample();
    assert_eq!(program.index_for_pc(0), Some(0));
    assert_eq!(program.index_for_pc(28), Some(7));
    assert_eq!(program.index_for_pc(32), None);
    assert_eq!(program.index_for_pc(6), None);
    assert_eq!(program.index_for_pc(u32::MAX), None);
}
