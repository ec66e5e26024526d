//! Program assembly and sequencing.
//!
//! A [`Program`] is the ordered list of decoded instructions plus the cursor that
//! selects the next one and the count of cycles executed so far.

use tracing::info;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// The canonical demonstration program.
pub const SAMPLE_PROGRAM: &str = "\
MOV R0, #4
ADD R1, R0, #2
SUB R2, R1, R0
CMP R0, #4
AND R3, R1, #15
ORR R4, R3, #240
STR R1, [R0, #0]
LDR R5, [R0, #0]";

/// Decoded instructions with sequencing state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    cursor: usize,
    cycle_count: u64,
}

impl Program {
    /// Assembles program text.
    ///
    /// Every line is decoded independently; lines that decode to nothing are dropped.
    /// Kept instructions carry their trimmed text (set by the decoder) and 1-based
    /// line number.
    ///
    /// # Examples
    ///
    /// ```
    /// use armsim_core::sim::Program;
    ///
    /// let program = Program::assemble("; setup\nmov r0, #4\n\nb #8");
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(program.instructions()[1].line_number(), 4);
    /// ```
    pub fn assemble(text: &str) -> Self {
        let mut skipped = 0_usize;
        let instructions: Vec<Instruction> = text
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let inst = decode(line);
                if inst.is_none() && !is_blank_or_comment(line) {
                    skipped += 1;
                }
                inst.map(|inst| inst.with_line_number(idx + 1))
            })
            .collect();

        info!(instructions = instructions.len(), skipped, "assembled program");
        Self::from_instructions(instructions)
    }

    /// Builds a program from already-decoded instructions.
    pub const fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            cursor: 0,
            cycle_count: 0,
        }
    }

    /// Assembles [`SAMPLE_PROGRAM`].
    pub fn sample() -> Self {
        Self::assemble(SAMPLE_PROGRAM)
    }

    /// Number of instructions.
    pub const fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` when the program holds no instructions.
    pub const fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Index of the next instruction to execute.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of instructions executed since the last rewind.
    pub const fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// The instruction under the cursor, if any.
    pub fn current(&self) -> Option<&Instruction> {
        self.instructions.get(self.cursor)
    }

    /// Returns `true` once the cursor has moved past the last instruction.
    pub const fn is_complete(&self) -> bool {
        self.cursor >= self.instructions.len()
    }

    /// Moves the cursor forward and counts one cycle.
    pub const fn advance(&mut self) {
        self.cursor += 1;
        self.cycle_count += 1;
    }

    /// Returns the cursor and cycle count to zero.
    pub const fn rewind(&mut self) {
        self.cursor = 0;
        self.cycle_count = 0;
    }

    /// Places the cursor past the end, marking the program complete.
    pub const fn finish(&mut self) {
        self.cursor = self.instructions.len();
    }

    /// Moves the cursor to `index`.
    pub const fn seek(&mut self, index: usize) {
        self.cursor = index;
    }

    /// Maps a byte address to the index of the instruction that starts there.
    pub fn index_for_pc(&self, pc: u32) -> Option<usize> {
        if pc % INSTRUCTION_SIZE != 0 {
            return None;
        }
        let index = usize::try_from(pc / INSTRUCTION_SIZE).ok()?;
        (index < self.instructions.len()).then_some(index)
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(';')
}
