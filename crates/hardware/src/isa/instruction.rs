//! Instruction model.
//!
//! Provides the structured form of a decoded instruction:
//! 1. **Opcodes:** The fixed mnemonic set and its classification.
//! 2. **Operands:** One variant per operand layout, carrying exactly the fields the
//!    opcode needs. An immediate-or-register slot is an [`Operand`], so "immediate
//!    supplied" is told apart from "register supplied" by variant, never by value.
//! 3. **Provenance:** The source line text and 1-based line number, for display only.

use std::fmt;

use serde::Serialize;

use crate::common::constants::INSTRUCTION_SIZE;

/// Operation mnemonics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// `MOV Rd, <#imm | Rm>`
    Mov,
    /// `MOVS Rd, <#imm | Rm>`, sets `Z` and `N`.
    Movs,
    /// `ADD Rd, Rn, <#imm | Rm>`
    Add,
    /// `ADDS Rd, Rn, <#imm | Rm>`, sets all flags.
    Adds,
    /// `SUB Rd, Rn, <#imm | Rm>`
    Sub,
    /// `SUBS Rd, Rn, <#imm | Rm>`, sets all flags.
    Subs,
    /// `CMP Rn, <#imm | Rm>`, sets all flags, writes no register.
    Cmp,
    /// `AND Rd, Rn, <#imm | Rm>`
    And,
    /// `ORR Rd, Rn, <#imm | Rm>`
    Orr,
    /// `EOR Rd, Rn, <#imm | Rm>`
    Eor,
    /// `LDR Rd, [Rn, #imm]`
    Ldr,
    /// `STR Rd, [Rn, #imm]`
    Str,
    /// `B #offset`
    B,
    /// `BL #offset`, writes the return address to `R14`.
    Bl,
    /// `BX Rm`
    Bx,
}

/// Broad instruction category, used for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstructionClass {
    /// Moves, arithmetic, logic, and compares.
    Alu,
    /// `LDR`.
    Load,
    /// `STR`.
    Store,
    /// `B`, `BL`, `BX`.
    Branch,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Mov,
        Self::Movs,
        Self::Add,
        Self::Adds,
        Self::Sub,
        Self::Subs,
        Self::Cmp,
        Self::And,
        Self::Orr,
        Self::Eor,
        Self::Ldr,
        Self::Str,
        Self::B,
        Self::Bl,
        Self::Bx,
    ];

    /// Looks up an upper-case mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == mnemonic)
    }

    /// Upper-case mnemonic text.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mov => "MOV",
            Self::Movs => "MOVS",
            Self::Add => "ADD",
            Self::Adds => "ADDS",
            Self::Sub => "SUB",
            Self::Subs => "SUBS",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Orr => "ORR",
            Self::Eor => "EOR",
            Self::Ldr => "LDR",
            Self::Str => "STR",
            Self::B => "B",
            Self::Bl => "BL",
            Self::Bx => "BX",
        }
    }

    /// Returns `true` for opcodes that update condition flags.
    pub const fn sets_flags(self) -> bool {
        matches!(self, Self::Movs | Self::Adds | Self::Subs | Self::Cmp)
    }

    /// Category of the opcode.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Ldr => InstructionClass::Load,
            Self::Str => InstructionClass::Store,
            Self::B | Self::Bl | Self::Bx => InstructionClass::Branch,
            _ => InstructionClass::Alu,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An immediate-or-register operand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operand {
    /// `#imm`, already truncated to 32 bits.
    Immediate(u32),
    /// `Rm`, a register index (0-15).
    Register(usize),
}

/// Operand fields, one variant per operand layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operands {
    /// `MOV`/`MOVS`: destination and source.
    Move {
        /// Destination register.
        rd: usize,
        /// Source value.
        src: Operand,
    },
    /// `ADD`/`ADDS`/`SUB`/`SUBS`/`AND`/`ORR`/`EOR`.
    Data {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source value.
        src: Operand,
    },
    /// `CMP`.
    Compare {
        /// First source register.
        rn: usize,
        /// Second source value.
        src: Operand,
    },
    /// `LDR`/`STR`: transfer register and base-plus-offset address.
    Memory {
        /// Register loaded or stored.
        rd: usize,
        /// Base address register.
        rn: usize,
        /// Signed byte offset added to the base.
        offset: i32,
    },
    /// `B`/`BL`: signed byte offset added to `pc`.
    Branch {
        /// Signed byte offset.
        offset: i32,
    },
    /// `BX`: absolute target register.
    Exchange {
        /// Target register.
        rm: usize,
    },
}

impl Operands {
    /// Returns `true` if this operand layout is the one `op` requires.
    pub const fn fits(&self, op: Opcode) -> bool {
        match self {
            Self::Move { .. } => matches!(op, Opcode::Mov | Opcode::Movs),
            Self::Data { .. } => matches!(
                op,
                Opcode::Add
                    | Opcode::Adds
                    | Opcode::Sub
                    | Opcode::Subs
                    | Opcode::And
                    | Opcode::Orr
                    | Opcode::Eor
            ),
            Self::Compare { .. } => matches!(op, Opcode::Cmp),
            Self::Memory { .. } => matches!(op, Opcode::Ldr | Opcode::Str),
            Self::Branch { .. } => matches!(op, Opcode::B | Opcode::Bl),
            Self::Exchange { .. } => matches!(op, Opcode::Bx),
        }
    }
}

/// A decoded instruction together with its source provenance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    op: Opcode,
    operands: Operands,
    size: u32,
    original_line: String,
    line_number: usize,
}

impl Instruction {
    /// Builds an instruction without provenance.
    ///
    /// Returns `None` when `operands` is not the layout `op` requires.
    pub fn new(op: Opcode, operands: Operands) -> Option<Self> {
        operands.fits(op).then(|| Self {
            op,
            operands,
            size: INSTRUCTION_SIZE,
            original_line: String::new(),
            line_number: 0,
        })
    }

    /// Attaches the trimmed source text.
    #[must_use]
    pub fn with_source(mut self, original_line: impl Into<String>) -> Self {
        self.original_line = original_line.into();
        self
    }

    /// Attaches the 1-based source line number.
    #[must_use]
    pub const fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }

    /// Operation mnemonic.
    pub const fn op(&self) -> Opcode {
        self.op
    }

    /// Operand fields.
    pub const fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Instruction size in bytes (always 4).
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Trimmed source text, empty for instructions built in code.
    pub fn original_line(&self) -> &str {
        &self.original_line
    }

    /// 1-based source line number, 0 for instructions built in code.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Source text if present, otherwise the canonical disassembly.
    pub fn display_text(&self) -> String {
        if self.original_line.is_empty() {
            self.to_string()
        } else {
            self.original_line.clone()
        }
    }
}
