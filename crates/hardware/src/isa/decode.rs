//! Assembly Text Decoder.
//!
//! This module turns one line of program text into an [`Instruction`]. Decoding is
//! deliberately lenient:
//! 1. **Skipped lines:** Blank lines, `;` comments, and unknown mnemonics produce no
//!    instruction and are not errors.
//! 2. **Lenient operands:** Missing or malformed operands of a known mnemonic resolve to
//!    fixed defaults (register 0, immediate 0, branch offset 4, load/store offset 0).
//! 3. **Register numbers:** A register above `R15` is kept as written. It names no
//!    register in the file, so it reads as 0 and writes to it are dropped.
//!
//! Tokens are separated by any run of whitespace and/or commas, and the whole line is
//! upper-cased first, so the grammar is case-insensitive.

use tracing::trace;

use crate::common::constants::{DEFAULT_BRANCH_OFFSET, DEFAULT_MEMORY_OFFSET, NUM_REGISTERS};
use crate::isa::instruction::{Instruction, Opcode, Operand, Operands};

/// Prefix that marks a whole-line comment.
const COMMENT_PREFIX: char = ';';

/// Sigil that marks an immediate operand.
const IMMEDIATE_SIGIL: char = '#';

/// Prefix of a register operand.
const REGISTER_PREFIX: char = 'R';

/// Decodes one line of program text.
///
/// # Arguments
///
/// * `line` - Raw source line, in any case, with or without surrounding whitespace.
///
/// # Returns
///
/// The decoded instruction carrying the trimmed line as its source text, or `None`
/// for blank lines, comments, and unknown mnemonics.
///
/// # Examples
///
/// ```
/// use armsim_core::isa::decode::decode;
/// use armsim_core::isa::instruction::{Opcode, Operand, Operands};
///
/// let inst = decode("add r1, r0, #2").unwrap();
/// assert_eq!(inst.op(), Opcode::Add);
/// assert_eq!(
///     *inst.operands(),
///     Operands::Data { rd: 1, rn: 0, src: Operand::Immediate(2) }
/// );
/// assert!(decode("; just a comment").is_none());
/// ```
pub fn decode(line: &str) -> Option<Instruction> {
    let trimmed = line.trim();
    let upper = trimmed.to_uppercase();
    if upper.is_empty() || upper.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let tokens = tokenize(&upper);
    let (&mnemonic, args) = tokens.split_first()?;
    let Some(op) = Opcode::from_mnemonic(mnemonic) else {
        trace!(mnemonic, "unknown mnemonic");
        return None;
    };

    Instruction::new(op, decode_operands(op, args)).map(|inst| inst.with_source(trimmed))
}

/// Splits a line on runs of whitespace and/or commas.
fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

fn decode_operands(op: Opcode, args: &[&str]) -> Operands {
    let arg = |i: usize| args.get(i).copied();

    match op {
        Opcode::Mov | Opcode::Movs => Operands::Move {
            rd: register(arg(0)),
            src: operand(arg(1)),
        },
        Opcode::Add
        | Opcode::Adds
        | Opcode::Sub
        | Opcode::Subs
        | Opcode::And
        | Opcode::Orr
        | Opcode::Eor => Operands::Data {
            rd: register(arg(0)),
            rn: register(arg(1)),
            src: operand(arg(2)),
        },
        Opcode::Cmp => Operands::Compare {
            rn: register(arg(0)),
            src: operand(arg(1)),
        },
        Opcode::Ldr | Opcode::Str => {
            let rd = register(arg(0));
            let (rn, offset) = address(args.get(1..).unwrap_or(&[]));
            Operands::Memory { rd, rn, offset }
        }
        // An explicit `#0` is kept, so `B #0` branches to itself.
        Opcode::B | Opcode::Bl => Operands::Branch {
            offset: arg(0)
                .and_then(parse_number)
                .map_or(DEFAULT_BRANCH_OFFSET, |v| v as i32),
        },
        Opcode::Bx => Operands::Exchange {
            rm: register(arg(0)),
        },
    }
}

/// Decodes the `[Rn, #imm]` part of a load/store.
///
/// The remaining tokens are re-joined, the brackets stripped, and the result split on
/// commas; a missing offset is [`DEFAULT_MEMORY_OFFSET`].
fn address(tokens: &[&str]) -> (usize, i32) {
    let joined = tokens.join(",").replace(['[', ']'], "");
    let parts: Vec<&str> = joined
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let rn = register(parts.first().copied());
    let offset = parts.get(1).map_or(DEFAULT_MEMORY_OFFSET, |t| {
        parse_number(t).map_or(DEFAULT_MEMORY_OFFSET, |v| v as i32)
    });
    (rn, offset)
}

/// Decodes an immediate-or-register slot by the presence of the `#` sigil.
fn operand(token: Option<&str>) -> Operand {
    match token {
        Some(t) if t.starts_with(IMMEDIATE_SIGIL) => {
            Operand::Immediate(parse_number(t).map_or(0, |v| v as u32))
        }
        other => Operand::Register(register(other)),
    }
}

/// Decodes a register token: `R` followed by digits.
///
/// Absent tokens, tokens without the `R` prefix, and tokens without digits all read
/// as register 0. Numbers past `R15` are kept; a number too large for `usize`
/// saturates.
fn register(token: Option<&str>) -> usize {
    let Some(rest) = token.and_then(|t| t.strip_prefix(REGISTER_PREFIX)) else {
        return 0;
    };
    let digits = leading(rest, 10);
    if digits.is_empty() {
        return 0;
    }
    let idx = digits.parse::<usize>().unwrap_or(usize::MAX);
    if idx >= NUM_REGISTERS {
        trace!(register = idx, "register outside the file");
    }
    idx
}

/// Parses a numeric token with an optional `#` sigil and sign.
///
/// `0x`/`0X` selects hexadecimal, otherwise decimal. Only the longest valid digit
/// prefix is read, so `#12;` parses as 12. Returns `None` when no digits are present
/// or the value does not fit in an `i64`.
pub fn parse_number(token: &str) -> Option<i64> {
    let body = token.strip_prefix(IMMEDIATE_SIGIL).unwrap_or(token);
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };
    let (radix, body) = match body.strip_prefix("0X").or_else(|| body.strip_prefix("0x")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };

    let digits = leading(body, radix);
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Returns the longest prefix of `s` made of digits in `radix`.
fn leading(s: &str, radix: u32) -> &str {
    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    &s[..end]
}
