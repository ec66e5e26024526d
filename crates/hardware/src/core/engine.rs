//! Execution Engine.
//!
//! This module applies one decoded instruction to a [`MachineState`]. It performs the following:
//! 1. **Change Tracking:** Clears the state's change-sets before executing, so only this
//!    instruction's effects are visible afterwards.
//! 2. **Dispatch:** Routes data processing to the [`Alu`] and memory transfers to the [`Lsu`].
//! 3. **Flag Derivation:** Updates `Z`/`N` for `MOVS` and `Z`/`N`/`C`/`V` for `ADDS`, `SUBS`, `CMP`.
//! 4. **Control Flow:** Advances `pc` by the instruction size, or overwrites it for branches.
//!
//! Out-of-bounds loads and stores are absorbed: the instruction completes as a no-op
//! (apart from advancing `pc`) and the error is returned in [`ExecOutcome::fault`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::common::MemoryError;
use crate::core::arch::Flag;
use crate::core::state::{MachineState, StepChanges};
use crate::core::units::alu::{Alu, AluOp, AluResult};
use crate::core::units::lsu::Lsu;
use crate::isa::abi::REG_LR;
use crate::isa::instruction::{Instruction, Opcode, Operand, Operands};

/// Result of executing one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecOutcome {
    /// Registers and flags changed by the instruction.
    pub changes: StepChanges,
    /// Memory access that was out of bounds and therefore skipped.
    pub fault: Option<MemoryError>,
}

/// Applies instructions to machine state.
#[derive(Debug)]
pub struct ExecutionEngine;

impl ExecutionEngine {
    /// Executes one instruction.
    ///
    /// # Arguments
    ///
    /// * `state` - Machine state to mutate.
    /// * `inst`  - Instruction to execute.
    ///
    /// # Returns
    ///
    /// The change-set of this instruction and any absorbed memory fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use armsim_core::core::{ExecutionEngine, MachineState};
    /// use armsim_core::isa::decode;
    ///
    /// let mut state = MachineState::default();
    /// let out = ExecutionEngine::step(&mut state, &decode("BL #8").unwrap());
    /// assert_eq!(state.register(14), 4);
    /// assert_eq!(state.pc(), 8);
    /// assert!(out.changes.registers.contains(&14));
    /// ```
    pub fn step(state: &mut MachineState, inst: &Instruction) -> ExecOutcome {
        state.clear_change_tracking();

        let op = inst.op();
        let pc = state.pc();
        let next_pc = pc.wrapping_add(inst.size());
        let mut fault = None;
        trace!(%op, pc, "execute");

        match *inst.operands() {
            Operands::Move { rd, src } => {
                let value = Self::operand(state, src);
                state.set_register(rd, u64::from(value));
                if op == Opcode::Movs {
                    Self::set_nz(state, AluResult::from_value(value));
                }
                state.set_pc(next_pc);
            }
            Operands::Data { rd, rn, src } => {
                if let Some(alu_op) = Self::alu_op(op) {
                    let result = Alu::execute(alu_op, state.register(rn), Self::operand(state, src));
                    state.set_register(rd, u64::from(result.value));
                    if op.sets_flags() {
                        Self::set_nzcv(state, result);
                    }
                }
                state.set_pc(next_pc);
            }
            Operands::Compare { rn, src } => {
                let result = Alu::execute(AluOp::Sub, state.register(rn), Self::operand(state, src));
                Self::set_nzcv(state, result);
                state.set_pc(next_pc);
            }
            Operands::Memory { rd, rn, offset } => {
                let base = state.register(rn);
                let access = if op == Opcode::Str {
                    let value = state.register(rd);
                    Lsu::store(state.memory_mut(), base, offset, value)
                } else {
                    Lsu::load(state.memory(), base, offset)
                        .map(|value| state.set_register(rd, u64::from(value)))
                };
                if let Err(err) = access {
                    debug!(%op, error = %err, "memory access skipped");
                    fault = Some(err);
                }
                state.set_pc(next_pc);
            }
            Operands::Branch { offset } => {
                if op == Opcode::Bl {
                    state.set_register(REG_LR, u64::from(pc) + u64::from(inst.size()));
                }
                state.set_pc(pc.wrapping_add_signed(offset));
            }
            Operands::Exchange { rm } => {
                state.set_pc(state.register(rm));
            }
        }

        ExecOutcome {
            changes: state.changes().clone(),
            fault,
        }
    }

    /// Resolves an immediate-or-register slot by variant.
    fn operand(state: &MachineState, src: Operand) -> u32 {
        match src {
            Operand::Immediate(imm) => imm,
            Operand::Register(idx) => state.register(idx),
        }
    }

    const fn alu_op(op: Opcode) -> Option<AluOp> {
        match op {
            Opcode::Add | Opcode::Adds => Some(AluOp::Add),
            Opcode::Sub | Opcode::Subs => Some(AluOp::Sub),
            Opcode::And => Some(AluOp::And),
            Opcode::Orr => Some(AluOp::Orr),
            Opcode::Eor => Some(AluOp::Eor),
            _ => None,
        }
    }

    fn set_nz(state: &mut MachineState, result: AluResult) {
        state.set_flag(Flag::Z, result.zero());
        state.set_flag(Flag::N, result.negative());
    }

    fn set_nzcv(state: &mut MachineState, result: AluResult) {
        Self::set_nz(state, result);
        state.set_flag(Flag::C, result.carry);
        state.set_flag(Flag::V, result.overflow);
    }
}
