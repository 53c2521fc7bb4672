//! Instruction Executor.
//!
//! This module implements the execute step of the fetch-decode-execute cycle.
//! It performs the following:
//! 1. **Dispatch:** One exhaustive `match` over the decoded instruction.
//! 2. **Datapath:** Reads source registers, runs the ALU, writes the destination.
//! 3. **Control:** Applies `CACHE` controls and reports PC redirection to the run loop.
//!
//! The executor borrows the processor's state for the duration of one
//! instruction and is the only component that mutates it while executing.

use tracing::{debug, warn};

use super::context::ProcessorContext;
use crate::common::error::{Result, SimError};
use crate::common::reg::{Reg, RegisterFile};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::Instruction;

/// Jump targets are word indices scaled by the instruction width.
pub const JUMP_SCALE: i64 = 4;

/// How the run loop should update the PC after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance to the next word.
    Next,
    /// The PC was redirected to this address; do not advance.
    Jump(i64),
    /// The processor halted.
    Halt,
}

/// Executes decoded instructions against borrowed processor state.
#[derive(Debug)]
pub struct Executor<'a> {
    regs: &'a mut RegisterFile,
    ctx: &'a mut ProcessorContext,
}

impl<'a> Executor<'a> {
    /// Borrows the register file and processor context for execution.
    pub const fn new(regs: &'a mut RegisterFile, ctx: &'a mut ProcessorContext) -> Self {
        Self { regs, ctx }
    }

    /// Executes one instruction.
    ///
    /// On `Flow::Jump` the PC has already been written; the caller must not
    /// advance it.
    ///
    /// # Errors
    ///
    /// `UnimplementedOpcode` for `BNE`, `JAL`, `LW` and `SW`.
    pub fn execute(&mut self, inst: &Instruction) -> Result<Flow> {
        match inst {
            Instruction::Add { rd, rs, rt } => {
                self.alu_rr(AluOp::Add, *rd, *rs, *rt);
                Ok(Flow::Next)
            }
            Instruction::Sub { rd, rs, rt } => {
                self.alu_rr(AluOp::Sub, *rd, *rs, *rt);
                Ok(Flow::Next)
            }
            Instruction::Slt { rd, rs, rt } => {
                self.alu_rr(AluOp::Slt, *rd, *rs, *rt);
                Ok(Flow::Next)
            }
            Instruction::Addi { rt, rs, imm } => {
                let result = Alu::addi(self.regs.read(*rs), *imm);
                self.regs.write(*rt, result);
                Ok(Flow::Next)
            }
            Instruction::Cache { control } => {
                self.ctx.cache.apply(*control);
                Ok(Flow::Next)
            }
            Instruction::J { target } => {
                let pc = i64::from(*target) * JUMP_SCALE;
                debug!(target, pc, "jump");
                self.regs.set_pc(pc);
                Ok(Flow::Jump(pc))
            }
            Instruction::Unimplemented { opcode, .. } => {
                warn!(%opcode, pc = self.regs.pc(), "reached unimplemented opcode");
                Err(SimError::UnimplementedOpcode(opcode.mnemonic().to_string()))
            }
            Instruction::Halt => {
                self.ctx.halted = true;
                Ok(Flow::Halt)
            }
        }
    }

    fn alu_rr(&mut self, op: AluOp, rd: Reg, rs: Reg, rt: Reg) {
        let result = Alu::execute(op, self.regs.read(rs), self.regs.read(rt));
        self.regs.write(rd, result);
    }
}
