//! Instruction Decoder.
//!
//! This module turns a memory word into a typed `Instruction`. Decoding is
//! two-step: the word is first split into a `RawInstruction` (which never
//! fails), then each opcode's operand list is checked for count and type.
//! A malformed record therefore fails here, at decode time, and the executor
//! only ever sees well-formed operands.

use crate::common::data::Word;
use crate::common::error::{Result, SimError};
use crate::common::reg::Reg;
use crate::core::units::cache::CacheControl;
use crate::isa::instruction::{Instruction, Opcode, RawInstruction};

impl Instruction {
    /// Decodes a memory word.
    ///
    /// # Errors
    ///
    /// * `IllegalInstruction` - the opcode is not part of the instruction set
    /// * `OperandCount` - wrong number of operands for the opcode
    /// * `UnknownRegister` - a register operand is not `R0`..`R31`
    /// * `InvalidImmediate` - an integer operand does not parse
    /// * `InvalidCacheCode` - a `CACHE` code outside {0, 1, 2}
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::{Reg, Word};
    /// use mipsim_core::isa::Instruction;
    ///
    /// let inst = Instruction::decode(&Word::from("ADDI,R1,R0,5")).unwrap();
    /// assert_eq!(
    ///     inst,
    ///     Instruction::Addi { rt: Reg::new(1).unwrap(), rs: Reg::new(0).unwrap(), imm: 5 }
    /// );
    /// assert!(Instruction::decode(&Word::Data(0)).unwrap().is_halt());
    /// ```
    pub fn decode(word: &Word) -> Result<Self> {
        Self::from_raw(&RawInstruction::parse(word))
    }

    /// Decodes an already split record.
    ///
    /// # Errors
    ///
    /// Same as [`Instruction::decode`].
    pub fn from_raw(raw: &RawInstruction) -> Result<Self> {
        let opcode: Opcode = raw
            .opcode
            .parse()
            .map_err(|()| SimError::IllegalInstruction(raw.opcode.clone()))?;
        let ops = Operands {
            opcode,
            tokens: &raw.operands,
        };

        let inst = match opcode {
            Opcode::Add => {
                let [rd, rs, rt] = ops.registers()?;
                Self::Add { rd, rs, rt }
            }
            Opcode::Sub => {
                let [rd, rs, rt] = ops.registers()?;
                Self::Sub { rd, rs, rt }
            }
            Opcode::Slt => {
                let [rd, rs, rt] = ops.registers()?;
                Self::Slt { rd, rs, rt }
            }
            Opcode::Addi => {
                let [rt, rs, imm] = ops.exact::<3>()?;
                Self::Addi {
                    rt: rt.parse()?,
                    rs: rs.parse()?,
                    imm: parse_imm(imm)?,
                }
            }
            Opcode::J => {
                let [target] = ops.exact::<1>()?;
                Self::J {
                    target: parse_imm(target)?,
                }
            }
            Opcode::Cache => {
                let [code] = ops.exact::<1>()?;
                Self::Cache {
                    control: CacheControl::try_from(parse_imm(code)?)?,
                }
            }
            Opcode::Halt => {
                let [] = ops.exact::<0>()?;
                Self::Halt
            }
            Opcode::Bne | Opcode::Jal | Opcode::Lw | Opcode::Sw => Self::Unimplemented {
                opcode,
                operands: raw.operands.clone(),
            },
        };
        Ok(inst)
    }
}

/// Operand tokens of one record, checked against its opcode.
struct Operands<'a> {
    opcode: Opcode,
    tokens: &'a [String],
}

impl<'a> Operands<'a> {
    fn exact<const N: usize>(&self) -> Result<[&'a str; N]> {
        if self.tokens.len() != N {
            return Err(SimError::OperandCount {
                opcode: self.opcode.mnemonic(),
                expected: N,
                found: self.tokens.len(),
            });
        }
        let tokens: &'a [String] = self.tokens;
        Ok(std::array::from_fn(|i| tokens[i].as_str()))
    }

    fn registers(&self) -> Result<[Reg; 3]> {
        let [a, b, c] = self.exact::<3>()?;
        Ok([a.parse()?, b.parse()?, c.parse()?])
    }
}

fn parse_imm(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| SimError::InvalidImmediate(token.to_string()))
}
