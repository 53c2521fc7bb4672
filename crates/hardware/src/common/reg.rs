//! Register File and Register Names.
//!
//! This module provides the `RegisterFile` struct, the architectural register state of the
//! processor. It provides:
//! 1. **Naming:** The `Reg` type, a validated handle for one of `R0`..`R31`.
//! 2. **Storage:** The 32 general-purpose registers plus the program counter.
//! 3. **Observability:** Register snapshots for display and JSON output.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::error::{Result, SimError};
use crate::core::arch::gpr::{GPR_COUNT, Gpr};

/// A validated general-purpose register name.
///
/// Construct with `Reg::new` or by parsing a name such as `"R7"`; once built,
/// indexing the register file with it cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Creates a register handle from an index, or `None` if `idx >= 32`.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < GPR_COUNT {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Register index (0-31).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical name, e.g. `R7`.
    pub fn name(self) -> String {
        format!("R{}", self.0)
    }
}

impl FromStr for Reg {
    type Err = SimError;

    /// Parses `R0`..`R31`. The prefix is case-sensitive and the index is plain
    /// decimal without sign or leading zeros.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || SimError::UnknownRegister(s.to_string());
        let digits = s.strip_prefix('R').ok_or_else(unknown)?;
        let well_formed = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !well_formed {
            return Err(unknown());
        }
        digits
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(unknown)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Architectural register state: 32 general-purpose registers and the PC.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    pc: i64,
}

impl RegisterFile {
    /// Creates a new register file with every register and the PC at zero.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            pc: 0,
        }
    }

    /// Reads a general-purpose register.
    pub const fn read(&self, reg: Reg) -> i32 {
        self.gpr.read(reg.index())
    }

    /// Writes a general-purpose register.
    pub const fn write(&mut self, reg: Reg, val: i32) {
        self.gpr.write(reg.index(), val);
    }

    /// Reads a register by name.
    ///
    /// # Errors
    ///
    /// `UnknownRegister` if `name` is not one of `R0`..`R31`.
    pub fn read_named(&self, name: &str) -> Result<i32> {
        Ok(self.read(name.parse()?))
    }

    /// Writes a register by name.
    ///
    /// # Errors
    ///
    /// `UnknownRegister` if `name` is not one of `R0`..`R31`.
    pub fn write_named(&mut self, name: &str, val: i32) -> Result<()> {
        self.write(name.parse()?, val);
        Ok(())
    }

    /// Current program counter (word address).
    pub const fn pc(&self) -> i64 {
        self.pc
    }

    /// Overwrites the program counter.
    pub const fn set_pc(&mut self, pc: i64) {
        self.pc = pc;
    }

    /// Captures the current register values.
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            pc: self.pc,
            regs: *self.gpr.values(),
        }
    }

    /// Dumps the program counter and all registers to stderr.
    pub fn dump(&self) {
        eprintln!("PC={}", self.pc);
        self.gpr.dump();
    }
}

/// Point-in-time copy of the register file.
///
/// Serializes as `{"pc": .., "registers": {"R0": .., ..}}` with registers in
/// index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pc: i64,
    regs: [i32; GPR_COUNT],
}

impl RegisterSnapshot {
    /// Program counter at capture time.
    pub const fn pc(&self) -> i64 {
        self.pc
    }

    /// Value of `reg` at capture time.
    pub const fn get(&self, reg: Reg) -> i32 {
        self.regs[reg.index()]
    }

    /// Iterates `(name, value)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (String, i32)> + '_ {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("R{i}"), *v))
    }
}

impl Serialize for RegisterSnapshot {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeStruct};

        struct Registers<'a>(&'a [i32; GPR_COUNT]);

        impl Serialize for Registers<'_> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(GPR_COUNT))?;
                for (i, v) in self.0.iter().enumerate() {
                    map.serialize_entry(&format!("R{i}"), v)?;
                }
                map.end()
            }
        }

        let mut s = serializer.serialize_struct("RegisterSnapshot", 2)?;
        s.serialize_field("pc", &self.pc)?;
        s.serialize_field("registers", &Registers(&self.regs))?;
        s.end()
    }
}

impl fmt::Display for RegisterSnapshot {
    /// Formats as `{R0: 0, R1: 5, ...}`, one line for the whole file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "R{i}: {v}")?;
        }
        f.write_str("}")
    }
}
