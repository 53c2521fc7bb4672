//! Memory Word Representation.
//!
//! Memory cells hold either plain integer data or an instruction record as it
//! was handed to the loader. Instruction records stay textual until the fetch
//! stage decodes them, so a program can be inspected in memory exactly as it
//! was loaded.

use std::fmt;

/// Contents of a single memory cell.
///
/// `Data(0)` doubles as the halt sentinel and is what every cell holds after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Word {
    /// Signed integer data word.
    Data(i32),

    /// Comma-separated instruction record, e.g. `ADDI,R1,R0,5`.
    Record(String),
}

impl Word {
    /// Returns `true` for the halt sentinel (`Data(0)`).
    pub const fn is_halt_sentinel(&self) -> bool {
        matches!(self, Self::Data(0))
    }

    /// Returns the integer payload, if this is a data word.
    pub const fn as_data(&self) -> Option<i32> {
        match self {
            Self::Data(v) => Some(*v),
            Self::Record(_) => None,
        }
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::Data(0)
    }
}

impl From<i32> for Word {
    fn from(value: i32) -> Self {
        Self::Data(value)
    }
}

impl From<&str> for Word {
    fn from(record: &str) -> Self {
        Self::Record(record.to_string())
    }
}

impl From<String> for Word {
    fn from(record: String) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(v) => write!(f, "{v}"),
            Self::Record(r) => f.write_str(r),
        }
    }
}
