//! Program Text Loader.
//!
//! This module turns a program listing into the records `Processor::load_program`
//! stores in memory. The format is one record per line:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! ADDI,R1,R0,5
//! ADDI,R2,R0,10
//! ADD,R3,R1,R2
//! 0
//! ```
//!
//! A line that is a plain decimal integer becomes a data word (so `0` is the
//! halt sentinel); every other line is kept verbatim, trimmed, as an
//! instruction record. Nothing is validated here; malformed records fail
//! when they are fetched and decoded.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::data::Word;
use crate::common::error::Result;

/// Comment marker at the start of a line.
const COMMENT_PREFIX: char = '#';

/// Parses a program listing into memory records.
///
/// # Examples
///
/// ```
/// use mipsim_core::common::Word;
/// use mipsim_core::sim::loader::parse_program;
///
/// let records = parse_program("ADDI,R1,R0,5\n\n# done\n0\n");
/// assert_eq!(records, vec![Word::from("ADDI,R1,R0,5"), Word::Data(0)]);
/// ```
pub fn parse_program(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(parse_record)
        .collect()
}

/// Reads and parses a program file.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let records = parse_program(&text);
    debug!(path = %path.display(), records = records.len(), "program file parsed");
    Ok(records)
}

fn parse_record(line: &str) -> Word {
    line.parse::<i32>()
        .map_or_else(|_| Word::Record(line.to_string()), Word::Data)
}
