//! # Program Loader Tests
//!
//! Parsing of program listings and loading them from disk.

use std::io::Write;

use mipsim_core::Processor;
use mipsim_core::SimError;
use mipsim_core::common::Word;
use mipsim_core::sim::loader;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Helper function to create a temporary program file for testing.
fn create_temp_program(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_skips_blanks_and_comments() {
    let text = "\n# setup\nADDI,R1,R0,5\n   \n  # indented comment\nADD,R3,R1,R2\n0\n";
    assert_eq!(
        loader::parse_program(text),
        vec![
            Word::from("ADDI,R1,R0,5"),
            Word::from("ADD,R3,R1,R2"),
            Word::Data(0),
        ]
    );
}

#[test]
fn test_parse_integers_become_data() {
    assert_eq!(
        loader::parse_program("-3\n17\n"),
        vec![Word::Data(-3), Word::Data(17)]
    );
}

#[test]
fn test_parse_trims_but_keeps_record_text() {
    assert_eq!(
        loader::parse_program("  J, 2  \r\n"),
        vec![Word::from("J, 2")]
    );
}

#[test]
fn test_parse_does_not_validate() {
    assert_eq!(
        loader::parse_program("NOT AN INSTRUCTION"),
        vec![Word::from("NOT AN INSTRUCTION")]
    );
}

#[test]
fn test_parse_empty_text() {
    assert!(loader::parse_program("").is_empty());
}

#[test]
fn test_load_program_file_and_run() {
    let file = create_temp_program("ADDI,R1,R0,5\nADDI,R2,R0,10\nADD,R3,R1,R2\n0\n");
    let program = loader::load_program_file(file.path()).unwrap();
    assert_eq!(program.len(), 4);

    let mut cpu = Processor::default();
    cpu.load_program(program).unwrap();
    cpu.run().unwrap();
    assert_eq!(cpu.regs.read_named("R3").unwrap(), 15);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = loader::load_program_file(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(SimError::Io(_))));
}
