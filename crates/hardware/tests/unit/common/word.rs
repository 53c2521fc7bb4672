//! # Word and Error Tests

use mipsim_core::SimError;
use mipsim_core::common::Word;

#[test]
fn default_word_is_halt_sentinel() {
    assert_eq!(Word::default(), Word::Data(0));
    assert!(Word::default().is_halt_sentinel());
}

#[test]
fn only_data_zero_is_the_sentinel() {
    assert!(!Word::Data(1).is_halt_sentinel());
    assert!(!Word::from("0").is_halt_sentinel());
    assert!(!Word::from("HALT").is_halt_sentinel());
}

#[test]
fn display_renders_payload() {
    assert_eq!(Word::Data(-4).to_string(), "-4");
    assert_eq!(Word::from("ADD,R1,R2,R3").to_string(), "ADD,R1,R2,R3");
}

#[test]
fn as_data_only_for_integers() {
    assert_eq!(Word::Data(9).as_data(), Some(9));
    assert_eq!(Word::from("J,1").as_data(), None);
}

#[test]
fn error_messages_name_the_offending_value() {
    let e = SimError::ProgramCounterOutOfBounds {
        pc: 2048,
        capacity: 1024,
    };
    assert!(e.to_string().contains("2048"));
    assert!(SimError::InvalidCacheCode(7).to_string().contains('7'));
    assert!(SimError::UnknownRegister("R40".into()).to_string().contains("R40"));
}
