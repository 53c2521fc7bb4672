//! # Main Memory Tests
//!
//! Bounds checking on every access path and write-through behaviour of
//! stores under each cache mode.

use mipsim_core::SimError;
use mipsim_core::common::Word;
use mipsim_core::core::units::cache::{Cache, CacheMode};
use mipsim_core::soc::memory::Memory;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn default_capacity_and_contents() {
    let mem = Memory::default();
    assert_eq!(mem.capacity(), 1024);
    assert_eq!(mem.peek(0).unwrap(), &Word::Data(0));
    assert_eq!(mem.peek(1023).unwrap(), &Word::Data(0));
}

#[rstest]
#[case(-1)]
#[case(16)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn every_path_rejects_out_of_range(#[case] address: i64) {
    let mut mem = Memory::new(16);
    let mut cache = Cache::new(CacheMode::On);
    assert!(!mem.in_bounds(address));

    let oob = |r: &SimError| {
        matches!(r, SimError::OutOfBounds { address: a, capacity: 16 } if *a == address)
    };
    assert!(oob(&mem.load(address, &mut cache).unwrap_err()));
    assert!(oob(&mem.store(address, Word::Data(1), &mut cache).unwrap_err()));
    assert!(oob(&mem.peek(address).unwrap_err()));
    assert!(oob(&mem.poke(address, Word::Data(1)).unwrap_err()));
    assert!(cache.is_empty());
}

#[test]
fn boundary_addresses_are_valid() {
    let mem = Memory::new(16);
    assert!(mem.in_bounds(0));
    assert!(mem.in_bounds(15));
}

#[test]
fn zero_capacity_memory_rejects_everything() {
    let mem = Memory::new(0);
    assert!(!mem.in_bounds(0));
}

#[test]
fn store_is_write_through_when_cache_on() {
    let mut mem = Memory::new(8);
    let mut cache = Cache::new(CacheMode::On);
    mem.store(2, Word::from("ADD,R1,R2,R3"), &mut cache).unwrap();

    assert_eq!(mem.peek(2).unwrap(), &Word::from("ADD,R1,R2,R3"));
    assert!(cache.contains(2));
    assert_eq!(mem.load(2, &mut cache).unwrap(), Word::from("ADD,R1,R2,R3"));
    assert_eq!((cache.hits, cache.misses), (1, 0));
}

#[test]
fn store_with_cache_off_leaves_cache_empty() {
    let mut mem = Memory::new(8);
    let mut cache = Cache::new(CacheMode::Off);
    mem.store(2, Word::Data(11), &mut cache).unwrap();
    assert_eq!(mem.peek(2).unwrap(), &Word::Data(11));
    assert!(cache.is_empty());
}

#[test]
fn store_overwrites_cached_entry() {
    let mut mem = Memory::new(8);
    let mut cache = Cache::new(CacheMode::On);
    mem.store(4, Word::Data(1), &mut cache).unwrap();
    mem.store(4, Word::Data(2), &mut cache).unwrap();
    assert_eq!(mem.load(4, &mut cache).unwrap(), Word::Data(2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn poke_bypasses_cache() {
    let mut mem = Memory::new(8);
    mem.poke(5, Word::Data(3)).unwrap();
    assert_eq!(mem.peek(5).unwrap(), &Word::Data(3));
}

const PROP_CAPACITY: i64 = 64;

proptest! {
    #[test]
    fn store_then_load_returns_value(
        addr in 0..PROP_CAPACITY,
        v in any::<i32>(),
        on in any::<bool>(),
    ) {
        let mut mem = Memory::new(PROP_CAPACITY as usize);
        let mode = if on { CacheMode::On } else { CacheMode::Off };
        let mut cache = Cache::new(mode);

        mem.store(addr, Word::Data(v), &mut cache).unwrap();
        prop_assert_eq!(mem.load(addr, &mut cache).unwrap(), Word::Data(v));
        prop_assert_eq!(mem.peek(addr).unwrap(), &Word::Data(v));
        if on {
            prop_assert!(cache.contains(addr as usize));
        } else {
            prop_assert!(cache.is_empty());
            prop_assert_eq!((cache.hits, cache.misses), (0, 0));
        }
    }

    #[test]
    fn later_store_wins_under_either_mode(
        addr in 0..PROP_CAPACITY,
        first in any::<i32>(),
        second in any::<i32>(),
        on in any::<bool>(),
    ) {
        let mut mem = Memory::new(PROP_CAPACITY as usize);
        let mode = if on { CacheMode::On } else { CacheMode::Off };
        let mut cache = Cache::new(mode);

        mem.store(addr, Word::Data(first), &mut cache).unwrap();
        let _ = mem.load(addr, &mut cache).unwrap();
        mem.store(addr, Word::Data(second), &mut cache).unwrap();
        prop_assert_eq!(mem.load(addr, &mut cache).unwrap(), Word::Data(second));
    }
}
