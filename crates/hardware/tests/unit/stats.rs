//! # Statistics Tests
//!
//! Counters collected by the run loop: fetches, retirements, instruction mix,
//! and mirrored cache counters.

use mipsim_core::core::units::cache::{Cache, CacheMode};
use mipsim_core::isa::{Instruction, Opcode};
use mipsim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::harness::TestContext;

#[test]
fn fresh_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.fetches, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.cache_hit_rate(), None);
}

#[test]
fn record_classifies_instructions() {
    let mut stats = SimStats::default();
    for record in ["ADD,R1,R2,R3", "ADDI,R1,R0,1", "SLT,R1,R2,R3", "J,0", "CACHE,1"] {
        let inst = Instruction::decode(&record.into()).unwrap();
        stats.record(&inst);
    }
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.inst_alu, 3);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_cache, 1);
}

#[test]
fn unimplemented_counts_as_retired_only() {
    let mut stats = SimStats::default();
    stats.record(&Instruction::Unimplemented {
        opcode: Opcode::Lw,
        operands: Vec::new(),
    });
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(stats.inst_alu + stats.inst_jump + stats.inst_cache, 0);
}

#[test]
fn sync_cache_and_hit_rate() {
    let mut cache = Cache::new(CacheMode::On);
    cache.hits = 3;
    cache.misses = 1;
    let mut stats = SimStats::default();
    stats.sync_cache(&cache);
    assert_eq!((stats.cache_hits, stats.cache_misses), (3, 1));
    assert_eq!(stats.cache_hit_rate(), Some(0.75));
}

#[test]
fn run_loop_counts() {
    let mut ctx = TestContext::new().load(&["ADDI,R1,R0,5", "J,1", "0", "0", "ADD,R3,R1,R1", "0"]);
    ctx.cpu.run().unwrap();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.fetches, 4);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(ctx.reg("R3"), 10);
}

#[test]
fn section_names() {
    assert_eq!(STATS_SECTIONS, &["summary", "instruction_mix", "memory"]);
}

#[test]
fn printing_does_not_panic() {
    let mut ctx = TestContext::new().load(&["CACHE,1", "0"]);
    ctx.cpu.run().unwrap();
    ctx.cpu.stats.print();
    ctx.cpu.stats.print_sections(&["memory".to_string()]);
}
