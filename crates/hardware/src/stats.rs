//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Progress:** Fetches and retired instructions, host time and throughput.
//! 2. **Instruction mix:** Counts by category (ALU, jump, cache control).
//! 3. **Cache:** Hit/miss counts mirrored from the software cache.

use std::time::Instant;

use crate::core::units::cache::Cache;
use crate::isa::Instruction;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Words fetched at the PC (including the halt record).
    pub fetches: u64,
    /// Number of instructions executed (halt not included).
    pub instructions_retired: u64,

    /// Count of ADD/ADDI/SUB/SLT instructions retired.
    pub inst_alu: u64,
    /// Count of J instructions retired (each one redirects the PC).
    pub inst_jump: u64,
    /// Count of CACHE instructions retired.
    pub inst_cache: u64,

    /// Loads served from the cache.
    pub cache_hits: u64,
    /// Loads that populated the cache.
    pub cache_misses: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            fetches: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_jump: 0,
            inst_cache: 0,
            cache_hits: 0,
            cache_misses: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "memory"];

impl SimStats {
    /// Counts one retired instruction.
    pub const fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Add { .. }
            | Instruction::Addi { .. }
            | Instruction::Sub { .. }
            | Instruction::Slt { .. } => self.inst_alu += 1,
            Instruction::J { .. } => self.inst_jump += 1,
            Instruction::Cache { .. } => self.inst_cache += 1,
            Instruction::Unimplemented { .. } | Instruction::Halt => {}
        }
    }

    /// Copies the cache hit/miss counters.
    pub const fn sync_cache(&mut self, cache: &Cache) {
        self.cache_hits = cache.hits;
        self.cache_misses = cache.misses;
    }

    /// Fraction of cached loads that hit, or `None` before any cached load.
    pub fn cache_hit_rate(&self) -> Option<f64> {
        let total = self.cache_hits + self.cache_misses;
        (total > 0).then(|| self.cache_hits as f64 / total as f64)
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`].
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            let kips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("MIPSIM SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_fetches              {}", self.fetches);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_kips                 {kips:.2}");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu  ", self.inst_alu),
                ("op.jump ", self.inst_jump),
                ("op.cache", self.inst_cache),
            ] {
                println!(
                    "  {name}               {count} ({:.2}%)",
                    (count as f64 / instr) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("MEMORY");
            println!("  cache.hits             {}", self.cache_hits);
            println!("  cache.misses           {}", self.cache_misses);
            match self.cache_hit_rate() {
                Some(rate) => println!("  cache.hit_rate         {:.2}%", rate * 100.0),
                None => println!("  cache.hit_rate         n/a"),
            }
            println!("==========================================================");
        }
    }
}
