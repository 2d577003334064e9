//! Simulation statistics collection and reporting.
//!
//! Tracks the hit, miss and eviction counters of a cache model and renders
//! them in the three forms the tooling consumes: the one-line summary, the
//! persisted `H M E` results record, and JSON.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

/// Default path of the persisted results record.
pub const RESULTS_FILE: &str = ".csim_results";

/// Hit, miss and eviction counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl SimStats {
    /// Total accesses, `hits + misses`.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0 when nothing was accessed.
    pub fn hit_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub fn miss_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.misses as f64 / total as f64,
        }
    }

    /// `hits:H misses:M evictions:E`
    pub fn summary_line(&self) -> String {
        format!(
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }

    /// `H M E`, the machine-readable record written to the results file.
    pub fn results_record(&self) -> String {
        format!("{} {} {}", self.hits, self.misses, self.evictions)
    }

    /// Writes [`SimStats::results_record`] followed by a newline to `path`.
    pub fn write_results(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, format!("{}\n", self.results_record()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Writes a formatted block of all statistics.
    pub fn write_block(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "==========================================================")?;
        writeln!(out, "CACHE SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "  accesses               {}", self.accesses())?;
        writeln!(
            out,
            "  hits                   {} ({:.2}%)",
            self.hits,
            self.hit_rate() * 100.0
        )?;
        writeln!(
            out,
            "  misses                 {} ({:.2}%)",
            self.misses,
            self.miss_rate() * 100.0
        )?;
        writeln!(out, "  evictions              {}", self.evictions)?;
        writeln!(out, "==========================================================")
    }
}
