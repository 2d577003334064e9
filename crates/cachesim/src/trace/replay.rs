//! Trace Replay.
//!
//! Feeds trace records into a [`CacheModel`] in order. Loads and stores are
//! one access, modifies are two accesses to the same address, and
//! instruction fetches are skipped. Lines that fail to parse are logged and
//! skipped; only a failure to read the source itself stops the replay.

use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use super::record::{AccessKind, TraceRecord};
use crate::cache::{CacheModel, Outcome};
use crate::common::TraceError;

/// Outcomes of the (at most two) accesses a record translates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcomes {
    outcomes: [Outcome; 2],
    len: usize,
}

impl RecordOutcomes {
    fn push(&mut self, outcome: Outcome) {
        self.outcomes[self.len] = outcome;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[Outcome] {
        &self.outcomes[..self.len]
    }
}

impl Default for RecordOutcomes {
    fn default() -> Self {
        Self {
            outcomes: [Outcome::Hit; 2],
            len: 0,
        }
    }
}

/// Line and record counts from one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Lines read from the source, blank ones included.
    pub lines: usize,
    /// Load, store and modify records applied to the cache.
    pub data_records: usize,
    /// Instruction fetch records skipped.
    pub instruction_records: usize,
    /// Lines that could not be parsed.
    pub malformed_records: usize,
    /// Cache accesses issued.
    pub accesses: u64,
}

/// Applies one record to the model and returns the outcomes in order.
pub fn apply_record(model: &mut CacheModel, record: &TraceRecord) -> RecordOutcomes {
    let mut outcomes = RecordOutcomes::default();
    for _ in 0..record.kind.cache_accesses() {
        outcomes.push(model.access(record.addr));
    }
    outcomes
}

/// Drives a borrowed cache model through a trace.
pub struct TraceReplayer<'a> {
    model: &'a mut CacheModel,
    report: ReplayReport,
}

impl<'a> TraceReplayer<'a> {
    pub fn new(model: &'a mut CacheModel) -> Self {
        Self {
            model,
            report: ReplayReport::default(),
        }
    }

    pub fn report(&self) -> ReplayReport {
        self.report
    }

    /// Applies a parsed record, counting it in the report.
    pub fn replay_record(&mut self, record: &TraceRecord) -> RecordOutcomes {
        if record.kind == AccessKind::Instruction {
            self.report.instruction_records += 1;
            return RecordOutcomes::default();
        }

        let outcomes = apply_record(self.model, record);
        self.report.data_records += 1;
        self.report.accesses += outcomes.as_slice().len() as u64;
        outcomes
    }

    /// Parses and applies one trace line.
    ///
    /// Returns the data record and its outcomes, or `None` for blank lines,
    /// instruction fetches and malformed lines.
    pub fn replay_line(
        &mut self,
        line_no: usize,
        line: &str,
    ) -> Option<(TraceRecord, RecordOutcomes)> {
        self.report.lines += 1;

        let record = match TraceRecord::parse_line(line) {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => {
                warn!("line {}: skipping malformed record {:?}: {}", line_no, line.trim(), e);
                self.report.malformed_records += 1;
                return None;
            }
        };

        let outcomes = self.replay_record(&record);
        (record.kind != AccessKind::Instruction).then_some((record, outcomes))
    }

    /// Replays every line of `reader`.
    pub fn replay<R: BufRead>(self, reader: R) -> Result<ReplayReport, TraceError> {
        self.replay_with(reader, |_, _| {})
    }

    /// Replays every line of `reader`, calling `observer` after each data
    /// record with the record and its outcomes.
    pub fn replay_with<R, F>(mut self, reader: R, mut observer: F) -> Result<ReplayReport, TraceError>
    where
        R: BufRead,
        F: FnMut(&TraceRecord, &[Outcome]),
    {
        for (idx, chunk) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let bytes = chunk.map_err(|source| TraceError::Read {
                line: line_no,
                source,
            })?;
            let line = String::from_utf8_lossy(&bytes);

            if let Some((record, outcomes)) = self.replay_line(line_no, &line) {
                observer(&record, outcomes.as_slice());
            }
        }

        debug!(
            "replay done: {} lines, {} data records, {} instruction records, {} malformed",
            self.report.lines,
            self.report.data_records,
            self.report.instruction_records,
            self.report.malformed_records
        );
        Ok(self.report)
    }
}

/// Opens `path` and replays it against `model`.
pub fn replay_file<F>(
    model: &mut CacheModel,
    path: impl AsRef<Path>,
    observer: F,
) -> Result<ReplayReport, TraceError>
where
    F: FnMut(&TraceRecord, &[Outcome]),
{
    let reader = super::open(path)?;
    TraceReplayer::new(model).replay_with(reader, observer)
}
