//! Memory access traces.
//!
//! Parsing of Valgrind-style trace lines and the replay loop that turns
//! them into cache accesses.

/// Trace line parsing.
pub mod record;

/// Replay of records against a cache model.
pub mod replay;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::TraceError;

pub use record::{AccessKind, TraceRecord};
pub use replay::{RecordOutcomes, ReplayReport, TraceReplayer, apply_record, replay_file};

/// Opens a trace file for buffered reading.
pub fn open(path: impl AsRef<Path>) -> Result<BufReader<File>, TraceError> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TraceError::Open {
            path: path.to_path_buf(),
            source,
        })
}
