//! Set-associative cache simulator CLI.
//!
//! Replays a Valgrind memory trace against an LRU cache of the requested
//! geometry and prints the hit, miss and eviction counts. The counts are
//! also written to `.csim_results` as `H M E` for grading scripts.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use cachesim::cache::{CacheModel, Outcome};
use cachesim::config::{Config, Geometry, GeometryConfig};
use cachesim::stats::{RESULTS_FILE, SimStats};
use cachesim::trace::{ReplayReport, TraceRecord, replay_file};

const EXAMPLES: &str = "\
Examples:
  linux>  csim -s 4 -E 1 -b 4 -t traces/yi.trace
  linux>  csim -v -s 8 -E 2 -b 4 -t traces/yi.trace
  linux>  csim -c cache.toml -E 4 -t traces/trans.trace";

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Set-associative LRU cache simulator",
    long_about = None,
    after_help = EXAMPLES,
)]
struct Cli {
    /// Number of s bits for set index.
    #[arg(short = 's', value_name = "num")]
    set_bits: Option<u32>,

    /// Number of lines per set.
    #[arg(short = 'E', value_name = "num")]
    lines_per_set: Option<usize>,

    /// Number of b bits for block offsets.
    #[arg(short = 'b', value_name = "num")]
    block_bits: Option<u32>,

    /// Trace file.
    #[arg(short = 't', value_name = "file")]
    trace: PathBuf,

    /// Print each data record with its outcomes.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// TOML file with a `[cache]` table; -s/-E/-b override its values.
    #[arg(short = 'c', long, value_name = "file")]
    config: Option<PathBuf>,

    /// Print the summary as JSON instead of the `hits:` line.
    #[arg(long)]
    json: bool,

    /// Print detailed statistics after the summary.
    #[arg(long)]
    stats: bool,

    /// Where to write the `H M E` results record.
    #[arg(long, value_name = "file", default_value = RESULTS_FILE)]
    results: PathBuf,

    /// Do not write the results record.
    #[arg(long, conflicts_with = "results")]
    no_results: bool,
}

/// JSON form of a finished run.
#[derive(Serialize)]
struct Summary<'a> {
    geometry: &'a Geometry,
    #[serde(flatten)]
    stats: SimStats,
    replay: ReplayReport,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(cli, &mut io::stdout().lock()) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

/// Replays the trace and reports to `out`. The results record is written
/// only after the replay succeeds.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let geometry = resolve_geometry(&cli)?;
    let mut model = CacheModel::new(geometry);

    let verbose = cli.verbose;
    let report = replay_file(&mut model, &cli.trace, |record, outcomes| {
        if verbose {
            print_verbose(&mut *out, record, outcomes);
        }
    })?;

    let stats = model.stats();
    info!(
        "replayed {} records ({} accesses) from {}",
        report.data_records,
        report.accesses,
        cli.trace.display()
    );

    if cli.json {
        let summary = Summary {
            geometry: model.geometry(),
            stats,
            replay: report,
        };
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else {
        writeln!(out, "{}", stats.summary_line())?;
    }

    if cli.stats {
        stats.write_block(out)?;
        writeln!(out, "  trace lines            {}", report.lines)?;
        writeln!(out, "  data records           {}", report.data_records)?;
        writeln!(out, "  instruction records    {}", report.instruction_records)?;
        writeln!(out, "  malformed records      {}", report.malformed_records)?;
    }

    if !cli.no_results {
        stats
            .write_results(&cli.results)
            .with_context(|| format!("could not write results to {}", cli.results.display()))?;
    }

    Ok(())
}

/// Combines the optional geometry file with the command-line flags.
fn resolve_geometry(cli: &Cli) -> Result<Geometry> {
    let file = match &cli.config {
        Some(path) => Config::from_file(path)?.cache,
        None => GeometryConfig::default(),
    };
    let flags = GeometryConfig {
        set_bits: cli.set_bits,
        lines_per_set: cli.lines_per_set,
        block_bits: cli.block_bits,
    };
    Ok(file.merge(flags).resolve()?)
}

/// `L 10,1 miss hit`
fn print_verbose(out: &mut impl Write, record: &TraceRecord, outcomes: &[Outcome]) {
    let mut line = record.to_string();
    for outcome in outcomes {
        line.push(' ');
        line.push_str(&outcome.to_string());
    }
    writeln!(out, "{}", line).ok();
}
