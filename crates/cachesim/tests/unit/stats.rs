//! Statistics rendering tests.

use cachesim::stats::SimStats;
use pretty_assertions::assert_eq;

fn sample() -> SimStats {
    SimStats {
        hits: 4,
        misses: 5,
        evictions: 3,
    }
}

#[test]
fn test_summary_line() {
    assert_eq!(sample().summary_line(), "hits:4 misses:5 evictions:3");
}

#[test]
fn test_results_record() {
    assert_eq!(sample().results_record(), "4 5 3");
}

#[test]
fn test_write_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".csim_results");
    sample().write_results(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "4 5 3\n");
}

#[test]
fn test_rates() {
    let stats = sample();
    assert_eq!(stats.accesses(), 9);
    assert!((stats.hit_rate() - 4.0 / 9.0).abs() < 1e-12);
    assert!((stats.miss_rate() - 5.0 / 9.0).abs() < 1e-12);

    let empty = SimStats::default();
    assert_eq!(empty.hit_rate(), 0.0);
    assert_eq!(empty.miss_rate(), 0.0);
}

#[test]
fn test_json() {
    let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"hits": 4, "misses": 5, "evictions": 3}));
}

#[test]
fn test_write_block() {
    let mut buf = Vec::new();
    sample().write_block(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("CACHE SIMULATION STATISTICS"));
    assert!(text.contains("  accesses               9\n"));
    assert!(text.contains("  hits                   4 (44.44%)\n"));
    assert!(text.contains("  evictions              3\n"));
}
