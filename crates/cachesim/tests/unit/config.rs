//! Geometry validation and geometry file tests.

use std::io::Write;

use cachesim::common::ConfigError;
use cachesim::config::{Config, Geometry, GeometryConfig, MAX_TOTAL_LINES};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_geometry_derived_sizes() {
    let g = Geometry::new(4, 2, 5).unwrap();
    assert_eq!(g.set_count(), 16);
    assert_eq!(g.lines_per_set(), 2);
    assert_eq!(g.block_size(), 32);
    assert_eq!(g.capacity_bytes(), 16 * 2 * 32);
}

#[rstest]
#[case(0, 1, 1, "s")]
#[case(1, 0, 1, "E")]
#[case(1, 1, 0, "b")]
fn test_zero_parameter_rejected(
    #[case] s: u32,
    #[case] e: usize,
    #[case] b: u32,
    #[case] name: &str,
) {
    match Geometry::new(s, e, b) {
        Err(ConfigError::NonPositive(got)) => assert_eq!(got, name),
        other => panic!("expected NonPositive({}), got {:?}", name, other),
    }
}

#[test]
fn test_address_width_exceeded() {
    assert!(matches!(
        Geometry::new(10, 1, 60),
        Err(ConfigError::AddressWidthExceeded {
            set_bits: 10,
            block_bits: 60
        })
    ));
    assert!(Geometry::new(4, 1, 60).is_ok());
}

#[test]
fn test_address_width_message_with_huge_set_bits() {
    let err = Geometry::new(u32::MAX, 1, 1).unwrap_err();
    assert!(matches!(err, ConfigError::AddressWidthExceeded { .. }));
    assert_eq!(
        err.to_string(),
        "s + b = 4294967296 exceeds the 64-bit address width"
    );
}

#[test]
fn test_too_large_cache_rejected() {
    assert!(matches!(
        Geometry::new(40, 1, 4),
        Err(ConfigError::TooLarge { .. })
    ));
    assert!(matches!(
        Geometry::new(1, MAX_TOTAL_LINES, 4),
        Err(ConfigError::TooLarge { .. })
    ));
    assert!(Geometry::new(1, MAX_TOTAL_LINES / 2, 4).is_ok());
}

#[test]
fn test_merge_prefers_overrides() {
    let file = GeometryConfig {
        set_bits: Some(4),
        lines_per_set: Some(1),
        block_bits: Some(4),
    };
    let flags = GeometryConfig {
        set_bits: None,
        lines_per_set: Some(8),
        block_bits: None,
    };
    assert_eq!(
        file.merge(flags),
        GeometryConfig {
            set_bits: Some(4),
            lines_per_set: Some(8),
            block_bits: Some(4),
        }
    );
}

#[test]
fn test_resolve_reports_missing_parameter() {
    let partial = GeometryConfig {
        set_bits: Some(4),
        lines_per_set: None,
        block_bits: Some(4),
    };
    assert!(matches!(partial.resolve(), Err(ConfigError::Missing("E"))));
    assert!(matches!(
        GeometryConfig::default().resolve(),
        Err(ConfigError::Missing("s"))
    ));
}

#[test]
fn test_config_file_short_names() {
    let file = write_config("[cache]\ns = 4\nE = 2\nb = 5\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cache.resolve().unwrap(), Geometry::new(4, 2, 5).unwrap());
}

#[test]
fn test_config_file_long_names() {
    let file = write_config("[cache]\nset_bits = 3\nlines_per_set = 4\nblock_bits = 6\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cache.resolve().unwrap(), Geometry::new(3, 4, 6).unwrap());
}

#[test]
fn test_config_file_without_cache_table() {
    let file = write_config("");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cache, GeometryConfig::default());
}

#[test]
fn test_config_file_unknown_key() {
    let file = write_config("[cache]\nways = 4\n");
    assert!(matches!(
        Config::from_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_config_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
    assert!(std::error::Error::source(&err).is_some());
}
