//! # Replay Driver Tests
//!
//! Exercises the simulator from address slices and end to end through
//! `sim::run`: trace file in, verdict log file out.

use crate::common::harness::{Hit, Miss, addrs, output_path, trace_file};
use cachesim_core::common::{Addr, ConfigError, SimError};
use cachesim_core::config::{CacheConfig, Config};
use cachesim_core::sim::{self, Simulator, VerdictLog};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn config(entries: u64, ways: u64, output: &Path) -> Config {
    let mut config = Config::default();
    config.cache = CacheConfig::new(entries, ways);
    config.output.path = output.to_path_buf();
    config
}

// ══════════════════════════════════════════════════════════
// 1. In-memory replay
// ══════════════════════════════════════════════════════════

#[test]
fn replay_records_verdicts_in_order() {
    let log = sim::replay(&CacheConfig::new(4, 1), &addrs(&[0, 4, 8, 0])).unwrap();
    assert_eq!(log.verdicts().collect::<Vec<_>>(), vec![Miss; 4]);
    assert_eq!(
        log.records().iter().map(|(a, _)| a.val()).collect::<Vec<_>>(),
        vec![0, 4, 8, 0]
    );
}

#[test]
fn simulator_step_matches_log() {
    let mut simulator = Simulator::new(&CacheConfig::new(4, 1)).unwrap();
    assert_eq!(simulator.step(Addr(0)), Miss);
    assert_eq!(simulator.step(Addr(0)), Hit);
    simulator.replay(&addrs(&[0]));

    assert_eq!(simulator.log().len(), 3);
    assert_eq!(simulator.cache.counter(), 3);
    assert_eq!(
        simulator.into_log().verdicts().collect::<Vec<_>>(),
        vec![Miss, Hit, Hit]
    );
}

#[test]
fn replay_rejects_invalid_geometry() {
    assert!(matches!(
        sim::replay(&CacheConfig::new(6, 4), &[]),
        Err(SimError::Config(ConfigError::NotDivisible { .. }))
    ));
}

#[test]
fn verdict_log_format() {
    let mut log = VerdictLog::default();
    log.push(Addr(0), Miss);
    log.push(Addr(18446744073709551615), Hit);

    let mut out = Vec::new();
    log.write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 : MISS\n18446744073709551615 : HIT\n"
    );
}

// ══════════════════════════════════════════════════════════
// 2. End-to-end runs
// ══════════════════════════════════════════════════════════

#[test]
fn run_writes_one_line_per_address() {
    let trace = trace_file("0\n0\n0\n");
    let (_dir, out) = output_path();

    let log = sim::run(&config(4, 1, &out), trace.path()).unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "0 : MISS\n0 : HIT\n0 : HIT\n"
    );
}

#[test]
fn run_stops_at_malformed_token() {
    let trace = trace_file("0 4 end 0\n");
    let (_dir, out) = output_path();

    let _ = sim::run(&config(4, 1, &out), trace.path()).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 : MISS\n4 : MISS\n");
}

#[test]
fn run_keeps_addresses_before_non_utf8_token() {
    let (dir, out) = output_path();
    let trace = dir.path().join("binary.trace");
    fs::write(&trace, b"0 0 \xff 4\n").unwrap();

    let log = sim::run(&config(4, 1, &out), &trace).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 : MISS\n0 : HIT\n");
}

#[test]
fn run_applies_trace_cap() {
    let trace = trace_file("1 2 3 1 2 3");
    let (_dir, out) = output_path();
    let mut cfg = config(8, 2, &out);
    cfg.trace.max_addresses = Some(4);

    let log = sim::run(&cfg, trace.path()).unwrap();
    assert_eq!(log.verdicts().collect::<Vec<_>>(), vec![Miss, Miss, Miss, Hit]);
}

#[test]
fn run_with_empty_trace_creates_empty_output() {
    let trace = trace_file("");
    let (_dir, out) = output_path();

    let log = sim::run(&config(4, 1, &out), trace.path()).unwrap();
    assert!(log.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}

#[test]
fn run_truncates_existing_output() {
    let trace = trace_file("5");
    let (_dir, out) = output_path();
    fs::write(&out, "stale contents\nfrom a previous run\n").unwrap();

    let _ = sim::run(&config(4, 1, &out), trace.path()).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "5 : MISS\n");
}

#[test]
fn run_rejects_geometry_before_touching_files() {
    let (_dir, out) = output_path();
    let missing_trace = out.with_file_name("missing.trace");

    let err = sim::run(&config(12, 1, &out), &missing_trace).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::SetsNotPowerOfTwo { sets: 12 })
    ));
    assert!(!out.exists(), "no output on configuration error");
}

#[test]
fn run_reports_oversized_geometry_without_output() {
    let trace = trace_file("0 4");
    let (_dir, out) = output_path();

    let err = sim::run(&config(1 << 62, 1, &out), trace.path()).unwrap_err();
    assert!(matches!(err, SimError::Config(ConfigError::TooLarge { .. })));
    assert!(!out.exists());
}

#[test]
fn run_reports_missing_trace() {
    let (_dir, out) = output_path();
    let missing_trace = out.with_file_name("missing.trace");

    let err = sim::run(&config(4, 1, &out), &missing_trace).unwrap_err();
    assert!(matches!(err, SimError::TraceOpen { .. }));
    assert!(!out.exists());
}

#[test]
fn run_reports_uncreatable_output() {
    let trace = trace_file("1");
    let (dir, _) = output_path();
    let out = dir.path().join("no-such-dir").join("out");

    let err = sim::run(&config(4, 1, &out), trace.path()).unwrap_err();
    assert!(matches!(err, SimError::OutputCreate { ref path, .. } if *path == out));
}
