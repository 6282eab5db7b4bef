//! # Trace Loader Tests
//!
//! Covers tokenizing, the malformed-token stop, the optional cap and the
//! file-level error paths of the trace loader.

use crate::common::harness::{addrs, trace_file};
use cachesim_core::common::SimError;
use cachesim_core::sim::{Trace, TraceStop};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn read(input: &str, cap: Option<usize>) -> Trace {
    Trace::from_reader(Cursor::new(input), cap).unwrap()
}

#[test]
fn test_newline_and_space_separated_tokens() {
    let trace = read("0 4\n8\t\t12\r\n\n  16  \n", None);
    assert_eq!(trace.addresses, addrs(&[0, 4, 8, 12, 16]));
    assert_eq!(trace.stop, TraceStop::EndOfInput);
}

#[test]
fn test_empty_input() {
    let trace = read("", None);
    assert!(trace.is_empty());
    assert_eq!(trace.stop, TraceStop::EndOfInput);

    let blank = read("  \n\n\t", None);
    assert_eq!(blank.len(), 0);
}

#[test]
fn test_full_u64_range() {
    let trace = read("18446744073709551615 0", None);
    assert_eq!(trace.addresses, addrs(&[u64::MAX, 0]));
}

#[test]
fn test_malformed_token_ends_trace() {
    let trace = read("1 2 three 4 5", None);
    assert_eq!(trace.addresses, addrs(&[1, 2]));
    assert_eq!(
        trace.stop,
        TraceStop::MalformedToken {
            token: "three".to_owned(),
            position: 2
        }
    );
}

#[test]
fn test_negative_and_overflowing_tokens_are_malformed() {
    assert_eq!(read("7 -1 8", None).addresses, addrs(&[7]));
    assert_eq!(read("18446744073709551616 1", None).len(), 0);
    assert_eq!(read("0x10", None).len(), 0);
}

#[test]
fn test_cap_truncates_and_reports() {
    let trace = read("1 2 3 4 5", Some(3));
    assert_eq!(trace.addresses, addrs(&[1, 2, 3]));
    assert_eq!(trace.stop, TraceStop::Truncated { limit: 3 });
}

#[test]
fn test_cap_not_reached_is_end_of_input() {
    let trace = read("1 2 3", Some(3));
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.stop, TraceStop::EndOfInput);
}

#[test]
fn test_legacy_cap_drops_excess() {
    let input: String = (0..1500).map(|i| format!("{i}\n")).collect();
    let trace = read(&input, Some(cachesim_core::common::LEGACY_MAX_ADDRESSES));
    assert_eq!(trace.len(), 1000);
    assert_eq!(trace.addresses.last().map(|a| a.val()), Some(999));
}

#[test]
fn test_no_cap_reads_everything() {
    let input: String = (0..1500).map(|i| format!("{i} ")).collect();
    assert_eq!(read(&input, None).len(), 1500);
}

#[test]
fn test_invalid_utf8_token_ends_trace() {
    let bytes: &[u8] = b"1 2 \xff\xfe 3";
    let trace = Trace::from_reader(Cursor::new(bytes), None).unwrap();
    assert_eq!(trace.addresses, addrs(&[1, 2]));
    assert_eq!(
        trace.stop,
        TraceStop::MalformedToken {
            token: "\u{fffd}\u{fffd}".to_owned(),
            position: 2
        }
    );
}

#[test]
fn test_load_from_file() {
    let file = trace_file("10\n20\n30\n");
    let trace = Trace::load(file.path(), None).unwrap();
    assert_eq!(trace.addresses, addrs(&[10, 20, 30]));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.trace");
    let err = Trace::load(&missing, None).unwrap_err();
    assert!(matches!(err, SimError::TraceOpen { ref path, .. } if *path == missing));
}
