//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers from other crates.
//!
//! The sample describes one reset of the default two-agent world with hand-placed
//! positions: agent 0 at the origin two units below landmark 0, agent 1 sitting
//! on landmark 1.

use crate::{Record, WorldSnapshot};

/// Returns every record of the sample evaluation, in file order.
pub fn sample_records() -> Vec<Record> {
    let jsonl = include_str!("../tests/fixtures/sample_records.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            Record::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse record line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns the world snapshot of the sample evaluation.
pub fn sample_snapshot() -> WorldSnapshot {
    sample_records()
        .into_iter()
        .find_map(|r| match r {
            Record::Snapshot(s) => Some(s),
            _ => None,
        })
        .expect("sample_records.jsonl has no snapshot line")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_parse() {
        let records = sample_records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.episode() == 0));
    }

    #[test]
    fn test_sample_snapshot_shape() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.agents.len(), 2);
        assert_eq!(snapshot.landmarks.len(), 2);
        assert_eq!(snapshot.agent(0).map(|a| a.position.clone()), Some(vec![0.0, 0.0]));
    }
}
