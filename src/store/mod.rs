//! Immutable, time-ordered store of interval readings.

use chrono::NaiveDateTime;

use crate::domain::IntervalRecord;

/// Ordered sequence of readings, built once at startup and read-only for the
/// rest of the process lifetime. Insertion order is chronological because
/// the source file is pre-sorted; lookups never rely on that and use
/// explicit containment checks, so gaps in the series are tolerated.
#[derive(Debug, Default)]
pub struct ReadingStore {
    records: Vec<IntervalRecord>,
}

impl ReadingStore {
    pub fn new(records: Vec<IntervalRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Energy of the first record whose inclusive interval contains
    /// `instant`. First match in store order wins; two records only share an
    /// instant when the contiguity of the source is broken, and the
    /// tie-break keeps the earlier one.
    pub fn energy_at(&self, instant: NaiveDateTime) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.contains(instant))
            .map(|r| r.kwh)
    }

    /// All records whose start time falls in `[start, end)`, in store order.
    pub fn find_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<IntervalRecord> {
        self.records
            .iter()
            .filter(|r| r.start_time >= start && r.start_time < end)
            .cloned()
            .collect()
    }

    /// Full ordered dump.
    pub fn snapshot(&self) -> &[IntervalRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: &str, end: &str, kwh: f64) -> IntervalRecord {
        IntervalRecord {
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            kwh,
        }
    }

    fn store() -> ReadingStore {
        ReadingStore::new(vec![
            record("2025-10-01T08:00:01", "2025-10-01T08:30:00", 0.20),
            record("2025-10-01T08:30:01", "2025-10-01T09:00:00", 0.35),
            record("2025-10-01T09:00:01", "2025-10-01T09:30:00", 0.50),
        ])
    }

    #[test]
    fn test_energy_at_both_bounds_returns_that_record() {
        let s = store();
        assert_eq!(s.energy_at("2025-10-01T08:00:01".parse().unwrap()), Some(0.20));
        assert_eq!(s.energy_at("2025-10-01T08:30:00".parse().unwrap()), Some(0.20));
        assert_eq!(s.energy_at("2025-10-01T08:30:01".parse().unwrap()), Some(0.35));
    }

    #[test]
    fn test_energy_at_outside_loaded_range_is_none() {
        let s = store();
        assert_eq!(s.energy_at("2025-10-01T08:00:00".parse().unwrap()), None);
        assert_eq!(s.energy_at("2025-10-01T09:30:01".parse().unwrap()), None);
    }

    #[test]
    fn test_energy_at_in_a_gap_is_none() {
        let s = ReadingStore::new(vec![
            record("2025-10-01T08:00:01", "2025-10-01T08:30:00", 0.20),
            record("2025-10-01T10:00:01", "2025-10-01T10:30:00", 0.50),
        ]);
        assert_eq!(s.energy_at("2025-10-01T09:00:00".parse().unwrap()), None);
    }

    #[test]
    fn test_shared_boundary_tie_break_is_first_in_store_order() {
        // Overlap on the shared second: the earlier record wins.
        let s = ReadingStore::new(vec![
            record("2025-10-01T08:00:00", "2025-10-01T08:30:00", 1.0),
            record("2025-10-01T08:30:00", "2025-10-01T08:59:59", 2.0),
        ]);
        assert_eq!(s.energy_at("2025-10-01T08:30:00".parse().unwrap()), Some(1.0));
    }

    #[test]
    fn test_find_range_is_half_open_on_start_time() {
        let s = store();
        let hits = s.find_range(
            "2025-10-01T08:00:01".parse().unwrap(),
            "2025-10-01T09:00:01".parse().unwrap(),
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kwh, 0.20);
        assert_eq!(hits[1].kwh, 0.35);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let s = store();
        let kwh: Vec<f64> = s.snapshot().iter().map(|r| r.kwh).collect();
        assert_eq!(kwh, vec![0.20, 0.35, 0.50]);
    }
}
