//! Collapse decade-scaled duplicates of the same normalized pair.
//!
//! The candidate pool spans several decades independently for R1 and R2,
//! so the same physical ratio (say 10kΩ + 15kΩ and 1kΩ + 1.5kΩ) can
//! survive the filters more than once. After normalization those share a
//! `(norm_r1, norm_r2)` key and differ only in multiplier.

use std::collections::HashSet;

use crate::pipeline::evaluate::PairRecord;

/// Keep the first record per `(norm_r1, norm_r2)` key.
///
/// The input must already be rank-ordered; the first occurrence of a key
/// is then its best-ranked, smallest-multiplier representative. Running
/// this twice changes nothing.
pub fn dedup_records(records: Vec<PairRecord>) -> Vec<PairRecord> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert((r.norm_r1, r.norm_r2)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::evaluate::evaluate_pair;
    use crate::pipeline::rank::rank_records;

    fn record(r1: u64, r2: u64) -> PairRecord {
        evaluate_pair(r1, r2, 2, 5.0, 3.0).unwrap()
    }

    #[test]
    fn keeps_smallest_multiplier_per_key() {
        let mut records = vec![
            record(15_000, 22_000),
            record(150, 220),
            record(1_500, 2_200),
        ];
        rank_records(&mut records);
        let deduped = dedup_records(records);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].multiplier, 1);
        assert_eq!((deduped[0].norm_r1, deduped[0].norm_r2), (15, 22));
    }

    #[test]
    fn distinct_keys_survive() {
        let mut records = vec![record(150, 220), record(220, 150), record(100, 100)];
        rank_records(&mut records);
        let deduped = dedup_records(records);
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn idempotent() {
        let mut records = vec![
            record(15_000, 22_000),
            record(150, 220),
            record(100, 100),
            record(10_000, 10_000),
        ];
        rank_records(&mut records);
        let once = dedup_records(records);
        let twice = dedup_records(once.clone());
        assert_eq!(once, twice);
    }
}
