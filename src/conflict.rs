//! Pairwise time-conflict detection.
//!
//! Two courses conflict when any pair of their meetings overlaps on the
//! same weekday under open-interval semantics
//! ([`crate::models::Meeting::overlaps`]).
//! Touching endpoints (one session ending exactly when another starts)
//! are not a conflict.
//!
//! # Scaling
//! Exhaustive pair generation is O(n²·m²) in catalog size n and
//! meetings-per-course m. [`conflicting_pairs`] buckets courses by
//! weekday first, so only courses sharing a day are compared; still
//! worst-case quadratic within a bucket, which is fine for catalogs of
//! tens to a few hundred courses but not designed beyond that.

use std::collections::{BTreeSet, HashMap};

use crate::models::{Catalog, Course};

/// Whether two courses conflict in time.
///
/// True iff any meeting of `a` overlaps any meeting of `b`.
/// Pure and symmetric.
pub fn courses_conflict(a: &Course, b: &Course) -> bool {
    a.meetings
        .iter()
        .any(|m1| b.meetings.iter().any(|m2| m1.overlaps(m2)))
}

/// All conflicting unordered pairs in the catalog, as load-order positions.
///
/// Candidate pairs are generated per weekday bucket and deduplicated
/// (courses meeting on several shared days appear in several buckets),
/// then checked with the full pairwise predicate. Pairs come out sorted
/// with `i < j`.
pub fn conflicting_pairs(catalog: &Catalog) -> Vec<(usize, usize)> {
    let mut by_day: HashMap<u8, Vec<usize>> = HashMap::new();
    for (i, course) in catalog.courses().iter().enumerate() {
        let days: BTreeSet<u8> = course.meetings.iter().map(|m| m.day).collect();
        for day in days {
            by_day.entry(day).or_default().push(i);
        }
    }

    let mut pairs = BTreeSet::new();
    for bucket in by_day.values() {
        for (k, &i) in bucket.iter().enumerate() {
            for &j in &bucket[k + 1..] {
                let pair = if i < j { (i, j) } else { (j, i) };
                if pairs.contains(&pair) {
                    continue;
                }
                let courses = catalog.courses();
                if courses_conflict(&courses[pair.0], &courses[pair.1]) {
                    pairs.insert(pair);
                }
            }
        }
    }

    pairs.into_iter().collect()
}
