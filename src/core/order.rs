//! Chronological ordering and binary date search over record slices.
//!
//! Both operations compare canonical zero-padded text lexicographically;
//! that equals chronological order exactly because the forms are fixed
//! width. Nothing here parses dates.

use std::cmp::Ordering;

use crate::appt::ApptRecord;

/// Sorts `records` in place, ascending by the composite
/// `"YYYY-MM-DD HH:MM"` key.
///
/// Stable and idempotent: re-sorting a sorted slice changes nothing.
pub fn sort_by_date_time(records: &mut [ApptRecord]) {
    records.sort_by_cached_key(ApptRecord::date_time_key);
}

/// Binary search on the `date` field only.
///
/// Precondition, unchecked: `records` is sorted ascending by the composite
/// key (date-major). Violating it yields an unspecified result. When several
/// records share `target_date` the returned index is an arbitrary one of
/// them, not necessarily the first; the record at the returned index always
/// has the target date. Returns `None` on a miss.
pub fn find_by_date(records: &[ApptRecord], target_date: &str) -> Option<usize> {
    let mut low = 0usize;
    let mut high = records.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match records[mid].date.as_str().cmp(target_date) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
