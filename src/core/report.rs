//! Aggregate status counts over the store.

use crate::{core::store::ApptStore, types::STATUS_ACTIVE};

/// Summary counts for the clinic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSummary {
    /// Total records in the store.
    pub total: usize,
    /// Records whose status is exactly `Active`.
    pub active: usize,
    /// Everything else, including `Cancelled`, `Done`, and free text.
    pub inactive: usize,
}

/// Computes the summary counts. Pure read, no mutation.
///
/// The active match is case-sensitive with no trimming, so `"active"` and
/// `"Active "` both count as inactive.
pub fn compute_stats(store: &ApptStore) -> StatsSummary {
    let total = store.len();
    let active = store
        .records()
        .iter()
        .filter(|r| r.status == STATUS_ACTIVE)
        .count();
    StatsSummary {
        total,
        active,
        inactive: total - active,
    }
}
