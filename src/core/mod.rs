//! In-memory authoritative store and its ordering/reporting helpers.

/// Chronological ordering and binary date search.
pub mod order;
/// Aggregate status counts.
pub mod report;
/// Authoritative appointment store.
pub mod store;
