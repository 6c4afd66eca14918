//! Appointment domain record and draft types.

use crate::types::ApptId;

/// Fully materialized appointment record.
///
/// `date` and `time` are kept as canonical fixed-width text
/// (`YYYY-MM-DD`, `HH:MM`); lexicographic comparison of those forms is the
/// chronological ordering the store relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApptRecord {
    /// Stable appointment identifier, never reused within a book.
    pub id: ApptId,
    /// Patient display name. May contain spaces, never the field delimiter.
    pub patient_name: String,
    /// Doctor display name. Same constraints as `patient_name`.
    pub doctor_name: String,
    /// Date in canonical `YYYY-MM-DD` form. Opaque sortable key, not
    /// validated for calendar correctness.
    pub date: String,
    /// Time in canonical `HH:MM` form, shape-checked at entry.
    pub time: String,
    /// Free status text. Convention is `Active`/`Cancelled`/`Done` but the
    /// store accepts any value.
    pub status: String,
}

impl ApptRecord {
    /// Composite chronological key, e.g. `"2024-01-05 09:30"`.
    ///
    /// Only a valid ordering proxy while both fields are zero-padded
    /// canonical forms.
    pub fn date_time_key(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// Insert payload used to create a new [`ApptRecord`].
///
/// The store assigns the id and the initial status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApptDraft {
    /// Patient display name.
    pub patient_name: String,
    /// Doctor display name.
    pub doctor_name: String,
    /// Date in canonical `YYYY-MM-DD` form.
    pub date: String,
    /// Time in canonical `HH:MM` form.
    pub time: String,
}
