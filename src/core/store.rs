//! Authoritative in-memory appointment store.

use thiserror::Error;

use crate::{
    appt::{ApptDraft, ApptRecord},
    core::order,
    types::{ApptId, FIRST_APPT_ID, STATUS_ACTIVE},
};

/// Errors surfaced by store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("no appointment with id {0}")]
    MissingAppt(ApptId),
}

/// Growable, exclusively owned collection of appointment records.
///
/// Records are append-only: the only in-place mutation after creation is
/// [`ApptStore::update_status`]. A record leaves the store only by being
/// absent from the data file on the next load.
#[derive(Debug, Default)]
pub struct ApptStore {
    records: Vec<ApptRecord>,
}

impl ApptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(10),
        }
    }

    /// Adopts records loaded from persistence, keeping their order and ids.
    ///
    /// Ids are taken on trust; a file with duplicate ids produces a store
    /// with duplicate ids, matching the lenient load path.
    pub fn from_records(records: Vec<ApptRecord>) -> Self {
        Self { records }
    }

    /// Appends a new record built from `draft`, assigning the next id and
    /// the `Active` status. Returns the assigned id.
    pub fn add(&mut self, draft: ApptDraft) -> ApptId {
        let id = self.generate_id();
        self.records.push(ApptRecord {
            id,
            patient_name: draft.patient_name,
            doctor_name: draft.doctor_name,
            date: draft.date,
            time: draft.time,
            status: STATUS_ACTIVE.to_string(),
        });
        id
    }

    /// Next id to assign: [`FIRST_APPT_ID`] when empty, otherwise one past
    /// the highest existing id.
    ///
    /// Full scan per call so ids stay above anything adopted from disk,
    /// including gaps and out-of-order ids. O(n) per insert; fine at
    /// single-clinic scale, a known limit beyond it.
    pub fn generate_id(&self) -> ApptId {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) => max + 1,
            None => FIRST_APPT_ID,
        }
    }

    /// Index of the first record with `id`, by linear scan.
    pub fn find_by_id(&self, id: ApptId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Overwrites the status of the record with `id`.
    ///
    /// Any text is accepted; the status set is open by design. Fails with
    /// [`StoreError::MissingAppt`] and mutates nothing when the id is absent.
    pub fn update_status(&mut self, id: ApptId, new_status: &str) -> Result<(), StoreError> {
        let idx = self.find_by_id(id).ok_or(StoreError::MissingAppt(id))?;
        self.records[idx].status = new_status.to_string();
        Ok(())
    }

    /// Reorders the whole store ascending by the composite (date, time) key.
    pub fn sort_by_date_time(&mut self) {
        order::sort_by_date_time(&mut self.records);
    }

    /// Binary search by date. The store must already be sorted by the
    /// composite key; see [`order::find_by_date`].
    pub fn find_by_date(&self, target_date: &str) -> Option<usize> {
        order::find_by_date(&self.records, target_date)
    }

    /// Record at `idx`, if in bounds.
    pub fn get(&self, idx: usize) -> Option<&ApptRecord> {
        self.records.get(idx)
    }

    /// All records in current in-memory order.
    pub fn records(&self) -> &[ApptRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
