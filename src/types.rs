//! Shared primitive identifiers and status literals.

/// Monotonic appointment identifier.
pub type ApptId = u32;

/// Id assigned to the first appointment added to an empty book.
pub const FIRST_APPT_ID: ApptId = 1001;

/// Status text a freshly created appointment carries.
pub const STATUS_ACTIVE: &str = "Active";
/// Conventional status for a cancelled appointment.
pub const STATUS_CANCELLED: &str = "Cancelled";
/// Conventional status for a completed appointment.
pub const STATUS_DONE: &str = "Done";
