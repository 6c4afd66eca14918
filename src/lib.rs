//! In-memory clinic appointment book with flat-file persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::ApptStore`]:
//! ```
//! use apptbook::{
//!     appt::ApptDraft,
//!     core::{report, store::ApptStore},
//! };
//!
//! let mut store = ApptStore::new();
//! let id = store.add(ApptDraft {
//!     patient_name: "Ana Petrova".to_string(),
//!     doctor_name: "Dr. Ivanov".to_string(),
//!     date: "2024-03-01".to_string(),
//!     time: "09:00".to_string(),
//! });
//! assert_eq!(id, 1001);
//!
//! store.sort_by_date_time();
//! assert_eq!(store.find_by_date("2024-03-01"), Some(0));
//!
//! let stats = report::compute_stats(&store);
//! assert_eq!((stats.total, stats.active, stats.inactive), (1, 1, 0));
//! ```
//!
//! Session usage over a data file:
//! ```no_run
//! use apptbook::session::Session;
//!
//! let session = Session::open("clinic_data.csv".into()).expect("load");
//! session.save().expect("save");
//! ```
#![deny(missing_docs)]

/// Appointment domain record and draft types.
pub mod appt;
/// In-memory store, ordering, and reporting.
pub mod core;
/// Flat-file persistence adapter.
pub mod persist;
/// Interactive menu session.
pub mod session;
/// Shared primitive types and status literals.
pub mod types;
/// Entry-side input shape checks.
pub mod validate;
