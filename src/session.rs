//! Interactive command surface: a numbered menu over one store.
//!
//! The loop is generic over [`BufRead`]/[`Write`] so scripted tests can
//! drive it. One session owns one store; data is loaded once at open and
//! written back by the save-and-exit command.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    appt::ApptDraft,
    core::{
        report,
        store::ApptStore,
    },
    persist::{FIELD_DELIMITER, PersistError, PersistResult, flatfile},
    types::{ApptId, STATUS_ACTIVE, STATUS_CANCELLED, STATUS_DONE},
    validate,
};

/// Errors surfaced by the interactive loop.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Terminal I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Loading or saving the data file failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// One interactive session: a store plus the file it round-trips through.
pub struct Session {
    store: ApptStore,
    data_path: PathBuf,
}

impl Session {
    /// Loads `data_path` (missing file means empty book) and wraps it in a
    /// session.
    pub fn open(data_path: PathBuf) -> PersistResult<Self> {
        let records = flatfile::load(&data_path)?;
        Ok(Self {
            store: ApptStore::from_records(records),
            data_path,
        })
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ApptStore {
        &self.store
    }

    /// Writes the full store back to the data file.
    pub fn save(&self) -> PersistResult<()> {
        flatfile::save(&self.data_path, self.store.records())
    }

    /// Runs the menu loop until save-and-exit or end of input.
    ///
    /// Non-numeric and out-of-range menu choices are discarded and the menu
    /// is shown again. End of input leaves the loop without saving.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError> {
        loop {
            write_menu(out)?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            let Ok(choice) = line.trim().parse::<u8>() else {
                continue;
            };
            match choice {
                1 => self.create(input, out)?,
                2 => {
                    self.store.sort_by_date_time();
                    list_all(out, &self.store)?;
                }
                3 => self.search_by_date(input, out)?,
                4 => self.update_status(input, out)?,
                5 => show_stats(out, &self.store)?,
                6 => {
                    self.save()?;
                    writeln!(
                        out,
                        "\n[SYSTEM] {} records saved to {}.",
                        self.store.len(),
                        self.data_path.display()
                    )?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn create<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError> {
        let Some(patient_name) = prompt_clean_field(input, out, "Patient Name: ")? else {
            return Ok(());
        };
        let Some(doctor_name) = prompt_clean_field(input, out, "Doctor Name: ")? else {
            return Ok(());
        };
        let Some(date) = prompt_clean_field(input, out, "Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(time) = prompt_time(input, out)? else {
            return Ok(());
        };
        let id = self.store.add(ApptDraft {
            patient_name,
            doctor_name,
            date,
            time,
        });
        writeln!(out, "[SUCCESS] Appointment {id} created.")?;
        Ok(())
    }

    fn search_by_date<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError> {
        write!(out, "Search Date (YYYY-MM-DD): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let target = line.trim();
        // Locator precondition: sorted by composite key.
        self.store.sort_by_date_time();
        match self.store.find_by_date(target) {
            Some(idx) => {
                let rec = &self.store.records()[idx];
                writeln!(
                    out,
                    "\nFound! ID {}: {} at {}",
                    rec.id, rec.patient_name, rec.time
                )?;
            }
            None => writeln!(out, "\nNo appointments found on this date.")?,
        }
        Ok(())
    }

    fn update_status<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError> {
        write!(out, "Enter Appointment ID: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let Ok(id) = line.trim().parse::<ApptId>() else {
            writeln!(out, "Invalid id.")?;
            return Ok(());
        };
        write!(
            out,
            "New Status ({STATUS_ACTIVE}/{STATUS_CANCELLED}/{STATUS_DONE}): "
        )?;
        out.flush()?;
        let Some(status_line) = read_line(input)? else {
            return Ok(());
        };
        match self.store.update_status(id, status_line.trim()) {
            Ok(()) => writeln!(out, "Update complete.")?,
            Err(err) => writeln!(out, "{err}.")?,
        }
        Ok(())
    }
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write_header(out, "CLINIC SCHEDULER")?;
    writeln!(out, "1. New Appointment")?;
    writeln!(out, "2. List All (Auto-Sorted)")?;
    writeln!(out, "3. Binary Search by Date")?;
    writeln!(out, "4. Update/Cancel Appointment")?;
    writeln!(out, "5. System Statistics")?;
    writeln!(out, "6. Save and Exit")?;
    write!(out, "\nEnter Choice (1-6): ")?;
    out.flush()
}

fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "  {title}")?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn list_all<W: Write>(out: &mut W, store: &ApptStore) -> io::Result<()> {
    writeln!(
        out,
        "\n{:<5} | {:<15} | {:<12} | {:<10} | {:<5} | {:<10}",
        "ID", "Patient", "Doctor", "Date", "Time", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for rec in store.records() {
        writeln!(
            out,
            "{:<5} | {:<15.15} | {:<12.12} | {:<10} | {:<5} | {:<10}",
            rec.id, rec.patient_name, rec.doctor_name, rec.date, rec.time, rec.status
        )?;
    }
    Ok(())
}

fn show_stats<W: Write>(out: &mut W, store: &ApptStore) -> io::Result<()> {
    let stats = report::compute_stats(store);
    write_header(out, "CLINIC REPORT")?;
    writeln!(out, "Total Records: {}", stats.total)?;
    writeln!(out, "Active Appointments: {}", stats.active)?;
    writeln!(out, "Inactive/Cancelled: {}", stats.inactive)?;
    Ok(())
}

fn prompt_clean_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, SessionError> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let text = line.trim();
        if validate::is_clean_field(text) {
            return Ok(Some(text.to_string()));
        }
        writeln!(
            out,
            "Field must be non-empty and must not contain '{FIELD_DELIMITER}'."
        )?;
    }
}

fn prompt_time<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, SessionError> {
    loop {
        write!(out, "Time (HH:MM): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let text = line.trim();
        if validate::is_valid_time(text) {
            return Ok(Some(text.to_string()));
        }
        writeln!(out, "Invalid HH:MM format!")?;
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
