//! Flat-file codec: one record per line, six comma-separated fields.
//!
//! Format: `id,patient,doctor,date,time,status`. No escaping — the entry
//! glue keeps the delimiter out of the first five fields, and the trailing
//! status field absorbs any embedded delimiters on read.

use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::appt::ApptRecord;

use super::{FIELD_DELIMITER, PersistError, PersistResult};

/// Parses one persisted line into a record.
///
/// Well-formed means the id parses as an integer and all five text fields
/// are non-empty. The status field is the tail of the line, so it may
/// contain delimiters. Returns `None` for anything else.
pub fn parse_line(line: &str) -> Option<ApptRecord> {
    let mut fields = line.splitn(6, FIELD_DELIMITER);
    let id = fields.next()?.parse().ok()?;
    let patient_name = nonempty(fields.next()?)?.to_string();
    let doctor_name = nonempty(fields.next()?)?.to_string();
    let date = nonempty(fields.next()?)?.to_string();
    let time = nonempty(fields.next()?)?.to_string();
    let status = nonempty(fields.next()?)?.to_string();
    Some(ApptRecord {
        id,
        patient_name,
        doctor_name,
        date,
        time,
        status,
    })
}

/// Serializes one record as a persisted line, without the trailing newline.
pub fn format_line(rec: &ApptRecord) -> String {
    format!(
        "{id}{d}{patient}{d}{doctor}{d}{date}{d}{time}{d}{status}",
        id = rec.id,
        patient = rec.patient_name,
        doctor = rec.doctor_name,
        date = rec.date,
        time = rec.time,
        status = rec.status,
        d = FIELD_DELIMITER,
    )
}

/// Loads all well-formed records from `path`, in file order.
///
/// A missing file is an empty book, not an error. Malformed lines are
/// dropped without surfacing anything to the caller; each drop is traced
/// at debug level.
pub fn load(path: &Path) -> PersistResult<Vec<ApptRecord>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut records = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(rec) => records.push(rec),
            None if line.is_empty() => {}
            None => debug!(lineno = lineno + 1, "skipping malformed line"),
        }
    }
    info!(path = %path.display(), records = records.len(), "loaded data file");
    Ok(records)
}

/// Rewrites `path` with the full record sequence, in the given order.
///
/// Plain truncating overwrite: no atomic rename, no backup. The last
/// successful save is the durability guarantee.
pub fn save(path: &Path, records: &[ApptRecord]) -> PersistResult<()> {
    let io_err = |source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for rec in records {
        writeln!(out, "{}", format_line(rec)).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    info!(path = %path.display(), records = records.len(), "saved data file");
    Ok(())
}

fn nonempty(field: &str) -> Option<&str> {
    if field.is_empty() { None } else { Some(field) }
}
