use std::fs;

use tempfile::TempDir;

use apptbook::{
    appt::ApptRecord,
    persist::flatfile,
};

fn rec(id: u32, patient: &str, date: &str, time: &str, status: &str) -> ApptRecord {
    ApptRecord {
        id,
        patient_name: patient.to_string(),
        doctor_name: "Dr. Ivanov".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status: status.to_string(),
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let records = vec![
        rec(1001, "Ana Petrova", "2024-03-01", "09:00", "Active"),
        rec(1002, "Boris Dimitrov", "2024-01-10", "14:30", "Done"),
    ];
    flatfile::save(&path, &records).unwrap();

    let loaded = flatfile::load(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let loaded = flatfile::load(&dir.path().join("absent.csv")).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn malformed_lines_are_silently_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let content = "\
1001,Ana Petrova,Dr. Ivanov,2024-03-01,09:00,Active
garbage
1002,Only,Three
abc,Ana,Dr. Ivanov,2024-03-01,09:00,Active

1003,,Dr. Ivanov,2024-03-01,09:00,Active
1004,Boris Dimitrov,Dr. Ivanov,2024-01-10,14:30,Done
";
    fs::write(&path, content).unwrap();

    let loaded = flatfile::load(&path).unwrap();
    let ids: Vec<_> = loaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1001, 1004]);
}

#[test]
fn load_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    fs::write(
        &path,
        "1005,Ana,Dr. Ivanov,2024-03-01,09:00,Active\n\
         1002,Boris,Dr. Ivanov,2024-01-10,14:30,Active\n",
    )
    .unwrap();

    let loaded = flatfile::load(&path).unwrap();
    let ids: Vec<_> = loaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1005, 1002]);
}

#[test]
fn trailing_status_field_keeps_embedded_delimiters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    fs::write(
        &path,
        "1001,Ana,Dr. Ivanov,2024-03-01,09:00,Active,confirmed by phone\n",
    )
    .unwrap();

    let loaded = flatfile::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].status, "Active,confirmed by phone");
}

#[test]
fn save_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    flatfile::save(
        &path,
        &[
            rec(1001, "Ana", "2024-03-01", "09:00", "Active"),
            rec(1002, "Boris", "2024-01-10", "14:30", "Active"),
        ],
    )
    .unwrap();
    flatfile::save(&path, &[rec(1003, "Vera", "2024-05-05", "10:15", "Active")]).unwrap();

    let loaded = flatfile::load(&path).unwrap();
    let ids: Vec<_> = loaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1003]);
}

#[test]
fn line_codec_is_inverse_for_clean_fields() {
    let original = rec(1001, "Ana Petrova", "2024-03-01", "09:00", "Active");
    let line = flatfile::format_line(&original);
    assert_eq!(line, "1001,Ana Petrova,Dr. Ivanov,2024-03-01,09:00,Active");
    assert_eq!(flatfile::parse_line(&line), Some(original));
}
