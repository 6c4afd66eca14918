use std::{fs, io::Cursor, path::Path};

use tempfile::TempDir;

use apptbook::{persist::flatfile, session::Session};

fn run_script(path: &Path, script: &str) -> String {
    let mut session = Session::open(path.to_path_buf()).unwrap();
    let mut input = Cursor::new(script.as_bytes());
    let mut out = Vec::new();
    session.run(&mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn create_list_stats_save_flow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    // Bad time first: the prompt must loop until the shape is valid.
    let script = "1\nAna Petrova\nDr. Ivanov\n2024-03-01\n9:00\n09:00\n2\n5\n6\n";
    let output = run_script(&path, script);

    assert!(output.contains("Invalid HH:MM format!"));
    assert!(output.contains("[SUCCESS] Appointment 1001 created."));
    assert!(output.contains("Ana Petrova"));
    assert!(output.contains("Total Records: 1"));
    assert!(output.contains("Active Appointments: 1"));
    assert!(output.contains("records saved"));

    let loaded = flatfile::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1001);
    assert_eq!(loaded[0].status, "Active");
}

#[test]
fn non_numeric_menu_input_reprompts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let output = run_script(&path, "x\n6\n");
    assert_eq!(output.matches("Enter Choice (1-6):").count(), 2);
    assert!(path.exists());
}

#[test]
fn name_with_delimiter_is_rejected_at_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let script = "1\nPetrova, Ana\nAna Petrova\nDr. Ivanov\n2024-03-01\n09:00\n6\n";
    let output = run_script(&path, script);

    assert!(output.contains("must not contain"));
    let loaded = flatfile::load(&path).unwrap();
    assert_eq!(loaded[0].patient_name, "Ana Petrova");
}

#[test]
fn update_flow_against_seeded_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");
    fs::write(
        &path,
        "1001,Ana Petrova,Dr. Ivanov,2024-03-01,09:00,Active\n",
    )
    .unwrap();

    let output = run_script(&path, "4\n1001\nCancelled\n6\n");
    assert!(output.contains("New Status (Active/Cancelled/Done):"));
    assert!(output.contains("Update complete."));

    let loaded = flatfile::load(&path).unwrap();
    assert_eq!(loaded[0].status, "Cancelled");
}

#[test]
fn update_on_absent_id_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let output = run_script(&path, "4\n9999\nDone\n6\n");
    assert!(output.contains("no appointment with id 9999"));
}

#[test]
fn search_by_date_reports_hit_and_miss() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");
    fs::write(
        &path,
        "1001,Ana Petrova,Dr. Ivanov,2024-03-01,09:00,Active\n\
         1002,Boris Dimitrov,Dr. Ivanov,2024-01-10,14:30,Active\n",
    )
    .unwrap();

    let output = run_script(&path, "3\n2024-01-10\n3\n2024-02-02\n6\n");
    assert!(output.contains("Found! ID 1002: Boris Dimitrov at 14:30"));
    assert!(output.contains("No appointments found on this date."));
}

#[test]
fn end_of_input_exits_without_saving() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic_data.csv");

    let output = run_script(&path, "");
    assert!(output.contains("Enter Choice (1-6):"));
    assert!(!path.exists());
}
