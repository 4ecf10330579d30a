#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tourdesk::models::booking::{BookingRecord, BookingStatus};
use tourdesk::models::shift::{ShiftRecord, ShiftStatus};
use tourdesk::models::Record;

pub fn td() -> Command {
    cargo_bin_cmd!("tourdesk")
}

/// Create a temp file path inside the system temp dir and remove any existing file
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tourdesk_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `json` as a records snapshot and return its path
pub fn write_snapshot(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tourdesk_records.json", name));
    fs::write(&path, json).expect("write snapshot");
    path.to_string_lossy().to_string()
}

/// Mixed snapshot used by most CLI tests:
/// - three shifts on 2024-06-01 / 2024-06-02
/// - a booking on 2024-06-02 (UTC) and one without a date
/// - a bus on 2024-06-15
/// - a guide application sent late on 2024-05-30 at UTC-2
pub const SAMPLE: &str = r#"[
  {"kind": "shift", "id": "a", "guide_id": "g1", "guide_name": "Anna Rossi",
   "shift_date": "2024-06-01T10:00", "status": "pending", "participants": 4},
  {"kind": "shift", "id": "b", "guide_id": "g2", "guide_name": "Bruno Verdi",
   "shift_date": "2024-06-01T22:00", "status": "approved", "participants": 2},
  {"kind": "shift", "id": "c", "guide_id": "g1", "guide_name": "Anna Rossi",
   "shift_date": "2024-06-02T08:00", "status": "pending", "participants": 1},
  {"kind": "booking", "id": "bk1", "confirmation_code": "TX-1001",
   "customer_name": "Carla Bianchi", "customer_email": "carla@example.com",
   "tour_date": "2024-06-02T09:30:00Z", "status": "confirmed", "passengers": 3},
  {"kind": "booking", "id": "bk2", "confirmation_code": "TX-1002",
   "customer_name": "Dario Neri", "tour_date": null, "status": "pending", "passengers": 2},
  {"kind": "bus_assignment", "id": "bus1", "plate": "AB123CD", "bus_name": "Coach 1",
   "driver_name": "Elio Costa", "service_date": "2024-06-15", "status": "scheduled",
   "seats_booked": 40},
  {"kind": "guide_application", "id": "app1", "applicant_name": "Franca Gialli",
   "applicant_email": "franca@example.com", "submitted_at": "2024-05-30T23:30:00-02:00",
   "status": "pending", "languages": ["Italian", "German"]}
]"#;

pub fn shift(
    id: &str,
    date: Option<&str>,
    status: ShiftStatus,
    participants: Option<u32>,
) -> Record {
    Record::Shift(ShiftRecord {
        id: id.to_string(),
        guide_id: format!("g-{id}"),
        guide_name: format!("Guide {id}"),
        guide_email: None,
        shift_date: date.map(str::to_string),
        status,
        participants,
        notes: None,
    })
}

pub fn booking(
    id: &str,
    code: &str,
    customer: &str,
    email: Option<&str>,
    date: Option<&str>,
    status: BookingStatus,
    passengers: Option<u32>,
) -> Record {
    Record::Booking(BookingRecord {
        id: id.to_string(),
        confirmation_code: code.to_string(),
        customer_name: customer.to_string(),
        customer_email: email.map(str::to_string),
        tour_date: date.map(str::to_string),
        status,
        passengers,
        notes: None,
    })
}
