//! Sample data loaded when the scheduler starts.

use chrono::{Duration, NaiveDateTime};
use shared::{Appointment, AppointmentStatus, Doctor};

/// The fixed doctor directory
pub fn sample_doctors() -> Vec<Doctor> {
    [
        ("1", "Dr. Jane Smith", "Cardiology"),
        ("2", "Dr. Michael Johnson", "Neurology"),
        ("3", "Dr. Sarah Williams", "Dermatology"),
        ("4", "Dr. Robert Davis", "Orthopedics"),
        ("5", "Dr. Emily Brown", "Pediatrics"),
    ]
    .into_iter()
    .map(|(id, name, specialty)| Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        available: true,
    })
    .collect()
}

/// Two appointments dated one and two days after `now`, keeping its time-of-day
pub fn sample_appointments(now: NaiveDateTime) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            doctor_id: "1".to_string(),
            patient_name: "John Doe".to_string(),
            date: now + Duration::days(1),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            reason: "Annual checkup".to_string(),
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: "2".to_string(),
            doctor_id: "2".to_string(),
            patient_name: "Jane Smith".to_string(),
            date: now + Duration::days(2),
            start_time: "14:00".to_string(),
            end_time: "14:30".to_string(),
            reason: "Headache".to_string(),
            status: AppointmentStatus::Pending,
        },
    ]
}
