//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably by the appointment store.
//!
//! Everything lives in memory for the lifetime of the process, so none of
//! these operations can fail. Lookups hand back owned copies; callers never
//! get a reference into the collection.

use chrono::NaiveDate;
use shared::{Appointment, Doctor};

/// Trait defining the interface for appointment storage operations
pub trait AppointmentStorage {
    /// Store a new appointment at the end of the collection.
    /// An appointment whose ID is already present replaces the old record in place.
    fn store_appointment(&mut self, appointment: Appointment);

    /// Retrieve a specific appointment by ID
    fn get_appointment(&self, appointment_id: &str) -> Option<Appointment>;

    /// Check whether an appointment ID is in use
    fn contains_appointment(&self, appointment_id: &str) -> bool {
        self.get_appointment(appointment_id).is_some()
    }

    /// List every appointment in insertion order
    fn list_appointments(&self) -> Vec<Appointment>;

    /// List appointments whose date falls on `date`, in insertion order
    fn list_appointments_on(&self, date: NaiveDate) -> Vec<Appointment>;

    /// List appointments dated within `from..=to`, in insertion order
    fn list_appointments_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Appointment>;

    /// List appointments booked with a doctor, in insertion order
    fn list_appointments_for_doctor(&self, doctor_id: &str) -> Vec<Appointment>;

    /// Replace the stored record that has the same ID.
    /// Returns true if the appointment was found and updated, false otherwise
    fn update_appointment(&mut self, appointment: Appointment) -> bool;

    /// Delete a single appointment.
    /// Returns true if the appointment was found and deleted, false otherwise
    fn delete_appointment(&mut self, appointment_id: &str) -> bool;

    /// Number of stored appointments
    fn count_appointments(&self) -> usize;
}

/// Trait defining the interface for the read-only doctor directory
pub trait DoctorStorage {
    /// List all doctors in their seeded order
    fn list_doctors(&self) -> Vec<Doctor>;

    /// Retrieve a specific doctor by ID
    fn get_doctor(&self, doctor_id: &str) -> Option<Doctor>;
}
