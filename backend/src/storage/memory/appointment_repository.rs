//! # In-Memory Appointment Repository
//!
//! Appointments are kept in a `BTreeMap` keyed by an insertion sequence
//! number, so iterating the map always yields booking order. Two secondary
//! indexes (calendar day and doctor) hold sequence numbers only; a query
//! collects the matching sequence numbers, sorts them, and reads the records
//! back, which gives exactly the result a linear scan over the whole
//! collection would.
//!
//! Editing a record keeps its sequence number, so an appointment that moves to
//! another day keeps its original place in booking order.

use chrono::NaiveDate;
use log::{debug, warn};
use shared::Appointment;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::storage::traits::AppointmentStorage;

#[derive(Debug, Clone, Default)]
pub struct AppointmentRepository {
    records: BTreeMap<u64, Appointment>,
    sequence_by_id: HashMap<String, u64>,
    by_date: BTreeMap<NaiveDate, BTreeSet<u64>>,
    by_doctor: HashMap<String, BTreeSet<u64>>,
    next_sequence: u64,
}

impl AppointmentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `appointments` in the given order
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let mut repository = Self::new();
        for appointment in appointments {
            repository.store_appointment(appointment);
        }
        repository
    }

    fn index(&mut self, sequence: u64, appointment: &Appointment) {
        self.by_date
            .entry(appointment.day())
            .or_default()
            .insert(sequence);
        self.by_doctor
            .entry(appointment.doctor_id.clone())
            .or_default()
            .insert(sequence);
    }

    fn unindex(&mut self, sequence: u64, appointment: &Appointment) {
        let day = appointment.day();
        if let Some(bucket) = self.by_date.get_mut(&day) {
            bucket.remove(&sequence);
            if bucket.is_empty() {
                self.by_date.remove(&day);
            }
        }
        if let Some(bucket) = self.by_doctor.get_mut(&appointment.doctor_id) {
            bucket.remove(&sequence);
            if bucket.is_empty() {
                self.by_doctor.remove(&appointment.doctor_id);
            }
        }
    }

    fn collect<I>(&self, sequences: I) -> Vec<Appointment>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut sequences: Vec<u64> = sequences.into_iter().collect();
        sequences.sort_unstable();
        sequences
            .into_iter()
            .filter_map(|sequence| self.records.get(&sequence).cloned())
            .collect()
    }
}

impl AppointmentStorage for AppointmentRepository {
    fn store_appointment(&mut self, appointment: Appointment) {
        if self.sequence_by_id.contains_key(&appointment.id) {
            warn!(
                "Appointment {} already stored, replacing existing record",
                appointment.id
            );
            self.update_appointment(appointment);
            return;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.index(sequence, &appointment);
        self.sequence_by_id.insert(appointment.id.clone(), sequence);
        debug!("Stored appointment {} at position {}", appointment.id, sequence);
        self.records.insert(sequence, appointment);
    }

    fn get_appointment(&self, appointment_id: &str) -> Option<Appointment> {
        self.sequence_by_id
            .get(appointment_id)
            .and_then(|sequence| self.records.get(sequence))
            .cloned()
    }

    fn contains_appointment(&self, appointment_id: &str) -> bool {
        self.sequence_by_id.contains_key(appointment_id)
    }

    fn list_appointments(&self) -> Vec<Appointment> {
        self.records.values().cloned().collect()
    }

    fn list_appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        match self.by_date.get(&date) {
            Some(bucket) => self.collect(bucket.iter().copied()),
            None => Vec::new(),
        }
    }

    fn list_appointments_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Appointment> {
        if from > to {
            return Vec::new();
        }
        let sequences = self
            .by_date
            .range(from..=to)
            .flat_map(|(_, bucket)| bucket.iter().copied());
        self.collect(sequences)
    }

    fn list_appointments_for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        match self.by_doctor.get(doctor_id) {
            Some(bucket) => self.collect(bucket.iter().copied()),
            None => Vec::new(),
        }
    }

    fn update_appointment(&mut self, appointment: Appointment) -> bool {
        let Some(&sequence) = self.sequence_by_id.get(&appointment.id) else {
            return false;
        };

        if let Some(previous) = self.records.remove(&sequence) {
            self.unindex(sequence, &previous);
        }
        self.index(sequence, &appointment);
        self.records.insert(sequence, appointment);
        true
    }

    fn delete_appointment(&mut self, appointment_id: &str) -> bool {
        let Some(sequence) = self.sequence_by_id.remove(appointment_id) else {
            return false;
        };

        if let Some(previous) = self.records.remove(&sequence) {
            self.unindex(sequence, &previous);
        }
        true
    }

    fn count_appointments(&self) -> usize {
        self.records.len()
    }
}
