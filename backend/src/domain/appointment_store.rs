//! Appointment store: the single owner of the doctor and appointment collections.
//!
//! Every view model in the crate reads from an `AppointmentStore` passed in by
//! reference; nothing keeps its own copy of the collections. Mutations take
//! `&mut self` and complete before any later read.
//!
//! The store validates nothing. A dangling `doctor_id`, an end time before the
//! start time, or an appointment that overlaps another are all accepted as-is.
//! Edits and deletes that name an unknown ID leave the collection untouched
//! and report `false` instead of raising an error.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::{info, warn};
use shared::{Appointment, AppointmentFormData, AppointmentStatus, Doctor, DoctorWithAppointments};

use crate::domain::seed::{sample_appointments, sample_doctors};
use crate::storage::{AppointmentRepository, AppointmentStorage, DoctorRepository, DoctorStorage};

pub struct AppointmentStore<A = AppointmentRepository, D = DoctorRepository>
where
    A: AppointmentStorage,
    D: DoctorStorage,
{
    appointment_repository: A,
    doctor_repository: D,
    /// Day the day view is focused on, not a data invariant
    selected_date: Option<NaiveDate>,
}

impl AppointmentStore {
    /// Create a store backed by the in-memory repositories
    pub fn new(doctors: Vec<Doctor>, appointments: Vec<Appointment>) -> Self {
        Self::with_storage(
            AppointmentRepository::with_appointments(appointments),
            DoctorRepository::new(doctors),
        )
    }

    /// Create a store holding the sample doctors and appointments, with `now`'s
    /// date selected
    pub fn with_sample_data(now: NaiveDateTime) -> Self {
        let mut store = Self::new(sample_doctors(), sample_appointments(now));
        store.set_selected_date(Some(now.date()));
        store
    }
}

impl<A, D> AppointmentStore<A, D>
where
    A: AppointmentStorage,
    D: DoctorStorage,
{
    pub fn with_storage(appointment_repository: A, doctor_repository: D) -> Self {
        Self {
            appointment_repository,
            doctor_repository,
            selected_date: None,
        }
    }

    /// Book a new appointment. It always starts out pending.
    pub fn add_appointment(&mut self, data: AppointmentFormData) -> Appointment {
        let mut id = Appointment::generate_id();
        while self.appointment_repository.contains_appointment(&id) {
            warn!("Generated appointment ID {} already in use, regenerating", id);
            id = Appointment::generate_id();
        }

        let appointment = Appointment::from_form(id, data);
        self.appointment_repository.store_appointment(appointment.clone());

        info!(
            "Booked appointment {} for {} with doctor {} on {}",
            appointment.id,
            appointment.patient_name,
            appointment.doctor_id,
            appointment.day()
        );
        appointment
    }

    /// Overwrite the form fields of an existing appointment, keeping its ID and status.
    /// Returns false and changes nothing when the ID is unknown.
    pub fn edit_appointment(&mut self, id: &str, data: AppointmentFormData) -> bool {
        let Some(mut appointment) = self.appointment_repository.get_appointment(id) else {
            warn!("Edit ignored, appointment not found: {}", id);
            return false;
        };

        appointment.apply_form(data);
        let updated = self.appointment_repository.update_appointment(appointment);
        if updated {
            info!("Updated appointment {}", id);
        }
        updated
    }

    /// Remove an appointment. Returns false and changes nothing when the ID is unknown.
    pub fn delete_appointment(&mut self, id: &str) -> bool {
        let deleted = self.appointment_repository.delete_appointment(id);
        if deleted {
            info!("Deleted appointment {}", id);
        } else {
            warn!("Delete ignored, appointment not found: {}", id);
        }
        deleted
    }

    /// Set the status directly. No transition rules apply.
    pub fn set_appointment_status(&mut self, id: &str, status: AppointmentStatus) -> bool {
        let Some(mut appointment) = self.appointment_repository.get_appointment(id) else {
            warn!("Status change ignored, appointment not found: {}", id);
            return false;
        };

        info!("Appointment {} status {} -> {}", id, appointment.status, status);
        appointment.status = status;
        self.appointment_repository.update_appointment(appointment)
    }

    /// Appointments on `date` (year, month and day only), in booking order
    pub fn get_appointments_by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointment_repository.list_appointments_on(date)
    }

    /// Appointments anywhere in the given month, in booking order
    pub fn get_appointments_in_month(&self, year: i32, month: u32) -> Vec<Appointment> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let last = last_day_of_month(first);
        self.appointment_repository.list_appointments_between(first, last)
    }

    pub fn get_appointment_by_id(&self, id: &str) -> Option<Appointment> {
        self.appointment_repository.get_appointment(id)
    }

    pub fn get_doctor_by_id(&self, id: &str) -> Option<Doctor> {
        self.doctor_repository.get_doctor(id)
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.doctor_repository.list_doctors()
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointment_repository.list_appointments()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointment_repository.count_appointments()
    }

    /// Every doctor with the appointments booked against it.
    /// Appointments pointing at unknown doctors are not included anywhere.
    pub fn doctors_with_appointments(&self) -> Vec<DoctorWithAppointments> {
        self.doctor_repository
            .list_doctors()
            .into_iter()
            .map(|doctor| {
                let appointments = self
                    .appointment_repository
                    .list_appointments_for_doctor(&doctor.id);
                DoctorWithAppointments { doctor, appointments }
            })
            .collect()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}
