//! Appointment form domain logic.
//!
//! Covers what the booking dialog needs apart from drawing itself: default
//! values, pre-filling in edit mode, the start/end time coupling, required
//! field checks and the submit/delete flows with their confirmation messages.
//!
//! Validation here is form-level only. The store underneath stays permissive.

use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use shared::{
    Appointment, AppointmentFormData, AppointmentFormValidation, AppointmentValidationError,
};
use thiserror::Error;

use crate::domain::calendar::format_long_date;
use crate::domain::time_slots::TimeSlots;
use crate::domain::AppointmentStore;
use crate::storage::{AppointmentStorage, DoctorStorage};

#[derive(Debug, Error)]
pub enum AppointmentFormError {
    #[error("Appointment form is invalid: {}", describe_errors(.0))]
    Invalid(Vec<AppointmentValidationError>),

    #[error("Appointment not found: {0}")]
    NotFound(String),
}

/// A booked or updated appointment plus the confirmation shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub appointment: Appointment,
    pub success_message: String,
}

pub const DELETED_MESSAGE: &str = "The appointment has been cancelled and removed";

#[derive(Debug, Clone, Default)]
pub struct AppointmentFormService {
    time_slots: TimeSlots,
}

impl AppointmentFormService {
    pub fn new(time_slots: TimeSlots) -> Self {
        Self { time_slots }
    }

    pub fn time_slots(&self) -> &TimeSlots {
        &self.time_slots
    }

    /// Blank form for booking on `today`
    pub fn new_form(&self, today: NaiveDate) -> AppointmentFormData {
        let start_time = self.time_slots.default_start().to_string();
        let end_time = self
            .time_slots
            .next_slot(&start_time)
            .unwrap_or(&start_time)
            .to_string();

        AppointmentFormData {
            doctor_id: String::new(),
            patient_name: String::new(),
            date: today.and_time(NaiveTime::MIN),
            start_time,
            end_time,
            reason: String::new(),
        }
    }

    /// Form contents for the dialog: the stored values in edit mode, defaults otherwise
    pub fn form_for<A, D>(
        &self,
        store: &AppointmentStore<A, D>,
        appointment_id: Option<&str>,
        today: NaiveDate,
    ) -> AppointmentFormData
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        appointment_id
            .and_then(|id| store.get_appointment_by_id(id))
            .map(|appointment| appointment.to_form_data())
            .unwrap_or_else(|| self.new_form(today))
    }

    /// Change the start time and move the end time to the following slot
    pub fn set_start_time(&self, form: &mut AppointmentFormData, start_time: &str) {
        form.start_time = start_time.to_string();
        if let Some(next) = self.time_slots.next_slot(start_time) {
            form.end_time = next.to_string();
        }
    }

    /// End times that may be offered for the form's current start time
    pub fn end_time_options(&self, form: &AppointmentFormData) -> Vec<String> {
        self.time_slots.end_options(&form.start_time)
    }

    pub fn validate(&self, form: &AppointmentFormData) -> AppointmentFormValidation {
        let mut errors = Vec::new();

        if form.doctor_id.trim().is_empty() {
            errors.push(AppointmentValidationError::MissingDoctor);
        }
        if form.patient_name.trim().is_empty() {
            errors.push(AppointmentValidationError::EmptyPatientName);
        }

        let start_known = self.time_slots.contains(&form.start_time);
        let end_known = self.time_slots.contains(&form.end_time);
        if !start_known {
            errors.push(AppointmentValidationError::UnknownTimeSlot(form.start_time.clone()));
        }
        if !end_known {
            errors.push(AppointmentValidationError::UnknownTimeSlot(form.end_time.clone()));
        }
        if start_known && end_known && form.end_time <= form.start_time {
            errors.push(AppointmentValidationError::EndNotAfterStart);
        }

        AppointmentFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Validate the form, then book it (no ID) or update the appointment with that ID
    pub fn submit<A, D>(
        &self,
        store: &mut AppointmentStore<A, D>,
        appointment_id: Option<&str>,
        form: AppointmentFormData,
    ) -> Result<FormSubmission, AppointmentFormError>
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        let validation = self.validate(&form);
        if !validation.is_valid {
            warn!("Rejected appointment form: {}", describe_errors(&validation.errors));
            return Err(AppointmentFormError::Invalid(validation.errors));
        }

        let when = format!("{} at {}", format_long_date(form.date.date()), form.start_time);

        match appointment_id {
            Some(id) => {
                if !store.edit_appointment(id, form) {
                    return Err(AppointmentFormError::NotFound(id.to_string()));
                }
                let appointment = store
                    .get_appointment_by_id(id)
                    .ok_or_else(|| AppointmentFormError::NotFound(id.to_string()))?;
                info!("Appointment {} updated via form", id);
                Ok(FormSubmission {
                    appointment,
                    success_message: format!("Appointment has been updated for {}", when),
                })
            }
            None => {
                let appointment = store.add_appointment(form);
                Ok(FormSubmission {
                    appointment,
                    success_message: format!("Appointment has been booked for {}", when),
                })
            }
        }
    }

    /// Delete the appointment the dialog is editing
    pub fn delete<A, D>(
        &self,
        store: &mut AppointmentStore<A, D>,
        appointment_id: &str,
    ) -> Result<String, AppointmentFormError>
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        if store.delete_appointment(appointment_id) {
            Ok(DELETED_MESSAGE.to_string())
        } else {
            Err(AppointmentFormError::NotFound(appointment_id.to_string()))
        }
    }
}

fn describe_errors(errors: &[AppointmentValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use shared::AppointmentStatus;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 13)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    fn filled_form(service: &AppointmentFormService) -> AppointmentFormData {
        let mut form = service.new_form(now().date());
        form.doctor_id = "2".to_string();
        form.patient_name = "Alex Morgan".to_string();
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let service = AppointmentFormService::default();
        let form = service.new_form(now().date());

        assert!(form.doctor_id.is_empty());
        assert!(form.patient_name.is_empty());
        assert!(form.reason.is_empty());
        assert_eq!(form.date.date(), now().date());
        assert_eq!(form.start_time, "09:00");
        assert_eq!(form.end_time, "09:30");
    }

    #[test]
    fn test_form_for_edit_prefills() {
        let service = AppointmentFormService::default();
        let store = AppointmentStore::with_sample_data(now());

        let form = service.form_for(&store, Some("2"), now().date());
        assert_eq!(form.patient_name, "Jane Smith");
        assert_eq!(form.start_time, "14:00");

        let blank = service.form_for(&store, Some("missing"), now().date());
        assert_eq!(blank, service.new_form(now().date()));
        assert_eq!(service.form_for(&store, None, now().date()), blank);
    }

    #[test]
    fn test_set_start_time_moves_end_time() {
        let service = AppointmentFormService::default();
        let mut form = service.new_form(now().date());

        service.set_start_time(&mut form, "13:30");
        assert_eq!(form.end_time, "14:00");

        // Last slot has no successor, end time stays put
        service.set_start_time(&mut form, "17:30");
        assert_eq!(form.start_time, "17:30");
        assert_eq!(form.end_time, "14:00");
        assert!(service.end_time_options(&form).is_empty());
    }

    #[test]
    fn test_validate_required_fields() {
        let service = AppointmentFormService::default();
        let mut form = service.new_form(now().date());
        form.patient_name = "   ".to_string();

        let validation = service.validate(&form);
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                AppointmentValidationError::MissingDoctor,
                AppointmentValidationError::EmptyPatientName,
            ]
        );
    }

    #[test]
    fn test_validate_time_range() {
        let service = AppointmentFormService::default();
        let mut form = filled_form(&service);
        form.start_time = "10:00".to_string();
        form.end_time = "10:00".to_string();
        assert_eq!(
            service.validate(&form).errors,
            vec![AppointmentValidationError::EndNotAfterStart]
        );

        form.end_time = "10:15".to_string();
        assert_eq!(
            service.validate(&form).errors,
            vec![AppointmentValidationError::UnknownTimeSlot("10:15".to_string())]
        );

        form.end_time = "11:00".to_string();
        assert!(service.validate(&form).is_valid);
    }

    #[test]
    fn test_submit_books_new_appointment() {
        let service = AppointmentFormService::default();
        let mut store = AppointmentStore::with_sample_data(now());
        let form = filled_form(&service);

        let submission = service.submit(&mut store, None, form).unwrap();

        assert_eq!(store.appointment_count(), 3);
        assert_eq!(submission.appointment.status, AppointmentStatus::Pending);
        assert_eq!(
            submission.success_message,
            "Appointment has been booked for June 13, 2025 at 09:00"
        );
    }

    #[test]
    fn test_submit_updates_existing_appointment() {
        let service = AppointmentFormService::default();
        let mut store = AppointmentStore::with_sample_data(now());
        let mut form = service.form_for(&store, Some("1"), now().date());
        form.date = now() + Duration::days(3);
        service.set_start_time(&mut form, "15:00");

        let submission = service.submit(&mut store, Some("1"), form).unwrap();

        assert_eq!(submission.appointment.id, "1");
        assert_eq!(submission.appointment.end_time, "15:30");
        assert_eq!(submission.appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(
            submission.success_message,
            "Appointment has been updated for June 16, 2025 at 15:00"
        );
    }

    #[test]
    fn test_submit_rejects_invalid_form_without_touching_store() {
        let service = AppointmentFormService::default();
        let mut store = AppointmentStore::with_sample_data(now());
        let form = service.new_form(now().date());

        let result = service.submit(&mut store, None, form);

        assert!(matches!(result, Err(AppointmentFormError::Invalid(_))));
        assert_eq!(store.appointment_count(), 2);
    }

    #[test]
    fn test_submit_edit_of_missing_appointment() {
        let service = AppointmentFormService::default();
        let mut store = AppointmentStore::with_sample_data(now());
        let form = filled_form(&service);

        let result = service.submit(&mut store, Some("gone"), form);

        assert!(matches!(result, Err(AppointmentFormError::NotFound(id)) if id == "gone"));
        assert_eq!(store.appointment_count(), 2);
    }

    #[test]
    fn test_delete() {
        let service = AppointmentFormService::default();
        let mut store = AppointmentStore::with_sample_data(now());

        assert_eq!(service.delete(&mut store, "2").unwrap(), DELETED_MESSAGE);
        assert!(matches!(
            service.delete(&mut store, "2"),
            Err(AppointmentFormError::NotFound(_))
        ));
        assert_eq!(store.appointment_count(), 1);
    }

    #[test]
    fn test_invalid_error_message() {
        let error = AppointmentFormError::Invalid(vec![
            AppointmentValidationError::MissingDoctor,
            AppointmentValidationError::EmptyPatientName,
        ]);
        assert_eq!(
            error.to_string(),
            "Appointment form is invalid: Please select a doctor; Patient name is required"
        );
    }
}
