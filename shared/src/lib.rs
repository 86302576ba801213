use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A care provider that appointments are booked with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Informational only, bookings are not checked against it
    pub available: bool,
}

/// A scheduled booking between a patient and a doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// ID of the doctor this appointment is booked with (not checked for existence)
    pub doctor_id: String,
    pub patient_name: String,
    /// Calendar date of the appointment. Any time-of-day is ignored when comparing days.
    pub date: NaiveDateTime,
    /// Slot label in `HH:MM` 24-hour form
    pub start_time: String,
    /// Slot label in `HH:MM` 24-hour form
    pub end_time: String,
    /// Free-text reason for the visit, may be empty
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Lifecycle label of an appointment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// Fields a user supplies when booking or editing an appointment.
/// Status is deliberately absent: it is never taken from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentFormData {
    pub doctor_id: String,
    pub patient_name: String,
    pub date: NaiveDateTime,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
}

/// A doctor together with every appointment that references it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorWithAppointments {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub appointments: Vec<Appointment>,
}

impl Appointment {
    /// Generate a random unique appointment ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Build a new pending appointment from form data
    pub fn from_form(id: String, data: AppointmentFormData) -> Self {
        Self {
            id,
            doctor_id: data.doctor_id,
            patient_name: data.patient_name,
            date: data.date,
            start_time: data.start_time,
            end_time: data.end_time,
            reason: data.reason,
            status: AppointmentStatus::Pending,
        }
    }

    /// Overwrite every form-owned field, keeping `id` and `status`
    pub fn apply_form(&mut self, data: AppointmentFormData) {
        self.doctor_id = data.doctor_id;
        self.patient_name = data.patient_name;
        self.date = data.date;
        self.start_time = data.start_time;
        self.end_time = data.end_time;
        self.reason = data.reason;
    }

    /// Calendar day of the appointment with the time-of-day dropped
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Whether the appointment falls on the given day (year, month and day only)
    pub fn is_on(&self, date: NaiveDate) -> bool {
        let day = self.day();
        day.year() == date.year() && day.month() == date.month() && day.day() == date.day()
    }

    /// Extract the editable fields back into form data
    pub fn to_form_data(&self) -> AppointmentFormData {
        AppointmentFormData {
            doctor_id: self.doctor_id.clone(),
            patient_name: self.patient_name.clone(),
            date: self.date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            reason: self.reason.clone(),
        }
    }
}

impl AppointmentStatus {
    /// Capitalised label used by views ("Pending", "Confirmed", "Cancelled")
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Which calendar layout is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    Month,
    Day,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Represents a calendar month with its associated appointment data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "June 2025"
    pub title: String,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

/// A single cell of the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub appointment_count: usize,
    /// The first few appointments of the day, in booking order
    pub previews: Vec<AppointmentPreview>,
    /// How many appointments did not fit into `previews`
    pub hidden_count: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Compact appointment chip shown inside a month cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentPreview {
    pub appointment_id: String,
    /// "{start_time} - {patient_name}"
    pub label: String,
}

/// Current month shown by the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}

/// Everything the day view needs for one date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub title: String,
    pub summary: String,
    pub entries: Vec<DayScheduleEntry>,
}

/// One appointment card in the day view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayScheduleEntry {
    pub appointment_id: String,
    /// "{start_time} - {end_time}"
    pub time_range: String,
    pub patient_name: String,
    /// Doctor name, or "Unknown Doctor" when the reference dangles
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub status_label: String,
    pub reason: Option<String>,
}

/// Result of validating the appointment form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<AppointmentValidationError>,
}

/// Specific validation errors for the appointment form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppointmentValidationError {
    MissingDoctor,
    EmptyPatientName,
    UnknownTimeSlot(String),
    EndNotAfterStart,
}

impl fmt::Display for AppointmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentValidationError::MissingDoctor => write!(f, "Please select a doctor"),
            AppointmentValidationError::EmptyPatientName => write!(f, "Patient name is required"),
            AppointmentValidationError::UnknownTimeSlot(slot) => {
                write!(f, "'{}' is not an available time slot", slot)
            }
            AppointmentValidationError::EndNotAfterStart => {
                write!(f, "End time must be after start time")
            }
        }
    }
}
