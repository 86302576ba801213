//! Calendar domain logic for the appointment scheduler.
//!
//! This module builds the month grid and the day view from store queries and
//! keeps calendar navigation state (focus month, month/day mode). The UI
//! should only handle presentation concerns; every count, label and flag it
//! shows is computed here.

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use shared::{
    Appointment, AppointmentPreview, CalendarDay, CalendarDayType, CalendarFocusDate,
    CalendarMode, CalendarMonth, DaySchedule, DayScheduleEntry,
};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::AppointmentStore;
use crate::storage::{AppointmentStorage, DoctorStorage};

/// Shown in the day view when an appointment references a doctor that does not exist
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Default number of appointments listed in a month cell
pub const DEFAULT_PREVIEW_LIMIT: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
}

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone)]
pub struct CalendarService {
    /// Month shown by the grid, kept in memory only
    focus_date: CalendarFocusDate,
    mode: CalendarMode,
    preview_limit: usize,
}

impl CalendarService {
    /// Create a calendar focused on the current month in month mode
    pub fn new() -> Self {
        Self::with_preview_limit(DEFAULT_PREVIEW_LIMIT)
    }

    pub fn with_preview_limit(preview_limit: usize) -> Self {
        Self {
            focus_date: CalendarFocusDate::default(),
            mode: CalendarMode::Month,
            preview_limit,
        }
    }

    /// Generate the month grid for the focus month
    pub fn generate_calendar_month<A, D>(
        &self,
        store: &AppointmentStore<A, D>,
        today: NaiveDate,
    ) -> CalendarMonth
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        let month = self.focus_date.month;
        let year = self.focus_date.year;
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let appointments_by_day =
            self.group_appointments_by_day(store.get_appointments_in_month(year, month));
        let selected = store.selected_date();

        let mut calendar_days = Vec::with_capacity((first_day + days_in_month) as usize);

        // Add empty cells for days before the first day of month
        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                date: None,
                day_type: CalendarDayType::PaddingBefore,
                appointment_count: 0,
                previews: Vec::new(),
                hidden_count: 0,
                is_today: false,
                is_selected: false,
            });
        }

        for day in 1..=days_in_month {
            let date = NaiveDate::from_ymd_opt(year, month, day);
            let day_appointments = appointments_by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);
            let previews: Vec<AppointmentPreview> = day_appointments
                .iter()
                .take(self.preview_limit)
                .map(|appointment| AppointmentPreview {
                    appointment_id: appointment.id.clone(),
                    label: format!("{} - {}", appointment.start_time, appointment.patient_name),
                })
                .collect();

            calendar_days.push(CalendarDay {
                day,
                date,
                day_type: CalendarDayType::MonthDay,
                appointment_count: day_appointments.len(),
                hidden_count: day_appointments.len() - previews.len(),
                previews,
                is_today: date == Some(today),
                is_selected: date.is_some() && date == selected,
            });
        }

        CalendarMonth {
            month,
            year,
            title: format!("{} {}", self.month_name(month), year),
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Build the day view for `date`
    pub fn day_schedule<A, D>(&self, store: &AppointmentStore<A, D>, date: NaiveDate) -> DaySchedule
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        let entries: Vec<DayScheduleEntry> = store
            .get_appointments_by_date(date)
            .into_iter()
            .map(|appointment| {
                let doctor_name = store
                    .get_doctor_by_id(&appointment.doctor_id)
                    .map(|doctor| doctor.name)
                    .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string());

                DayScheduleEntry {
                    time_range: format!("{} - {}", appointment.start_time, appointment.end_time),
                    status_label: appointment.status.label().to_string(),
                    status: appointment.status,
                    reason: Some(appointment.reason).filter(|reason| !reason.is_empty()),
                    appointment_id: appointment.id,
                    patient_name: appointment.patient_name,
                    doctor_name,
                }
            })
            .collect();

        let summary = match entries.len() {
            0 => "No appointments scheduled for this day".to_string(),
            1 => "1 appointment scheduled".to_string(),
            count => format!("{} appointments scheduled", count),
        };

        DaySchedule {
            date,
            title: format!("Appointments for {}", format_long_date(date)),
            summary,
            entries,
        }
    }

    /// Day view for the store's selected date, or `today` when nothing is selected
    pub fn selected_day_schedule<A, D>(
        &self,
        store: &AppointmentStore<A, D>,
        today: NaiveDate,
    ) -> DaySchedule
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        self.day_schedule(store, store.selected_date().unwrap_or(today))
    }

    /// Clicking a day: select it and switch to the day view
    pub fn select_date<A, D>(&mut self, store: &mut AppointmentStore<A, D>, date: NaiveDate)
    where
        A: AppointmentStorage,
        D: DoctorStorage,
    {
        store.set_selected_date(Some(date));
        self.mode = CalendarMode::Day;
        info!("Selected {}, switching to day view", date);
    }

    pub fn back_to_month(&mut self) {
        self.mode = CalendarMode::Month;
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CalendarMode) {
        self.mode = mode;
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Group a month's appointments by day of month, keeping booking order
    fn group_appointments_by_day(
        &self,
        appointments: Vec<Appointment>,
    ) -> HashMap<u32, Vec<Appointment>> {
        let mut appointments_by_day: HashMap<u32, Vec<Appointment>> = HashMap::new();
        for appointment in appointments {
            appointments_by_day
                .entry(appointment.day().day())
                .or_default()
                .push(appointment);
        }
        appointments_by_day
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.focus_date.clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(
        &mut self,
        month: u32,
        year: i32,
    ) -> Result<CalendarFocusDate, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        self.focus_date = CalendarFocusDate { month, year };
        Ok(self.focus_date.clone())
    }

    pub fn navigate_previous_month(&mut self) -> CalendarFocusDate {
        let (month, year) = self.previous_month(self.focus_date.month, self.focus_date.year);
        self.focus_date = CalendarFocusDate { month, year };
        self.focus_date.clone()
    }

    pub fn navigate_next_month(&mut self) -> CalendarFocusDate {
        let (month, year) = self.next_month(self.focus_date.month, self.focus_date.year);
        self.focus_date = CalendarFocusDate { month, year };
        self.focus_date.clone()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a date for human-readable display, e.g. "June 13, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
