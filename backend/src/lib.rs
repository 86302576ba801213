//! # Appointment Scheduler
//!
//! In-memory appointment scheduling for a small clinic: a doctor directory,
//! an appointment store with date queries, and the calendar and booking form
//! view models built on top of it.
//!
//! ```text
//! Binary (main.rs)
//!     ↓
//! Domain Layer (store, calendar, booking form)
//!     ↓
//! Storage Layer (in-memory repositories behind traits)
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use log::info;

use crate::config::SchedulerConfig;
use crate::domain::seed::{sample_appointments, sample_doctors};

pub use domain::*;

/// Everything the scheduler needs at runtime
pub struct AppState {
    pub store: AppointmentStore,
    pub calendar_service: CalendarService,
    pub form_service: AppointmentFormService,
}

/// Build the store and services from `config`, treating `now` as the current moment
pub fn initialize_scheduler(config: &SchedulerConfig, now: NaiveDateTime) -> Result<AppState> {
    info!("Building time slot table");
    let time_slots = TimeSlots::from_config(config).context("Failed to build time slot table")?;
    info!(
        "{} bookable slots from {} to {}",
        time_slots.slots().len(),
        config.first_slot,
        config.last_slot
    );

    info!("Setting up appointment store");
    let appointments = if config.seed_sample_data {
        sample_appointments(now)
    } else {
        info!("Sample appointments disabled by config");
        Vec::new()
    };
    let mut store = AppointmentStore::new(sample_doctors(), appointments);
    store.set_selected_date(Some(now.date()));

    let mut calendar_service = CalendarService::with_preview_limit(config.month_preview_limit);
    calendar_service
        .set_focus_date(now.date().month(), now.date().year())?;

    info!("Setting up application state");
    Ok(AppState {
        store,
        calendar_service,
        form_service: AppointmentFormService::new(time_slots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::CalendarFocusDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 13)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_initialize_with_defaults() {
        let state = initialize_scheduler(&SchedulerConfig::default(), now()).unwrap();

        assert_eq!(state.store.doctors().len(), 5);
        assert_eq!(state.store.appointment_count(), 2);
        assert_eq!(state.store.selected_date(), Some(now().date()));
        assert_eq!(
            state.calendar_service.get_focus_date(),
            CalendarFocusDate { month: 6, year: 2025 }
        );
        assert_eq!(state.form_service.time_slots().slots().len(), 20);
    }

    #[test]
    fn test_initialize_without_sample_appointments() {
        let config = SchedulerConfig {
            seed_sample_data: false,
            ..SchedulerConfig::default()
        };

        let state = initialize_scheduler(&config, now()).unwrap();

        assert_eq!(state.store.doctors().len(), 5);
        assert_eq!(state.store.appointment_count(), 0);
    }

    #[test]
    fn test_initialize_rejects_bad_slots() {
        let config = SchedulerConfig {
            first_slot: "9am".to_string(),
            ..SchedulerConfig::default()
        };

        assert!(initialize_scheduler(&config, now()).is_err());
    }
}
