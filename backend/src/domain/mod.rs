//! # Domain Module
//!
//! Business logic for the appointment scheduler.
//!
//! - **appointment_store**: owns the doctors, the appointments and the selected date
//! - **appointment_form**: booking dialog defaults, validation and submit/delete flows
//! - **calendar**: month grid, day view and calendar navigation
//! - **time_slots**: the bookable `HH:MM` table
//! - **seed**: sample doctors and appointments loaded at startup
//!
//! Services here never touch storage directly; they go through the store,
//! which talks to the storage traits.

pub mod appointment_form;
pub mod appointment_store;
pub mod calendar;
pub mod seed;
pub mod time_slots;

pub use appointment_form::{AppointmentFormError, AppointmentFormService, FormSubmission};
pub use appointment_store::AppointmentStore;
pub use calendar::{format_long_date, CalendarError, CalendarService};
pub use time_slots::TimeSlots;
