//! Bookable time slots.
//!
//! Slots are `HH:MM` labels from a fixed table (08:00 to 17:30 in half-hour
//! steps unless configured otherwise). Labels are zero-padded 24-hour times,
//! so plain string comparison orders them chronologically.

use chrono::{Duration, NaiveTime, Timelike};

use crate::config::{parse_slot, ConfigError, SchedulerConfig};

/// Start time offered on a fresh form when the table contains it
pub const DEFAULT_START_TIME: &str = "09:00";

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlots {
    slots: Vec<String>,
}

impl TimeSlots {
    /// Build the table from `first` to `last` inclusive, stepping by `step_minutes`
    pub fn new(first: NaiveTime, last: NaiveTime, step_minutes: u32) -> Result<Self, ConfigError> {
        if step_minutes == 0 {
            return Err(ConfigError::Invalid("slot step must be positive".to_string()));
        }
        if last < first {
            return Err(ConfigError::Invalid(format!(
                "last slot {} is before first slot {}",
                format_slot(last),
                format_slot(first)
            )));
        }

        let step = Duration::minutes(i64::from(step_minutes));
        let mut slots = Vec::new();
        let mut current = first;
        loop {
            slots.push(format_slot(current));
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 || next > last || next <= current {
                break;
            }
            current = next;
        }

        Ok(Self { slots })
    }

    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        let first = parse_slot(&config.first_slot)?;
        let last = parse_slot(&config.last_slot)?;
        Self::new(first, last, config.slot_minutes)
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn contains(&self, label: &str) -> bool {
        self.slots.iter().any(|slot| slot == label)
    }

    /// The slot right after `label`, used as the default end time.
    /// None for the last slot or a label outside the table.
    pub fn next_slot(&self, label: &str) -> Option<&str> {
        let index = self.slots.iter().position(|slot| slot == label)?;
        self.slots.get(index + 1).map(String::as_str)
    }

    /// Slots strictly later than `start`, offered as end times
    pub fn end_options(&self, start: &str) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| slot.as_str() > start)
            .cloned()
            .collect()
    }

    /// Start time for a fresh form: 09:00 if bookable, else the first slot
    pub fn default_start(&self) -> &str {
        if self.contains(DEFAULT_START_TIME) {
            DEFAULT_START_TIME
        } else {
            self.slots.first().map(String::as_str).unwrap_or(DEFAULT_START_TIME)
        }
    }
}

impl Default for TimeSlots {
    fn default() -> Self {
        let slots = (8..18)
            .flat_map(|hour| [format!("{:02}:00", hour), format!("{:02}:30", hour)])
            .collect();
        Self { slots }
    }
}

fn format_slot(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
