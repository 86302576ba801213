//! # Storage Module
//!
//! Holds the doctor and appointment collections behind the `AppointmentStorage`
//! and `DoctorStorage` traits, so the domain layer never touches the
//! underlying containers directly.
//!
//! ## Current Implementation
//!
//! - **Memory**: process-lifetime repositories, nothing is written to disk
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Owned Results**: Queries return copies, never references into the store

pub mod memory;
pub mod traits;

pub use memory::{AppointmentRepository, DoctorRepository};
pub use traits::{AppointmentStorage, DoctorStorage};
