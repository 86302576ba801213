//! In-memory repositories. All data is lost when the process exits.

pub mod appointment_repository;
pub mod doctor_repository;

pub use appointment_repository::AppointmentRepository;
pub use doctor_repository::DoctorRepository;
