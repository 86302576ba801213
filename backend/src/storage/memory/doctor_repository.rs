use shared::Doctor;

use crate::storage::traits::DoctorStorage;

/// Fixed doctor directory, seeded once at startup
#[derive(Debug, Clone, Default)]
pub struct DoctorRepository {
    doctors: Vec<Doctor>,
}

impl DoctorRepository {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }
}

impl DoctorStorage for DoctorRepository {
    fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    fn get_doctor(&self, doctor_id: &str) -> Option<Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == doctor_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_doctor(id: &str, name: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialty: "Cardiology".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_get_doctor() {
        let repo = DoctorRepository::new(vec![
            create_test_doctor("1", "Dr. Jane Smith"),
            create_test_doctor("2", "Dr. Michael Johnson"),
        ]);

        assert_eq!(repo.get_doctor("2").unwrap().name, "Dr. Michael Johnson");
        assert!(repo.get_doctor("99").is_none());
    }

    #[test]
    fn test_list_doctors_keeps_order() {
        let repo = DoctorRepository::new(vec![
            create_test_doctor("2", "Second"),
            create_test_doctor("1", "First"),
        ]);

        let names: Vec<String> = repo.list_doctors().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
