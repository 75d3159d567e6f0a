use std::cmp::Reverse;
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::clinic::model::{Doctor, Patient};
use crate::utils::error::{DomainError, EntityKind, Result};

/// Registry of patients, doctors, and patient-to-doctor assignments.
///
/// Each patient is either unassigned or assigned to exactly one doctor;
/// reassignment overwrites the previous doctor.
#[derive(Debug, Default)]
pub struct Clinic {
    patients: BTreeMap<String, Patient>,
    doctors: BTreeMap<u32, Doctor>,
    /// Patient SSN to doctor id.
    assignments: BTreeMap<String, u32>,
}

impl Clinic {
    pub fn new() -> Clinic {
        Clinic::default()
    }

    /// Register a patient; re-adding a known SSN is a silent no-op.
    pub fn add_patient(&mut self, first: &str, last: &str, ssn: &str) {
        self.patients.entry(ssn.to_string()).or_insert_with(|| Patient {
            first: first.to_string(),
            last: last.to_string(),
            ssn: ssn.to_string(),
        });
    }

    /// Register a doctor; re-adding a known id is a silent no-op.
    /// A doctor is also registered as a patient under their SSN.
    pub fn add_doctor(&mut self, id: u32, first: &str, last: &str, ssn: &str, specialization: &str) {
        if !self.doctors.contains_key(&id) {
            self.doctors.insert(
                id,
                Doctor {
                    id,
                    first: first.to_string(),
                    last: last.to_string(),
                    ssn: ssn.to_string(),
                    specialization: specialization.to_string(),
                },
            );
            self.add_patient(first, last, ssn);
        }
    }

    pub fn patient(&self, ssn: &str) -> Result<&Patient> {
        self.patients
            .get(ssn)
            .ok_or_else(|| DomainError::not_found(EntityKind::Patient, ssn))
    }

    pub fn doctor(&self, id: u32) -> Result<&Doctor> {
        self.doctors
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Doctor, id.to_string()))
    }

    /// Assign a doctor to a patient, overwriting any previous
    /// assignment. Both keys must be registered.
    pub fn assign_patient_to_doctor(&mut self, ssn: &str, id: u32) -> Result<()> {
        if !self.patients.contains_key(ssn) {
            return Err(DomainError::not_found(EntityKind::Patient, ssn));
        }
        if !self.doctors.contains_key(&id) {
            return Err(DomainError::not_found(EntityKind::Doctor, id.to_string()));
        }
        self.assignments.insert(ssn.to_string(), id);
        Ok(())
    }

    /// The id of the doctor assigned to a patient. An unknown SSN and a
    /// known-but-unassigned patient fail with distinct error kinds.
    pub fn assigned_doctor(&self, ssn: &str) -> Result<u32> {
        if !self.patients.contains_key(ssn) {
            return Err(DomainError::not_found(EntityKind::Patient, ssn));
        }
        self.assignments
            .get(ssn)
            .copied()
            .ok_or_else(|| DomainError::NoAssignment {
                ssn: ssn.to_string(),
            })
    }

    /// SSNs of the patients assigned to a doctor, in SSN order.
    pub fn assigned_patients(&self, id: u32) -> Result<Vec<String>> {
        if !self.doctors.contains_key(&id) {
            return Err(DomainError::not_found(EntityKind::Doctor, id.to_string()));
        }
        Ok(self
            .assignments
            .iter()
            .filter(|&(_, doctor)| *doctor == id)
            .map(|(ssn, _)| ssn.clone())
            .collect())
    }

    /// Patient count per doctor, every doctor included (idle ones at 0).
    pub fn patients_per_doctor(&self) -> BTreeMap<u32, usize> {
        let mut counts: BTreeMap<u32, usize> = self.doctors.keys().map(|&id| (id, 0)).collect();
        for id in self.assignments.values() {
            *counts.entry(*id).or_insert(0) += 1;
        }
        counts
    }

    /// Ids of the doctors with no assigned patient, sorted by last name
    /// then first name.
    pub fn idle_doctors(&self) -> Vec<u32> {
        self.doctors
            .values()
            .filter(|doctor| !self.assignments.values().any(|&id| id == doctor.id))
            .sorted_by_key(|doctor| (doctor.last.clone(), doctor.first.clone()))
            .map(|doctor| doctor.id)
            .collect()
    }

    /// Ids of the doctors whose patient count strictly exceeds the mean
    /// patient count over all doctors (idle doctors weigh 0 in the
    /// mean). A doctor sitting exactly at the mean is not busy.
    pub fn busy_doctors(&self) -> Vec<u32> {
        if self.doctors.is_empty() {
            return Vec::new();
        }
        let mean = self.assignments.len() as f64 / self.doctors.len() as f64;
        self.patients_per_doctor()
            .into_iter()
            .filter(|&(_, count)| count as f64 > mean)
            .map(|(id, _)| id)
            .collect()
    }

    /// `"### : ID LAST FIRST"` lines for every doctor, sorted by
    /// decreasing patient count (ties by id); the count is
    /// right-aligned in three columns.
    pub fn doctors_by_num_patients(&self) -> Vec<String> {
        self.patients_per_doctor()
            .into_iter()
            .sorted_by_key(|&(id, count)| (Reverse(count), id))
            .filter_map(|(id, count)| {
                let doctor = self.doctors.get(&id)?;
                Some(format!(
                    "{:3} : {} {} {}",
                    count, doctor.id, doctor.last, doctor.first
                ))
            })
            .collect()
    }

    /// `"### - SPECIALIZATION"` lines counting patients by the
    /// specialization of their assigned doctor, sorted by decreasing
    /// count then alphabetical specialization.
    pub fn count_patients_per_specialization(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for id in self.assignments.values() {
            if let Some(doctor) = self.doctors.get(id) {
                *counts.entry(doctor.specialization.as_str()).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .sorted_by_key(|&(specialization, count)| (Reverse(count), specialization))
            .map(|(specialization, count)| format!("{:3} - {}", count, specialization))
            .collect()
    }
}
