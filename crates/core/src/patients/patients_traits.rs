//! Backend contract for patient operations.

use async_trait::async_trait;

use super::patients_model::{NewPatient, Patient, PatientQuery, PatientUpdate};
use crate::errors::Result;
use crate::pagination::Page;

/// Patient endpoints, implemented by the HTTP client.
#[async_trait]
pub trait PatientsApi: Send + Sync {
    /// Lists patients, optionally narrowed by a name search.
    async fn list_patients(&self, query: &PatientQuery) -> Result<Page<Patient>>;

    /// Fetches one patient by id.
    async fn get_patient(&self, id: &str) -> Result<Patient>;

    /// Registers a new patient.
    async fn create_patient(&self, record: &NewPatient) -> Result<Patient>;

    /// Updates an existing patient.
    async fn update_patient(&self, id: &str, update: &PatientUpdate) -> Result<Patient>;
}
