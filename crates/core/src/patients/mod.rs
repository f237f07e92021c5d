//! Patient domain: the professional's client records.

mod patients_model;
mod patients_service;
mod patients_traits;

pub use patients_model::{Gender, NewPatient, Patient, PatientOverview, PatientQuery, PatientUpdate};
pub use patients_service::{PatientOverviewResource, PatientsResource};
pub use patients_traits::PatientsApi;
