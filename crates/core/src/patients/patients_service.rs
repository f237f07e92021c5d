//! Patient resource bindings: the searchable list and the detail fan-out.

use std::sync::{Arc, Mutex};

use log::debug;

use super::patients_model::{Patient, PatientOverview, PatientQuery};
use super::patients_traits::PatientsApi;
use crate::assessments::{AssessmentFilter, AssessmentsApi};
use crate::errors::Error;
use crate::fixtures::FixtureStore;
use crate::resource::ResourceState;

/// Patient list with a search term that re-triggers the fetch cycle.
///
/// Offline, the fixture patients are narrowed by the same
/// case-insensitive substring match the backend applies.
pub struct PatientsResource {
    api: Arc<dyn PatientsApi>,
    fixtures: Arc<FixtureStore>,
    search: Mutex<Option<String>>,
    state: Mutex<ResourceState<Vec<Patient>>>,
}

impl PatientsResource {
    pub fn new(api: Arc<dyn PatientsApi>, fixtures: Arc<FixtureStore>) -> Self {
        Self {
            api,
            fixtures,
            search: Mutex::new(None),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let term = self.search.lock().unwrap().clone();
        let query = PatientQuery {
            search: term.clone(),
            ..PatientQuery::default()
        };
        let outcome = self.api.list_patients(&query).await.map(|page| page.data);
        if let Err(err) = &outcome {
            debug!("patient list fetch failed: {}", err);
        }
        self.state.lock().unwrap().settle(ticket, outcome, || {
            let mut patients = self.fixtures.patients.clone();
            if let Some(term) = &term {
                if !term.is_empty() {
                    patients.retain(|p| p.name_matches(term));
                }
            }
            Some(patients)
        });
    }

    /// Sets the search term and re-runs the fetch cycle.
    pub async fn search(&self, term: impl Into<String>) {
        let term = term.into();
        *self.search.lock().unwrap() = if term.is_empty() { None } else { Some(term) };
        self.refresh().await;
    }

    pub fn search_term(&self) -> Option<String> {
        self.search.lock().unwrap().clone()
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.state.lock().unwrap().value().cloned().unwrap_or_default()
    }

    pub fn is_fallback(&self) -> bool {
        self.state
            .lock()
            .unwrap()
            .data()
            .is_some_and(|d| d.is_fallback())
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}

/// Detail view for one patient: the record and their assessment history,
/// fetched concurrently and settled as a unit.
///
/// If either leg fails the combined fetch fails; a patient never appears
/// with a silently empty history. Offline, both halves come from the
/// fixtures together.
pub struct PatientOverviewResource {
    patients: Arc<dyn PatientsApi>,
    assessments: Arc<dyn AssessmentsApi>,
    fixtures: Arc<FixtureStore>,
    patient_id: String,
    state: Mutex<ResourceState<PatientOverview>>,
}

impl PatientOverviewResource {
    pub fn new(
        patients: Arc<dyn PatientsApi>,
        assessments: Arc<dyn AssessmentsApi>,
        fixtures: Arc<FixtureStore>,
        patient_id: impl Into<String>,
    ) -> Self {
        Self {
            patients,
            assessments,
            fixtures,
            patient_id: patient_id.into(),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let filter = AssessmentFilter::for_patient(self.patient_id.clone());
        let outcome = tokio::try_join!(
            self.patients.get_patient(&self.patient_id),
            self.assessments.list_assessments(&filter),
        )
        .map(|(patient, history)| PatientOverview {
            patient,
            assessments: history.data,
        });
        if let Err(err) = &outcome {
            debug!(
                "patient overview {} fetch failed: {}",
                self.patient_id, err
            );
        }
        self.state.lock().unwrap().settle(ticket, outcome, || {
            let patient = self
                .fixtures
                .patient_by_id(&self.patient_id)
                .or_else(|| self.fixtures.patients.first())?
                .clone();
            let assessments = self
                .fixtures
                .assessments
                .iter()
                .filter(|a| a.patient_id == patient.id)
                .cloned()
                .collect();
            Some(PatientOverview {
                patient,
                assessments,
            })
        });
    }

    pub fn overview(&self) -> Option<PatientOverview> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}
