//! Assessment resource bindings: the filtered list and the single record.

use std::sync::{Arc, Mutex};

use log::debug;

use super::assessments_model::{Assessment, AssessmentFilter};
use super::assessments_traits::AssessmentsApi;
use crate::errors::Error;
use crate::fixtures::FixtureStore;
use crate::pagination::Page;
use crate::resource::ResourceState;

/// Assessment list with patient/status/type filters.
///
/// Offline, the fixture dataset is filtered the same way the backend
/// would filter and wrapped in a single-page envelope.
pub struct AssessmentsResource {
    api: Arc<dyn AssessmentsApi>,
    fixtures: Arc<FixtureStore>,
    filter: Mutex<AssessmentFilter>,
    state: Mutex<ResourceState<Page<Assessment>>>,
}

impl AssessmentsResource {
    pub fn new(api: Arc<dyn AssessmentsApi>, fixtures: Arc<FixtureStore>) -> Self {
        Self::with_filter(api, fixtures, AssessmentFilter::default())
    }

    pub fn with_filter(
        api: Arc<dyn AssessmentsApi>,
        fixtures: Arc<FixtureStore>,
        filter: AssessmentFilter,
    ) -> Self {
        Self {
            api,
            fixtures,
            filter: Mutex::new(filter),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let filter = self.filter.lock().unwrap().clone();
        let outcome = self.api.list_assessments(&filter).await;
        if let Err(err) = &outcome {
            debug!("assessment list fetch failed: {}", err);
        }
        self.state.lock().unwrap().settle(ticket, outcome, || {
            let matched = filter.apply(&self.fixtures.assessments);
            Some(Page::single(matched, filter.limit))
        });
    }

    /// Replaces the filter and re-runs the fetch cycle.
    pub async fn apply_filter(&self, filter: AssessmentFilter) {
        *self.filter.lock().unwrap() = filter;
        self.refresh().await;
    }

    pub fn page(&self) -> Option<Page<Assessment>> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn assessments(&self) -> Vec<Assessment> {
        self.state
            .lock()
            .unwrap()
            .value()
            .map(|page| page.data.clone())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}

/// One assessment by id, with fixture fallback by the same id.
pub struct AssessmentResource {
    api: Arc<dyn AssessmentsApi>,
    fixtures: Arc<FixtureStore>,
    assessment_id: String,
    state: Mutex<ResourceState<Assessment>>,
}

impl AssessmentResource {
    pub fn new(
        api: Arc<dyn AssessmentsApi>,
        fixtures: Arc<FixtureStore>,
        assessment_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            fixtures,
            assessment_id: assessment_id.into(),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.api.get_assessment(&self.assessment_id).await;
        if let Err(err) = &outcome {
            debug!(
                "assessment {} fetch failed: {}",
                self.assessment_id, err
            );
        }
        self.state.lock().unwrap().settle(ticket, outcome, || {
            self.fixtures
                .assessment_by_id(&self.assessment_id)
                .or_else(|| self.fixtures.assessments.first())
                .cloned()
        });
    }

    pub fn assessment(&self) -> Option<Assessment> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::{AssessmentProgress, AssessmentStatus, NewAssessment};
    use crate::errors::Result;
    use async_trait::async_trait;

    #[derive(Default)]
    struct StubApi {
        list_outcome: Mutex<Option<Result<Page<Assessment>>>>,
        get_outcome: Mutex<Option<Result<Assessment>>>,
    }

    #[async_trait]
    impl AssessmentsApi for StubApi {
        async fn list_assessments(
            &self,
            _filter: &AssessmentFilter,
        ) -> Result<Page<Assessment>> {
            self.list_outcome.lock().unwrap().take().expect("one call")
        }

        async fn get_assessment(&self, _id: &str) -> Result<Assessment> {
            self.get_outcome.lock().unwrap().take().expect("one call")
        }

        async fn create_assessment(&self, _request: &NewAssessment) -> Result<Assessment> {
            unimplemented!("not exercised")
        }

        async fn get_assessment_status(&self, _id: &str) -> Result<AssessmentProgress> {
            unimplemented!("not exercised")
        }
    }

    fn offline() -> Error {
        Error::Offline("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_offline_list_applies_filter_to_fixtures() {
        let fixtures = FixtureStore::shared();
        let patient_id = fixtures.assessments[0].patient_id.clone();
        let api = Arc::new(StubApi::default());
        *api.list_outcome.lock().unwrap() = Some(Err(offline()));

        let resource = AssessmentsResource::with_filter(
            api,
            fixtures.clone(),
            AssessmentFilter::for_patient(patient_id.clone()),
        );
        resource.refresh().await;

        let page = resource.page().unwrap();
        assert!(!page.is_empty());
        assert!(page.data.iter().all(|a| a.patient_id == patient_id));
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 1);
    }

    #[tokio::test]
    async fn test_offline_list_with_status_filter() {
        let fixtures = FixtureStore::shared();
        let api = Arc::new(StubApi::default());
        *api.list_outcome.lock().unwrap() = Some(Err(offline()));

        let resource = AssessmentsResource::with_filter(
            api,
            fixtures,
            AssessmentFilter {
                status: Some(AssessmentStatus::Failed),
                ..Default::default()
            },
        );
        resource.refresh().await;

        // No fixture assessment is FAILED, so the fallback page is empty
        // rather than unfiltered.
        let page = resource.page().unwrap();
        assert!(page.is_empty());
        assert!(resource.error().is_none());
    }

    #[tokio::test]
    async fn test_server_error_does_not_substitute_fixtures() {
        let fixtures = FixtureStore::shared();
        let api = Arc::new(StubApi::default());
        *api.list_outcome.lock().unwrap() = Some(Err(Error::Api {
            status: 500,
            message: "boom".to_string(),
        }));

        let resource = AssessmentsResource::new(api, fixtures);
        resource.refresh().await;
        assert!(resource.page().is_none());
        assert_eq!(resource.error().unwrap().status(), Some(500));
    }

    #[tokio::test]
    async fn test_single_assessment_falls_back_by_id() {
        let fixtures = FixtureStore::shared();
        let wanted = fixtures.assessments[2].clone();
        let api = Arc::new(StubApi::default());
        *api.get_outcome.lock().unwrap() = Some(Err(offline()));

        let resource = AssessmentResource::new(api, fixtures, wanted.id.clone());
        resource.refresh().await;
        assert_eq!(resource.assessment().unwrap().id, wanted.id);
    }

    #[tokio::test]
    async fn test_single_assessment_unknown_id_falls_back_to_first() {
        let fixtures = FixtureStore::shared();
        let first = fixtures.assessments[0].clone();
        let api = Arc::new(StubApi::default());
        *api.get_outcome.lock().unwrap() = Some(Err(offline()));

        let resource = AssessmentResource::new(api, fixtures, "assess-does-not-exist");
        resource.refresh().await;
        assert_eq!(resource.assessment().unwrap().id, first.id);
    }
}
