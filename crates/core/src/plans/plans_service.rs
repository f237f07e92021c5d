//! Plan catalog resource binding.

use std::sync::{Arc, Mutex};

use log::debug;

use super::plans_model::Plan;
use super::plans_traits::PlansApi;
use crate::errors::Error;
use crate::fixtures::FixtureStore;
use crate::resource::ResourceState;

/// The pricing-page plan list, with the fixture catalog as fallback.
pub struct PlansResource {
    api: Arc<dyn PlansApi>,
    fixtures: Arc<FixtureStore>,
    state: Mutex<ResourceState<Vec<Plan>>>,
}

impl PlansResource {
    pub fn new(api: Arc<dyn PlansApi>, fixtures: Arc<FixtureStore>) -> Self {
        Self {
            api,
            fixtures,
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.api.list_plans().await;
        if let Err(err) = &outcome {
            debug!("plan catalog fetch failed: {}", err);
        }
        self.state
            .lock()
            .unwrap()
            .settle(ticket, outcome, || Some(self.fixtures.plans.clone()));
    }

    pub fn plans(&self) -> Vec<Plan> {
        self.state.lock().unwrap().value().cloned().unwrap_or_default()
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
    use crate::errors::Result;
    use async_trait::async_trait;

    struct StubApi {
        outcome: Mutex<Option<Result<Vec<Plan>>>>,
    }

    #[async_trait]
    impl PlansApi for StubApi {
        async fn list_plans(&self) -> Result<Vec<Plan>> {
            self.outcome.lock().unwrap().take().expect("one call")
        }
    }

    #[tokio::test]
    async fn test_offline_plans_fall_back_to_catalog() {
        let fixtures = FixtureStore::shared();
        let api = Arc::new(StubApi {
            outcome: Mutex::new(Some(Err(Error::Offline("refused".to_string())))),
        });

        let resource = PlansResource::new(api, fixtures.clone());
        resource.refresh().await;
        assert_eq!(resource.plans(), fixtures.plans);
        assert!(resource.error().is_none());
    }

    #[tokio::test]
    async fn test_server_error_leaves_plans_empty() {
        let fixtures = FixtureStore::shared();
        let api = Arc::new(StubApi {
            outcome: Mutex::new(Some(Err(Error::Api {
                status: 500,
                message: "boom".to_string(),
            }))),
        });

        let resource = PlansResource::new(api, fixtures);
        resource.refresh().await;
        assert!(resource.plans().is_empty());
        assert!(resource.error().is_some());
    }
}
