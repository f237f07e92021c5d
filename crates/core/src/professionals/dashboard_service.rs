//! Dashboard resource binding.

use std::sync::{Arc, Mutex};

use log::debug;

use super::professionals_model::DashboardStats;
use super::professionals_traits::ProfessionalsApi;
use crate::errors::Error;
use crate::fixtures::FixtureStore;
use crate::resource::ResourceState;

/// Binds the dashboard aggregates to the uniform fetch lifecycle.
pub struct DashboardResource {
    api: Arc<dyn ProfessionalsApi>,
    fixtures: Arc<FixtureStore>,
    state: Mutex<ResourceState<DashboardStats>>,
}

impl DashboardResource {
    pub fn new(api: Arc<dyn ProfessionalsApi>, fixtures: Arc<FixtureStore>) -> Self {
        Self {
            api,
            fixtures,
            state: Mutex::new(ResourceState::new()),
        }
    }

    /// Fetches the dashboard aggregates, degrading to fixtures offline.
    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.api.get_dashboard().await;
        if let Err(err) = &outcome {
            debug!("dashboard fetch failed: {}", err);
        }
        self.state.lock().unwrap().settle(ticket, outcome, || {
            Some(self.fixtures.dashboard.clone())
        });
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        self.state.lock().unwrap().value().cloned()
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
