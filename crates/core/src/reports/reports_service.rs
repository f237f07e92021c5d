//! Report resource bindings: by id and by public share token.

use std::sync::{Arc, Mutex};

use log::debug;

use super::reports_model::Report;
use super::reports_traits::ReportsApi;
use crate::errors::Error;
use crate::fixtures::FixtureStore;
use crate::resource::ResourceState;

/// One report by id, with the fixture report as offline fallback.
pub struct ReportResource {
    api: Arc<dyn ReportsApi>,
    fixtures: Arc<FixtureStore>,
    report_id: String,
    state: Mutex<ResourceState<Report>>,
}

impl ReportResource {
    pub fn new(
        api: Arc<dyn ReportsApi>,
        fixtures: Arc<FixtureStore>,
        report_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            fixtures,
            report_id: report_id.into(),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.api.get_report(&self.report_id).await;
        if let Err(err) = &outcome {
            debug!("report {} fetch failed: {}", self.report_id, err);
        }
        self.state
            .lock()
            .unwrap()
            .settle(ticket, outcome, || Some(self.fixtures.report.clone()));
    }

    pub fn report(&self) -> Option<Report> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}

/// A publicly shared report looked up by its token.
pub struct SharedReportResource {
    api: Arc<dyn ReportsApi>,
    fixtures: Arc<FixtureStore>,
    share_token: String,
    state: Mutex<ResourceState<Report>>,
}

impl SharedReportResource {
    pub fn new(
        api: Arc<dyn ReportsApi>,
        fixtures: Arc<FixtureStore>,
        share_token: impl Into<String>,
    ) -> Self {
        Self {
            api,
            fixtures,
            share_token: share_token.into(),
            state: Mutex::new(ResourceState::new()),
        }
    }

    pub async fn refresh(&self) {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.api.get_shared_report(&self.share_token).await;
        if let Err(err) = &outcome {
            debug!("shared report fetch failed: {}", err);
        }
        self.state
            .lock()
            .unwrap()
            .settle(ticket, outcome, || Some(self.fixtures.report.clone()));
    }

    pub fn report(&self) -> Option<Report> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}
