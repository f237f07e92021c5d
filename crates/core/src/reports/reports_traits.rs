//! Backend contract for report operations.

use async_trait::async_trait;

use super::reports_model::{Report, ShareGrant};
use crate::errors::Result;

/// Report endpoints, implemented by the HTTP client.
#[async_trait]
pub trait ReportsApi: Send + Sync {
    /// Fetches a report by id.
    async fn get_report(&self, id: &str) -> Result<Report>;

    /// Creates (or returns) the share grant for a report.
    async fn share_report(&self, id: &str) -> Result<ShareGrant>;

    /// Fetches a shared report by its public token. Works without a
    /// session.
    async fn get_shared_report(&self, token: &str) -> Result<Report>;
}
