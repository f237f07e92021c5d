//! Backend contract for professional profile and dashboard operations.

use async_trait::async_trait;

use super::professionals_model::{DashboardStats, Professional, ProfileUpdate};
use crate::errors::Result;

/// Profile and dashboard endpoints, implemented by the HTTP client.
#[async_trait]
pub trait ProfessionalsApi: Send + Sync {
    /// Fetches the signed-in professional's profile.
    async fn get_profile(&self) -> Result<Professional>;

    /// Updates the signed-in professional's profile.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Professional>;

    /// Fetches the dashboard aggregates.
    async fn get_dashboard(&self) -> Result<DashboardStats>;
}
