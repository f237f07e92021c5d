//! Backend contract for the plan catalog.

use async_trait::async_trait;

use super::plans_model::Plan;
use crate::errors::Result;

/// Plan endpoints, implemented by the HTTP client.
#[async_trait]
pub trait PlansApi: Send + Sync {
    /// Lists the available subscription plans.
    async fn list_plans(&self) -> Result<Vec<Plan>>;
}
