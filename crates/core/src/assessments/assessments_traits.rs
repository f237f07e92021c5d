//! Backend contract for assessment operations.

use async_trait::async_trait;

use super::assessments_model::{
    Assessment, AssessmentFilter, AssessmentProgress, NewAssessment,
};
use crate::errors::Result;
use crate::pagination::Page;

/// Assessment endpoints, implemented by the HTTP client.
#[async_trait]
pub trait AssessmentsApi: Send + Sync {
    /// Lists assessments matching the filter.
    async fn list_assessments(&self, filter: &AssessmentFilter) -> Result<Page<Assessment>>;

    /// Fetches one assessment by id.
    async fn get_assessment(&self, id: &str) -> Result<Assessment>;

    /// Requests analysis of uploaded media.
    async fn create_assessment(&self, request: &NewAssessment) -> Result<Assessment>;

    /// Polls processing progress for an assessment.
    async fn get_assessment_status(&self, id: &str) -> Result<AssessmentProgress>;
}
