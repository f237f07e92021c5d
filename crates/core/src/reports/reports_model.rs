//! Report domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::Assessment;

/// A completed assessment packaged for presentation: professional and
/// clinic branding plus an optional share token granting public access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub assessment_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    pub assessment: Assessment,
}

impl Report {
    pub fn is_shared(&self) -> bool {
        self.share_token.is_some()
    }
}

/// Result of sharing a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareGrant {
    pub share_token: String,
    pub share_url: String,
}
