//! Assessment domain models.
//!
//! An assessment is one posture capture event. The backend analyzes the
//! uploaded media and attaches scores, detected landmarks, joint angles,
//! named deviations, and per-region exercise recommendations; this crate
//! only carries those results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ASSESSMENTS_PAGE_LIMIT;
use crate::errors::{Error, Result, ValidationError};

/// Processing state of an assessment.
///
/// Progresses `Pending → Processing → Completed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AssessmentStatus {
    /// True once the backend will not change this assessment again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssessmentStatus::Completed | AssessmentStatus::Failed)
    }

    /// Wire representation, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Pending => "PENDING",
            AssessmentStatus::Processing => "PROCESSING",
            AssessmentStatus::Completed => "COMPLETED",
            AssessmentStatus::Failed => "FAILED",
        }
    }
}

/// Kind of analysis requested for a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentType {
    Postural,
    Biomechanical,
}

impl AssessmentType {
    /// Wire representation, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Postural => "POSTURAL",
            AssessmentType::Biomechanical => "BIOMECHANICAL",
        }
    }
}

/// Camera viewpoint of the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureView {
    Anterior,
    Posterior,
    LateralLeft,
    LateralRight,
}

/// Severity grading used for angles and deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

/// Overall plus per-region posture scores, each 0–100.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub overall: f64,
    pub head: f64,
    pub shoulders: f64,
    pub spine: f64,
    pub pelvis: f64,
    pub knee_left: f64,
    pub knee_right: f64,
}

/// Qualitative band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ScoreBand {
    /// Bands: ≥80 excellent, ≥60 good, ≥40 moderate, below that poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }
}

/// One detected anatomical landmark, in normalized image coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub name: String,
    pub label: String,
    /// 0–1, relative to image width.
    pub x: f64,
    /// 0–1, relative to image height.
    pub y: f64,
    pub confidence: f64,
}

/// One measured joint angle against its ideal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JointAngle {
    pub joint: String,
    pub measured: f64,
    pub ideal: f64,
    pub deviation: f64,
    pub severity: Severity,
}

/// A named postural finding with its clinical recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub id: String,
    pub name: String,
    pub region: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_deviation: Option<f64>,
}

/// Exercise group recommended for one body region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub region: String,
    pub exercises: Vec<Exercise>,
}

/// One prescribed exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub description: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
}

/// One posture capture event with its analysis results.
///
/// Result collections default to empty so a `PENDING`/`PROCESSING`
/// assessment decodes before the backend has attached any analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_id: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub view: CaptureView,
    pub status: AssessmentStatus,
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub scores: Scores,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub angles: Vec<JointAngle>,
    #[serde(default)]
    pub deviations: Vec<Deviation>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input model for requesting a new assessment of uploaded media.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub patient_id: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub media_url: String,
    pub media_type: String,
    #[serde(rename = "viewType", skip_serializing_if = "Option::is_none")]
    pub view: Option<CaptureView>,
}

impl NewAssessment {
    /// Validates the request before it is sent.
    pub fn validate(&self) -> Result<()> {
        if self.patient_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "patientId".to_string(),
            )));
        }
        if self.media_url.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "mediaUrl".to_string(),
            )));
        }
        Ok(())
    }
}

/// Polling payload from the assessment status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub status: AssessmentStatus,
    /// 0–100.
    pub progress: f64,
}

/// Filters for the assessment list endpoint.
#[derive(Debug, Clone)]
pub struct AssessmentFilter {
    pub patient_id: Option<String>,
    pub status: Option<AssessmentStatus>,
    pub assessment_type: Option<AssessmentType>,
    pub page: u32,
    pub limit: u32,
}

impl Default for AssessmentFilter {
    fn default() -> Self {
        Self {
            patient_id: None,
            status: None,
            assessment_type: None,
            page: 1,
            limit: ASSESSMENTS_PAGE_LIMIT,
        }
    }
}

impl AssessmentFilter {
    pub fn for_patient(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            ..Self::default()
        }
    }

    /// Applies the filter to an in-memory collection; used for the fixture
    /// fallback so offline filtering matches the backend's.
    pub fn apply(&self, assessments: &[Assessment]) -> Vec<Assessment> {
        assessments
            .iter()
            .filter(|a| {
                self.patient_id
                    .as_deref()
                    .is_none_or(|id| a.patient_id == id)
            })
            .filter(|a| self.status.is_none_or(|s| a.status == s))
            .filter(|a| {
                self.assessment_type
                    .is_none_or(|t| a.assessment_type == t)
            })
            .cloned()
            .collect()
    }
}
