//! Assessment domain: capture events, scores, landmarks, angles,
//! deviations, and exercise recommendations.

mod assessments_model;
mod assessments_service;
mod assessments_traits;

#[cfg(test)]
mod assessments_model_tests;

pub use assessments_model::{
    Assessment, AssessmentFilter, AssessmentProgress, AssessmentStatus, AssessmentType,
    CaptureView, Deviation, Exercise, JointAngle, Landmark, NewAssessment, Recommendation,
    ScoreBand, Scores, Severity,
};
pub use assessments_service::{AssessmentResource, AssessmentsResource};
pub use assessments_traits::AssessmentsApi;
