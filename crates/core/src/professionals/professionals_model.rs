//! Professional domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::{AssessmentStatus, AssessmentType};

/// Registered profession of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Nutritionist,
    PersonalTrainer,
    Physiotherapist,
    Doctor,
    PilatesInstructor,
    CrossfitCoach,
    SpaTherapist,
    Other,
}

/// Subscription tier of a professional's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    #[default]
    Free,
    Professional,
    Clinic,
}

/// A professional's full profile as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub plan: PlanTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_status: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input model for updating the signed-in professional's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Aggregates shown on the dashboard landing page. Computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: u32,
    pub total_assessments: u32,
    pub monthly_assessments: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    /// Remaining monthly quota; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments_remaining: Option<u32>,
    pub recent_assessments: Vec<RecentAssessment>,
    #[serde(default, rename = "weeklyData", skip_serializing_if = "Vec::is_empty")]
    pub weekly_activity: Vec<WeeklyActivity>,
}

/// One row of the dashboard's recent-activity list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentAssessment {
    pub id: String,
    pub patient_name: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub date: DateTime<Utc>,
    pub score: f64,
    pub status: AssessmentStatus,
}

/// One bucket of the dashboard's weekly activity series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub week: String,
    pub assessments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tier_serialization() {
        assert_eq!(serde_json::to_string(&PlanTier::Free).unwrap(), "\"FREE\"");
        assert_eq!(
            serde_json::to_string(&PlanTier::Professional).unwrap(),
            "\"PROFESSIONAL\""
        );
        assert_eq!(serde_json::to_string(&PlanTier::Clinic).unwrap(), "\"CLINIC\"");
    }

    #[test]
    fn test_profession_serialization() {
        assert_eq!(
            serde_json::to_string(&Profession::PersonalTrainer).unwrap(),
            "\"PERSONAL_TRAINER\""
        );
        assert_eq!(
            serde_json::from_str::<Profession>("\"PHYSIOTHERAPIST\"").unwrap(),
            Profession::Physiotherapist
        );
    }

    #[test]
    fn test_professional_wire_shape() {
        let json = r#"{
            "id": "prof-001",
            "name": "Dr. João Silva",
            "email": "joao.silva@example.com",
            "profession": "PHYSIOTHERAPIST",
            "clinicName": "Clínica PosturaViva",
            "plan": "PROFESSIONAL",
            "createdAt": "2025-06-15T10:00:00Z"
        }"#;
        let professional: Professional = serde_json::from_str(json).unwrap();
        assert_eq!(professional.plan, PlanTier::Professional);
        assert_eq!(
            professional.clinic_name.as_deref(),
            Some("Clínica PosturaViva")
        );
        assert!(professional.register_number.is_none());
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            clinic_name: Some("Studio Postural".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"clinicName":"Studio Postural"}"#
        );
    }

    #[test]
    fn test_dashboard_weekly_data_rename() {
        let json = r#"{
            "totalPatients": 6,
            "totalAssessments": 13,
            "monthlyAssessments": 5,
            "recentAssessments": [],
            "weeklyData": [{"week": "Sem 1", "assessments": 2}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.weekly_activity.len(), 1);
        assert_eq!(stats.weekly_activity[0].assessments, 2);
        assert!(stats.assessments_remaining.is_none());
    }
}
