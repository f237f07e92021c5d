//! Tests for assessment domain models.

#[cfg(test)]
mod tests {
    use crate::assessments::{
        Assessment, AssessmentFilter, AssessmentStatus, AssessmentType, CaptureView, NewAssessment,
        ScoreBand, Severity,
    };
    use crate::errors::{Error, ValidationError};
    use chrono::{TimeZone, Utc};

    // ==================== Enum wire formats ====================

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::Processing).unwrap(),
            "\"PROCESSING\""
        );
        assert_eq!(
            serde_json::from_str::<AssessmentStatus>("\"COMPLETED\"").unwrap(),
            AssessmentStatus::Completed
        );
    }

    #[test]
    fn test_status_terminality() {
        assert!(!AssessmentStatus::Pending.is_terminal());
        assert!(!AssessmentStatus::Processing.is_terminal());
        assert!(AssessmentStatus::Completed.is_terminal());
        assert!(AssessmentStatus::Failed.is_terminal());
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(
            serde_json::to_string(&CaptureView::LateralLeft).unwrap(),
            "\"LATERAL_LEFT\""
        );
        assert_eq!(
            serde_json::from_str::<CaptureView>("\"ANTERIOR\"").unwrap(),
            CaptureView::Anterior
        );
    }

    #[test]
    fn test_severity_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&Severity::Mild).unwrap(), "\"mild\"");
        assert_eq!(
            serde_json::from_str::<Severity>("\"severe\"").unwrap(),
            Severity::Severe
        );
    }

    // ==================== Score bands ====================

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(91.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Poor);
    }

    // ==================== Request shapes ====================

    #[test]
    fn test_new_assessment_wire_shape_uses_view_type() {
        let request = NewAssessment {
            patient_id: "pat-001".to_string(),
            assessment_type: AssessmentType::Postural,
            media_url: "https://cdn.example.com/capture.jpg".to_string(),
            media_type: "image/jpeg".to_string(),
            view: Some(CaptureView::Anterior),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"patientId\":\"pat-001\""));
        assert!(json.contains("\"type\":\"POSTURAL\""));
        assert!(json.contains("\"viewType\":\"ANTERIOR\""));
    }

    #[test]
    fn test_new_assessment_requires_patient_and_media() {
        let request = NewAssessment {
            patient_id: "  ".to_string(),
            assessment_type: AssessmentType::Postural,
            media_url: "https://cdn.example.com/capture.jpg".to_string(),
            media_type: "image/jpeg".to_string(),
            view: None,
        };
        assert!(matches!(
            request.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "patientId"
        ));

        let request = NewAssessment {
            patient_id: "pat-001".to_string(),
            assessment_type: AssessmentType::Postural,
            media_url: String::new(),
            media_type: "image/jpeg".to_string(),
            view: None,
        };
        assert!(matches!(
            request.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "mediaUrl"
        ));
    }

    // ==================== Decoding ====================

    #[test]
    fn test_pending_assessment_decodes_without_analysis() {
        let json = r#"{
            "id": "assess-010",
            "patientId": "pat-001",
            "patientName": "Maria Santos",
            "professionalId": "prof-001",
            "type": "POSTURAL",
            "view": "ANTERIOR",
            "status": "PENDING",
            "mediaUrl": "/media/capture.jpg",
            "createdAt": "2026-02-11T09:00:00Z"
        }"#;
        let assessment: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.status, AssessmentStatus::Pending);
        assert!(assessment.landmarks.is_empty());
        assert!(assessment.deviations.is_empty());
        assert_eq!(assessment.scores.overall, 0.0);
        assert!(assessment.completed_at.is_none());
    }

    // ==================== Filter ====================

    fn sample(id: &str, patient_id: &str, status: AssessmentStatus) -> Assessment {
        Assessment {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            patient_name: "Maria Santos".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::Anterior,
            status,
            media_url: "/media/capture.jpg".to_string(),
            thumbnail_url: None,
            scores: Default::default(),
            landmarks: vec![],
            angles: vec![],
            deviations: vec![],
            recommendations: vec![],
            created_at: Utc.with_ymd_and_hms(2026, 1, 20, 14, 30, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn test_filter_by_patient_and_status() {
        let assessments = vec![
            sample("a1", "pat-001", AssessmentStatus::Completed),
            sample("a2", "pat-002", AssessmentStatus::Completed),
            sample("a3", "pat-001", AssessmentStatus::Failed),
        ];

        let filter = AssessmentFilter::for_patient("pat-001");
        let matched = filter.apply(&assessments);
        assert_eq!(matched.len(), 2);

        let filter = AssessmentFilter {
            patient_id: Some("pat-001".to_string()),
            status: Some(AssessmentStatus::Completed),
            ..Default::default()
        };
        let matched = filter.apply(&assessments);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a1");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let assessments = vec![
            sample("a1", "pat-001", AssessmentStatus::Completed),
            sample("a2", "pat-002", AssessmentStatus::Pending),
        ];
        assert_eq!(AssessmentFilter::default().apply(&assessments).len(), 2);
    }
}
