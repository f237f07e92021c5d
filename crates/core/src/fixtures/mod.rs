//! The offline fixture dataset.
//!
//! When the backend is unreachable every resource degrades to the slices
//! below, so the dashboard stays demonstrable without a live service. The
//! dataset is internally consistent: assessments reference existing
//! patients, the report wraps an existing assessment, and the dashboard
//! aggregates describe this population. Pure data; no behavior beyond
//! lookups.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::assessments::{
    Assessment, AssessmentStatus, AssessmentType, CaptureView, Deviation, Exercise, JointAngle,
    Landmark, Recommendation, Scores, Severity,
};
use crate::patients::{Gender, Patient};
use crate::plans::{Plan, PlanFeature};
use crate::professionals::{
    DashboardStats, PlanTier, Profession, Professional, RecentAssessment, WeeklyActivity,
};
use crate::reports::Report;

/// The complete offline dataset, built once and shared.
pub struct FixtureStore {
    pub professional: Professional,
    pub patients: Vec<Patient>,
    pub assessments: Vec<Assessment>,
    pub report: Report,
    pub plans: Vec<Plan>,
    pub dashboard: DashboardStats,
}

static SHARED: OnceLock<Arc<FixtureStore>> = OnceLock::new();

impl FixtureStore {
    /// The process-wide shared instance.
    pub fn shared() -> Arc<FixtureStore> {
        SHARED.get_or_init(|| Arc::new(FixtureStore::build())).clone()
    }

    pub fn patient_by_id(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn assessment_by_id(&self, id: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.id == id)
    }

    fn build() -> Self {
        let professional = demo_professional();
        let patients = demo_patients();
        let assessments = demo_assessments();
        let report = demo_report(&assessments[0]);
        Self {
            professional,
            patients,
            assessments,
            report,
            plans: demo_plans(),
            dashboard: demo_dashboard(),
        }
    }
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn birth(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

fn demo_professional() -> Professional {
    Professional {
        id: "prof-001".to_string(),
        name: "Dr. João Silva".to_string(),
        email: "joao.silva@posturaviva.com.br".to_string(),
        profession: Some(Profession::Physiotherapist),
        register_number: Some("CREF 012345-G/SP".to_string()),
        clinic_name: Some("Clínica PosturaViva".to_string()),
        phone: None,
        logo_url: None,
        brand_color: None,
        locale: Some("pt-BR".to_string()),
        plan: PlanTier::Professional,
        plan_status: None,
        created_at: ts(2025, 6, 15, 10, 0, 0),
        updated_at: None,
    }
}

struct PatientSeed {
    id: &'static str,
    name: &'static str,
    birth_date: NaiveDate,
    gender: Gender,
    height: f64,
    weight: f64,
    phone: &'static str,
    email: Option<&'static str>,
    notes: Option<&'static str>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    total_assessments: u32,
    last_score: Option<f64>,
}

fn demo_patients() -> Vec<Patient> {
    let seeds = [
        PatientSeed {
            id: "pat-001",
            name: "Maria Santos",
            birth_date: birth(1990, 3, 15),
            gender: Gender::Female,
            height: 165.0,
            weight: 62.0,
            phone: "(11) 98765-4321",
            email: Some("maria.santos@email.com"),
            notes: Some("Queixa de dor lombar crônica"),
            created_at: ts(2025, 11, 1, 10, 0, 0),
            updated_at: ts(2026, 1, 20, 14, 30, 0),
            total_assessments: 3,
            last_score: Some(72.0),
        },
        PatientSeed {
            id: "pat-002",
            name: "Carlos Oliveira",
            birth_date: birth(1985, 7, 22),
            gender: Gender::Male,
            height: 178.0,
            weight: 85.0,
            phone: "(11) 91234-5678",
            email: Some("carlos.oliveira@email.com"),
            notes: Some("Atleta amador, ombro direito mais baixo"),
            created_at: ts(2025, 10, 15, 8, 0, 0),
            updated_at: ts(2026, 2, 5, 11, 0, 0),
            total_assessments: 5,
            last_score: Some(85.0),
        },
        PatientSeed {
            id: "pat-003",
            name: "Ana Beatriz Costa",
            birth_date: birth(1998, 11, 8),
            gender: Gender::Female,
            height: 170.0,
            weight: 58.0,
            phone: "(21) 99876-5432",
            email: Some("ana.costa@email.com"),
            notes: Some("Bailarina, hiperlordose"),
            created_at: ts(2025, 12, 1, 9, 0, 0),
            updated_at: ts(2026, 1, 28, 16, 0, 0),
            total_assessments: 2,
            last_score: Some(58.0),
        },
        PatientSeed {
            id: "pat-004",
            name: "Pedro Henrique Lima",
            birth_date: birth(1978, 2, 14),
            gender: Gender::Male,
            height: 182.0,
            weight: 92.0,
            phone: "(11) 97654-3210",
            email: Some("pedro.lima@email.com"),
            notes: Some("Sedentário, trabalho em escritório"),
            created_at: ts(2026, 1, 5, 10, 0, 0),
            updated_at: ts(2026, 2, 10, 9, 30, 0),
            total_assessments: 1,
            last_score: Some(45.0),
        },
        PatientSeed {
            id: "pat-005",
            name: "Fernanda Rodrigues",
            birth_date: birth(1995, 6, 30),
            gender: Gender::Female,
            height: 160.0,
            weight: 55.0,
            phone: "(31) 98877-6655",
            email: Some("fernanda.rodrigues@email.com"),
            notes: None,
            created_at: ts(2026, 1, 15, 14, 0, 0),
            updated_at: ts(2026, 2, 8, 10, 0, 0),
            total_assessments: 2,
            last_score: Some(91.0),
        },
        PatientSeed {
            id: "pat-006",
            name: "Ricardo Souza",
            birth_date: birth(1982, 9, 20),
            gender: Gender::Male,
            height: 175.0,
            weight: 78.0,
            phone: "(41) 99988-7766",
            email: None,
            notes: None,
            created_at: ts(2026, 2, 1, 8, 0, 0),
            updated_at: ts(2026, 2, 1, 8, 0, 0),
            total_assessments: 0,
            last_score: None,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Patient {
            id: seed.id.to_string(),
            professional_id: "prof-001".to_string(),
            name: seed.name.to_string(),
            birth_date: Some(seed.birth_date),
            gender: Some(seed.gender),
            height: Some(seed.height),
            weight: Some(seed.weight),
            body_fat: None,
            phone: Some(seed.phone.to_string()),
            email: seed.email.map(str::to_string),
            notes: seed.notes.map(str::to_string),
            avatar_url: None,
            created_at: seed.created_at,
            updated_at: seed.updated_at,
            total_assessments: Some(seed.total_assessments),
            last_assessment_date: (seed.total_assessments > 0).then_some(seed.updated_at),
            last_score: seed.last_score,
        })
        .collect()
}

fn demo_landmarks() -> Vec<Landmark> {
    let points = [
        ("tragus_left", "Tragus Esquerdo", 0.45, 0.08, 0.95),
        ("tragus_right", "Tragus Direito", 0.55, 0.08, 0.94),
        ("acromion_left", "Acrômio Esquerdo", 0.30, 0.18, 0.97),
        ("acromion_right", "Acrômio Direito", 0.70, 0.20, 0.96),
        ("c7", "C7 (Vértebra Proeminente)", 0.50, 0.15, 0.92),
        ("iliac_crest_left", "Crista Ilíaca Esquerda", 0.35, 0.48, 0.93),
        ("iliac_crest_right", "Crista Ilíaca Direita", 0.65, 0.47, 0.94),
        ("asis_left", "EIAS Esquerda", 0.38, 0.52, 0.91),
        ("asis_right", "EIAS Direita", 0.62, 0.51, 0.90),
        ("patella_left", "Patela Esquerda", 0.40, 0.68, 0.96),
        ("patella_right", "Patela Direita", 0.60, 0.67, 0.95),
        ("malleolus_left", "Maléolo Esquerdo", 0.42, 0.90, 0.94),
        ("malleolus_right", "Maléolo Direito", 0.58, 0.89, 0.93),
    ];
    points
        .into_iter()
        .map(|(name, label, x, y, confidence)| Landmark {
            name: name.to_string(),
            label: label.to_string(),
            x,
            y,
            confidence,
        })
        .collect()
}

fn demo_angles() -> Vec<JointAngle> {
    let rows = [
        ("Inclinação Cervical", 4.2, 0.0, 4.2, Severity::Mild),
        ("Alinhamento de Ombros", 2.8, 0.0, 2.8, Severity::Mild),
        ("Cifose Torácica", 42.0, 35.0, 7.0, Severity::Moderate),
        ("Lordose Lombar", 52.0, 40.0, 12.0, Severity::Moderate),
        ("Inclinação Pélvica", 15.0, 10.0, 5.0, Severity::Mild),
        ("Valgo Joelho Esquerdo", 8.0, 5.0, 3.0, Severity::Mild),
        ("Valgo Joelho Direito", 6.0, 5.0, 1.0, Severity::Normal),
        ("Pronação Pé Esquerdo", 12.0, 8.0, 4.0, Severity::Mild),
        ("Pronação Pé Direito", 9.0, 8.0, 1.0, Severity::Normal),
    ];
    rows.into_iter()
        .map(|(joint, measured, ideal, deviation, severity)| JointAngle {
            joint: joint.to_string(),
            measured,
            ideal,
            deviation,
            severity,
        })
        .collect()
}

/// Rescales the base angle set for captures with better or worse posture.
fn scaled_angles(factor: f64, severity: impl Fn(Severity) -> Severity) -> Vec<JointAngle> {
    demo_angles()
        .into_iter()
        .map(|angle| JointAngle {
            deviation: angle.deviation * factor,
            severity: severity(angle.severity),
            ..angle
        })
        .collect()
}

fn demo_deviations() -> Vec<Deviation> {
    vec![
        Deviation {
            id: "dev-001".to_string(),
            name: "Hiperlordose Lombar".to_string(),
            region: "Coluna Lombar".to_string(),
            severity: Severity::Moderate,
            description: "Curvatura lombar aumentada em 12° além do padrão ideal. Associada a \
                          fraqueza de core e encurtamento de flexores de quadril."
                .to_string(),
            recommendation: "Fortalecimento de core (prancha, dead bug), alongamento de iliopsoas \
                             e reto femoral, educação postural."
                .to_string(),
            angle_deviation: Some(12.0),
        },
        Deviation {
            id: "dev-002".to_string(),
            name: "Hipercifose Torácica".to_string(),
            region: "Coluna Torácica".to_string(),
            severity: Severity::Moderate,
            description: "Cifose torácica de 42° (ideal: 35°). Pode estar associada a uso \
                          prolongado de computador/celular."
                .to_string(),
            recommendation: "Extensão torácica em foam roller, fortalecimento de trapézio \
                             médio/inferior, alongamento de peitoral."
                .to_string(),
            angle_deviation: Some(7.0),
        },
        Deviation {
            id: "dev-003".to_string(),
            name: "Desnivelamento de Ombros".to_string(),
            region: "Ombros".to_string(),
            severity: Severity::Mild,
            description: "Ombro direito 2.8° mais baixo que o esquerdo. Assimetria leve."
                .to_string(),
            recommendation: "Exercícios de estabilização escapular bilateral, correção de hábitos \
                             posturais no trabalho."
                .to_string(),
            angle_deviation: Some(2.8),
        },
        Deviation {
            id: "dev-004".to_string(),
            name: "Antepulsão Pélvica".to_string(),
            region: "Pelve".to_string(),
            severity: Severity::Mild,
            description: "Inclinação anterior da pelve de 15° (ideal: 10°). Associada à \
                          hiperlordose."
                .to_string(),
            recommendation: "Ponte glútea, exercícios de báscula posterior, alongamento de \
                             quadríceps."
                .to_string(),
            angle_deviation: Some(5.0),
        },
    ]
}

fn demo_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            region: "Coluna Lombar".to_string(),
            exercises: vec![
                exercise(
                    "Prancha Ventral",
                    "Manter posição de prancha com abdômen ativado",
                    "3x/semana",
                    Some("3"),
                    Some("30-45s"),
                ),
                exercise(
                    "Dead Bug",
                    "Deitado, extensão alternada de braços e pernas",
                    "3x/semana",
                    Some("3"),
                    Some("10 cada lado"),
                ),
                exercise(
                    "Alongamento Iliopsoas",
                    "Ajoelhado, avançar quadril para frente",
                    "Diário",
                    Some("2"),
                    Some("30s cada lado"),
                ),
            ],
        },
        Recommendation {
            region: "Coluna Torácica".to_string(),
            exercises: vec![
                exercise(
                    "Extensão Torácica no Foam Roller",
                    "Deitar sobre foam roller na região torácica",
                    "3x/semana",
                    Some("3"),
                    Some("15 repetições"),
                ),
                exercise(
                    "Face Pull",
                    "Puxada de corda na altura do rosto",
                    "3x/semana",
                    Some("3"),
                    Some("12-15"),
                ),
            ],
        },
        Recommendation {
            region: "Ombros".to_string(),
            exercises: vec![
                exercise(
                    "Retração Escapular",
                    "Puxar escápulas para trás e para baixo",
                    "Diário",
                    Some("3"),
                    Some("10-15"),
                ),
                exercise(
                    "Y-T-W com Halteres Leves",
                    "Elevações em padrão Y, T e W",
                    "3x/semana",
                    Some("2"),
                    Some("10 cada"),
                ),
            ],
        },
    ]
}

fn exercise(
    name: &str,
    description: &str,
    frequency: &str,
    sets: Option<&str>,
    reps: Option<&str>,
) -> Exercise {
    Exercise {
        name: name.to_string(),
        description: description.to_string(),
        frequency: frequency.to_string(),
        sets: sets.map(str::to_string),
        reps: reps.map(str::to_string),
    }
}

fn demo_assessments() -> Vec<Assessment> {
    let deviations = demo_deviations();
    let recommendations = demo_recommendations();

    vec![
        Assessment {
            id: "assess-001".to_string(),
            patient_id: "pat-001".to_string(),
            patient_name: "Maria Santos".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::Anterior,
            status: AssessmentStatus::Completed,
            media_url: "/assets/demo-posture-anterior.jpg".to_string(),
            thumbnail_url: Some("/assets/demo-posture-anterior-thumb.jpg".to_string()),
            scores: Scores {
                overall: 72.0,
                head: 85.0,
                shoulders: 65.0,
                spine: 58.0,
                pelvis: 70.0,
                knee_left: 75.0,
                knee_right: 82.0,
            },
            landmarks: demo_landmarks(),
            angles: demo_angles(),
            deviations: deviations.clone(),
            recommendations: recommendations.clone(),
            created_at: ts(2026, 1, 20, 14, 30, 0),
            completed_at: Some(ts(2026, 1, 20, 14, 32, 0)),
        },
        Assessment {
            id: "assess-002".to_string(),
            patient_id: "pat-002".to_string(),
            patient_name: "Carlos Oliveira".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::LateralLeft,
            status: AssessmentStatus::Completed,
            media_url: "/assets/demo-posture-lateral.jpg".to_string(),
            thumbnail_url: None,
            scores: Scores {
                overall: 85.0,
                head: 90.0,
                shoulders: 88.0,
                spine: 82.0,
                pelvis: 80.0,
                knee_left: 87.0,
                knee_right: 85.0,
            },
            landmarks: demo_landmarks(),
            angles: scaled_angles(0.6, |_| Severity::Normal),
            deviations: vec![deviations[2].clone()],
            recommendations: vec![recommendations[2].clone()],
            created_at: ts(2026, 2, 5, 11, 0, 0),
            completed_at: Some(ts(2026, 2, 5, 11, 2, 0)),
        },
        Assessment {
            id: "assess-003".to_string(),
            patient_id: "pat-003".to_string(),
            patient_name: "Ana Beatriz Costa".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::LateralRight,
            status: AssessmentStatus::Completed,
            media_url: "/assets/demo-posture-lateral-r.jpg".to_string(),
            thumbnail_url: None,
            scores: Scores {
                overall: 58.0,
                head: 70.0,
                shoulders: 55.0,
                spine: 42.0,
                pelvis: 50.0,
                knee_left: 68.0,
                knee_right: 65.0,
            },
            landmarks: demo_landmarks(),
            angles: scaled_angles(1.5, |severity| match severity {
                Severity::Normal => Severity::Mild,
                _ => Severity::Severe,
            }),
            deviations: deviations.clone(),
            recommendations: recommendations.clone(),
            created_at: ts(2026, 1, 28, 16, 0, 0),
            completed_at: Some(ts(2026, 1, 28, 16, 3, 0)),
        },
        Assessment {
            id: "assess-004".to_string(),
            patient_id: "pat-004".to_string(),
            patient_name: "Pedro Henrique Lima".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::Posterior,
            status: AssessmentStatus::Completed,
            media_url: "/assets/demo-posture-posterior.jpg".to_string(),
            thumbnail_url: None,
            scores: Scores {
                overall: 45.0,
                head: 50.0,
                shoulders: 40.0,
                spine: 35.0,
                pelvis: 45.0,
                knee_left: 55.0,
                knee_right: 50.0,
            },
            landmarks: demo_landmarks(),
            angles: scaled_angles(2.0, |_| Severity::Severe),
            deviations: deviations
                .iter()
                .cloned()
                .map(|d| Deviation {
                    severity: Severity::Severe,
                    ..d
                })
                .collect(),
            recommendations: recommendations.clone(),
            created_at: ts(2026, 2, 10, 9, 30, 0),
            completed_at: Some(ts(2026, 2, 10, 9, 33, 0)),
        },
        Assessment {
            id: "assess-005".to_string(),
            patient_id: "pat-005".to_string(),
            patient_name: "Fernanda Rodrigues".to_string(),
            professional_id: "prof-001".to_string(),
            assessment_type: AssessmentType::Postural,
            view: CaptureView::Anterior,
            status: AssessmentStatus::Completed,
            media_url: "/assets/demo-posture-anterior-2.jpg".to_string(),
            thumbnail_url: None,
            scores: Scores {
                overall: 91.0,
                head: 95.0,
                shoulders: 90.0,
                spine: 88.0,
                pelvis: 92.0,
                knee_left: 90.0,
                knee_right: 93.0,
            },
            landmarks: demo_landmarks(),
            angles: scaled_angles(0.3, |_| Severity::Normal),
            deviations: vec![],
            recommendations: vec![],
            created_at: ts(2026, 2, 8, 10, 0, 0),
            completed_at: Some(ts(2026, 2, 8, 10, 1, 30)),
        },
    ]
}

fn demo_report(assessment: &Assessment) -> Report {
    Report {
        id: "report-001".to_string(),
        assessment_id: assessment.id.clone(),
        patient_id: assessment.patient_id.clone(),
        patient_name: assessment.patient_name.clone(),
        professional_name: "Dr. João Silva".to_string(),
        clinic_name: Some("Clínica PosturaViva".to_string()),
        generated_at: ts(2026, 1, 20, 14, 35, 0),
        share_token: Some("share-token-abc123".to_string()),
        share_url: Some("/reports/shared/share-token-abc123".to_string()),
        pdf_url: None,
        assessment: assessment.clone(),
    }
}

fn demo_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "plan-free".to_string(),
            name: "Free".to_string(),
            tier: PlanTier::Free,
            price: 0.0,
            currency: "BRL".to_string(),
            period: "mês".to_string(),
            popular: false,
            assessments_per_month: Some(5),
            features: features(&[
                ("Até 5 avaliações/mês", true),
                ("Até 10 pacientes", true),
                ("Detecção de pose básica", true),
                ("Relatório simplificado", true),
                ("Análise avançada de ângulos", false),
                ("Relatório PDF personalizado", false),
                ("Compartilhamento com branding", false),
                ("Suporte prioritário", false),
            ]),
        },
        Plan {
            id: "plan-pro".to_string(),
            name: "Professional".to_string(),
            tier: PlanTier::Professional,
            price: 97.0,
            currency: "BRL".to_string(),
            period: "mês".to_string(),
            popular: true,
            assessments_per_month: Some(50),
            features: features(&[
                ("Até 50 avaliações/mês", true),
                ("Pacientes ilimitados", true),
                ("Detecção de pose avançada", true),
                ("Relatório completo", true),
                ("Análise avançada de ângulos", true),
                ("Relatório PDF personalizado", true),
                ("Compartilhamento com branding", true),
                ("Suporte prioritário", false),
            ]),
        },
        Plan {
            id: "plan-clinic".to_string(),
            name: "Clinic".to_string(),
            tier: PlanTier::Clinic,
            price: 297.0,
            currency: "BRL".to_string(),
            period: "mês".to_string(),
            popular: false,
            assessments_per_month: None,
            features: features(&[
                ("Avaliações ilimitadas", true),
                ("Pacientes ilimitados", true),
                ("Detecção de pose avançada", true),
                ("Relatório completo", true),
                ("Análise avançada de ângulos", true),
                ("Relatório PDF personalizado", true),
                ("Compartilhamento com branding próprio", true),
                ("Suporte prioritário 24/7", true),
            ]),
        },
    ]
}

fn features(rows: &[(&str, bool)]) -> Vec<PlanFeature> {
    rows.iter()
        .map(|(text, included)| PlanFeature {
            text: text.to_string(),
            included: *included,
        })
        .collect()
}

fn demo_dashboard() -> DashboardStats {
    DashboardStats {
        total_patients: 6,
        total_assessments: 13,
        monthly_assessments: 5,
        average_score: Some(70.2),
        assessments_remaining: Some(45),
        recent_assessments: vec![
            recent("assess-004", "Pedro Henrique Lima", ts(2026, 2, 10, 9, 30, 0), 45.0),
            recent("assess-005", "Fernanda Rodrigues", ts(2026, 2, 8, 10, 0, 0), 91.0),
            recent("assess-002", "Carlos Oliveira", ts(2026, 2, 5, 11, 0, 0), 85.0),
            recent("assess-003", "Ana Beatriz Costa", ts(2026, 1, 28, 16, 0, 0), 58.0),
            recent("assess-001", "Maria Santos", ts(2026, 1, 20, 14, 30, 0), 72.0),
        ],
        weekly_activity: [2, 1, 3, 1, 4, 2, 3, 5]
            .into_iter()
            .enumerate()
            .map(|(i, assessments)| WeeklyActivity {
                week: format!("Sem {}", i + 1),
                assessments,
            })
            .collect(),
    }
}

fn recent(id: &str, patient_name: &str, date: DateTime<Utc>, score: f64) -> RecentAssessment {
    RecentAssessment {
        id: id.to_string(),
        patient_name: patient_name.to_string(),
        assessment_type: AssessmentType::Postural,
        date,
        score,
        status: AssessmentStatus::Completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::ScoreBand;

    #[test]
    fn test_every_assessment_references_an_existing_patient() {
        let fixtures = FixtureStore::shared();
        for assessment in &fixtures.assessments {
            let patient = fixtures
                .patient_by_id(&assessment.patient_id)
                .unwrap_or_else(|| panic!("missing patient {}", assessment.patient_id));
            assert_eq!(patient.name, assessment.patient_name);
        }
    }

    #[test]
    fn test_report_wraps_an_existing_assessment() {
        let fixtures = FixtureStore::shared();
        let wrapped = fixtures
            .assessment_by_id(&fixtures.report.assessment_id)
            .expect("report assessment exists");
        assert_eq!(fixtures.report.patient_id, wrapped.patient_id);
        assert!(fixtures.report.is_shared());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let fixtures = FixtureStore::shared();
        for assessment in &fixtures.assessments {
            let s = &assessment.scores;
            for value in [
                s.overall,
                s.head,
                s.shoulders,
                s.spine,
                s.pelvis,
                s.knee_left,
                s.knee_right,
            ] {
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_landmarks_are_normalized() {
        for landmark in demo_landmarks() {
            assert!((0.0..=1.0).contains(&landmark.x));
            assert!((0.0..=1.0).contains(&landmark.y));
            assert!((0.0..=1.0).contains(&landmark.confidence));
        }
    }

    #[test]
    fn test_search_probe_matches_exactly_one_patient() {
        let fixtures = FixtureStore::shared();
        let matched: Vec<_> = fixtures
            .patients
            .iter()
            .filter(|p| p.name_matches("mar"))
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Maria Santos");
    }

    #[test]
    fn test_dashboard_reflects_fixture_population() {
        let fixtures = FixtureStore::shared();
        assert_eq!(
            fixtures.dashboard.total_patients as usize,
            fixtures.patients.len()
        );
        for recent in &fixtures.dashboard.recent_assessments {
            assert!(fixtures.assessment_by_id(&recent.id).is_some());
        }
    }

    #[test]
    fn test_score_bands_cover_a_spread() {
        let fixtures = FixtureStore::shared();
        let bands: Vec<ScoreBand> = fixtures
            .assessments
            .iter()
            .map(|a| ScoreBand::from_score(a.scores.overall))
            .collect();
        assert!(bands.contains(&ScoreBand::Excellent));
        assert!(bands.contains(&ScoreBand::Good));
        assert!(bands.contains(&ScoreBand::Moderate));
    }

    #[test]
    fn test_plan_catalog_tiers() {
        let fixtures = FixtureStore::shared();
        assert_eq!(fixtures.plans.len(), 3);
        // Only the clinic tier is unquoted.
        assert!(fixtures.plans[2].assessments_per_month.is_none());
        assert!(fixtures.plans[0].assessments_per_month.is_some());
    }
}
