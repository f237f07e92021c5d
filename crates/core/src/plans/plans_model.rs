//! Subscription plan models.

use serde::{Deserialize, Serialize};

use crate::professionals::PlanTier;

/// One subscription tier as offered on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: PlanTier,
    pub price: f64,
    pub currency: String,
    pub period: String,
    pub features: Vec<PlanFeature>,
    pub popular: bool,
    /// Monthly assessment quota; `None` means unlimited.
    pub assessments_per_month: Option<u32>,
}

/// One line of a plan's feature list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_wire_shape() {
        let json = r#"{
            "id": "plan-clinic",
            "name": "Clinic",
            "type": "CLINIC",
            "price": 297,
            "currency": "BRL",
            "period": "mês",
            "features": [{"text": "Avaliações ilimitadas", "included": true}],
            "popular": false,
            "assessmentsPerMonth": null
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.tier, PlanTier::Clinic);
        // null quota means unlimited
        assert_eq!(plan.assessments_per_month, None);
        assert!(plan.features[0].included);
    }
}
