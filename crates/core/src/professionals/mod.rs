//! Professional (account holder) domain: profile, plan tier, dashboard.

mod dashboard_service;
mod professionals_model;
mod professionals_traits;

pub use dashboard_service::DashboardResource;
pub use professionals_model::{
    DashboardStats, PlanTier, Profession, Professional, ProfileUpdate, RecentAssessment,
    WeeklyActivity,
};
pub use professionals_traits::ProfessionalsApi;
