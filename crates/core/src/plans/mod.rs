//! Subscription plan catalog. Reference data only.

mod plans_model;
mod plans_service;
mod plans_traits;

pub use plans_model::{Plan, PlanFeature};
pub use plans_service::PlansResource;
pub use plans_traits::PlansApi;
