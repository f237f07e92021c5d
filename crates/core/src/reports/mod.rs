//! Report domain: read-optimized assessment wrappers and share grants.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{Report, ShareGrant};
pub use reports_service::{ReportResource, SharedReportResource};
pub use reports_traits::ReportsApi;
