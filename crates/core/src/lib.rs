//! PostureKit Core - Domain models, resource layer, and offline fixtures.
//!
//! This crate contains the backend-agnostic half of the PostureKit data
//! layer: domain models, the API trait seams implemented by the `connect`
//! crate, the per-resource fetch bindings with their transparent fixture
//! fallback, and session state.

pub mod assessments;
pub mod auth;
pub mod constants;
pub mod errors;
pub mod fixtures;
pub mod media;
pub mod pagination;
pub mod patients;
pub mod plans;
pub mod professionals;
pub mod reports;
pub mod resource;
pub mod routing;
pub mod session;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the pieces a host wires together
pub use fixtures::FixtureStore;
pub use pagination::Page;
pub use resource::{ResourceData, ResourceState};
pub use session::Session;
