//! Authentication domain: credentials, the session resource, and the
//! best-effort offline token decode.

mod auth_model;
mod auth_service;
mod auth_traits;
mod token;

pub use auth_model::{AuthResponse, Credentials, ProfessionalSummary, Registration};
pub use auth_service::AuthSession;
pub use auth_traits::AuthApi;
pub use token::{decode_claims, TokenClaims};
