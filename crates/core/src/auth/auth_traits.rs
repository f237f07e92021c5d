//! Backend contract for authentication operations.

use async_trait::async_trait;

use super::auth_model::{AuthResponse, Credentials, Registration};
use crate::errors::Result;

/// Authentication endpoints, implemented by the HTTP client.
///
/// `login` and `register` store the returned token in the session before
/// returning; `logout` clears it.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    async fn register(&self, registration: &Registration) -> Result<AuthResponse>;

    async fn logout(&self) -> Result<()>;
}
