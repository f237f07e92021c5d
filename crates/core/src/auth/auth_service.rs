//! The signed-in session resource.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{debug, warn};

use super::auth_model::{AuthResponse, Credentials, Registration};
use super::auth_traits::AuthApi;
use super::token::{decode_claims, TokenClaims};
use crate::errors::{Error, Result};
use crate::professionals::{Professional, ProfessionalsApi, ProfileUpdate};
use crate::resource::ResourceState;
use crate::session::Session;

/// Binds the signed-in professional to the fetch lifecycle.
///
/// On startup [`AuthSession::restore`] revalidates a persisted token
/// against the profile endpoint. While the backend is unreachable the
/// unverified token claims stand in as a display-only identity; any
/// application error invalidates the session instead.
pub struct AuthSession {
    auth: Arc<dyn AuthApi>,
    professionals: Arc<dyn ProfessionalsApi>,
    session: Arc<Session>,
    state: Mutex<ResourceState<Professional>>,
}

impl AuthSession {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        professionals: Arc<dyn ProfessionalsApi>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            auth,
            professionals,
            session,
            state: Mutex::new(ResourceState::new()),
        }
    }

    /// Revalidates a persisted session, if any.
    ///
    /// No token means nothing to restore. With a token, a live profile
    /// wins; offline, the decoded token claims stand in; a token the
    /// backend rejects (or that does not even decode) clears the session.
    pub async fn restore(&self) -> Result<()> {
        let Some(token) = self.session.token() else {
            return Ok(());
        };
        let ticket = self.state.lock().unwrap().begin();
        match self.professionals.get_profile().await {
            Ok(profile) => {
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Ok(profile), || None);
            }
            Err(err) if err.is_offline() => match decode_claims(&token) {
                Some(claims) => {
                    debug!("backend unreachable, using token claims for display");
                    self.state.lock().unwrap().settle(
                        ticket,
                        Err(err),
                        || Some(professional_from_claims(claims)),
                    );
                }
                None => {
                    warn!("stored token is not decodable, signing out");
                    self.invalidate()?;
                }
            },
            Err(err) => {
                debug!("stored session rejected ({}), signing out", err);
                self.invalidate()?;
            }
        }
        Ok(())
    }

    /// Signs in and adopts the returned identity.
    ///
    /// Validation failures surface before any request is made; backend
    /// failures propagate to the caller for form-level display.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        credentials.validate()?;
        let ticket = self.state.lock().unwrap().begin();
        match self.auth.login(credentials).await {
            Ok(response) => {
                let professional = response.professional.clone().into_professional();
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Ok(professional), || None);
                Ok(response)
            }
            Err(err) => {
                self.state.lock().unwrap().reset();
                Err(err)
            }
        }
    }

    /// Creates an account and adopts the returned identity.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        registration.validate()?;
        let ticket = self.state.lock().unwrap().begin();
        match self.auth.register(registration).await {
            Ok(response) => {
                let professional = response.professional.clone().into_professional();
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Ok(professional), || None);
                Ok(response)
            }
            Err(err) => {
                self.state.lock().unwrap().reset();
                Err(err)
            }
        }
    }

    /// Signs out and forgets the identity.
    pub async fn logout(&self) -> Result<()> {
        self.auth.logout().await?;
        self.state.lock().unwrap().reset();
        Ok(())
    }

    /// Re-fetches the full profile.
    pub async fn refresh_profile(&self) -> Result<Professional> {
        let ticket = self.state.lock().unwrap().begin();
        let outcome = self.professionals.get_profile().await;
        match outcome {
            Ok(profile) => {
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Ok(profile.clone()), || None);
                Ok(profile)
            }
            Err(err) => {
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Err(err.clone()), || None);
                Err(err)
            }
        }
    }

    /// Updates the profile and adopts the returned record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Professional> {
        let ticket = self.state.lock().unwrap().begin();
        match self.professionals.update_profile(update).await {
            Ok(profile) => {
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Ok(profile.clone()), || None);
                Ok(profile)
            }
            Err(err) => {
                self.state
                    .lock()
                    .unwrap()
                    .settle(ticket, Err(err.clone()), || None);
                Err(err)
            }
        }
    }

    fn invalidate(&self) -> Result<()> {
        self.session.clear_token()?;
        self.state.lock().unwrap().reset();
        Ok(())
    }

    pub fn user(&self) -> Option<Professional> {
        self.state.lock().unwrap().value().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().unwrap().value().is_some()
    }

    /// True when the current identity came from token claims rather than a
    /// live profile fetch.
    pub fn is_offline_identity(&self) -> bool {
        self.state
            .lock()
            .unwrap()
            .data()
            .is_some_and(|d| d.is_fallback())
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn error(&self) -> Option<Error> {
        self.state.lock().unwrap().error().cloned()
    }
}

/// Display-only identity synthesized from unverified token claims.
fn professional_from_claims(claims: TokenClaims) -> Professional {
    Professional {
        id: claims.id,
        name: claims.name.unwrap_or_else(|| "Profissional".to_string()),
        email: claims.email,
        profession: None,
        register_number: None,
        clinic_name: None,
        phone: None,
        logo_url: None,
        brand_color: None,
        locale: None,
        plan: claims.plan.unwrap_or_default(),
        plan_status: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}
