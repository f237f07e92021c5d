//! The process-wide authentication context.

use std::sync::{Arc, RwLock};

use log::debug;

use super::CredentialStore;
use crate::constants::{ACCESS_TOKEN_KEY, LOCALE_KEY};
use crate::errors::Result;

/// Shared session handed to the HTTP client at construction.
///
/// The token is the only cross-request mutable state in the layer. It is
/// read by every outgoing request and written only here: set on
/// login/register, cleared on logout or a 401 response. All mutation goes
/// through these methods; nothing else touches the credential store.
pub struct Session {
    store: Arc<dyn CredentialStore>,
    token: RwLock<Option<String>>,
    locale: RwLock<Option<String>>,
}

impl Session {
    /// Builds a session hydrated from the credential store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Result<Self> {
        let token = store.get(ACCESS_TOKEN_KEY)?;
        let locale = store.get(LOCALE_KEY)?;
        Ok(Self {
            store,
            token: RwLock::new(token),
            locale: RwLock::new(locale),
        })
    }

    /// Convenience constructor backed by an in-memory store.
    pub fn ephemeral() -> Self {
        Self {
            store: Arc::new(super::MemoryCredentialStore::new()),
            token: RwLock::new(None),
            locale: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, token)?;
        *self.token.write().unwrap() = Some(token.to_string());
        debug!("session token updated");
        Ok(())
    }

    pub fn clear_token(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN_KEY)?;
        *self.token.write().unwrap() = None;
        debug!("session token cleared");
        Ok(())
    }

    pub fn locale(&self) -> Option<String> {
        self.locale.read().unwrap().clone()
    }

    pub fn set_locale(&self, locale: &str) -> Result<()> {
        self.store.set(LOCALE_KEY, locale)?;
        *self.locale.write().unwrap() = Some(locale.to_string());
        Ok(())
    }
}
