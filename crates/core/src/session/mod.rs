//! Session state: the bearer token and display locale, persisted through
//! a pluggable credential store.

mod credential_store;
#[allow(clippy::module_inception)]
mod session;

pub use credential_store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use session::Session;
