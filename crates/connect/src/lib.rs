//! PostureKit Connect - HTTP client for the assessment backend.
//!
//! One client, one method per backend operation, implementing the API
//! traits defined in `posturekit-core`. The client owns the bearer-token
//! lifecycle: it attaches the session token to every request, stores the
//! token returned by login/register, and on any 401 clears it and
//! notifies the host.

mod client;
mod config;

pub use client::{ApiClient, UnauthorizedHook};
pub use config::ConnectConfig;
