//! Route-level access-control decision.
//!
//! The host shell asks this before rendering a route; performing the
//! actual navigation stays with the host.

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &["/", "/login", "/register", "/forgot-password", "/reset-password"];

/// Routes that only make sense without a session.
pub const AUTH_ROUTES: &[&str] = &["/login", "/register", "/forgot-password", "/reset-password"];

/// What the shell should do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render the requested route.
    Proceed,
    /// Send the visitor to the login screen, remembering where they were
    /// headed.
    RedirectToLogin { next: String },
    /// Send an already-signed-in visitor to the dashboard.
    RedirectToDashboard,
}

/// Decides whether `path` may be visited given the session state.
///
/// Asset and API paths always pass through. Signed-in visitors are kept
/// out of the auth screens; signed-out visitors are kept out of
/// everything non-public, with the intended destination preserved.
pub fn guard_route(path: &str, authenticated: bool) -> RouteAction {
    if path.starts_with("/_") || path.starts_with("/api") || path.contains("/.") {
        return RouteAction::Proceed;
    }

    let is_auth_route = AUTH_ROUTES.iter().any(|route| path.starts_with(route));
    let is_public_route = PUBLIC_ROUTES.contains(&path);

    if authenticated && is_auth_route {
        return RouteAction::RedirectToDashboard;
    }
    if !authenticated && !is_public_route {
        return RouteAction::RedirectToLogin {
            next: path.to_string(),
        };
    }
    RouteAction::Proceed
}
