use session::SessionSnapshot;
use shared_types::{GuardSettings, UserRole, UserStatus};

use crate::routes::find_route;

/// Outcome of evaluating a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still rehydrating; render a neutral waiting state.
    Loading,
    /// Render the destination.
    Authorized,
    /// Steer to the login entry point.
    RedirectLogin,
    /// Steer to the unauthorized destination.
    RedirectUnauthorized,
}

/// Decides whether the current session may enter a destination requiring
/// `allowed_roles` (empty = any authenticated identity).
///
/// Pure function of its inputs, re-evaluated independently on every
/// navigation — nothing here is cached or memoized.
pub fn evaluate(
    snapshot: &SessionSnapshot,
    allowed_roles: &[UserRole],
    settings: &GuardSettings,
) -> RouteDecision {
    if snapshot.is_loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &snapshot.user else {
        return RouteDecision::RedirectLogin;
    };
    if settings.require_active_status && user.status != UserStatus::Active {
        tracing::warn!(user_id = %user.id, status = %user.status, "Blocking non-active identity");
        return RouteDecision::RedirectUnauthorized;
    }
    if !allowed_roles.is_empty() && !allowed_roles.contains(&user.role) {
        tracing::info!(user_id = %user.id, role = %user.role, "Role not permitted for destination");
        return RouteDecision::RedirectUnauthorized;
    }
    RouteDecision::Authorized
}

/// Evaluates against a registered route path. `None` for unknown paths —
/// not-found handling belongs to the router, not the guard.
pub fn evaluate_path(
    snapshot: &SessionSnapshot,
    path: &str,
    settings: &GuardSettings,
) -> Option<RouteDecision> {
    find_route(path).map(|route| evaluate(snapshot, route.allowed_roles, settings))
}
