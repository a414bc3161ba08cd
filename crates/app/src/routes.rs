use shared_types::{AppError, UserRole};

use crate::navigation::NAVIGATION;

/// A destination under the authenticated shell and the roles allowed to
/// enter it. An empty role list means any authenticated identity may enter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteDef {
    pub path: &'static str,
    pub allowed_roles: &'static [UserRole],
}

/// The destination tree, fixed at build time. Role sets are typed against
/// the closed enum, so a free-form role string cannot exist here.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "dashboard",
        allowed_roles: &[],
    },
    RouteDef {
        path: "colleges",
        allowed_roles: &[UserRole::SuperAdmin],
    },
    RouteDef {
        path: "users",
        allowed_roles: &[UserRole::SuperAdmin, UserRole::Admin],
    },
    RouteDef {
        path: "courses",
        allowed_roles: &[
            UserRole::SuperAdmin,
            UserRole::Admin,
            UserRole::Trainer,
            UserRole::Student,
        ],
    },
    RouteDef {
        path: "my-courses",
        allowed_roles: &[UserRole::Student],
    },
    RouteDef {
        path: "assignments",
        allowed_roles: &[UserRole::Trainer, UserRole::Student],
    },
    RouteDef {
        path: "groups",
        allowed_roles: &[UserRole::Staff, UserRole::Student],
    },
    RouteDef {
        path: "calendar",
        allowed_roles: &[],
    },
    RouteDef {
        path: "schedule",
        allowed_roles: &[],
    },
    RouteDef {
        path: "progress",
        allowed_roles: &[],
    },
    RouteDef {
        path: "attendance",
        allowed_roles: &[],
    },
    RouteDef {
        path: "analytics",
        allowed_roles: &[],
    },
    RouteDef {
        path: "settings",
        allowed_roles: &[],
    },
];

/// Looks up a destination by path.
pub fn find_route(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.path == path)
}

/// Startup validation of the static configuration: route paths are unique,
/// role lists carry no duplicates, and every navigation item resolves to a
/// registered route.
pub fn validate_config() -> Result<(), AppError> {
    for (i, route) in ROUTES.iter().enumerate() {
        if ROUTES[..i].iter().any(|r| r.path == route.path) {
            return Err(AppError::internal(format!(
                "duplicate route path: {}",
                route.path
            )));
        }
        for (j, role) in route.allowed_roles.iter().enumerate() {
            if route.allowed_roles[..j].contains(role) {
                return Err(AppError::internal(format!(
                    "duplicate role {role} on route {}",
                    route.path
                )));
            }
        }
    }
    for item in NAVIGATION {
        if find_route(item.path).is_none() {
            return Err(AppError::internal(format!(
                "navigation item {} points at unregistered route {}",
                item.title, item.path
            )));
        }
    }
    Ok(())
}
