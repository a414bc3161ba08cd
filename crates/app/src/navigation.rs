use shared_types::UserRole;

/// A sidebar entry. Rendering is out of scope; this registry is the
/// configuration the shell filters per role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub roles: &'static [UserRole],
}

/// The sidebar source of truth. Unlike route role sets, every entry lists
/// its audience explicitly — an item with no roles would be invisible.
pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "dashboard",
        roles: &UserRole::ALL,
    },
    NavItem {
        title: "Colleges",
        path: "colleges",
        roles: &[UserRole::SuperAdmin],
    },
    NavItem {
        title: "Users",
        path: "users",
        roles: &[UserRole::SuperAdmin, UserRole::Admin],
    },
    NavItem {
        title: "Courses",
        path: "courses",
        roles: &[
            UserRole::SuperAdmin,
            UserRole::Admin,
            UserRole::Trainer,
            UserRole::Student,
        ],
    },
    NavItem {
        title: "My Courses",
        path: "my-courses",
        roles: &[UserRole::Student],
    },
    NavItem {
        title: "Assignments",
        path: "assignments",
        roles: &[UserRole::Trainer, UserRole::Student],
    },
    NavItem {
        title: "Groups",
        path: "groups",
        roles: &[UserRole::Staff, UserRole::Student],
    },
    NavItem {
        title: "Calendar",
        path: "calendar",
        roles: &UserRole::ALL,
    },
    NavItem {
        title: "Attendance",
        path: "attendance",
        roles: &[UserRole::Trainer, UserRole::Staff],
    },
    NavItem {
        title: "Progress",
        path: "progress",
        roles: &[UserRole::Trainer, UserRole::Student],
    },
    NavItem {
        title: "Schedule",
        path: "schedule",
        roles: &[UserRole::Trainer, UserRole::Staff, UserRole::Student],
    },
    NavItem {
        title: "Analytics",
        path: "analytics",
        roles: &[UserRole::SuperAdmin, UserRole::Admin, UserRole::Trainer],
    },
    NavItem {
        title: "Settings",
        path: "settings",
        roles: &UserRole::ALL,
    },
];

/// Entries visible to the given role, in registry order.
pub fn visible_items(role: UserRole) -> Vec<&'static NavItem> {
    NAVIGATION.iter().filter(|item| item.roles.contains(&role)).collect()
}
