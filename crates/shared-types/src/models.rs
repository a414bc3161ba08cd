use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform role controlling which destinations a user may enter.
///
/// - `SuperAdmin` — platform operator; manages colleges across tenants.
/// - `Admin` — college administrator; manages users inside one college.
/// - `Trainer` — delivers courses; manages assignments and attendance.
/// - `Staff` — non-teaching college staff; coordinates groups and schedules.
/// - `Student` — enrolled learner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Trainer,
    Staff,
    Student,
}

impl UserRole {
    /// Every role, for config validation and exhaustive test matrices.
    pub const ALL: [UserRole; 5] = [
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::Trainer,
        UserRole::Staff,
        UserRole::Student,
    ];

    /// Strict parse. Persisted records and route configuration must never
    /// fall back on a default role, so unknown strings are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(UserRole::SuperAdmin),
            "admin" => Some(UserRole::Admin),
            "trainer" => Some(UserRole::Trainer),
            "staff" => Some(UserRole::Staff),
            "student" => Some(UserRole::Student),
            _ => None,
        }
    }

    /// Lowercase string for durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Trainer => "trainer",
            UserRole::Staff => "staff",
            UserRole::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. The access guard blocks non-`Active` identities unless
/// the policy is relaxed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user record.
///
/// `college_id` is the tenant the identity belongs to; absent only for
/// `SuperAdmin`. `permissions` carries capability strings populated at
/// login but not consulted by the guard — role alone gates access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub join_date: String,
    pub status: UserStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl AuthUser {
    /// Merges a partial profile update into this record. Absent fields are
    /// left unchanged.
    pub fn apply_update(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(department) = update.department {
            self.department = Some(department);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
    }
}

/// Partial profile update merged into the current identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
