use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a college tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CollegeStatus {
    Active,
    Inactive,
}

/// College/tenant record. Identities other than the super admin belong to
/// exactly one college via `AuthUser::college_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct College {
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub admin_id: String,
    pub status: CollegeStatus,
    pub created_at: DateTime<Utc>,
    pub courses_count: i64,
    pub students_count: i64,
}
