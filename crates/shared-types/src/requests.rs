use serde::{Deserialize, Serialize};

use crate::models::UserRole;

#[cfg(feature = "validation")]
use validator::Validate;

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
}

/// Fields submitted by the registration form. The role arrives as the
/// closed enum, never as a free-form string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_id: Option<String>,
}
