use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use shared_types::{
    AppError, AuthUser, College, CollegeStatus, LoginRequest, RegisterRequest, UserRole,
    UserStatus,
};
use uuid::Uuid;

/// Backend that exchanges submitted credentials for an identity.
///
/// The session store is provider-agnostic: a production deployment
/// implements this against the real authentication API, while
/// [`MockAuthProvider`] answers deterministically for demos and tests. The
/// store itself carries no credential logic.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser, AppError>;
    async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, AppError>;
}

/// Deterministic stand-in for the real authentication service.
///
/// Accepts any syntactically valid credentials — there is no verification.
/// The identity is derived from the submitted email: the first matching
/// substring of `super`, `admin`, `trainer`, `staff` picks the role, and
/// every non-super-admin lands in the demo college.
pub struct MockAuthProvider {
    delay: Duration,
    colleges: Vec<College>,
}

impl MockAuthProvider {
    /// Provider with the 1s artificial delay of a slow network round-trip.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }

    /// Provider with a custom delay; tests use `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            colleges: default_catalog(),
        }
    }

    fn college_name(&self, id: &str) -> Option<String> {
        self.colleges
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    fn infer_role(email: &str) -> UserRole {
        if email.contains("super") {
            UserRole::SuperAdmin
        } else if email.contains("admin") {
            UserRole::Admin
        } else if email.contains("trainer") {
            UserRole::Trainer
        } else if email.contains("staff") {
            UserRole::Staff
        } else {
            UserRole::Student
        }
    }

    fn infer_name(email: &str) -> &'static str {
        if email.contains("admin") {
            "John Admin"
        } else if email.contains("trainer") {
            "Sarah Trainer"
        } else if email.contains("staff") {
            "Mike Staff"
        } else {
            "Alice Student"
        }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser, AppError> {
        tokio::time::sleep(self.delay).await;

        let role = Self::infer_role(&req.email);
        let college_id = (role != UserRole::SuperAdmin).then(|| "college-1".to_string());
        let college_name = college_id.as_deref().and_then(|id| self.college_name(id));

        Ok(AuthUser {
            id: "1".into(),
            email: req.email.clone(),
            name: Self::infer_name(&req.email).into(),
            avatar: None,
            role,
            college_id,
            college_name,
            department: Some("Computer Science".into()),
            phone: Some("+1234567890".into()),
            join_date: "2024-01-01".into(),
            status: UserStatus::Active,
            permissions: Vec::new(),
        })
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, AppError> {
        tokio::time::sleep(self.delay).await;

        Ok(AuthUser {
            id: Uuid::new_v4().to_string(),
            email: req.email.clone(),
            name: req.name.clone(),
            avatar: None,
            role: req.role,
            college_id: req.college_id.clone(),
            college_name: req.college_id.as_deref().and_then(|id| self.college_name(id)),
            department: None,
            phone: None,
            join_date: Utc::now().format("%Y-%m-%d").to_string(),
            status: UserStatus::Active,
            permissions: Vec::new(),
        })
    }
}

fn default_catalog() -> Vec<College> {
    vec![College {
        id: "college-1".into(),
        name: "Tech University".into(),
        address: "1 Campus Way".into(),
        contact_email: "office@techuniversity.edu".into(),
        contact_phone: "+1234567000".into(),
        admin_id: "admin-1".into(),
        status: CollegeStatus::Active,
        created_at: Utc::now(),
        courses_count: 24,
        students_count: 1250,
    }]
}
