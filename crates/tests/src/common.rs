use std::sync::Arc;
use std::time::Duration;

use session::{AuthProvider, MemoryStorage, MockAuthProvider, SessionStore, StorageBackend};
use shared_types::{AppError, AuthUser, LoginRequest, RegisterRequest, UserRole, UserStatus};

/// Store wired to fresh in-memory storage and the zero-delay mock provider.
pub fn mock_store() -> (Arc<MemoryStorage>, Arc<SessionStore>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_on(storage.clone());
    (storage, store)
}

/// Store sharing `storage`, for reload simulations.
pub fn store_on(storage: Arc<dyn StorageBackend>) -> Arc<SessionStore> {
    let provider: Arc<dyn AuthProvider> = Arc::new(MockAuthProvider::with_delay(Duration::ZERO));
    Arc::new(SessionStore::new(storage, provider))
}

/// Bootstrapped store, ready for sign-in.
pub async fn ready_store() -> (Arc<MemoryStorage>, Arc<SessionStore>) {
    let (storage, store) = mock_store();
    store.bootstrap().await;
    (storage, store)
}

pub fn login_req(email: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: "password123".into(),
    }
}

pub fn register_req(name: &str, email: &str, role: UserRole) -> RegisterRequest {
    RegisterRequest {
        name: name.into(),
        email: email.into(),
        password: "password123".into(),
        role,
        college_id: Some("college-1".into()),
    }
}

pub fn sample_user(role: UserRole, status: UserStatus) -> AuthUser {
    AuthUser {
        id: "42".into(),
        email: "someone@college.edu".into(),
        name: "Someone".into(),
        avatar: None,
        role,
        college_id: Some("college-1".into()),
        college_name: Some("Tech University".into()),
        department: Some("Computer Science".into()),
        phone: None,
        join_date: "2024-01-01".into(),
        status,
        permissions: Vec::new(),
    }
}

/// Provider that always rejects, standing in for a backend outage or a
/// real service refusing the credentials.
pub struct FailingProvider;

#[async_trait::async_trait]
impl AuthProvider for FailingProvider {
    async fn login(&self, _req: &LoginRequest) -> Result<AuthUser, AppError> {
        Err(AppError::unauthorized("Invalid credentials"))
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<AuthUser, AppError> {
        Err(AppError::unauthorized("Registration rejected"))
    }
}
