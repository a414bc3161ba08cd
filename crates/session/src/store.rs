use std::sync::{Arc, RwLock};

use rand::RngCore;
use shared_types::{AppError, AuthUser, LoginRequest, RegisterRequest, UserUpdate};
use validator::Validate;

use crate::provider::AuthProvider;
use crate::storage::{StorageBackend, AUTH_TOKEN_KEY, USER_DATA_KEY};

/// Read-only view of the session handed to guards and shells.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// True iff an identity is present. Derived, never stored, so the
    /// authenticated flag cannot drift from the identity.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug)]
struct SessionState {
    user: Option<AuthUser>,
    loading: bool,
}

/// Single source of truth for "who is logged in".
///
/// Explicitly owned and injected — construct it, await [`bootstrap`], then
/// hand it to the shell and guard. All mutations write through to the
/// injected [`StorageBackend`]; authentication itself is delegated to the
/// injected [`AuthProvider`].
///
/// [`bootstrap`]: SessionStore::bootstrap
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Arc<dyn StorageBackend>,
    provider: Arc<dyn AuthProvider>,
}

impl SessionStore {
    /// New store in the pre-bootstrap state: no identity, `loading` set.
    pub fn new(storage: Arc<dyn StorageBackend>, provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                user: None,
                loading: true,
            }),
            storage,
            provider,
        }
    }

    /// Rehydrates the session from durable storage, once at startup.
    ///
    /// Requires both the token and a parseable identity record; a record
    /// that fails to parse (including an unknown role string) purges both
    /// entries and leaves the session unauthenticated. Recovery is silent —
    /// nothing is surfaced to the user. The token is not validated against
    /// any backend; its presence is the whole check.
    pub async fn bootstrap(&self) {
        let token = self.storage.get(AUTH_TOKEN_KEY);
        let raw_user = self.storage.get(USER_DATA_KEY);

        let restored = match (token, raw_user) {
            (Some(_), Some(raw)) => match serde_json::from_str::<AuthUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(%e, "Discarding unreadable cached identity");
                    self.purge_storage();
                    None
                }
            },
            _ => None,
        };

        let mut state = self.state.write().unwrap();
        if let Some(user) = restored {
            tracing::info!(user_id = %user.id, role = %user.role, "Session restored from storage");
            state.user = Some(user);
        }
        state.loading = false;
    }

    /// Authenticates against the provider and persists the result.
    ///
    /// Single-flight: while a login or registration is in flight this fails
    /// with `Conflict` rather than racing the first attempt. On provider
    /// failure the session is left unauthenticated and the error propagates
    /// to the caller for presentation.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthUser, AppError> {
        req.validate().map_err(AppError::from)?;
        self.begin_auth()?;
        match self.provider.login(req).await {
            Ok(user) => self.finish_auth(user),
            Err(e) => {
                self.clear_loading();
                Err(e)
            }
        }
    }

    /// Same contract as [`login`], building the identity from the
    /// registration fields instead of inferring it.
    ///
    /// [`login`]: SessionStore::login
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, AppError> {
        req.validate().map_err(AppError::from)?;
        self.begin_auth()?;
        match self.provider.register(req).await {
            Ok(user) => self.finish_auth(user),
            Err(e) => {
                self.clear_loading();
                Err(e)
            }
        }
    }

    /// Clears the session and both durable entries. Never fails; storage
    /// errors are logged and swallowed.
    pub fn logout(&self) {
        self.purge_storage();
        let mut state = self.state.write().unwrap();
        let previous = state.user.take();
        state.loading = false;
        drop(state);
        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "Signed out");
        }
    }

    /// Merges profile fields into the current identity and re-persists the
    /// merged record. Fails with `Unauthorized` when no identity is present.
    pub fn update_user(&self, update: UserUpdate) -> Result<AuthUser, AppError> {
        let merged = {
            let mut state = self.state.write().unwrap();
            let Some(user) = state.user.as_mut() else {
                return Err(AppError::unauthorized("No signed-in user to update"));
            };
            user.apply_update(update);
            user.clone()
        };
        self.persist_user(&merged)?;
        Ok(merged)
    }

    /// Cheap clone-out view for the guard and shells.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap();
        SessionSnapshot {
            user: state.user.clone(),
            is_loading: state.loading,
        }
    }

    fn begin_auth(&self) -> Result<(), AppError> {
        let mut state = self.state.write().unwrap();
        if state.loading {
            return Err(AppError::conflict("Another sign-in attempt is already in progress"));
        }
        state.loading = true;
        Ok(())
    }

    fn finish_auth(&self, user: AuthUser) -> Result<AuthUser, AppError> {
        let token = issue_token();
        if let Err(e) = self
            .storage
            .set(AUTH_TOKEN_KEY, &token)
            .and_then(|_| self.persist_user(&user))
        {
            // Half-written sessions must not survive a reload.
            self.purge_storage();
            self.clear_loading();
            return Err(e);
        }

        let mut state = self.state.write().unwrap();
        state.user = Some(user.clone());
        state.loading = false;
        drop(state);
        tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
        Ok(user)
    }

    fn persist_user(&self, user: &AuthUser) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::internal(format!("encode identity record: {e}")))?;
        self.storage.set(USER_DATA_KEY, &raw)
    }

    fn purge_storage(&self) {
        for key in [AUTH_TOKEN_KEY, USER_DATA_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, %e, "Failed to clear session entry");
            }
        }
    }

    fn clear_loading(&self) {
        self.state.write().unwrap().loading = false;
    }
}

/// Opaque bearer placeholder: 32 random bytes, hex-encoded. A production
/// rebuild swaps this for the credential its provider returns.
fn issue_token() -> String {
    let mut buf = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}
