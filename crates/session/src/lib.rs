//! Session core: durable storage, the authentication-provider seam, and
//! the session store that owns the authenticated identity.

pub mod provider;
pub mod storage;
pub mod store;

pub use provider::{AuthProvider, MockAuthProvider};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, AUTH_TOKEN_KEY, USER_DATA_KEY};
pub use store::{SessionSnapshot, SessionStore};
