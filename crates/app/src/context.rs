use std::path::Path;
use std::sync::Arc;

use session::{AuthProvider, SessionStore, StorageBackend};
use shared_types::{AppConfig, AppError};

use crate::routes::validate_config;

/// Composition root handed to the shell: the session store plus the loaded
/// configuration. Replaces ambient global state with an explicit
/// construct → bootstrap → ready order.
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub config: AppConfig,
}

impl AppContext {
    /// Validates the static route configuration, builds the store, and
    /// rehydrates the session. Returns only once the session has left its
    /// loading state.
    pub async fn init(
        storage: Arc<dyn StorageBackend>,
        provider: Arc<dyn AuthProvider>,
        config: AppConfig,
    ) -> Result<Self, AppError> {
        validate_config()?;
        let session = Arc::new(SessionStore::new(storage, provider));
        session.bootstrap().await;
        Ok(Self { session, config })
    }
}

/// Reads `config.toml` from `dir`. A missing file yields defaults; a file
/// that fails to parse is reported and ignored.
pub fn load_config(dir: &Path) -> AppConfig {
    let path = dir.join("config.toml");
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), %e, "Ignoring unparseable config file");
            AppConfig::default()
        }
    }
}
