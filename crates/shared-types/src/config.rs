use serde::{Deserialize, Serialize};

/// Access-guard policy knobs.
///
/// Loaded from `config.toml` at startup. Defaults are the strict policy, so
/// a missing or incomplete config file never weakens the guard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuardSettings {
    /// Redirect identities whose status is not `active` to the
    /// unauthorized destination even when the role matches.
    #[serde(default = "default_true")]
    pub require_active_status: bool,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            require_active_status: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub guard: GuardSettings,
}
