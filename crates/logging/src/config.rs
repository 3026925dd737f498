use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the logging install
///
/// `level` accepts the full `EnvFilter` directive syntax, so both plain
/// levels (`"info"`) and per-target overrides (`"info,hyper=warn"`) work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives applied at install time
    pub level: String,
    /// Emit records as JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Loads the configuration from environment variables
    ///
    /// * `OMNITOOL_LOG` - filter directives (default: `info`)
    /// * `OMNITOOL_LOG_JSON` - `true` to emit JSON lines (default: `false`)
    pub fn from_env() -> Self {
        let level = env::var("OMNITOOL_LOG").unwrap_or_else(|_| "info".to_string());
        let json = env::var("OMNITOOL_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self { level, json }
    }
}
