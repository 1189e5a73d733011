//! # Client Configuration
//!
//! Explicit configuration for the orchestration client. Replaces the
//! ambient environment read with a loadable, injectable struct: defaults
//! carry the application identity, an optional TOML file may override it,
//! and environment variables take highest precedence.
//!
//! ## Usage
//!
//! ```rust
//! use prepmate_client::config::ClientConfig;
//!
//! // Default configuration carries the application identity
//! let config = ClientConfig::default();
//! assert_eq!(config.app.id, "prepmate");
//! assert_eq!(config.app.name, "Career Coach");
//! assert!(config.credentials.gemini_api_key.is_none());
//! ```
//!
//! ```rust,no_run
//! use prepmate_client::config::ClientConfig;
//!
//! // Layered loading: defaults <- optional config file <- environment
//! let config = ClientConfig::load();
//! println!("Registering as {}", config.app.id);
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{APP_DISPLAY_NAME, APP_ID};

/// Application identity as registered with the orchestration service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unique application id
    pub id: String,
    /// Human-readable display name
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id: APP_ID.to_string(),
            name: APP_DISPLAY_NAME.to_string(),
        }
    }
}

/// Provider credential settings
///
/// One recognized option: the Gemini API key, passed to provider "gemini"
/// in the client's credential map. Absence is tolerated; see
/// [`crate::client::EventClient::from_config`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_deref().map(|_| "***"),
            )
            .finish()
    }
}

/// Root client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application identity
    #[serde(default)]
    pub app: AppConfig,
    /// Provider credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl ClientConfig {
    /// Set the Gemini API key, for injection in tests and embedding callers
    #[must_use]
    pub fn with_gemini_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials.gemini_api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_application_identity() {
        let config = ClientConfig::default();
        assert_eq!(config.app.id, "prepmate");
        assert_eq!(config.app.name, "Career Coach");
        assert!(config.credentials.gemini_api_key.is_none());
    }

    #[test]
    fn with_gemini_api_key_sets_credential() {
        let config = ClientConfig::default().with_gemini_api_key("secret123");
        assert_eq!(config.credentials.gemini_api_key.as_deref(), Some("secret123"));
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let config = ClientConfig::default().with_gemini_api_key("secret123");
        let rendered = toml::to_string(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_file_falls_back_to_identity_defaults() {
        let parsed: ClientConfig = toml::from_str(
            r#"
            [credentials]
            gemini_api_key = "from-file"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.app.id, "prepmate");
        assert_eq!(parsed.app.name, "Career Coach");
        assert_eq!(parsed.credentials.gemini_api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn debug_rendering_masks_credential() {
        let config = ClientConfig::default().with_gemini_api_key("secret123");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret123"));
        assert!(rendered.contains("***"));
    }
}
