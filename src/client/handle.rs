//! # Event Client Handle
//!
//! The immutable, shareable handle this application presents to the
//! external orchestration service.

use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

use super::descriptor::ClientDescriptor;
use crate::config::ClientConfig;
use crate::constants::GEMINI_PROVIDER;
use crate::credentials::{CredentialMap, ProviderCredential};
use crate::error::ClientResult;

static GLOBAL_CLIENT: OnceLock<EventClient> = OnceLock::new();

/// Configured handle to the external orchestration service
///
/// Carries the application identity and provider credentials, nothing
/// else: event dispatch, function registration, and execution live behind
/// the orchestration service's own API. The handle is immutable after
/// construction and `Send + Sync`, so concurrent readers share it without
/// locking.
///
/// # Examples
///
/// ```rust
/// use prepmate_client::{ClientConfig, EventClient};
///
/// let config = ClientConfig::default().with_gemini_api_key("secret123");
/// let client = EventClient::from_config(&config);
/// assert_eq!(client.app_id(), "prepmate");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EventClient {
    app_id: String,
    display_name: String,
    credentials: CredentialMap,
}

impl EventClient {
    /// Construct a handle from explicit configuration
    ///
    /// Pure and local: reads only the given config, performs no I/O, and
    /// never fails. A missing Gemini key yields a handle with an absent
    /// credential; the orchestration service reports the failure when the
    /// credential is first used.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut credentials = CredentialMap::new();
        credentials.insert(
            GEMINI_PROVIDER,
            ProviderCredential::new(config.credentials.gemini_api_key.clone()),
        );

        Self {
            app_id: config.app.id.clone(),
            display_name: config.app.name.clone(),
            credentials,
        }
    }

    /// Process-wide handle, constructed once on first access
    ///
    /// The first call runs [`ClientConfig::load`] (environment over
    /// optional config file over defaults) and builds the handle; every
    /// subsequent call returns the same reference for the lifetime of the
    /// process.
    pub fn global() -> &'static EventClient {
        GLOBAL_CLIENT.get_or_init(|| {
            let config = ClientConfig::load();
            let client = Self::from_config(&config);
            debug!(
                app_id = %client.app_id,
                display_name = %client.display_name,
                gemini_credential = client
                    .credentials
                    .gemini()
                    .map_or("<unset>", ProviderCredential::masked),
                "Constructed process-wide event client"
            );
            client
        })
    }

    /// Unique application id registered with the orchestration service
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Provider credential map
    pub fn credentials(&self) -> &CredentialMap {
        &self.credentials
    }

    /// The Gemini API key, if one was configured
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.credentials
            .gemini()
            .and_then(|credential| credential.api_key.as_deref())
    }

    /// The configuration record the orchestration constructor consumes
    #[must_use]
    pub fn descriptor(&self) -> ClientDescriptor {
        ClientDescriptor {
            id: self.app_id.clone(),
            name: self.display_name.clone(),
            credentials: self.credentials.clone(),
        }
    }

    /// The descriptor as a JSON value
    pub fn descriptor_json(&self) -> ClientResult<serde_json::Value> {
        Ok(serde_json::to_value(self.descriptor())?)
    }
}

impl fmt::Debug for EventClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventClient")
            .field("app_id", &self.app_id)
            .field("display_name", &self.display_name)
            .field("credentials", &self.credentials)
            .finish()
    }
}
