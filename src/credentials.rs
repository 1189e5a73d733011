//! # Provider Credentials
//!
//! The credential map attached to the client handle. Keys are provider
//! names, values carry that provider's secret. Secret material is masked in
//! all `Debug` and log rendering; only explicit serialization of the
//! descriptor record emits the raw key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::GEMINI_PROVIDER;

/// Secret material for a single external provider
///
/// An absent key is representable: the handle is still constructed and the
/// serialized record simply omits the `apiKey` field. Authentication
/// failures then surface inside the orchestration service at first use,
/// not here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredential {
    /// Opaque secret string, `None` when the source variable was unset
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ProviderCredential {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Whether a non-empty key is configured
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    /// Masked rendering for logs and debug output
    #[must_use]
    pub fn masked(&self) -> &'static str {
        if self.api_key.is_some() {
            "***"
        } else {
            "<unset>"
        }
    }
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredential")
            .field("api_key", &self.masked())
            .finish()
    }
}

/// Mapping from provider name to that provider's credential
///
/// Serializes transparently as a map, so a populated entry renders as
/// `{"gemini": {"apiKey": "..."}}` in the descriptor record.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialMap {
    providers: BTreeMap<String, ProviderCredential>,
}

impl CredentialMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, provider: impl Into<String>, credential: ProviderCredential) {
        self.providers.insert(provider.into(), credential);
    }

    pub fn get(&self, provider: &str) -> Option<&ProviderCredential> {
        self.providers.get(provider)
    }

    /// Convenience accessor for the one provider this application registers
    pub fn gemini(&self) -> Option<&ProviderCredential> {
        self.get(GEMINI_PROVIDER)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderCredential)> {
        self.providers
            .iter()
            .map(|(provider, credential)| (provider.as_str(), credential))
    }
}

impl fmt::Debug for CredentialMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (provider, credential) in &self.providers {
            map.entry(provider, &credential.masked());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn absent_key_is_constructible_and_not_present() {
        let credential = ProviderCredential::new(None);
        assert!(!credential.is_present());
        assert_eq!(credential.masked(), "<unset>");
    }

    #[test]
    fn empty_key_is_not_present() {
        let credential = ProviderCredential::new(Some(String::new()));
        assert!(!credential.is_present());
    }

    #[test]
    fn credential_serializes_with_camel_case_key() {
        let credential = ProviderCredential::new(Some("secret123".to_string()));
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(value, json!({"apiKey": "secret123"}));
    }

    #[test]
    fn absent_credential_serializes_to_empty_object() {
        let credential = ProviderCredential::new(None);
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(value, json!({}));

        let round_tripped: ProviderCredential = serde_json::from_value(value).unwrap();
        assert_eq!(round_tripped, credential);
    }

    #[test]
    fn map_serializes_keyed_by_provider() {
        let mut credentials = CredentialMap::new();
        credentials.insert(
            GEMINI_PROVIDER,
            ProviderCredential::new(Some("secret123".to_string())),
        );

        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(value, json!({"gemini": {"apiKey": "secret123"}}));
    }

    #[test]
    fn gemini_accessor_reads_registered_entry() {
        let mut credentials = CredentialMap::new();
        assert!(credentials.gemini().is_none());
        assert!(credentials.is_empty());

        credentials.insert(
            GEMINI_PROVIDER,
            ProviderCredential::new(Some("secret123".to_string())),
        );
        assert_eq!(credentials.len(), 1);
        assert_eq!(
            credentials.gemini().and_then(|c| c.api_key.as_deref()),
            Some("secret123")
        );
    }

    proptest! {
        #[test]
        fn debug_rendering_never_contains_key_material(key in "sk-[A-Za-z0-9]{16,48}") {
            let mut credentials = CredentialMap::new();
            credentials.insert(GEMINI_PROVIDER, ProviderCredential::new(Some(key.clone())));

            let rendered = format!("{credentials:?}");
            prop_assert!(!rendered.contains(&key));

            let credential_rendered =
                format!("{:?}", credentials.gemini().expect("entry just inserted"));
            prop_assert!(!credential_rendered.contains(&key));
        }
    }
}
