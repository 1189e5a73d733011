//! # Client Descriptor
//!
//! The configuration record handed to the external orchestration service's
//! constructor. The serialized shape is fixed by that service:
//!
//! ```json
//! {
//!   "id": "prepmate",
//!   "name": "Career Coach",
//!   "credentials": { "gemini": { "apiKey": "..." } }
//! }
//! ```
//!
//! When no key is configured the `apiKey` field is omitted, leaving the
//! provider entry empty rather than failing.

use serde::{Deserialize, Serialize};

use crate::credentials::CredentialMap;

/// Configuration record consumed by the orchestration service constructor
///
/// `Debug` output stays masked because [`CredentialMap`] masks its own
/// rendering; serialization is the one path that emits raw key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDescriptor {
    /// Unique application id
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// Provider name to secret mapping
    pub credentials: CredentialMap,
}
