//! # Client Factory
//!
//! Construction and exposure of the configured orchestration handle.
//!
//! ## Architecture
//!
//! - **EventClient**: immutable handle carrying application identity and
//!   the provider credential map
//! - **ClientDescriptor**: the serializable configuration record the
//!   external orchestration constructor consumes
//!
//! Two construction paths exist. [`EventClient::from_config`] builds a
//! handle from an explicit, injectable [`crate::config::ClientConfig`];
//! [`EventClient::global`] builds the process-wide handle exactly once and
//! hands out the same reference thereafter.

pub mod descriptor;
pub mod handle;

// Re-export main types for easy access
pub use descriptor::ClientDescriptor;
pub use handle::EventClient;
