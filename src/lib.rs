#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Prepmate Orchestration Client
//!
//! Client bindings between the Prepmate ("Career Coach") application and its
//! external event orchestration service.
//!
//! ## Overview
//!
//! The orchestration service owns event dispatch, function execution, and
//! retry semantics. This crate owns the other side of that boundary: it
//! constructs the immutable [`EventClient`] handle that carries the
//! application's identity and provider credentials, and it produces the
//! configuration record the service's constructor consumes.
//!
//! Configuration is explicit rather than ambient. Defaults carry the
//! application identity, an optional TOML file may override it, and
//! environment variables take highest precedence — so tests can inject fake
//! credentials through [`ClientConfig`] instead of mutating process state.
//!
//! ## Module Organization
//!
//! - [`client`] - The `EventClient` handle and its serializable descriptor
//! - [`config`] - Explicit configuration types and layered loading
//! - [`credentials`] - Provider credential map with masked rendering
//! - [`error`] - Structured error handling
//! - [`logging`] - Environment-aware tracing initialization
//! - [`constants`] - Application identity and environment variable names
//!
//! ## Quick Start
//!
//! ```rust
//! use prepmate_client::{ClientConfig, EventClient};
//!
//! let config = ClientConfig::default().with_gemini_api_key("secret123");
//! let client = EventClient::from_config(&config);
//!
//! assert_eq!(client.app_id(), "prepmate");
//! assert_eq!(client.display_name(), "Career Coach");
//! assert_eq!(client.gemini_api_key(), Some("secret123"));
//! ```
//!
//! For the one-per-process handle the rest of the application shares:
//!
//! ```rust,no_run
//! use prepmate_client::EventClient;
//!
//! let client = EventClient::global();
//! println!("Registered as {}", client.app_id());
//! ```
//!
//! A missing API key does not fail construction. The handle is built with an
//! absent credential and the orchestration service reports the failure when
//! the credential is first used.

pub mod client;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod logging;

pub use client::{ClientDescriptor, EventClient};
pub use config::{AppConfig, ClientConfig, CredentialsConfig};
pub use credentials::{CredentialMap, ProviderCredential};
pub use error::{ClientError, ClientResult};
