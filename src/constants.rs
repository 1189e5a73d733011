//! # Application Constants
//!
//! Identity constants and environment variable names that define how this
//! application registers itself with the external orchestration service.

/// Unique application id registered with the orchestration service
pub const APP_ID: &str = "prepmate";

/// Human-readable application name shown in the orchestration dashboard
pub const APP_DISPLAY_NAME: &str = "Career Coach";

/// Provider name the generative-AI credential is registered under
pub const GEMINI_PROVIDER: &str = "gemini";

/// Environment variables recognized by the configuration loader
pub mod env {
    /// API key passed to provider "gemini" in the client credential map
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    /// Override for the registered application id
    pub const PREPMATE_APP_ID: &str = "PREPMATE_APP_ID";

    /// Override for the application display name
    pub const PREPMATE_APP_NAME: &str = "PREPMATE_APP_NAME";

    /// Deployment environment (development, test, production)
    pub const PREPMATE_ENV: &str = "PREPMATE_ENV";

    /// Generic fallback for the deployment environment
    pub const APP_ENV: &str = "APP_ENV";
}
