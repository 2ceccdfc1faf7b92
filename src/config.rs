//! Configuration for the claims assistant.
//!
//! Configuration can be set via environment variables:
//! - `SECURE_API_URL` - Optional. Toolbox service endpoint. Defaults to empty string.
//! - `TOOLBOX_AUTH_TOKEN` - Optional. Bearer token sent with toolbox requests.

/// Agent configuration.
///
/// Read once at the entry point and passed explicitly into bootstrap, so
/// tests can construct it without mutating the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Toolbox service endpoint URL. Not validated here; an empty or
    /// malformed value surfaces as a client error at toolset load.
    pub toolbox_url: String,

    /// Optional bearer token for the toolbox service.
    pub auth_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// An absent `SECURE_API_URL` is not an error; it yields an empty
    /// endpoint string.
    pub fn from_env() -> Self {
        Self {
            toolbox_url: std::env::var("SECURE_API_URL").unwrap_or_default(),
            auth_token: std::env::var("TOOLBOX_AUTH_TOKEN").ok(),
        }
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(toolbox_url: impl Into<String>) -> Self {
        Self {
            toolbox_url: toolbox_url.into(),
            auth_token: None,
        }
    }
}
