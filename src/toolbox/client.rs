//! HTTP client for the remote toolbox service.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

use super::manifest::{Toolset, ToolsetManifest};

#[derive(Debug, Error)]
pub enum ToolboxError {
    /// Connection, DNS, or protocol failure reaching the toolbox.
    #[error("toolbox request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The toolbox answered, but not with success. A missing toolset or
    /// tool surfaces here as a 404.
    #[error("toolbox returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body did not match the manifest wire format.
    #[error("invalid toolbox response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of named toolsets.
///
/// The production implementation is [`ToolboxClient`]; tests substitute a
/// deterministic in-memory source.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Resolve a named toolset into its tool descriptors.
    async fn load_toolset(&self, name: &str) -> Result<Toolset, ToolboxError>;
}

/// Long-lived handle to the toolbox service.
///
/// Bound to its endpoint at construction and never reconnected; there is no
/// teardown, the handle lives until process exit. No request timeout is
/// imposed: bootstrap either completes or fails with whatever the transport
/// reports.
pub struct ToolboxClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ToolboxClient {
    /// Create a client bound to the given endpoint.
    ///
    /// The endpoint is taken verbatim; an empty or malformed URL is not
    /// rejected here and fails on first use.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client from the agent configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut client = Self::new(config.toolbox_url.clone());
        client.auth_token = config.auth_token.clone();
        client
    }

    /// Attach a bearer token to every toolbox request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Invoke a remote tool with JSON arguments and return its result.
    pub async fn invoke_tool(&self, name: &str, args: Value) -> Result<String, ToolboxError> {
        let url = self.endpoint(&format!("api/tool/{}/invoke", name));
        tracing::debug!("Invoking tool {} at {}", name, url);

        let mut request = self.http.post(&url).json(&args);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolboxError::Status { status, url });
        }

        let body = response.text().await?;
        let invoked: InvokeResponse = serde_json::from_str(&body)?;
        Ok(invoked.result)
    }
}

#[async_trait]
impl ToolSource for ToolboxClient {
    async fn load_toolset(&self, name: &str) -> Result<Toolset, ToolboxError> {
        let url = self.endpoint(&format!("api/toolset/{}", name));
        tracing::debug!("Loading toolset {} from {}", name, url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolboxError::Status { status, url });
        }

        let body = response.text().await?;
        let manifest: ToolsetManifest = serde_json::from_str(&body)?;
        tracing::info!(
            "Loaded toolset {} ({} tools, server {})",
            name,
            manifest.tools.len(),
            manifest.server_version
        );

        Ok(Toolset::from_manifest(name, manifest))
    }
}

/// Body of a successful `POST /api/tool/{name}/invoke`.
#[derive(Debug, Deserialize)]
struct InvokeResponse {
    result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ToolboxClient::new("http://127.0.0.1:5000/");
        assert_eq!(
            client.endpoint("api/toolset/customer_data_tools"),
            "http://127.0.0.1:5000/api/toolset/customer_data_tools"
        );
    }

    #[test]
    fn from_config_takes_url_verbatim() {
        let config = Config::new("http://toolbox.internal:5000");
        let client = ToolboxClient::from_config(&config);
        assert_eq!(client.base_url(), "http://toolbox.internal:5000");

        // An empty endpoint is accepted here; it fails at first use.
        let client = ToolboxClient::from_config(&Config::new(""));
        assert_eq!(client.base_url(), "");
    }
}
