//! Agent bootstrap - resolve the remote toolset and assemble the agent.
//!
//! A single straight-line sequence executed exactly once per process: load
//! the named toolset from the tool source, then construct the agent around
//! it. There is no retry, no fallback toolset, and no timeout; any remote
//! failure propagates out and the process fails to start.

use thiserror::Error;

use crate::agent::Agent;
use crate::toolbox::{ToolSource, ToolboxError};

/// The toolset resolved from the toolbox at startup.
pub const TOOLSET_NAME: &str = "customer_data_tools";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to load toolset `{name}`: {source}")]
    ToolsetLoad {
        name: &'static str,
        #[source]
        source: ToolboxError,
    },
}

/// Build the claims assistant from an already-constructed tool source.
///
/// The source is passed in explicitly rather than read from the environment
/// here, so the sequence is testable without environment mutation.
pub async fn bootstrap(source: &dyn ToolSource) -> Result<Agent, BootstrapError> {
    let toolset = source
        .load_toolset(TOOLSET_NAME)
        .await
        .map_err(|source| BootstrapError::ToolsetLoad {
            name: TOOLSET_NAME,
            source,
        })?;

    let agent = Agent::new(toolset);
    tracing::info!(
        "Bootstrapped agent {} (model {}, {} tools)",
        agent.name,
        agent.model,
        agent.toolset.len()
    );
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::agent::{AGENT_DESCRIPTION, AGENT_INSTRUCTION, AGENT_MODEL, AGENT_NAME};
    use crate::toolbox::{Toolset, ToolsetManifest};

    /// Deterministic in-memory tool source.
    struct StaticSource {
        manifest: serde_json::Value,
    }

    impl StaticSource {
        fn new() -> Self {
            Self {
                manifest: json!({
                    "serverVersion": "0.5.0",
                    "tools": {
                        "search-policies": {
                            "description": "Semantic search over policies and articles.",
                            "parameters": [
                                { "name": "query", "type": "string", "description": "Natural language query" }
                            ]
                        }
                    }
                }),
            }
        }
    }

    #[async_trait]
    impl ToolSource for StaticSource {
        async fn load_toolset(&self, name: &str) -> Result<Toolset, ToolboxError> {
            let manifest: ToolsetManifest = serde_json::from_value(self.manifest.clone())?;
            Ok(Toolset::from_manifest(name, manifest))
        }
    }

    /// Tool source whose remote always fails.
    struct FailingSource;

    #[async_trait]
    impl ToolSource for FailingSource {
        async fn load_toolset(&self, _name: &str) -> Result<Toolset, ToolboxError> {
            Err(ToolboxError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: "http://127.0.0.1:5000/api/toolset/customer_data_tools".into(),
            })
        }
    }

    /// Tool source that records which toolset name was requested.
    struct RecordingSource {
        requested: std::sync::Mutex<Vec<String>>,
        inner: StaticSource,
    }

    #[async_trait]
    impl ToolSource for RecordingSource {
        async fn load_toolset(&self, name: &str) -> Result<Toolset, ToolboxError> {
            self.requested.lock().unwrap().push(name.to_string());
            self.inner.load_toolset(name).await
        }
    }

    #[tokio::test]
    async fn bootstrap_produces_agent_with_fixed_identity() {
        let agent = bootstrap(&StaticSource::new()).await.unwrap();

        assert_eq!(agent.name, AGENT_NAME);
        assert_eq!(agent.model, AGENT_MODEL);
        assert_eq!(agent.description, AGENT_DESCRIPTION);
        assert_eq!(agent.instruction, AGENT_INSTRUCTION);
        assert_eq!(agent.toolset.len(), 1);
        assert!(agent.toolset.get("search-policies").is_some());
    }

    #[tokio::test]
    async fn bootstrap_always_requests_customer_data_tools() {
        let source = RecordingSource {
            requested: std::sync::Mutex::new(Vec::new()),
            inner: StaticSource::new(),
        };

        bootstrap(&source).await.unwrap();
        assert_eq!(
            *source.requested.lock().unwrap(),
            vec!["customer_data_tools"]
        );
    }

    #[tokio::test]
    async fn remote_failure_yields_no_agent() {
        let err = bootstrap(&FailingSource).await.unwrap_err();
        let BootstrapError::ToolsetLoad { name, source } = err;
        assert_eq!(name, "customer_data_tools");
        assert!(matches!(source, ToolboxError::Status { .. }));
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent_against_a_deterministic_remote() {
        let source = StaticSource::new();
        let first = bootstrap(&source).await.unwrap();
        let second = bootstrap(&source).await.unwrap();
        assert_eq!(first, second);
    }
}
