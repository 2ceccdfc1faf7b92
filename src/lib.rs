//! # Claims Assistant
//!
//! The Cymbal Insurance claims assistant: a conversational agent that helps
//! insurance adjusters find policies and knowledge-base articles. All real
//! work — semantic search and exact-ID retrieval — is delegated to a remote
//! toolbox service; this crate only wires the agent together.
//!
//! ## Architecture
//!
//! Bootstrap is a single straight-line sequence, executed once at startup:
//! 1. Read the toolbox endpoint from the environment
//! 2. Construct an HTTP client bound to that endpoint
//! 3. Resolve the `customer_data_tools` toolset into tool descriptors
//! 4. Assemble the agent descriptor for the hosting runtime
//!
//! ## Example
//!
//! ```rust,ignore
//! use claims_assistant::{bootstrap, toolbox::ToolboxClient, Config};
//!
//! let config = Config::from_env();
//! let toolbox = ToolboxClient::from_config(&config);
//! let agent = bootstrap::bootstrap(&toolbox).await?;
//! ```

pub mod agent;
pub mod bootstrap;
pub mod config;
pub mod toolbox;

pub use agent::Agent;
pub use config::Config;
