//! Toolbox integration - client and manifest types for the remote tool service.
//!
//! The toolbox is an external HTTP service that owns the semantic search
//! index and the policy database. This module only resolves named toolsets
//! into tool descriptors and forwards invocations; it implements none of the
//! retrieval itself.

mod client;
mod manifest;

pub use client::{ToolSource, ToolboxClient, ToolboxError};
pub use manifest::{ParameterSchema, ToolManifest, Toolset, ToolsetManifest};
