//! Toolset manifest types.
//!
//! Mirrors the wire format served by the toolbox at
//! `GET /api/toolset/{name}`: a server version plus a map of tool name to
//! description and parameter declarations.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{json, Value};

/// Manifest returned by the toolbox for a named toolset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsetManifest {
    /// Version reported by the toolbox server.
    #[serde(default)]
    pub server_version: String,

    /// Tool name to tool declaration.
    pub tools: BTreeMap<String, ToolManifest>,
}

/// A single tool entry in a toolset manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolManifest {
    /// Natural-language description shown to the model.
    pub description: String,

    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterSchema>,
}

/// Parameter declaration for a remote tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterSchema {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: String,

    #[serde(default)]
    pub description: String,

    /// The toolbox treats parameters as required unless marked otherwise.
    #[serde(default = "default_true")]
    pub required: bool,

    /// Element schema for `array` parameters.
    #[serde(default)]
    pub items: Option<Box<ParameterSchema>>,
}

fn default_true() -> bool {
    true
}

impl ParameterSchema {
    /// Render this parameter as a JSON-schema property.
    fn json_schema(&self) -> Value {
        let mut schema = json!({
            "type": self.param_type,
            "description": self.description,
        });
        if let Some(items) = &self.items {
            schema["items"] = json!({ "type": items.param_type });
        }
        schema
    }
}

/// A named, immutable set of remote tools.
///
/// Resolved from the toolbox exactly once at bootstrap; ownership then moves
/// into the agent and the set never changes for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolset {
    name: String,
    tools: BTreeMap<String, ToolManifest>,
}

impl Toolset {
    pub(crate) fn from_manifest(name: &str, manifest: ToolsetManifest) -> Self {
        Self {
            name: name.to_string(),
            tools: manifest.tools,
        }
    }

    /// The toolset name this set was resolved under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up a tool declaration by name.
    pub fn get(&self, tool: &str) -> Option<&ToolManifest> {
        self.tools.get(tool)
    }

    /// Names of all tools in the set, in sorted order.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Render all tools as function-calling schemas for the model runtime.
    pub fn tool_schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|(name, tool)| {
                let mut properties = serde_json::Map::new();
                let mut required = Vec::new();

                for param in &tool.parameters {
                    properties.insert(param.name.clone(), param.json_schema());
                    if param.required {
                        required.push(param.name.clone());
                    }
                }

                json!({
                    "type": "function",
                    "function": {
                        "name": name,
                        "description": tool.description,
                        "parameters": {
                            "type": "object",
                            "properties": properties,
                            "required": required,
                        }
                    }
                })
            })
            .collect()
    }
}
