//! The agent descriptor consumed by the hosting runtime.

use serde_json::Value;

use crate::toolbox::Toolset;

pub const AGENT_NAME: &str = "claims_assistant";
pub const AGENT_MODEL: &str = "gemini-2.5-flash";

pub const AGENT_DESCRIPTION: &str = "The Cymbal Claims Assistant is designed to help \
insurance adjusters at Cymbal Insurance find relevant articles or policies and find a \
specific policy or article by providing its unique ID.";

pub const AGENT_INSTRUCTION: &str = "You are an insurance claims assistant specifically \
helping insurance adjusters at Cymbal Insurance. Your primary function is to quickly and \
accurately retrieve information from a database of insurance policies and related \
knowledge base articles. You streamline the claims process by allowing an adjuster to \
1) perform semantic searches using natural language to find relevant articles or \
policies (e.g., \"find procedures for mitigating water damage\"); and 2) retrieve the \
exact details of a specific policy or article by providing its unique ID.";

/// A configured conversational agent: identity, instructions, and the tools
/// it may call.
///
/// Immutable after construction. The identity fields are fixed; only the
/// toolset varies with what the remote toolbox serves. Rebuilt only by
/// process restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub name: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
    pub toolset: Toolset,
}

impl Agent {
    /// Assemble the claims assistant around an already-resolved toolset.
    ///
    /// Cannot fail: every field other than the toolset is a fixed literal.
    pub fn new(toolset: Toolset) -> Self {
        Self {
            name: AGENT_NAME,
            model: AGENT_MODEL,
            description: AGENT_DESCRIPTION,
            instruction: AGENT_INSTRUCTION,
            toolset,
        }
    }

    /// Function-calling schemas for the model runtime, one per tool.
    pub fn tool_schemas(&self) -> Vec<Value> {
        self.toolset.tool_schemas()
    }
}
