//! Tool definitions sent to the model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Description of a callable tool as the model sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (matches the registered tool)
    pub name: String,

    /// What the tool does
    pub description: String,

    /// JSON schema for the tool's input
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}
