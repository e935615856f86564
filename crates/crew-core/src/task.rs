//! Task descriptors

use crate::agent::RoleId;
use serde::{Deserialize, Serialize};

/// A unit of work bound to exactly one agent role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Role of the agent that performs this task
    pub role: RoleId,

    /// Free-text description of the work
    pub description: String,

    /// Free-text description of what the result should look like
    pub expected_output: String,
}

impl TaskSpec {
    /// Create a task for the given role
    pub fn new(
        role: impl Into<RoleId>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            description: description.into(),
            expected_output: expected_output.into(),
        }
    }
}
