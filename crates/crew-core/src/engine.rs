//! Execution engine seam

use crate::{Crew, Result};
use async_trait::async_trait;

/// Runs a crew to completion and returns its final textual result
///
/// The result is opaque text; callers must not rely on any structure in it.
/// Implementations decide how tasks are sequenced and how tools are invoked.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    async fn execute(&self, crew: &Crew) -> Result<String>;

    /// Engine name for logging
    fn name(&self) -> &str {
        "engine"
    }
}
