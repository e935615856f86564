//! Runtime for crew execution
//!
//! [`AgentExecutor`] drives a single agent through the model/tool loop;
//! [`SequentialEngine`] walks a crew's members in task order and feeds each
//! task the outputs of the tasks before it.

pub mod engine;
pub mod executor;
pub mod prompt;

pub use engine::SequentialEngine;
pub use executor::{AgentExecutor, ExecutorConfig};
pub use prompt::{PromptRenderer, TaskContext};
