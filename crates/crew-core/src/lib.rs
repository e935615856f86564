//! Core abstractions for crew-style multi-agent runs
//!
//! A crew is a fixed set of agents, each paired with exactly one task through
//! an explicit [`RoleId`]. The crate defines the descriptors, the validated
//! [`Crew`] container, the [`Tool`] capability interface agents are bound to,
//! and the [`ExecutionEngine`] seam that actually runs a crew.

pub mod agent;
pub mod crew;
pub mod engine;
pub mod error;
pub mod task;
pub mod tool;

pub use agent::{AgentSpec, RoleId};
pub use crew::{Crew, CrewBuilder, CrewError, CrewMember};
pub use engine::ExecutionEngine;
pub use error::{Error, Result};
pub use task::TaskSpec;
pub use tool::{Tool, ToolRegistry};
