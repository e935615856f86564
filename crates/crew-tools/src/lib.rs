//! Capability adapters for crew agents
//!
//! Each adapter wraps an external service behind the [`crew_core::Tool`]
//! interface so any agent can be bound to it.

pub mod search;

pub use search::{SEARCH_TOOL_NAME, SearchConfig, SearchResult, SearchTool};
