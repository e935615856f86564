//! Crew definition with explicit agent/task binding
//!
//! Agents and tasks are paired by [`RoleId`], never by list position. The
//! builder checks that the pairing is a one-to-one mapping before a [`Crew`]
//! can exist, so engines can rely on every task having exactly one agent.

use crate::agent::{AgentSpec, RoleId};
use crate::task::TaskSpec;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Reasons a crew definition is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrewError {
    /// No agents and no tasks were given
    #[error("crew has no agents or tasks")]
    Empty,

    /// Agent and task counts differ
    #[error("crew has {agents} agent(s) but {tasks} task(s)")]
    SizeMismatch {
        /// Number of agents supplied
        agents: usize,
        /// Number of tasks supplied
        tasks: usize,
    },

    /// The same role was registered twice on one side of the pairing
    #[error("role '{0}' is defined more than once")]
    DuplicateRole(RoleId),

    /// A task names a role with no agent
    #[error("task for role '{0}' has no agent")]
    UnboundTask(RoleId),
}

/// One agent paired with its task
#[derive(Debug, Clone)]
pub struct CrewMember {
    pub role: RoleId,
    pub agent: AgentSpec,
    pub task: TaskSpec,
}

/// A validated set of agent/task pairs, in execution order
///
/// # Example
///
/// ```
/// use crew_core::{AgentSpec, Crew, TaskSpec};
///
/// let crew = Crew::builder()
///     .agent("pricing", AgentSpec::new("Pricing Analyst", "goal", "backstory"))
///     .task(TaskSpec::new("pricing", "Research prices", "A table"))
///     .verbose(true)
///     .build()?;
///
/// assert_eq!(crew.len(), 1);
/// assert_eq!(crew.members()[0].agent.role(), "Pricing Analyst");
/// # Ok::<(), crew_core::CrewError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crew {
    members: Vec<CrewMember>,
    verbose: bool,
}

impl Crew {
    pub fn builder() -> CrewBuilder {
        CrewBuilder::new()
    }

    /// Members in task order
    pub fn members(&self) -> &[CrewMember] {
        &self.members
    }

    /// Look up the member bound to a role
    pub fn member(&self, role: &RoleId) -> Option<&CrewMember> {
        self.members.iter().find(|m| &m.role == role)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Builder for [`Crew`]
#[derive(Debug, Default)]
pub struct CrewBuilder {
    agents: Vec<(RoleId, AgentSpec)>,
    tasks: Vec<TaskSpec>,
    verbose: bool,
}

impl CrewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the agent that owns `role`
    pub fn agent(mut self, role: impl Into<RoleId>, agent: AgentSpec) -> Self {
        self.agents.push((role.into(), agent));
        self
    }

    /// Append a task; tasks run in the order they are added
    pub fn task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    /// Request verbose execution
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the pairing and build the crew
    pub fn build(self) -> Result<Crew, CrewError> {
        if self.agents.is_empty() && self.tasks.is_empty() {
            return Err(CrewError::Empty);
        }

        if self.agents.len() != self.tasks.len() {
            return Err(CrewError::SizeMismatch {
                agents: self.agents.len(),
                tasks: self.tasks.len(),
            });
        }

        let mut agents: HashMap<RoleId, AgentSpec> = HashMap::with_capacity(self.agents.len());
        for (role, agent) in self.agents {
            if agents.contains_key(&role) {
                return Err(CrewError::DuplicateRole(role));
            }
            agents.insert(role, agent);
        }

        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !seen.insert(task.role.clone()) {
                return Err(CrewError::DuplicateRole(task.role.clone()));
            }
        }

        let mut members = Vec::with_capacity(self.tasks.len());
        for task in self.tasks {
            let agent = agents
                .remove(&task.role)
                .ok_or_else(|| CrewError::UnboundTask(task.role.clone()))?;
            members.push(CrewMember {
                role: task.role.clone(),
                agent,
                task,
            });
        }

        Ok(Crew {
            members,
            verbose: self.verbose,
        })
    }
}
