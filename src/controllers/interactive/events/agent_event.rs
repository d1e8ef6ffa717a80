use crate::core::data::row_result::RowResult;
use std::sync::Arc;

/// Index of an agent within its pool, in `0..agent_count`.
pub type AgentId = usize;

/// Completion report from one agent.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    Completed { agent: AgentId, result: RowResult },
    Failed { agent: AgentId, message: String },
}

impl AgentEvent {
    #[must_use]
    pub fn agent(&self) -> AgentId {
        match self {
            Self::Completed { agent, .. } | Self::Failed { agent, .. } => *agent,
        }
    }
}

/// Handler installed once when a pool is built; every completion goes through it.
pub type AgentEventHandler = Arc<dyn Fn(AgentEvent) + Send + Sync>;
