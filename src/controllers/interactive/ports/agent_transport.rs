use crate::controllers::interactive::events::agent_event::AgentId;
use crate::core::data::row_task::RowTask;

/// Fixed-size pool of compute agents.
///
/// `submit` never blocks and never reports back directly; the outcome arrives
/// later as an `AgentEvent` through the handler the pool was built with.
pub trait AgentTransport {
    fn agent_count(&self) -> usize;

    fn submit(&self, agent: AgentId, task: RowTask);
}
