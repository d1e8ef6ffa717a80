use crate::controllers::interactive::events::agent_event::{
    AgentEvent, AgentEventHandler, AgentId,
};
use crate::controllers::interactive::ports::agent_transport::AgentTransport;
use crate::core::actions::compute_row::ports::row_algorithm::RowAlgorithm;
use crate::core::data::row_result::RowResult;
use crate::core::data::row_task::RowTask;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Agent pool backed by a dedicated rayon thread pool with one thread per
/// agent.
///
/// Agents share nothing but the immutable algorithm. A panic inside the
/// algorithm is caught and reported as `AgentEvent::Failed` for that agent.
pub struct RayonAgentPool<A: RowAlgorithm + 'static> {
    pool: ThreadPool,
    algorithm: Arc<A>,
    agent_count: usize,
    on_event: AgentEventHandler,
}

impl<A: RowAlgorithm + 'static> RayonAgentPool<A> {
    pub fn new(
        algorithm: A,
        agent_count: usize,
        on_event: AgentEventHandler,
    ) -> Result<Self, ThreadPoolBuildError> {
        // rayon treats 0 threads as "pick for me"
        let pool = ThreadPoolBuilder::new()
            .num_threads(agent_count.max(1))
            .thread_name(|index| format!("row-agent-{}", index))
            .build()?;

        log::debug!("built agent pool with {} agents", agent_count);

        Ok(Self {
            pool,
            algorithm: Arc::new(algorithm),
            agent_count,
            on_event,
        })
    }
}

impl<A: RowAlgorithm + 'static> AgentTransport for RayonAgentPool<A> {
    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn submit(&self, agent: AgentId, task: RowTask) {
        if agent >= self.agent_count {
            log::warn!(
                "dropping row {} for agent {} outside pool of {}",
                task.row(),
                agent,
                self.agent_count
            );
            return;
        }

        let algorithm = Arc::clone(&self.algorithm);
        let on_event = Arc::clone(&self.on_event);

        self.pool.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| algorithm.compute_row(&task)));

            let event = match outcome {
                Ok(values) => AgentEvent::Completed {
                    agent,
                    result: RowResult {
                        row: task.row(),
                        generation: task.generation(),
                        values,
                    },
                },
                Err(payload) => AgentEvent::Failed {
                    agent,
                    message: panic_message(payload.as_ref()),
                },
            };

            on_event(event);
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "agent panicked".to_string()
    }
}
