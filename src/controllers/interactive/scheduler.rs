use crate::controllers::interactive::data::agent_state::AgentState;
use crate::controllers::interactive::data::scheduler_status::SchedulerStatus;
use crate::controllers::interactive::events::agent_event::{AgentEvent, AgentId};
use crate::controllers::interactive::ports::agent_transport::AgentTransport;
use crate::controllers::interactive::ports::parameter_provider::ParameterProvider;
use crate::controllers::interactive::ports::row_painter::RowPainter;
use crate::core::data::row_result::RowResult;
use crate::core::data::row_task::RowTask;

/// Hands rows of the current generation to agents one at a time and filters
/// their results by generation before painting.
///
/// Every method runs on the caller's thread and none of them block, so the
/// scheduler is driven by a single event loop (see `RowRenderController`) or
/// directly from tests.
pub struct RowScheduler<P, T, R> {
    provider: P,
    transport: T,
    painter: R,
    generation: u64,
    cursor: u32,
    agents: Vec<AgentState>,
    rows_painted: u32,
    rows_rejected: u32,
    stale_discarded: u32,
}

impl<P, T, R> RowScheduler<P, T, R>
where
    P: ParameterProvider,
    T: AgentTransport,
    R: RowPainter,
{
    /// Builds a scheduler at generation 0 with every agent idle. Nothing is
    /// dispatched until the first `start_generation`.
    pub fn new(provider: P, transport: T, painter: R) -> Self {
        let agents = vec![AgentState::Idle; transport.agent_count()];

        Self {
            provider,
            transport,
            painter,
            generation: 0,
            cursor: 0,
            agents,
            rows_painted: 0,
            rows_rejected: 0,
            stale_discarded: 0,
        }
    }

    /// Supersedes whatever is in flight and seeds every idle agent with a row
    /// of the new generation. Busy agents keep their stale work; it is
    /// discarded when it comes back.
    pub fn start_generation(&mut self) -> u64 {
        self.generation += 1;
        self.cursor = 0;
        self.rows_painted = 0;
        self.rows_rejected = 0;
        self.stale_discarded = 0;

        let params = self.provider.render_params();

        log::info!(
            "starting generation {} ({}x{}, max iterations {})",
            self.generation,
            params.size.width,
            params.size.height,
            params.limits.max_iterations()
        );

        self.painter.begin_generation(self.generation, &params);

        for agent in 0..self.agents.len() {
            if self.agents[agent].is_idle() {
                self.assign_row(agent);
            }
        }

        self.generation
    }

    /// Gives `agent` the next unassigned row, or marks it idle once the image
    /// is exhausted. Failed agents are left alone.
    ///
    /// The agent must not be holding a task; `start_generation` and
    /// `on_result` are the only callers that can guarantee this.
    pub fn assign_row(&mut self, agent: AgentId) {
        let Some(state) = self.agents.get(agent).copied() else {
            log::warn!("ignoring assignment for unknown agent {}", agent);
            return;
        };

        if state.is_failed() {
            return;
        }

        let params = self.provider.render_params();

        if self.cursor >= params.size.height {
            if state.is_busy() {
                log::debug!(
                    "agent {} idle, generation {} has no rows left",
                    agent,
                    self.generation
                );
            }
            self.agents[agent] = AgentState::Idle;
            return;
        }

        let task = RowTask::new(self.cursor, self.generation, &params);
        self.cursor += 1;
        self.agents[agent] = AgentState::Busy {
            generation: self.generation,
            row: task.row(),
        };

        log::debug!(
            "assigning row {} of generation {} to agent {}",
            task.row(),
            self.generation,
            agent
        );

        self.transport.submit(agent, task);
    }

    /// Paints `result` if it belongs to the current generation, drops it
    /// otherwise, then moves the agent on to its next row.
    pub fn on_result(&mut self, agent: AgentId, result: RowResult) {
        match self.agents.get(agent) {
            None => {
                log::warn!("dropping result from unknown agent {}", agent);
                return;
            }
            Some(AgentState::Failed) => {
                log::warn!("dropping result from failed agent {}", agent);
                return;
            }
            Some(_) => {}
        }

        if result.generation == self.generation {
            let row = result.row;

            match self.painter.paint(row, result.values) {
                Ok(()) => {
                    self.rows_painted += 1;
                    log::trace!("painted row {} of generation {}", row, self.generation);
                }
                Err(err) => {
                    self.rows_rejected += 1;
                    log::warn!(
                        "rejected row {} of generation {}: {}",
                        row,
                        self.generation,
                        err
                    );
                }
            }
        } else {
            self.stale_discarded += 1;
            log::debug!(
                "discarding stale row {} of generation {} (current {})",
                result.row,
                result.generation,
                self.generation
            );
        }

        self.assign_row(agent);
    }

    /// Retires `agent` for good. Its in-flight row is not reissued.
    pub fn on_agent_failed(&mut self, agent: AgentId, message: &str) {
        match self.agents.get_mut(agent) {
            Some(state) => {
                log::warn!(
                    "agent {} failed while {:?}, retiring it: {}",
                    agent,
                    state,
                    message
                );
                *state = AgentState::Failed;
            }
            None => log::warn!("failure reported by unknown agent {}: {}", agent, message),
        }
    }

    pub fn handle_event(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::Completed { agent, result } => self.on_result(agent, result),
            AgentEvent::Failed { agent, message } => self.on_agent_failed(agent, &message),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once no agent holds a task.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.agents.iter().any(AgentState::is_busy)
    }

    #[must_use]
    pub fn agent_state(&self, agent: AgentId) -> Option<AgentState> {
        self.agents.get(agent).copied()
    }

    #[must_use]
    pub fn status(&self) -> SchedulerStatus {
        SchedulerStatus {
            generation: self.generation,
            rows_painted: self.rows_painted,
            rows_rejected: self.rows_rejected,
            stale_discarded: self.stale_discarded,
            busy_agents: self.agents.iter().filter(|a| a.is_busy()).count(),
            failed_agents: self.agents.iter().filter(|a| a.is_failed()).count(),
            settled: self.is_settled(),
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn painter(&self) -> &R {
        &self.painter
    }
}
