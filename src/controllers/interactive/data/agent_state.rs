/// Scheduler-side view of one agent. The agent itself never sees this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Idle,
    Busy {
        generation: u64,
        row: u32,
    },
    /// Reported a failure; never given work again.
    Failed,
}

impl AgentState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
