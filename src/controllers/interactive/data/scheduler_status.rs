/// Point-in-time summary of the scheduler.
///
/// Row and stale counts cover the current generation only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SchedulerStatus {
    pub generation: u64,
    pub rows_painted: u32,
    pub rows_rejected: u32,
    pub stale_discarded: u32,
    pub busy_agents: usize,
    pub failed_agents: usize,
    pub settled: bool,
}
