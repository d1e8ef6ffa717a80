pub mod agent_state;
pub mod scheduler_status;
