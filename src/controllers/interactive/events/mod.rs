pub mod agent_event;
