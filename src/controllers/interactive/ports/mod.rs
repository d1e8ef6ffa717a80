//! Port definitions for the row scheduler.
//!
//! The scheduler only talks to the outside world through these traits: it reads
//! render parameters, dispatches row tasks to agents and hands finished rows to
//! a painter.

pub mod agent_transport;
pub mod parameter_provider;
pub mod row_painter;
