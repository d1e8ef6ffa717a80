//! Interactive row scheduling.
//!
//! A parameter change starts a new generation; rows of that generation are
//! handed to a fixed pool of agents one at a time, and results tagged with an
//! older generation are dropped before they reach the painter.
//!
//! # Architecture
//!
//! The scheduler follows the ports & adapters pattern:
//! - **Input**: `ParameterProvider` for the latest view, `AgentEvent`s from the pool
//! - **Output**: `AgentTransport` for dispatching `RowTask`s, `RowPainter` for accepted rows
//! - **Core**: `RowTask`/`RowResult` and the row algorithm live in `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod scheduler;

pub use controller::RowRenderController;
pub use scheduler::RowScheduler;
