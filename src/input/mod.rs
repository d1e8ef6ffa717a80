//! Input adapters: turn window events into view changes and new generations.

#[cfg(feature = "gui")]
pub mod gui;
