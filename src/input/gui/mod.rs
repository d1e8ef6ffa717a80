//! Windowed front end.
//!
//! winit owns the window and event loop, pixels shows the shared row buffer
//! and egui draws a small status panel on top. Clicks and resizes update the
//! shared view and start a new generation.

mod app;
pub mod commands;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
