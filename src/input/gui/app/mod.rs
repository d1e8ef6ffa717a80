pub mod gui_app;
pub mod pointer;
pub mod state;
