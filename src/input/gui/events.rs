/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A row was painted into the shared buffer from the scheduler thread.
    ///
    /// Rows arrive much faster than frames are drawn; the handler only marks a
    /// redraw as pending and winit coalesces the requests.
    Wake,
}
