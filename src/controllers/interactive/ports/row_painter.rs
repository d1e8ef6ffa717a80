use crate::core::actions::paint_row::paint_row::PaintRowError;
use crate::core::data::render_params::RenderParams;

/// Sink for rows that passed the generation check.
pub trait RowPainter {
    /// Called once per generation, before any of its rows are dispatched.
    fn begin_generation(&mut self, _generation: u64, _params: &RenderParams) {}

    fn paint(&mut self, row: u32, values: Vec<Option<u32>>) -> Result<(), PaintRowError>;
}
