use crate::core::data::render_params::RenderParams;
use crate::core::navigation::shared_view::SharedView;

/// Source of the latest render parameters. Reads have no side effects.
pub trait ParameterProvider {
    fn render_params(&self) -> RenderParams;
}

impl ParameterProvider for RenderParams {
    fn render_params(&self) -> RenderParams {
        *self
    }
}

impl ParameterProvider for SharedView {
    fn render_params(&self) -> RenderParams {
        self.snapshot().render_params()
    }
}
