use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::params::IterationLimits;

/// Snapshot of everything needed to describe a row: image dimensions, the
/// plane region they map onto, and the iteration bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub size: ImageSize,
    pub region: ComplexRect,
    pub limits: IterationLimits,
}
