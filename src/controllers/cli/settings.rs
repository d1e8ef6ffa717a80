use crate::core::navigation::zoom_step::ZoomStep;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_AGENT_COUNT, DEFAULT_IMAGE_SIZE,
};
use crate::core::fractals::mandelbrot::params::IterationLimits;
use std::time::Duration;

pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(60);

/// Everything a headless render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub size: ImageSize,
    pub agents: usize,
    pub limits: IterationLimits,
    pub palette: MandelbrotColourMapKinds,
    /// Applied in order, each one superseding the generation before it.
    pub zoom_steps: Vec<ZoomStep>,
    /// How long to wait for the final generation to settle.
    pub timeout: Duration,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_IMAGE_SIZE,
            agents: DEFAULT_AGENT_COUNT,
            limits: IterationLimits::default(),
            palette: MandelbrotColourMapKinds::default(),
            zoom_steps: Vec::new(),
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }
}
