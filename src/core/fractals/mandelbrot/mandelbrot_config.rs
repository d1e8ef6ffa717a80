use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 100.0;

/// Clicking zooms in so the new view spans `2 / ZOOM_IN_FACTOR` of the old extent.
pub const ZOOM_IN_FACTOR: f64 = 8.0;
/// Shift-clicking zooms out so the new view spans `2 * ZOOM_OUT_FACTOR` of the old extent.
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

pub const DEFAULT_AGENT_COUNT: usize = 8;
pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize {
    width: 800,
    height: 600,
};

const DEFAULT_REAL_MIN: f64 = -2.5;
const DEFAULT_REAL_MAX: f64 = 1.5;
const DEFAULT_IMAG_MIN: f64 = -1.5;
const DEFAULT_IMAG_MAX: f64 = 1.5;

pub(crate) fn default_region() -> ComplexRect {
    // Literal bounds above have positive extents
    match ComplexRect::new(
        Complex {
            real: DEFAULT_REAL_MIN,
            imag: DEFAULT_IMAG_MIN,
        },
        Complex {
            real: DEFAULT_REAL_MAX,
            imag: DEFAULT_IMAG_MAX,
        },
    ) {
        Ok(region) => region,
        Err(err) => unreachable!("default region is valid: {}", err),
    }
}
