use crate::core::data::render_params::RenderParams;
use crate::core::fractals::mandelbrot::params::IterationLimits;
use crate::core::util::pixel_to_complex_coords::row_to_imag;

/// Self-contained description of one row's computation.
///
/// Everything is captured by value when the task is created, so later view
/// changes never alter a task that is already in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RowTask {
    row: u32,
    width: u32,
    generation: u64,
    real_min: f64,
    real_max: f64,
    imag: f64,
    limits: IterationLimits,
}

impl RowTask {
    #[must_use]
    pub fn new(row: u32, generation: u64, params: &RenderParams) -> Self {
        Self {
            row,
            width: params.size.width,
            generation,
            real_min: params.region.top_left().real,
            real_max: params.region.bottom_right().real,
            imag: row_to_imag(row as f64, params.size.height, params.region),
            limits: params.limits,
        }
    }

    #[must_use]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    /// Imaginary coordinate shared by every pixel of the row.
    #[must_use]
    pub fn imag(&self) -> f64 {
        self.imag
    }

    #[must_use]
    pub fn limits(&self) -> IterationLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::image_size::ImageSize;

    fn params() -> RenderParams {
        RenderParams {
            size: ImageSize::new(8, 4),
            region: ComplexRect::new(
                Complex {
                    real: -2.0,
                    imag: -1.0,
                },
                Complex {
                    real: 2.0,
                    imag: 1.0,
                },
            )
            .unwrap(),
            limits: IterationLimits::new(50, 2.0).unwrap(),
        }
    }

    #[test]
    fn test_new_captures_row_geometry() {
        let task = RowTask::new(2, 7, &params());

        assert_eq!(task.row(), 2);
        assert_eq!(task.width(), 8);
        assert_eq!(task.generation(), 7);
        assert_eq!(task.real_min(), -2.0);
        assert_eq!(task.real_max(), 2.0);
        assert_eq!(task.imag(), 0.0);
        assert_eq!(task.limits().max_iterations(), 50);
    }

    #[test]
    fn test_task_is_unaffected_by_later_parameter_changes() {
        let mut live = params();
        let task = RowTask::new(1, 1, &live);

        live.size = ImageSize::new(100, 100);
        live.limits = IterationLimits::new(5, 2.0).unwrap();

        assert_eq!(task.width(), 8);
        assert_eq!(task.imag(), -0.5);
        assert_eq!(task.limits().max_iterations(), 50);
    }
}
