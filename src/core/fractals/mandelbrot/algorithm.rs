use crate::core::actions::compute_row::ports::row_algorithm::RowAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::row_task::RowTask;
use crate::core::fractals::mandelbrot::params::IterationLimits;

/// Escape-time iteration of `z <- z^2 + c`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm;

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the iteration at which `c` escaped, or `None` if it stayed
    /// bounded for `max_iterations` iterations.
    #[must_use]
    pub fn escape_time(&self, c: Complex, limits: IterationLimits) -> Option<u32> {
        let escape_squared = limits.escape_radius() * limits.escape_radius();
        let mut z = Complex { real: 0.0, imag: 0.0 };

        for iteration in 0..limits.max_iterations() {
            if z.magnitude_squared() > escape_squared {
                return Some(iteration);
            }
            z = z * z + c;
        }

        None
    }
}

impl RowAlgorithm for MandelbrotAlgorithm {
    fn compute_row(&self, task: &RowTask) -> Vec<Option<u32>> {
        let width = task.width();
        let real_span = task.real_max() - task.real_min();
        let limits = task.limits();

        (0..width)
            .map(|x| {
                let c = Complex {
                    real: task.real_min() + real_span * x as f64 / width as f64,
                    imag: task.imag(),
                };
                self.escape_time(c, limits)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::render_params::RenderParams;

    fn limits(max_iterations: u32) -> IterationLimits {
        IterationLimits::new(max_iterations, 2.0).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        let algorithm = MandelbrotAlgorithm::new();

        let result = algorithm.escape_time(Complex { real: 0.0, imag: 0.0 }, limits(100));

        assert_eq!(result, None);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let algorithm = MandelbrotAlgorithm::new();

        // z1 = c = 3 already exceeds radius 2
        let result = algorithm.escape_time(Complex { real: 3.0, imag: 0.0 }, limits(100));

        assert_eq!(result, Some(1));
    }

    #[test]
    fn test_minus_two_stays_bounded() {
        let algorithm = MandelbrotAlgorithm::new();

        let result = algorithm.escape_time(Complex { real: -2.0, imag: 0.0 }, limits(50));

        assert_eq!(result, None);
    }

    #[test]
    fn test_larger_escape_radius_takes_longer() {
        let algorithm = MandelbrotAlgorithm::new();
        let c = Complex { real: 1.0, imag: 0.0 };

        let small = algorithm
            .escape_time(c, IterationLimits::new(100, 2.0).unwrap())
            .unwrap();
        let large = algorithm
            .escape_time(c, IterationLimits::new(100, 100.0).unwrap())
            .unwrap();

        assert!(large > small, "{} should exceed {}", large, small);
    }

    #[test]
    fn test_compute_row_returns_one_value_per_pixel() {
        let params = RenderParams {
            size: ImageSize::new(4, 2),
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
            limits: limits(64),
        };
        let task = RowTask::new(1, 1, &params);

        let values = MandelbrotAlgorithm::new().compute_row(&task);

        // Row 1 of 2 lies on the real axis: x = -2, -1, 0, 1
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], None);
        assert_eq!(values[1], None);
        assert_eq!(values[2], None);
        assert!(values[3].is_some());
    }

    #[test]
    fn test_compute_row_of_zero_width_is_empty() {
        let params = RenderParams {
            size: ImageSize::new(0, 2),
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
            limits: limits(64),
        };

        let values = MandelbrotAlgorithm::new().compute_row(&RowTask::new(0, 1, &params));

        assert!(values.is_empty());
    }
}
