use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS,
};

/// Per-pixel iteration bounds shared by every row of a render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationLimits {
    max_iterations: u32,
    escape_radius: f64,
}

impl IterationLimits {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(escape_radius > 0.0) || !escape_radius.is_finite() {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

impl Default for IterationLimits {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        assert_eq!(
            IterationLimits::new(0, 2.0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_non_positive_escape_radius_is_rejected() {
        assert_eq!(
            IterationLimits::new(10, 0.0),
            Err(MandelbrotError::InvalidEscapeRadius { escape_radius: 0.0 })
        );
        assert!(IterationLimits::new(10, f64::NAN).is_err());
        assert!(IterationLimits::new(10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_defaults() {
        let limits = IterationLimits::default();

        assert_eq!(limits.max_iterations(), 1024);
        assert_eq!(limits.escape_radius(), 100.0);
    }
}
