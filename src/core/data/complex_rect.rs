use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// A region of the complex plane.
///
/// `top_left` maps to pixel (0, 0) and `bottom_right` to the far corner of the
/// image, so both the real and the imaginary extent are strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // `!(x > 0.0)` also rejects NaN
        if !(width > 0.0) || !(height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds the rect spanning `half_width`/`half_height` either side of `centre`.
    pub fn centred_at(
        centre: Complex,
        half_width: f64,
        half_height: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: centre.real - half_width,
                imag: centre.imag - half_height,
            },
            Complex {
                real: centre.real + half_width,
                imag: centre.imag + half_height,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex {
            real: -2.0,
            imag: -1.0,
        };
        let bottom_right = Complex {
            real: 1.0,
            imag: 1.0,
        };

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            Complex {
                real: 0.0,
                imag: 100.0,
            },
        );

        let negative_height = ComplexRect::new(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            Complex {
                real: 100.0,
                imag: -10.0,
            },
        );

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_extent() {
        let rect = ComplexRect::new(
            Complex {
                real: f64::NEG_INFINITY,
                imag: 0.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        );

        assert!(rect.is_err());

        let nan = ComplexRect::new(
            Complex {
                real: f64::NAN,
                imag: 0.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        );

        assert!(nan.is_err());
    }

    #[test]
    fn test_centred_at_round_trips_centre() {
        let centre = Complex {
            real: -0.75,
            imag: 0.125,
        };
        let rect = ComplexRect::centred_at(centre, 0.5, 0.25).unwrap();

        assert_eq!(rect.centre(), centre);
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 0.5);
    }
}
