use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    EmptyImage { size: ImageSize },
    PointOutsideImage { x: f64, y: f64, size: ImageSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage { size } => {
                write!(
                    f,
                    "cannot map pixels of an empty {}x{} image",
                    size.width, size.height
                )
            }
            Self::PointOutsideImage { x, y, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    x, y, size.width, size.height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a (possibly fractional) pixel position to the complex plane.
///
/// The left and top edges of the image map to the rect's top-left corner; pixel
/// `width` would map to the right edge, so the scale is `extent / width`.
pub fn pixel_to_complex_coords(
    x: f64,
    y: f64,
    size: ImageSize,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if size.is_empty() {
        return Err(PixelToComplexCoordsError::EmptyImage { size });
    }

    let inside = x >= 0.0 && y >= 0.0 && x <= size.width as f64 && y <= size.height as f64;

    if !inside {
        return Err(PixelToComplexCoordsError::PointOutsideImage { x, y, size });
    }

    Ok(Complex {
        real: column_to_real(x, size.width, complex_rect),
        imag: row_to_imag(y, size.height, complex_rect),
    })
}

#[inline]
#[must_use]
pub fn column_to_real(x: f64, width: u32, complex_rect: ComplexRect) -> f64 {
    complex_rect.top_left().real + complex_rect.width() * x / width as f64
}

#[inline]
#[must_use]
pub fn row_to_imag(y: f64, height: u32, complex_rect: ComplexRect) -> f64 {
    complex_rect.top_left().imag + complex_rect.height() * y / height as f64
}
