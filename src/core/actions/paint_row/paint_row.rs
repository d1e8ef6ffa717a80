use crate::core::actions::paint_row::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Colour of points that never escaped.
pub const INSIDE_COLOUR: Colour = Colour::BLACK;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintRowError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PaintRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for PaintRowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for PaintRowError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for PaintRowError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours one row of iteration values and stores it at `row`.
///
/// Nothing is written unless every value maps successfully.
pub fn paint_row<C: ColourMap + ?Sized>(
    buffer: &mut PixelBuffer,
    row: u32,
    values: &[Option<u32>],
    colour_map: &C,
) -> Result<(), PaintRowError> {
    let colours = values
        .iter()
        .map(|value| match value {
            Some(iterations) => colour_map.map(*iterations),
            None => Ok(INSIDE_COLOUR),
        })
        .collect::<Result<Vec<Colour>, ColourMapError>>()?;

    buffer.set_row(row, &colours)?;

    Ok(())
}
