use crate::core::actions::paint_row::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotBlueWhiteGradient {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = iterations as f64 / self.max_iterations as f64;

        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::BlueWhiteGradient.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BlueWhiteGradient
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(100).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_midpoint_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(50).unwrap(), Colour { r: 143, g: 239, b: 135 });
    }

    #[test]
    fn test_map_quarter_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(25).unwrap(), Colour { r: 26, g: 134, b: 228 });
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(
            mapper.map(101),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
