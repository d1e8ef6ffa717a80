use crate::core::actions::paint_row::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// Folds `x` into a triangle wave over 0..=256, saturated to a byte.
fn wrap(x: u64) -> u8 {
    let folded = ((x + 256) & 0x1ff) as i64 - 256;
    folded.unsigned_abs().min(255) as u8
}

/// Precomputed table with one entry per iteration count.
///
/// The red, green and blue channels sweep at different rates (7, 5 and 11 per
/// iteration), so neighbouring counts get similar colours while the table
/// keeps cycling through the spectrum for counts beyond 256.
#[derive(Debug, Clone)]
pub struct MandelbrotClassicPalette {
    colours: Vec<Colour>,
}

impl MandelbrotClassicPalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        let colours = (0..=max_iterations as u64)
            .map(|i| Colour {
                r: wrap(7 * i),
                g: wrap(5 * i),
                b: wrap(11 * i),
            })
            .collect();

        Self { colours }
    }
}

impl ColourMap for MandelbrotClassicPalette {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        self.colours
            .get(iterations as usize)
            .copied()
            .ok_or(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations(),
            })
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::ClassicPalette.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotClassicPalette {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::ClassicPalette
    }

    fn max_iterations(&self) -> u32 {
        // the table always holds entries 0..=max
        self.colours.len().saturating_sub(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_a_triangle_wave() {
        assert_eq!(wrap(0), 0);
        assert_eq!(wrap(7), 7);
        assert_eq!(wrap(255), 255);
        assert_eq!(wrap(256), 255);
        assert_eq!(wrap(300), 212);
        assert_eq!(wrap(512), 0);
    }

    #[test]
    fn test_table_has_an_entry_for_every_count() {
        let palette = MandelbrotClassicPalette::new(1024);

        assert!(palette.map(0).is_ok());
        assert!(palette.map(1024).is_ok());
    }

    #[test]
    fn test_known_entries() {
        let palette = MandelbrotClassicPalette::new(100);

        assert_eq!(palette.map(0).unwrap(), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(palette.map(1).unwrap(), Colour { r: 7, g: 5, b: 11 });
        assert_eq!(palette.map(40).unwrap(), Colour { r: 232, g: 200, b: 72 });
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let palette = MandelbrotClassicPalette::new(100);

        assert_eq!(
            palette.map(101),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
