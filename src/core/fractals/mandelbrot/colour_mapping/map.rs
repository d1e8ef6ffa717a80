use crate::core::actions::paint_row::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap {
    fn kind(&self) -> MandelbrotColourMapKinds;

    /// Highest iteration count the map accepts.
    fn max_iterations(&self) -> u32;
}
