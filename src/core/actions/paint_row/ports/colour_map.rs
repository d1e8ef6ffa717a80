use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}

/// Maps the iteration count of an escaped point to a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
