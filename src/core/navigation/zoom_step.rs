use crate::core::navigation::view::{View, ViewError};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One click on the image: zoom in or out around pixel (x, y).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomStep {
    pub direction: ZoomDirection,
    pub x: f64,
    pub y: f64,
}

impl ZoomStep {
    pub fn apply(&self, view: &mut View) -> Result<(), ViewError> {
        match self.direction {
            ZoomDirection::In => view.zoom_in(self.x, self.y),
            ZoomDirection::Out => view.zoom_out(self.x, self.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoomStepParseError {
    MissingSeparator { input: String },
    UnknownDirection { direction: String },
    InvalidCoordinates { coordinates: String },
}

impl fmt::Display for ZoomStepParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "expected in:X,Y or out:X,Y, got '{}'", input)
            }
            Self::UnknownDirection { direction } => {
                write!(f, "zoom direction must be 'in' or 'out', got '{}'", direction)
            }
            Self::InvalidCoordinates { coordinates } => {
                write!(f, "expected pixel coordinates X,Y, got '{}'", coordinates)
            }
        }
    }
}

impl Error for ZoomStepParseError {}

impl FromStr for ZoomStep {
    type Err = ZoomStepParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (direction, coordinates) =
            input
                .split_once(':')
                .ok_or_else(|| ZoomStepParseError::MissingSeparator {
                    input: input.to_string(),
                })?;

        let direction = match direction.trim().to_ascii_lowercase().as_str() {
            "in" => ZoomDirection::In,
            "out" => ZoomDirection::Out,
            _ => {
                return Err(ZoomStepParseError::UnknownDirection {
                    direction: direction.to_string(),
                });
            }
        };

        let invalid = || ZoomStepParseError::InvalidCoordinates {
            coordinates: coordinates.to_string(),
        };

        let (x, y) = coordinates.split_once(',').ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;

        Ok(Self { direction, x, y })
    }
}
