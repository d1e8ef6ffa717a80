use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    RowOutsideBounds {
        row: u32,
        height: u32,
    },
    RowWidthMismatch {
        row_width: usize,
        image_width: u32,
    },
    BoundsMismatch {
        image_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutsideBounds { row, height } => {
                write!(f, "row {} is outside an image of height {}", row, height)
            }
            Self::RowWidthMismatch {
                row_width,
                image_width,
            } => {
                write!(
                    f,
                    "row of {} pixels does not match image width {}",
                    row_width, image_width
                )
            }
            Self::BoundsMismatch {
                image_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "image size {} does not match buffer size {}",
                    image_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, row-major, addressed one row at a time.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            buffer: vec![0; image_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: ImageSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = image_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                image_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_row(&mut self, row: u32, colours: &[Colour]) -> Result<(), PixelBufferError> {
        let row_bytes = self.row_bytes_mut(row, colours.len())?;

        for (pixel, colour) in row_bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(colours) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        let index = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn row_bytes_mut(&mut self, row: u32, row_width: usize) -> Result<&mut [u8], PixelBufferError> {
        if row >= self.size.height {
            return Err(PixelBufferError::RowOutsideBounds {
                row,
                height: self.size.height,
            });
        }

        if row_width != self.size.width as usize {
            return Err(PixelBufferError::RowWidthMismatch {
                row_width,
                image_width: self.size.width,
            });
        }

        let stride = self.size.width as usize * BYTES_PER_PIXEL;
        let start = row as usize * stride;

        Ok(&mut self.buffer[start..start + stride])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };
    const GREEN: Colour = Colour { r: 0, g: 255, b: 0 };
    const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(ImageSize::new(10, 10));

        assert_eq!(buffer.size(), ImageSize::new(10, 10));
        assert_eq!(buffer.buffer_size(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_image_has_empty_buffer() {
        let buffer = PixelBuffer::new(ImageSize::new(0, 7));

        assert_eq!(buffer.buffer_size(), 0);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(ImageSize::new(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                image_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_row_writes_only_that_row() {
        let mut buffer = PixelBuffer::new(ImageSize::new(3, 3));

        buffer.set_row(1, &[RED, GREEN, BLUE]).unwrap();

        assert_eq!(&buffer.buffer()[0..9], &[0; 9]);
        assert_eq!(
            &buffer.buffer()[9..18],
            &[255, 0, 0, 0, 255, 0, 0, 0, 255]
        );
        assert_eq!(&buffer.buffer()[18..27], &[0; 9]);
        assert_eq!(buffer.pixel(2, 1), Some(BLUE));
    }

    #[test]
    fn test_set_row_outside_bounds() {
        let mut buffer = PixelBuffer::new(ImageSize::new(3, 3));

        let result = buffer.set_row(3, &[RED, GREEN, BLUE]);

        assert_eq!(
            result,
            Err(PixelBufferError::RowOutsideBounds { row: 3, height: 3 })
        );
    }

    #[test]
    fn test_set_row_width_mismatch_leaves_buffer_untouched() {
        let mut buffer = PixelBuffer::new(ImageSize::new(3, 3));

        let result = buffer.set_row(0, &[RED, GREEN]);

        assert_eq!(
            result,
            Err(PixelBufferError::RowWidthMismatch {
                row_width: 2,
                image_width: 3
            })
        );
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(ImageSize::new(3, 3));

        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);
    }
}
