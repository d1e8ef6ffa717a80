//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    /// `src` does not hold a whole number of RGB pixels.
    PartialPixel { src_len: usize },
    /// `dst` is not exactly four bytes per source pixel.
    LengthMismatch { src_len: usize, dst_len: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialPixel { src_len } => {
                write!(f, "rgb length {} is not a multiple of 3", src_len)
            }
            Self::LengthMismatch { src_len, dst_len } => write!(
                f,
                "rgba length {} does not fit rgb length {}",
                dst_len, src_len
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into packed RGBA with an opaque alpha channel.
///
/// Nothing is written unless both lengths describe the same pixel count.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialPixel { src_len: src.len() });
    }

    if dst.len() != src.len() / 3 * 4 {
        return Err(PixelFormatError::LengthMismatch {
            src_len: src.len(),
            dst_len: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
