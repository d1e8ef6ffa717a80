use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes finished frames as binary PPM (P6) files.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(buffer, &mut file)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let size = buffer.size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", size.width, size.height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::image_size::ImageSize;

    #[test]
    fn test_write_ppm_header_and_pixels() {
        let mut buffer = PixelBuffer::new(ImageSize::new(2, 1));
        buffer
            .set_row(0, &[Colour { r: 1, g: 2, b: 3 }, Colour { r: 4, g: 5, b: 6 }])
            .unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_rows_ppm_test_{}.ppm",
            std::process::id()
        ));
        let buffer = PixelBuffer::new(ImageSize::new(3, 2));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
    }
}
