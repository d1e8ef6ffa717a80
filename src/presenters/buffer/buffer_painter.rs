use crate::controllers::interactive::ports::row_painter::RowPainter;
use crate::core::actions::paint_row::paint_row::{PaintRowError, paint_row};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::sync::{Arc, Mutex, PoisonError};

pub type SharedPixelBuffer = Arc<Mutex<PixelBuffer>>;

/// Called after every successful paint.
pub type PaintNotifier = Box<dyn Fn() + Send>;

/// Paints accepted rows into a pixel buffer shared with whoever displays or
/// saves it.
///
/// The buffer is only reallocated when a generation arrives with a different
/// image size, so a zoom replaces the old picture row by row.
pub struct BufferPainter {
    buffer: SharedPixelBuffer,
    kind: MandelbrotColourMapKinds,
    colour_map: Box<dyn MandelbrotColourMap>,
    notifier: Option<PaintNotifier>,
}

impl BufferPainter {
    #[must_use]
    pub fn new(
        buffer: SharedPixelBuffer,
        kind: MandelbrotColourMapKinds,
        max_iterations: u32,
    ) -> Self {
        Self {
            buffer,
            kind,
            colour_map: mandelbrot_colour_map_factory(kind, max_iterations),
            notifier: None,
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: PaintNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn buffer(&self) -> SharedPixelBuffer {
        Arc::clone(&self.buffer)
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.kind
    }
}

impl RowPainter for BufferPainter {
    fn begin_generation(&mut self, generation: u64, params: &RenderParams) {
        let max_iterations = params.limits.max_iterations();

        if self.colour_map.max_iterations() != max_iterations {
            self.colour_map = mandelbrot_colour_map_factory(self.kind, max_iterations);
        }

        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);

        if buffer.size() != params.size {
            log::debug!(
                "resizing pixel buffer to {}x{} for generation {}",
                params.size.width,
                params.size.height,
                generation
            );
            *buffer = PixelBuffer::new(params.size);
        }
    }

    fn paint(&mut self, row: u32, values: Vec<Option<u32>>) -> Result<(), PaintRowError> {
        {
            let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
            paint_row(&mut buffer, row, &values, self.colour_map.as_ref())?;
        }

        if let Some(notify) = &self.notifier {
            notify();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::pixel_buffer::PixelBufferError;
    use crate::core::fractals::mandelbrot::mandelbrot_config::default_region;
    use crate::core::fractals::mandelbrot::params::IterationLimits;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn params(width: u32, height: u32, max_iterations: u32) -> RenderParams {
        RenderParams {
            size: ImageSize::new(width, height),
            region: default_region(),
            limits: IterationLimits::new(max_iterations, 2.0).unwrap(),
        }
    }

    fn painter(max_iterations: u32) -> BufferPainter {
        BufferPainter::new(
            Arc::new(Mutex::new(PixelBuffer::new(ImageSize::default()))),
            MandelbrotColourMapKinds::ClassicPalette,
            max_iterations,
        )
    }

    #[test]
    fn test_begin_generation_sizes_buffer() {
        let mut painter = painter(100);

        painter.begin_generation(1, &params(4, 2, 100));

        assert_eq!(painter.buffer().lock().unwrap().size(), ImageSize::new(4, 2));
    }

    #[test]
    fn test_same_size_keeps_previous_image() {
        let mut painter = painter(100);
        painter.begin_generation(1, &params(2, 1, 100));
        painter.paint(0, vec![Some(40), None]).unwrap();

        painter.begin_generation(2, &params(2, 1, 100));

        let buffer = painter.buffer();
        let buffer = buffer.lock().unwrap();
        assert_eq!(buffer.pixel(0, 0), Some(Colour { r: 232, g: 200, b: 72 }));
    }

    #[test]
    fn test_paint_colours_inside_points_black() {
        let mut painter = painter(100);
        painter.begin_generation(1, &params(3, 2, 100));

        painter.paint(1, vec![None, Some(0), Some(40)]).unwrap();

        let buffer = painter.buffer();
        let buffer = buffer.lock().unwrap();
        assert_eq!(buffer.pixel(0, 1), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(2, 1), Some(Colour { r: 232, g: 200, b: 72 }));
        assert_eq!(buffer.pixel(2, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_row_of_wrong_width_is_rejected() {
        let mut painter = painter(100);
        painter.begin_generation(1, &params(3, 2, 100));

        let result = painter.paint(0, vec![Some(1); 5]);

        assert_eq!(
            result,
            Err(PaintRowError::PixelBuffer(PixelBufferError::RowWidthMismatch {
                row_width: 5,
                image_width: 3
            }))
        );
    }

    #[test]
    fn test_row_outside_buffer_is_rejected() {
        let mut painter = painter(100);
        painter.begin_generation(1, &params(3, 2, 100));

        let result = painter.paint(2, vec![Some(1); 3]);

        assert!(matches!(
            result,
            Err(PaintRowError::PixelBuffer(PixelBufferError::RowOutsideBounds { .. }))
        ));
    }

    #[test]
    fn test_colour_map_follows_iteration_limit() {
        let mut painter = painter(10);
        painter.begin_generation(1, &params(1, 1, 10));
        assert!(painter.paint(0, vec![Some(50)]).is_err());

        painter.begin_generation(2, &params(1, 1, 100));

        assert!(painter.paint(0, vec![Some(50)]).is_ok());
    }

    #[test]
    fn test_notifier_runs_after_each_paint() {
        let count = Arc::new(AtomicUsize::new(0));
        let notified = Arc::clone(&count);
        let mut painter = painter(100).with_notifier(Box::new(move || {
            notified.fetch_add(1, Ordering::SeqCst);
        }));
        painter.begin_generation(1, &params(1, 2, 100));

        painter.paint(0, vec![None]).unwrap();
        painter.paint(1, vec![Some(3)]).unwrap();
        let _ = painter.paint(5, vec![None]);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
