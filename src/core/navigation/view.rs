use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::image_size::ImageSize;
use crate::core::data::render_params::RenderParams;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, default_region,
};
use crate::core::fractals::mandelbrot::params::IterationLimits;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewError {
    Coords(PixelToComplexCoordsError),
    Region(ComplexRectError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coords(err) => write!(f, "cannot map click: {}", err),
            Self::Region(err) => write!(f, "cannot build view region: {}", err),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coords(err) => Some(err),
            Self::Region(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for ViewError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Coords(err)
    }
}

impl From<ComplexRectError> for ViewError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

/// The user-driven state behind a render: image size, visible plane region and
/// iteration limits.
///
/// Every mutation leaves the view unchanged when it fails.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    size: ImageSize,
    region: ComplexRect,
    limits: IterationLimits,
}

impl View {
    /// The default region, refitted to the aspect ratio of `size`.
    #[must_use]
    pub fn new(size: ImageSize, limits: IterationLimits) -> Self {
        let mut view = Self {
            size,
            region: default_region(),
            limits,
        };
        view.resize(size);
        view
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn limits(&self) -> IterationLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: IterationLimits) {
        self.limits = limits;
    }

    #[must_use]
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            size: self.size,
            region: self.region,
            limits: self.limits,
        }
    }

    /// Centres the view on the clicked pixel, shrinking it so the new view
    /// spans `2 / ZOOM_IN_FACTOR` of the old one.
    pub fn zoom_in(&mut self, x: f64, y: f64) -> Result<(), ViewError> {
        self.zoom_about(x, y, 1.0 / ZOOM_IN_FACTOR)
    }

    /// Centres the view on the clicked pixel, growing it to
    /// `2 * ZOOM_OUT_FACTOR` times the old extent.
    pub fn zoom_out(&mut self, x: f64, y: f64) -> Result<(), ViewError> {
        self.zoom_about(x, y, ZOOM_OUT_FACTOR)
    }

    /// Adopts a new image size, keeping the imaginary extent and the real
    /// mid-point and stretching the real extent to the new aspect ratio.
    ///
    /// An empty size keeps the current region, since there is no aspect
    /// ratio to fit.
    pub fn resize(&mut self, size: ImageSize) {
        self.size = size;

        if size.is_empty() {
            return;
        }

        let real_width = self.region.height() * size.width as f64 / size.height as f64;
        let centre = self.region.centre();

        match ComplexRect::centred_at(centre, real_width / 2.0, self.region.height() / 2.0) {
            Ok(region) => self.region = region,
            Err(err) => log::warn!("keeping previous region after resize: {}", err),
        }
    }

    fn zoom_about(&mut self, x: f64, y: f64, half_extent_scale: f64) -> Result<(), ViewError> {
        let centre = pixel_to_complex_coords(x, y, self.size, self.region)?;

        self.region = ComplexRect::centred_at(
            centre,
            self.region.width() * half_extent_scale,
            self.region.height() * half_extent_scale,
        )?;

        log::debug!(
            "view now real [{}, {}] imag [{}, {}]",
            self.region.top_left().real,
            self.region.bottom_right().real,
            self.region.top_left().imag,
            self.region.bottom_right().imag
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn default_view() -> View {
        View::new(ImageSize::new(400, 300), IterationLimits::default())
    }

    #[test]
    fn test_new_fits_default_region_to_aspect_ratio() {
        let view = View::new(ImageSize::new(200, 100), IterationLimits::default());

        // imag extent stays 3, real extent becomes 3 * 200 / 100
        assert_eq!(view.region().height(), 3.0);
        assert_eq!(view.region().width(), 6.0);
        assert_eq!(view.region().centre(), Complex { real: -0.5, imag: 0.0 });
    }

    #[test]
    fn test_zoom_in_centres_on_click_and_quarters_extent() {
        let mut view = default_view();

        view.zoom_in(200.0, 150.0).unwrap();

        assert_eq!(view.region().centre(), Complex { real: -0.5, imag: 0.0 });
        assert_eq!(view.region().width(), 1.0);
        assert_eq!(view.region().height(), 0.75);
    }

    #[test]
    fn test_zoom_out_quadruples_extent() {
        let mut view = default_view();

        view.zoom_out(0.0, 0.0).unwrap();

        assert_eq!(view.region().centre(), Complex { real: -2.5, imag: -1.5 });
        assert_eq!(view.region().width(), 16.0);
        assert_eq!(view.region().height(), 12.0);
    }

    #[test]
    fn test_zoom_outside_image_leaves_view_unchanged() {
        let mut view = default_view();
        let before = view;

        let result = view.zoom_in(-5.0, 10.0);

        assert!(matches!(result, Err(ViewError::Coords(_))));
        assert_eq!(view, before);
    }

    #[test]
    fn test_resize_keeps_imag_extent_and_real_centre() {
        let mut view = default_view();
        view.zoom_in(100.0, 100.0).unwrap();
        let centre = view.region().centre();
        let imag_extent = view.region().height();

        view.resize(ImageSize::new(300, 300));

        assert_eq!(view.size(), ImageSize::new(300, 300));
        assert_eq!(view.region().height(), imag_extent);
        assert_eq!(view.region().width(), imag_extent);
        assert!((view.region().centre().real - centre.real).abs() < 1e-12);
    }

    #[test]
    fn test_resize_to_empty_keeps_region() {
        let mut view = default_view();
        let region = view.region();

        view.resize(ImageSize::new(0, 0));

        assert_eq!(view.size(), ImageSize::new(0, 0));
        assert_eq!(view.region(), region);
    }

    #[test]
    fn test_render_params_reflect_view() {
        let view = default_view();
        let params = view.render_params();

        assert_eq!(params.size, view.size());
        assert_eq!(params.region, view.region());
        assert_eq!(params.limits, view.limits());
    }
}
