mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::agents::rayon_pool::RayonAgentPool;
pub use controllers::cli::render::{CliRenderController, CliRenderError};
pub use controllers::cli::settings::RenderSettings;
pub use controllers::interactive::data::agent_state::AgentState;
pub use controllers::interactive::data::scheduler_status::SchedulerStatus;
pub use controllers::interactive::errors::controller::ControllerError;
pub use controllers::interactive::events::agent_event::{AgentEvent, AgentEventHandler, AgentId};
pub use controllers::interactive::ports::agent_transport::AgentTransport;
pub use controllers::interactive::ports::parameter_provider::ParameterProvider;
pub use controllers::interactive::ports::row_painter::RowPainter;
pub use controllers::interactive::{RowRenderController, RowScheduler};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::compute_row::ports::row_algorithm::RowAlgorithm;
pub use crate::core::actions::paint_row::paint_row::{PaintRowError, paint_row};
pub use crate::core::actions::paint_row::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::image_size::ImageSize;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::render_params::RenderParams;
pub use crate::core::data::row_result::RowResult;
pub use crate::core::data::row_task::RowTask;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::params::IterationLimits;
pub use crate::core::navigation::shared_view::SharedView;
pub use crate::core::navigation::view::{View, ViewError};
pub use crate::core::navigation::zoom_step::{ZoomDirection, ZoomStep, ZoomStepParseError};
pub use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
pub use presenters::buffer::buffer_painter::{BufferPainter, PaintNotifier, SharedPixelBuffer};
pub use presenters::file::ppm::PpmFilePresenter;
