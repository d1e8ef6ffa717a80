use crate::adapters::agents::rayon_pool::RayonAgentPool;
use crate::controllers::cli::settings::RenderSettings;
use crate::controllers::interactive::RowRenderController;
use crate::controllers::interactive::data::scheduler_status::SchedulerStatus;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::navigation::shared_view::SharedView;
use crate::core::navigation::view::{View, ViewError};
use crate::presenters::buffer::buffer_painter::BufferPainter;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum CliRenderError {
    Controller(ControllerError),
    View(ViewError),
    Timeout { generation: u64, timeout: Duration },
}

impl fmt::Display for CliRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller(err) => write!(f, "render controller error: {}", err),
            Self::View(err) => write!(f, "invalid zoom step: {}", err),
            Self::Timeout {
                generation,
                timeout,
            } => write!(
                f,
                "generation {} did not finish within {:?}",
                generation, timeout
            ),
        }
    }
}

impl Error for CliRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Controller(err) => Some(err),
            Self::View(err) => Some(err),
            Self::Timeout { .. } => None,
        }
    }
}

impl From<ControllerError> for CliRenderError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}

impl From<ViewError> for CliRenderError {
    fn from(err: ViewError) -> Self {
        Self::View(err)
    }
}

/// Drives the row scheduler without a window: renders the initial view,
/// replays zoom steps as fresh generations and keeps the final frame.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn render(&mut self, settings: &RenderSettings) -> Result<SchedulerStatus, CliRenderError> {
        let view = SharedView::new(View::new(settings.size, settings.limits));
        let buffer = Arc::new(Mutex::new(PixelBuffer::new(settings.size)));
        let painter = BufferPainter::new(
            Arc::clone(&buffer),
            settings.palette,
            settings.limits.max_iterations(),
        );

        log::info!(
            "rendering {}x{} with {} agents, max iterations {}, palette {}",
            settings.size.width,
            settings.size.height,
            settings.agents,
            settings.limits.max_iterations(),
            settings.palette
        );

        let agents = settings.agents;
        let mut controller = RowRenderController::new(view.clone(), painter, move |on_event| {
            RayonAgentPool::new(MandelbrotAlgorithm::new(), agents, on_event)
        })?;

        let start = Instant::now();
        let mut generation = controller.start_generation()?;

        for step in &settings.zoom_steps {
            view.update(|v| step.apply(v))?;
            generation = controller.start_generation()?;
            log::info!(
                "zoom {:?} at ({}, {}) started generation {}",
                step.direction,
                step.x,
                step.y,
                generation
            );
        }

        let status = controller
            .wait_until_settled(generation, settings.timeout)
            .ok_or(CliRenderError::Timeout {
                generation,
                timeout: settings.timeout,
            })?;

        controller.shutdown();

        if status.rows_painted < settings.size.height {
            log::warn!(
                "generation {} settled with {} of {} rows painted ({} failed agents)",
                status.generation,
                status.rows_painted,
                settings.size.height,
                status.failed_agents
            );
        }

        log::info!(
            "generation {} finished in {:?}, {} stale rows discarded",
            status.generation,
            start.elapsed(),
            status.stale_discarded
        );

        let frame = buffer.lock().unwrap_or_else(PoisonError::into_inner).clone();
        self.buffer = Some(frame);

        Ok(status)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
