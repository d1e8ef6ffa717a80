use crate::adapters::agents::rayon_pool::RayonAgentPool;
use crate::controllers::interactive::RowRenderController;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_AGENT_COUNT;
use crate::core::fractals::mandelbrot::params::IterationLimits;
use crate::core::navigation::shared_view::SharedView;
use crate::core::navigation::view::View;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::presenters::buffer::buffer_painter::BufferPainter;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::sync::{Arc, Mutex};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand {
    agents: usize,
    palette: MandelbrotColourMapKinds,
}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_COUNT, MandelbrotColourMapKinds::default())
    }
}

impl RunGuiCommand {
    pub fn new(agents: usize, palette: MandelbrotColourMapKinds) -> Self {
        Self { agents, palette }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot rows")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let image_size = ImageSize::new(size.width, size.height);
        let limits = IterationLimits::default();

        let view = SharedView::new(View::new(image_size, limits));
        let buffer = Arc::new(Mutex::new(PixelBuffer::new(image_size)));
        let presenter = PixelsPresenter::new(window, Arc::clone(&buffer))?;

        let painter = BufferPainter::new(buffer, self.palette, limits.max_iterations())
            .with_notifier(Box::new(move || {
                // fails only once the event loop has exited
                let _ = event_loop_proxy.send_event(GuiEvent::Wake);
            }));

        let agents = self.agents;
        let controller = RowRenderController::new(view.clone(), painter, move |on_event| {
            RayonAgentPool::new(MandelbrotAlgorithm::new(), agents, on_event)
        })?;

        let mut app = GuiApp::new(window, &event_loop, presenter, controller, view);
        let mut redraw_pending = true;

        app.restart();

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.apply_ui_changes();

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            log::error!("render error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.cursor_moved(*position);
                    }
                    WindowEvent::ModifiersChanged(modifiers) => {
                        app.set_shift_held(modifiers.state().shift_key());
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => {
                        app.click();
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
