use crate::controllers::interactive::RowRenderController;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::params::IterationLimits;
use crate::core::navigation::shared_view::SharedView;
use crate::input::gui::app::pointer::click_zoom_step;
use crate::input::gui::app::state::{GuiAppState, MAX_ITERATIONS_RANGE};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: PixelsPresenter,
    pub controller: RowRenderController,
    view: SharedView,
    ui_state: GuiAppState,
    cursor: Option<PhysicalPosition<f64>>,
    shift_held: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: PixelsPresenter,
        controller: RowRenderController,
        view: SharedView,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            view,
            ui_state: GuiAppState::default(),
            cursor: None,
            shift_held: false,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Starts a generation for whatever the view holds now.
    pub fn restart(&mut self) {
        match self.controller.start_generation() {
            Ok(generation) => self.ui_state.record_generation(generation),
            Err(err) => {
                log::warn!("cannot start generation: {}", err);
                self.ui_state.last_error_message = Some(err.to_string());
            }
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            log::warn!("cannot resize surface to {}x{}: {}", width, height, err);
            self.ui_state.last_error_message = Some(err.to_string());
            return;
        }

        self.view
            .update(|view| view.resize(ImageSize::new(width, height)));
        self.restart();
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    pub fn set_shift_held(&mut self, shift_held: bool) {
        self.shift_held = shift_held;
    }

    /// Zooms around the last cursor position and restarts the render.
    pub fn click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };

        let step = click_zoom_step(position.x, position.y, self.shift_held);

        match self.view.update(|view| step.apply(view)) {
            Ok(()) => self.restart(),
            Err(err) => log::warn!("ignoring click: {}", err),
        }
    }

    /// Pushes slider edits into the view.
    pub fn apply_ui_changes(&mut self) {
        let Some(max_iterations) = self.ui_state.take_max_iterations_change() else {
            return;
        };

        let escape_radius = self.view.snapshot().limits().escape_radius();

        match IterationLimits::new(max_iterations, escape_radius) {
            Ok(limits) => {
                self.view.update(|view| view.set_limits(limits));
                self.restart();
            }
            Err(err) => self.ui_state.last_error_message = Some(err.to_string()),
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.controller.status();
        let region = self.view.snapshot().region();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot rows");
                    ui.label("Click to zoom in, shift-click to zoom out");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(
                            &mut self.ui_state.max_iterations,
                            MAX_ITERATIONS_RANGE,
                        ));
                    });

                    ui.separator();
                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        region.top_left().real,
                        region.bottom_right().real
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        region.top_left().imag,
                        region.bottom_right().imag
                    ));

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    ui.label(format!(
                        "Generation: {} (requested {})",
                        status.generation, self.ui_state.latest_generation
                    ));
                    ui.label(format!(
                        "Rows painted: {}/{}",
                        status.rows_painted, self.height
                    ));
                    ui.label(format!("Stale rows discarded: {}", status.stale_discarded));
                    ui.label(format!(
                        "Agents busy: {}, failed: {}",
                        status.busy_agents, status.failed_agents
                    ));

                    if let Some(message) = &self.ui_state.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
