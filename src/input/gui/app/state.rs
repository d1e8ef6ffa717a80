use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_MAX_ITERATIONS;

pub const MAX_ITERATIONS_RANGE: std::ops::RangeInclusive<u32> = 16..=4096;

/// UI-side values edited through the status panel.
pub struct GuiAppState {
    pub max_iterations: u32,
    applied_max_iterations: u32,
    pub latest_generation: u64,
    pub last_error_message: Option<String>,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            applied_max_iterations: DEFAULT_MAX_ITERATIONS,
            latest_generation: 0,
            last_error_message: None,
        }
    }
}

impl GuiAppState {
    /// Returns the slider value once each time it differs from what the view
    /// last received.
    pub fn take_max_iterations_change(&mut self) -> Option<u32> {
        if self.max_iterations == self.applied_max_iterations {
            return None;
        }

        self.applied_max_iterations = self.max_iterations;
        Some(self.max_iterations)
    }

    pub fn record_generation(&mut self, generation: u64) {
        self.latest_generation = generation;
        self.last_error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_slider_reports_nothing() {
        let mut state = GuiAppState::default();

        assert_eq!(state.take_max_iterations_change(), None);
    }

    #[test]
    fn slider_change_is_reported_once() {
        let mut state = GuiAppState::default();
        state.max_iterations = 300;

        assert_eq!(state.take_max_iterations_change(), Some(300));
        assert_eq!(state.take_max_iterations_change(), None);
    }

    #[test]
    fn recording_a_generation_clears_the_error() {
        let mut state = GuiAppState::default();
        state.last_error_message = Some("scheduler thread has stopped".to_string());

        state.record_generation(4);

        assert_eq!(state.latest_generation, 4);
        assert!(state.last_error_message.is_none());
    }
}
