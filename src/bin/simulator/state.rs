use macroquad::time::get_time;
use trajectory_sim::core::{Clock, LaunchForm, SimConfig, SimulationController};

use crate::render::SceneRenderer;

/// Frame clock of the macroquad window, in seconds since startup.
pub(crate) struct FrameClock;

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        get_time()
    }
}

pub(crate) struct AppRuntime {
    pub(crate) sim: SimulationController<SceneRenderer, FrameClock>,
    pub(crate) form: LaunchForm,
    pub(crate) status_line: String,
    pub(crate) status_is_error: bool,
}

impl AppRuntime {
    pub(crate) fn new(config: SimConfig) -> Self {
        let renderer = SceneRenderer::new(config.max_trajectory_samples);
        let form = LaunchForm::from_parameters(config.defaults);
        Self {
            sim: SimulationController::new(config, renderer, FrameClock),
            form,
            status_line: "Ready".to_string(),
            status_is_error: false,
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status_line = text.into();
        self.status_is_error = false;
    }

    pub(crate) fn set_error(&mut self, text: impl Into<String>) {
        self.status_line = text.into();
        self.status_is_error = true;
    }
}
