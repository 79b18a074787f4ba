use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use trajectory_sim::core::SimulationMode;

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) play: bool,
    pub(crate) clear: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            play: self.play || other.play,
            clear: self.clear || other.clear,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        play: is_key_pressed(KeyCode::Enter),
        clear: is_key_pressed(KeyCode::F2),
        reset: is_key_pressed(KeyCode::F3),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime, position: Vec2) -> FrameActions {
    let gravity = state.sim.config().gravity_mps2;
    let mode = state.sim.mode();

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), position, vec2(PANEL_WIDTH, PANEL_HEIGHT))
        .label("Launch")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("g = {gravity:.2} m/s^2"));
            ui.separator();
            ui.input_text(hash!(), "Speed (m/s)", &mut state.form.speed);
            ui.input_text(hash!(), "Angle (deg)", &mut state.form.angle);
            ui.input_text(hash!(), "x0 (m)", &mut state.form.x0);
            ui.input_text(hash!(), "y0 (m)", &mut state.form.y0);
            ui.separator();
            if ui.button(None, "Play (Enter)") {
                actions.play = true;
            }
            if ui.button(None, "Clear (F2)") {
                actions.clear = true;
            }
            if ui.button(None, "Reset (F3)") {
                actions.reset = true;
            }
            ui.separator();
            ui.label(None, &format!("State: {}", mode_text(mode)));
            ui.label(None, &format!("Launches: {}", state.sim.launches()));
        });

    actions
}

pub(crate) fn mode_text(mode: SimulationMode) -> &'static str {
    match mode {
        SimulationMode::Waiting => "Waiting",
        SimulationMode::Playing => "Playing",
    }
}
