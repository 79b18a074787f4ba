use macroquad::prelude::*;

use crate::constants::{ERROR_COLOR, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, bottom: f32, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Motion",
        left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );

    let readout = &state.sim.renderer().readout;
    if !readout.is_empty() {
        draw_ui_text(readout, left, bottom + 30.0, 22, BLUE, font);
    }

    let params = state.sim.parameters();
    draw_ui_text(
        &format!(
            "Speed: {:.1} m/s | Angle: {:.1} deg | Start: ({:.2}, {:.2}) m",
            params.speed_mps, params.angle_deg, params.x0_m, params.y0_m
        ),
        left,
        bottom + 56.0,
        18,
        DARKGRAY,
        font,
    );

    let status_color = if state.status_is_error {
        ERROR_COLOR
    } else {
        DARKGRAY
    };
    draw_ui_text(
        &state.status_line,
        left,
        bottom + 80.0,
        18,
        status_color,
        font,
    );
}
