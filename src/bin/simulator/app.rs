use macroquad::prelude::*;
use tracing::{info, warn};
use trajectory_sim::core::{SimConfig, SimError};

use crate::constants::{
    CANVAS_LEFT, CANVAS_TOP, CONFIG_ENV_VAR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MSAA_SAMPLES, PANEL_GAP, PANEL_WIDTH, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::playback::{apply_actions, step_active_flight};
use crate::render::{draw_canvas, draw_scene};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> Result<SimConfig, SimError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => SimConfig::load(path),
        None => Ok(SimConfig::default()),
    }
}

pub(crate) async fn run() -> Result<(), SimError> {
    let config = load_config()?;

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let (canvas_w, canvas_h) = config.canvas_size();
    let canvas_size = vec2(canvas_w as f32, canvas_h as f32);
    let canvas_origin = vec2(CANVAS_LEFT, CANVAS_TOP);
    let panel_position = vec2(CANVAS_LEFT + canvas_size.x + PANEL_GAP, CANVAS_TOP);
    request_new_screen_size(
        panel_position.x + PANEL_WIDTH + CANVAS_LEFT,
        CANVAS_TOP + canvas_size.y + 100.0,
    );
    let transform = config.transform();
    info!(canvas_w, canvas_h, "simulator window ready");

    let mut state = AppRuntime::new(config);

    loop {
        let actions = hotkey_actions().merge(draw_control_panel(&mut state, panel_position));
        apply_actions(&mut state, actions);
        step_active_flight(&mut state, get_time());

        clear_background(Color::from_rgba(236, 239, 243, 255));
        draw_canvas(canvas_origin, canvas_size, transform, ui_font.as_ref());
        draw_scene(state.sim.renderer(), canvas_origin);
        draw_hud(
            &state,
            CANVAS_LEFT,
            CANVAS_TOP + canvas_size.y,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
