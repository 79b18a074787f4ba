use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1420;
pub const INITIAL_WINDOW_HEIGHT: i32 = 640;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const CONFIG_ENV_VAR: &str = "TRAJECTORY_SIM_CONFIG";

pub const CANVAS_LEFT: f32 = 20.0;
pub const CANVAS_TOP: f32 = 60.0;
pub const PANEL_GAP: f32 = 24.0;
pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 330.0;
pub const TITLE_Y: f32 = 40.0;

pub const PROJECTILE_RADIUS: f32 = 8.0;
pub const TRAJECTORY_THICKNESS: f32 = 4.0;

pub const CANVAS_BG: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(0.96, 0.35, 0.35, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const ERROR_COLOR: Color = Color::new(0.75, 0.16, 0.16, 1.0);
