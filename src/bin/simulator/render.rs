use std::collections::VecDeque;

use macroquad::prelude::*;
use trajectory_sim::core::{Renderer, ScreenPoint, ScreenTransform};

use crate::constants::{
    CANVAS_BG, GRID_COLOR, LABEL_COLOR, PROJECTILE_COLOR, PROJECTILE_RADIUS, TRAJECTORY_COLOR,
    TRAJECTORY_THICKNESS,
};

/// Retained scene redrawn every frame, since macroquad draws in immediate mode.
pub(crate) struct SceneRenderer {
    pub(crate) projectile: Option<Vec2>,
    pub(crate) segments: VecDeque<(Vec2, Vec2)>,
    pub(crate) readout: String,
    max_segments: usize,
}

impl SceneRenderer {
    pub(crate) fn new(max_segments: usize) -> Self {
        Self {
            projectile: None,
            segments: VecDeque::new(),
            readout: String::new(),
            max_segments: max_segments.max(1),
        }
    }
}

fn to_vec2(point: ScreenPoint) -> Vec2 {
    vec2(point.x as f32, point.y as f32)
}

impl Renderer for SceneRenderer {
    fn set_projectile_position(&mut self, position: ScreenPoint) {
        self.projectile = Some(to_vec2(position));
    }

    fn append_trajectory_segment(&mut self, from: ScreenPoint, to: ScreenPoint) {
        if self.segments.len() >= self.max_segments {
            self.segments.pop_front();
        }
        self.segments.push_back((to_vec2(from), to_vec2(to)));
    }

    fn clear_trajectory(&mut self) {
        self.segments.clear();
    }

    fn show_readout(&mut self, text: &str) {
        self.readout.clear();
        self.readout.push_str(text);
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// Canvas background, one grid line per metre, and the ground line.
pub(crate) fn draw_canvas(
    origin: Vec2,
    canvas_size: Vec2,
    transform: ScreenTransform,
    font: Option<&Font>,
) {
    draw_rectangle(origin.x, origin.y, canvas_size.x, canvas_size.y, CANVAS_BG);

    let ground = to_vec2(transform.to_screen(0.0, 0.0)) + origin;
    let step = transform.scale as f32;
    let right = origin.x + canvas_size.x;
    let top = origin.y;

    let mut metre = 0;
    let mut x = ground.x;
    while x <= right {
        draw_line(x, top, x, ground.y, 1.0, GRID_COLOR);
        let label = format!("{metre}");
        let size = measure_text(&label, font, 16, 1.0);
        draw_ui_text(
            &label,
            x - size.width * 0.5,
            ground.y + 20.0,
            16,
            LABEL_COLOR,
            font,
        );
        metre += 1;
        x += step;
    }

    let mut y = ground.y - step;
    while y >= top {
        draw_line(origin.x, y, right, y, 1.0, GRID_COLOR);
        y -= step;
    }

    draw_line(origin.x, ground.y, right, ground.y, 2.0, DARKGRAY);
    draw_ui_text(
        "Distance (m)",
        right - 110.0,
        ground.y + 20.0,
        16,
        LABEL_COLOR,
        font,
    );
}

pub(crate) fn draw_scene(scene: &SceneRenderer, origin: Vec2) {
    for (from, to) in &scene.segments {
        let a = *from + origin;
        let b = *to + origin;
        draw_line(a.x, a.y, b.x, b.y, TRAJECTORY_THICKNESS, TRAJECTORY_COLOR);
    }

    if let Some(p) = scene.projectile {
        let p = p + origin;
        draw_circle(p.x, p.y, PROJECTILE_RADIUS, PROJECTILE_COLOR);
        draw_circle_lines(p.x, p.y, PROJECTILE_RADIUS, 2.0, MAROON);
    }
}
