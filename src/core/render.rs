//! Collaborators the controller talks to: the drawing surface, the frame
//! clock and the source of launch parameters.

use std::cell::Cell;
use std::collections::VecDeque;

use chrono::Utc;

use crate::core::error::SimError;
use crate::core::params::LaunchParameters;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World metres to canvas pixels. The y axis is flipped so the ground sits
/// `padding` pixels above the bottom edge of a `height + 2 * padding` canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub scale: f64,
    pub padding: f64,
    pub height: f64,
}

impl ScreenTransform {
    pub fn new(scale: f64, padding: f64, height: f64) -> Self {
        Self {
            scale,
            padding,
            height,
        }
    }

    pub fn to_screen(&self, x_m: f64, y_m: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.padding + self.scale * x_m,
            y: self.height + self.padding - self.scale * y_m,
        }
    }

    pub fn to_world(&self, point: ScreenPoint) -> (f64, f64) {
        let scale = if self.scale == 0.0 { 1.0 } else { self.scale };
        (
            (point.x - self.padding) / scale,
            (self.height + self.padding - point.y) / scale,
        )
    }
}

/// Receives screen-space notifications. Implementations never call back into
/// the controller.
pub trait Renderer {
    fn set_projectile_position(&mut self, position: ScreenPoint);
    fn append_trajectory_segment(&mut self, from: ScreenPoint, to: ScreenPoint);
    fn clear_trajectory(&mut self);
    fn show_readout(&mut self, text: &str);
}

/// Seconds on a monotonic-enough timeline. Only differences are used.
pub trait Clock {
    fn now(&self) -> f64;
}

pub trait ParameterSource {
    fn read_parameters(&self) -> Result<LaunchParameters, SimError>;
}

/// Wall clock with millisecond resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_millis() as f64 / 1000.0
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_s: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_s: f64) -> Self {
        Self {
            now_s: Cell::new(start_s),
        }
    }

    pub fn set(&self, now_s: f64) {
        self.now_s.set(now_s);
    }

    pub fn advance(&self, dt_s: f64) -> f64 {
        let next = self.now_s.get() + dt_s;
        self.now_s.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now_s.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Retained scene: everything the controller has drawn so far. A bounded
/// renderer drops its oldest segment once `max_segments` are held.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub projectile: Option<ScreenPoint>,
    pub segments: VecDeque<(ScreenPoint, ScreenPoint)>,
    pub readout: String,
    pub clears: usize,
    max_segments: Option<usize>,
}

impl RecordingRenderer {
    pub fn bounded(max_segments: usize) -> Self {
        Self {
            max_segments: Some(max_segments.max(1)),
            ..Self::default()
        }
    }
}

impl Renderer for RecordingRenderer {
    fn set_projectile_position(&mut self, position: ScreenPoint) {
        self.projectile = Some(position);
    }

    fn append_trajectory_segment(&mut self, from: ScreenPoint, to: ScreenPoint) {
        if let Some(max) = self.max_segments {
            while self.segments.len() >= max {
                self.segments.pop_front();
            }
        }
        self.segments.push_back((from, to));
    }

    fn clear_trajectory(&mut self) {
        self.segments.clear();
        self.clears += 1;
    }

    fn show_readout(&mut self, text: &str) {
        self.readout.clear();
        self.readout.push_str(text);
    }
}
