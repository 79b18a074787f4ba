pub mod config;
pub mod controller;
pub mod error;
pub mod kinematics;
pub mod params;
pub mod plot;
pub mod render;
pub mod window;

pub use config::SimConfig;
pub use controller::{FlightState, SimulationController, SimulationMode, TrajectorySample};
pub use error::SimError;
pub use params::{LaunchForm, LaunchParameters};
pub use render::{
    Clock, ManualClock, ParameterSource, RecordingRenderer, Renderer, ScreenPoint,
    ScreenTransform, SystemClock,
};
