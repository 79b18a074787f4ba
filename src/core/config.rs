//! Simulation settings, loadable from TOML.
//!
//! Every key is optional; missing keys fall back to [`SimConfig::default`].
//!
//! ```toml
//! gravity_mps2 = 9.81
//! width_px = 1024.0
//! height_px = 512.0
//! scale_px_per_m = 128.0
//! padding_px = 16.0
//! max_trajectory_samples = 10000
//!
//! [defaults]
//! speed_mps = 10.0
//! angle_deg = 65.0
//! x0_m = 0.0
//! y0_m = 0.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;
use crate::core::kinematics::EARTH_GRAVITY_MPS2;
use crate::core::params::LaunchParameters;
use crate::core::render::ScreenTransform;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity_mps2: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub scale_px_per_m: f64,
    pub padding_px: f64,
    /// Oldest samples are dropped once the trajectory holds this many.
    pub max_trajectory_samples: usize,
    /// Values restored by a parameter reset.
    pub defaults: LaunchParameters,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            width_px: 1024.0,
            height_px: 512.0,
            scale_px_per_m: 128.0,
            padding_px: 16.0,
            max_trajectory_samples: 10_000,
            defaults: LaunchParameters::default(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded simulation config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.gravity_mps2.is_finite() && self.gravity_mps2 > 0.0) {
            return Err(SimError::Config(format!(
                "gravity_mps2 must be positive, got {}",
                self.gravity_mps2
            )));
        }
        if !(self.scale_px_per_m.is_finite() && self.scale_px_per_m > 0.0) {
            return Err(SimError::Config(format!(
                "scale_px_per_m must be positive, got {}",
                self.scale_px_per_m
            )));
        }
        for (name, value) in [
            ("width_px", self.width_px),
            ("height_px", self.height_px),
            ("padding_px", self.padding_px),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.max_trajectory_samples == 0 {
            return Err(SimError::Config(
                "max_trajectory_samples must be at least 1".to_string(),
            ));
        }
        self.defaults.validate()
    }

    pub fn transform(&self) -> ScreenTransform {
        ScreenTransform::new(self.scale_px_per_m, self.padding_px, self.height_px)
    }

    /// Full canvas size including padding on every side.
    pub fn canvas_size(&self) -> (f64, f64) {
        (
            self.width_px + 2.0 * self.padding_px,
            self.height_px + 2.0 * self.padding_px,
        )
    }
}
