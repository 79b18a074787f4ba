use serde::{Deserialize, Serialize};

use crate::core::error::SimError;
use crate::core::render::ParameterSource;

pub const DEFAULT_SPEED_MPS: f64 = 10.0;
pub const DEFAULT_ANGLE_DEG: f64 = 65.0;

/// Initial conditions of one flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub x0_m: f64,
    pub y0_m: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: DEFAULT_ANGLE_DEG,
            x0_m: 0.0,
            y0_m: 0.0,
        }
    }
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64, x0_m: f64, y0_m: f64) -> Self {
        Self {
            speed_mps,
            angle_deg,
            x0_m,
            y0_m,
        }
    }

    /// Rejects parameter sets whose flight has no defined landing time.
    pub fn validate(&self) -> Result<(), SimError> {
        for (field, value) in [
            ("speed", self.speed_mps),
            ("angle", self.angle_deg),
            ("x0", self.x0_m),
            ("y0", self.y0_m),
        ] {
            if !value.is_finite() {
                return Err(SimError::NonFinite { field });
            }
        }
        if self.speed_mps < 0.0 {
            return Err(SimError::NegativeSpeed(self.speed_mps));
        }
        if self.y0_m < 0.0 {
            return Err(SimError::BelowGround(self.y0_m));
        }
        Ok(())
    }
}

pub fn parse_f64(value: &str, field: &'static str) -> Result<f64, SimError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SimError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Text fields of the launch form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchForm {
    pub speed: String,
    pub angle: String,
    pub x0: String,
    pub y0: String,
}

impl LaunchForm {
    pub fn from_parameters(params: LaunchParameters) -> Self {
        let mut form = Self::default();
        form.fill(params);
        form
    }

    /// Overwrites every field with `params`.
    pub fn fill(&mut self, params: LaunchParameters) {
        self.speed = params.speed_mps.to_string();
        self.angle = params.angle_deg.to_string();
        self.x0 = params.x0_m.to_string();
        self.y0 = params.y0_m.to_string();
    }
}

impl ParameterSource for LaunchForm {
    fn read_parameters(&self) -> Result<LaunchParameters, SimError> {
        Ok(LaunchParameters {
            speed_mps: parse_f64(&self.speed, "speed")?,
            angle_deg: parse_f64(&self.angle, "angle")?,
            x0_m: parse_f64(&self.x0, "x0")?,
            y0_m: parse_f64(&self.y0, "y0")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reset_values() {
        let params = LaunchParameters::default();
        assert_eq!(params, LaunchParameters::new(10.0, 65.0, 0.0, 0.0));
    }

    #[test]
    fn form_round_trips_parameters() {
        let params = LaunchParameters::new(12.5, 30.0, 1.0, 2.25);
        let form = LaunchForm::from_parameters(params);
        assert_eq!(form.read_parameters().expect("form should parse"), params);
    }

    #[test]
    fn form_accepts_surrounding_whitespace() {
        let form = LaunchForm {
            speed: " 10 ".to_string(),
            angle: "45".to_string(),
            x0: "0".to_string(),
            y0: "0\n".to_string(),
        };
        let params = form.read_parameters().expect("form should parse");
        assert_eq!(params.speed_mps, 10.0);
        assert_eq!(params.y0_m, 0.0);
    }

    #[test]
    fn form_rejects_garbage_field() {
        let mut form = LaunchForm::from_parameters(LaunchParameters::default());
        form.angle = "steep".to_string();

        let err = form.read_parameters().expect_err("angle should not parse");
        assert!(matches!(err, SimError::InvalidNumber { field: "angle", .. }));
        assert!(err.to_string().contains("steep"));
    }

    #[test]
    fn rejects_nan_and_negative_speed() {
        let nan = LaunchParameters::new(f64::NAN, 45.0, 0.0, 0.0);
        assert!(matches!(
            nan.validate(),
            Err(SimError::NonFinite { field: "speed" })
        ));

        let backwards = LaunchParameters::new(-1.0, 45.0, 0.0, 0.0);
        assert!(matches!(
            backwards.validate(),
            Err(SimError::NegativeSpeed(_))
        ));
    }

    #[test]
    fn rejects_launch_below_ground() {
        let buried = LaunchParameters::new(20.0, 90.0, 0.0, -1.0);
        let err = buried.validate().expect_err("launch below ground should fail");
        assert!(matches!(err, SimError::BelowGround(_)));
        assert!(err.to_string().contains("below ground"));
    }

    #[test]
    fn accepts_downward_launch_from_height() {
        let cliff = LaunchParameters::new(8.0, -45.0, 0.0, 30.0);
        assert!(cliff.validate().is_ok());
    }
}
