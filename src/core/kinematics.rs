use crate::core::error::SimError;
use crate::core::params::LaunchParameters;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub time_of_flight_s: f64,
    pub range_m: f64,
    pub apex_time_s: f64,
    pub apex_x_m: f64,
    pub apex_y_m: f64,
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position(params: LaunchParameters, gravity_mps2: f64, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = params.x0_m + vx * time_s;
    let y = params.y0_m + (vy * time_s) - (0.5 * gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Positive root of `y(t) = 0`. NaN when the projectile never reaches the ground.
pub fn time_of_flight(params: LaunchParameters, gravity_mps2: f64) -> f64 {
    let (_, vy) = velocity_components(params);
    let disc = vy * vy + 2.0 * gravity_mps2 * params.y0_m;
    (vy + disc.sqrt()) / gravity_mps2
}

/// Highest point of the flight as `(t, x, y)`. A launch aimed level or
/// downward peaks at its starting point.
pub fn apex(params: LaunchParameters, gravity_mps2: f64) -> (f64, f64, f64) {
    let (_, vy) = velocity_components(params);
    let t = vy.max(0.0) / gravity_mps2;
    let (x, y) = position(params, gravity_mps2, t);
    (t, x, y)
}

pub fn flight_summary(
    params: LaunchParameters,
    gravity_mps2: f64,
) -> Result<FlightSummary, SimError> {
    params.validate()?;

    let t_land = time_of_flight(params, gravity_mps2);
    let (range_end, _) = position(params, gravity_mps2, t_land);
    let (apex_time_s, apex_x_m, apex_y_m) = apex(params, gravity_mps2);
    Ok(FlightSummary {
        time_of_flight_s: t_land,
        range_m: range_end - params.x0_m,
        apex_time_s,
        apex_x_m,
        apex_y_m,
    })
}

pub fn sample_trajectory(
    params: LaunchParameters,
    gravity_mps2: f64,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            position(params, gravity_mps2, t)
        })
        .collect()
}
