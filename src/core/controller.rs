//! Waiting/Playing state machine that advances one flight per launch.

use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use crate::core::config::SimConfig;
use crate::core::error::SimError;
use crate::core::kinematics::{position, time_of_flight};
use crate::core::params::LaunchParameters;
use crate::core::render::{Clock, Renderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationMode {
    Waiting,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightState {
    pub params: LaunchParameters,
    pub start_time_s: f64,
    /// Fixed at launch.
    pub total_flight_time_s: f64,
    pub elapsed_s: f64,
    last_position: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub x_m: f64,
    pub y_m: f64,
    /// 1-based launch counter of the flight that produced this sample.
    pub flight: u32,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Waiting,
    Playing(FlightState),
}

pub struct SimulationController<R, C> {
    config: SimConfig,
    renderer: R,
    clock: C,
    phase: Phase,
    parameters: LaunchParameters,
    trajectory: VecDeque<TrajectorySample>,
    launches: u32,
}

impl<R: Renderer, C: Clock> SimulationController<R, C> {
    pub fn new(config: SimConfig, mut renderer: R, clock: C) -> Self {
        let parameters = config.defaults;
        renderer.set_projectile_position(
            config
                .transform()
                .to_screen(parameters.x0_m, parameters.y0_m),
        );
        Self {
            config,
            renderer,
            clock,
            phase: Phase::Waiting,
            parameters,
            trajectory: VecDeque::new(),
            launches: 0,
        }
    }

    pub fn mode(&self) -> SimulationMode {
        match self.phase {
            Phase::Waiting => SimulationMode::Waiting,
            Phase::Playing(_) => SimulationMode::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }

    pub fn flight(&self) -> Option<&FlightState> {
        match &self.phase {
            Phase::Waiting => None,
            Phase::Playing(flight) => Some(flight),
        }
    }

    pub fn parameters(&self) -> LaunchParameters {
        self.parameters
    }

    pub fn trajectory(&self) -> &VecDeque<TrajectorySample> {
        &self.trajectory
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn launches(&self) -> u32 {
        self.launches
    }

    /// Starts a new flight, replacing any flight in progress. The trajectory
    /// drawn so far is kept.
    pub fn launch(&mut self, params: LaunchParameters) -> Result<(), SimError> {
        if let Err(err) = params.validate() {
            warn!(error = %err, "rejected launch parameters");
            return Err(err);
        }

        let gravity = self.config.gravity_mps2;
        let flight = FlightState {
            params,
            start_time_s: self.clock.now(),
            total_flight_time_s: time_of_flight(params, gravity),
            elapsed_s: 0.0,
            last_position: (params.x0_m, params.y0_m),
        };
        self.parameters = params;
        self.launches += 1;

        info!(
            flight = self.launches,
            speed_mps = params.speed_mps,
            angle_deg = params.angle_deg,
            x0_m = params.x0_m,
            y0_m = params.y0_m,
            time_of_flight_s = flight.total_flight_time_s,
            "launch"
        );

        let start = self.config.transform().to_screen(params.x0_m, params.y0_m);
        self.renderer.set_projectile_position(start);
        self.renderer
            .show_readout(&readout(0.0, params.x0_m, params.y0_m));
        if matches!(self.phase, Phase::Waiting) {
            debug!("waiting -> playing");
        }
        self.phase = Phase::Playing(flight);
        Ok(())
    }

    /// Advances the current flight to `now_s`. Does nothing while waiting.
    pub fn tick(&mut self, now_s: f64) -> Option<TrajectorySample> {
        let flight = match &mut self.phase {
            Phase::Waiting => return None,
            Phase::Playing(flight) => flight,
        };

        let elapsed = (now_s - flight.start_time_s)
            .max(0.0)
            .min(flight.total_flight_time_s);
        let (x, y) = position(flight.params, self.config.gravity_mps2, elapsed);
        let previous = flight.last_position;
        flight.elapsed_s = elapsed;
        flight.last_position = (x, y);
        let landed = elapsed >= flight.total_flight_time_s || y < 0.0;

        let sample = TrajectorySample {
            x_m: x,
            y_m: y,
            flight: self.launches,
        };
        if self.trajectory.len() >= self.config.max_trajectory_samples {
            self.trajectory.pop_front();
        }
        self.trajectory.push_back(sample);
        trace!(elapsed_s = elapsed, x_m = x, y_m = y, "tick");

        let transform = self.config.transform();
        let from = transform.to_screen(previous.0, previous.1);
        let to = transform.to_screen(x, y);
        self.renderer.append_trajectory_segment(from, to);
        self.renderer.set_projectile_position(to);
        self.renderer.show_readout(&readout(elapsed, x, y));

        if landed {
            info!(
                flight = self.launches,
                elapsed_s = elapsed,
                x_m = x,
                "projectile landed"
            );
            debug!("playing -> waiting");
            self.phase = Phase::Waiting;
        }
        Some(sample)
    }

    pub fn clear_trajectory(&mut self) {
        self.trajectory.clear();
        self.renderer.clear_trajectory();
        debug!("trajectory cleared");
    }

    /// Restores the configured default parameters and returns them. A flight
    /// already in the air keeps the parameters it was launched with.
    pub fn reset_parameters(&mut self) -> LaunchParameters {
        self.parameters = self.config.defaults;
        debug!(parameters = ?self.parameters, "parameters reset");
        self.parameters
    }
}

pub fn readout(elapsed_s: f64, x_m: f64, y_m: f64) -> String {
    format!("t = {elapsed_s:.2} s | x = {x_m:.2} m | y = {y_m:.2} m")
}
